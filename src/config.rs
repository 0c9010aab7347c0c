use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub strategy: StrategyConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub ws_url: String,
    pub symbol: String,
    #[serde(skip)]
    pub api_token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub fast_period: usize,
    pub slow_period: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            strategy: StrategyConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            ws_url: "wss://ws.binaryws.com/websockets/v3?app_id=1089".to_string(),
            symbol: "R_100".to_string(),
            api_token: String::new(),
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            fast_period: 5,
            slow_period: 20,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from `config/default.toml` (falling back to built-in defaults when
    /// the file is absent), then overlay secrets and overrides from the
    /// environment: `DERIV_API_TOKEN` (required) and `PORT` (optional).
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = Path::new("config/default.toml");
        let mut config: Config = if config_path.exists() {
            let config_str = std::fs::read_to_string(config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            toml::from_str(&config_str).context("failed to parse config/default.toml")?
        } else {
            Config::default()
        };

        config.feed.api_token = std::env::var("DERIV_API_TOKEN")
            .context("DERIV_API_TOKEN not set in .env or environment")?;
        if config.feed.api_token.trim().is_empty() {
            bail!("DERIV_API_TOKEN is empty");
        }

        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port
                .parse()
                .with_context(|| format!("invalid PORT '{}'", port))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.strategy.fast_period == 0 || self.strategy.slow_period == 0 {
            bail!("strategy periods must be > 0");
        }
        if self.strategy.fast_period >= self.strategy.slow_period {
            bail!(
                "strategy.fast_period ({}) must be less than strategy.slow_period ({})",
                self.strategy.fast_period,
                self.strategy.slow_period
            );
        }
        Ok(())
    }
}
