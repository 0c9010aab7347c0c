use std::sync::Arc;

use anyhow::Result;

use pocket_quant::config::Config;
use pocket_quant::server::{self, AppContext};
use pocket_quant::state::SharedState;

#[tokio::main]
async fn main() -> Result<()> {
    // Install rustls crypto provider (required by rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            eprintln!("Make sure .env file exists with DERIV_API_TOKEN");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .init();

    tracing::info!(
        symbol = %config.feed.symbol,
        ws_url = %config.feed.ws_url,
        port = config.server.port,
        "Starting pocket-quant"
    );

    let port = config.server.port;
    let ctx = AppContext {
        shared: SharedState::new(),
        config: Arc::new(config),
    };
    server::serve(ctx, port).await
}
