use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("config error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("feed error (code {code}): {msg}")]
    Feed { code: String, msg: String },
}

impl BotError {
    /// Stable label carried into the `/data` snapshot.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Transport(_) => "transport",
            Self::Protocol(_) => "protocol",
            Self::Feed { .. } => "feed",
        }
    }
}
