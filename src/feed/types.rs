use serde::{Deserialize, Serialize};

/// First outbound message of a session: `{"authorize": <token>}`.
#[derive(Debug, Serialize)]
pub struct AuthorizeRequest {
    pub authorize: String,
}

/// Tick subscription request: `{"ticks": <symbol>}`.
#[derive(Debug, Serialize)]
pub struct TicksRequest {
    pub ticks: String,
}

/// Inbound feed message. The venue multiplexes everything over one socket;
/// only messages carrying a `tick` field are price updates, the rest are
/// ignored except for venue-reported errors.
#[derive(Debug, Deserialize)]
pub struct FeedMessage {
    #[serde(default)]
    pub tick: Option<TickPayload>,
    #[serde(default)]
    pub error: Option<FeedErrorPayload>,
    #[serde(default)]
    pub msg_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TickPayload {
    pub quote: f64,
    #[serde(default)]
    pub epoch: i64,
    #[serde(default)]
    pub symbol: String,
}

/// Venue rejection, e.g. an invalid authorize token or unknown symbol.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedErrorPayload {
    pub code: String,
    pub message: String,
}
