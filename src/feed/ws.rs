use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use super::types::{AuthorizeRequest, FeedMessage, TicksRequest};
use crate::error::BotError;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub struct FeedClient {
    url: String,
}

impl FeedClient {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }

    /// Open the persistent socket to the feed. Connect failures are terminal
    /// for the session (no retry).
    pub async fn connect(&self) -> Result<FeedSession, BotError> {
        tracing::info!(url = %self.url, "connecting to feed");
        let (stream, _resp) = tokio_tungstenite::connect_async(&self.url)
            .await
            .map_err(|e| BotError::Transport(format!("WebSocket connect failed: {}", e)))?;
        Ok(FeedSession { stream })
    }
}

pub struct FeedSession {
    stream: WsStream,
}

impl FeedSession {
    pub async fn authorize(&mut self, token: &str) -> Result<(), BotError> {
        self.send_json(&AuthorizeRequest {
            authorize: token.to_string(),
        })
        .await
    }

    pub async fn subscribe_ticks(&mut self, symbol: &str) -> Result<(), BotError> {
        tracing::info!(symbol, "subscribing to tick stream");
        self.send_json(&TicksRequest {
            ticks: symbol.to_string(),
        })
        .await
    }

    async fn send_json<T: Serialize>(&mut self, payload: &T) -> Result<(), BotError> {
        let text = serde_json::to_string(payload)
            .map_err(|e| BotError::Protocol(format!("failed to encode request: {}", e)))?;
        self.stream
            .send(Message::Text(text))
            .await
            .map_err(|e| BotError::Transport(format!("WebSocket send failed: {}", e)))
    }

    /// Wait for the next feed message, bounded by `wait` so a cooperative stop
    /// is observed within one interval.
    ///
    /// Returns `Ok(None)` on timeout, on non-text frames, and on a malformed
    /// text frame (a single bad message is skipped, not terminal). Transport
    /// failures and stream end are terminal.
    pub async fn next_message(&mut self, wait: Duration) -> Result<Option<FeedMessage>, BotError> {
        let frame = match tokio::time::timeout(wait, self.stream.next()).await {
            Err(_) => return Ok(None),
            Ok(None) => return Err(BotError::Transport("feed stream ended".to_string())),
            Ok(Some(Err(e))) => {
                return Err(BotError::Transport(format!("WebSocket read error: {}", e)))
            }
            Ok(Some(Ok(frame))) => frame,
        };

        match frame {
            Message::Text(text) => match serde_json::from_str::<FeedMessage>(&text) {
                Ok(msg) => Ok(Some(msg)),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed feed message");
                    Ok(None)
                }
            },
            Message::Close(_) => Err(BotError::Transport(
                "connection closed by feed".to_string(),
            )),
            // tokio-tungstenite answers pings automatically
            _ => Ok(None),
        }
    }

    pub async fn close(mut self) {
        if let Err(e) = self.stream.close(None).await {
            tracing::debug!(error = %e, "error while closing feed socket");
        }
    }
}
