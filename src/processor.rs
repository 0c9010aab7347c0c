use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::BotError;
use crate::feed::ws::FeedClient;
use crate::indicator::ema::Ema;
use crate::model::tick::Tick;
use crate::state::SharedState;

/// Settle delay between the authorize request and the tick subscription.
const AUTH_SETTLE_DELAY: Duration = Duration::from_secs(1);
/// Bound on the blocking receive so a stop request is observed promptly.
const RECV_TIMEOUT: Duration = Duration::from_secs(1);

/// Drive one full streaming session to completion. The run flag must already
/// be claimed via `SharedState::try_start`; on exit (clean or failed) the flag
/// is cleared and any terminal error is recorded for the snapshot.
pub async fn run(shared: SharedState, config: Arc<Config>) {
    match stream_session(&shared, &config).await {
        Ok(()) => {
            tracing::info!("tick processor stopped");
            shared.mark_stopped(None);
        }
        Err(e) => {
            tracing::error!(error = %e, "tick processor stopped");
            shared.mark_stopped(Some(&e));
        }
    }
}

async fn stream_session(shared: &SharedState, config: &Config) -> Result<(), BotError> {
    if config.feed.api_token.trim().is_empty() {
        return Err(BotError::Config(
            "feed API token is missing; refusing to start".to_string(),
        ));
    }

    let mut session = FeedClient::new(&config.feed.ws_url).connect().await?;
    session.authorize(&config.feed.api_token).await?;
    tokio::time::sleep(AUTH_SETTLE_DELAY).await;
    session.subscribe_ticks(&config.feed.symbol).await?;

    let fast = Ema::new(config.strategy.fast_period);
    let slow = Ema::new(config.strategy.slow_period);

    let result = loop {
        if !shared.is_running() {
            break Ok(());
        }
        match session.next_message(RECV_TIMEOUT).await {
            Ok(None) => continue,
            Ok(Some(msg)) => {
                if let Some(err) = msg.error {
                    break Err(BotError::Feed {
                        code: err.code,
                        msg: err.message,
                    });
                }
                if let Some(payload) = msg.tick {
                    let tick = Tick {
                        symbol: payload.symbol,
                        price: payload.quote,
                        epoch_ms: payload.epoch * 1000,
                    };
                    tracing::debug!(symbol = %tick.symbol, price = tick.price, "tick");
                    shared.apply_tick(tick.price, &fast, &slow);
                }
                // anything else (subscription echoes, heartbeats) is ignored
            }
            Err(e) => break Err(e),
        }
    };

    session.close().await;
    result
}
