use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use crate::error::BotError;
use crate::indicator::ema::Ema;
use crate::model::trade::{Direction, TradeEntry};

/// Capacity of the price window and of each EMA series.
pub const PRICE_WINDOW: usize = 50;
/// Capacity of the trade log.
pub const TRADE_LOG_CAP: usize = 20;

/// Terminal session error, kept for the dashboard after the loop exits.
#[derive(Debug, Clone, Serialize)]
pub struct LastError {
    pub kind: &'static str,
    pub message: String,
    pub at_ms: i64,
}

impl LastError {
    fn from_bot_error(err: &BotError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
            at_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Read-only copy of the bot state handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub prices: Vec<f64>,
    pub fast_emas: Vec<f64>,
    pub slow_emas: Vec<f64>,
    pub trades: Vec<TradeEntry>,
    pub labels: Vec<u64>,
    pub current_price: Option<f64>,
    pub running: bool,
    pub last_error: Option<LastError>,
}

/// Bounded series and run flag, mutated only by the tick processor task.
#[derive(Debug, Default)]
pub struct BotState {
    prices: Vec<f64>,
    fast_emas: Vec<f64>,
    slow_emas: Vec<f64>,
    trades: Vec<TradeEntry>,
    running: bool,
    last_error: Option<LastError>,
    total_ticks: u64,
}

impl BotState {
    /// Fold one tick into the series: append the price, recompute both EMAs
    /// over the current window (undefined stored as the 0.0 sentinel), and
    /// record a trade entry when both EMAs are defined and unequal.
    fn record_price(&mut self, price: f64, fast: &Ema, slow: &Ema) {
        push_bounded(&mut self.prices, price, PRICE_WINDOW);
        self.total_ticks += 1;

        let fast_ema = fast.compute(&self.prices);
        let slow_ema = slow.compute(&self.prices);
        push_bounded(&mut self.fast_emas, fast_ema.unwrap_or(0.0), PRICE_WINDOW);
        push_bounded(&mut self.slow_emas, slow_ema.unwrap_or(0.0), PRICE_WINDOW);

        if let (Some(f), Some(s)) = (fast_ema, slow_ema) {
            if let Some(direction) = Direction::from_emas(f, s) {
                push_bounded(&mut self.trades, TradeEntry::new(direction, price), TRADE_LOG_CAP);
            }
        }
    }

    fn snapshot(&self) -> Snapshot {
        let len = self.prices.len() as u64;
        Snapshot {
            prices: self.prices.clone(),
            fast_emas: self.fast_emas.clone(),
            slow_emas: self.slow_emas.clone(),
            trades: self.trades.clone(),
            labels: (self.total_ticks - len + 1..=self.total_ticks).collect(),
            current_price: self.prices.last().copied(),
            running: self.running,
            last_error: self.last_error.clone(),
        }
    }
}

fn push_bounded<T>(series: &mut Vec<T>, value: T, cap: usize) {
    series.push(value);
    if series.len() > cap {
        series.remove(0);
    }
}

/// Mutex-guarded handle to the bot state: single writer (the processor task),
/// many snapshot readers (the HTTP handlers).
#[derive(Clone, Default)]
pub struct SharedState {
    inner: Arc<Mutex<BotState>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BotState> {
        // A panic while holding the lock leaves the series in a consistent
        // state, so poisoning is recoverable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_running(&self) -> bool {
        self.lock().running
    }

    /// Claim the run flag. Returns false when a processor is already running,
    /// making start idempotent. Clears the previous session's error.
    pub fn try_start(&self) -> bool {
        let mut state = self.lock();
        if state.running {
            return false;
        }
        state.running = true;
        state.last_error = None;
        true
    }

    /// Ask the streaming loop to exit at its next iteration boundary.
    pub fn request_stop(&self) {
        self.lock().running = false;
    }

    /// Terminal transition: clear the run flag and record the session error,
    /// if any, for the `/data` snapshot.
    pub fn mark_stopped(&self, err: Option<&BotError>) {
        let mut state = self.lock();
        state.running = false;
        if let Some(err) = err {
            state.last_error = Some(LastError::from_bot_error(err));
        }
    }

    pub fn apply_tick(&self, price: f64, fast: &Ema, slow: &Ema) {
        self.lock().record_price(price, fast, slow);
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }
}
