use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Crossover direction for a defined EMA pair. `None` when the EMAs are
    /// equal (no signal is recorded).
    pub fn from_emas(fast: f64, slow: f64) -> Option<Self> {
        if fast > slow {
            Some(Self::Up)
        } else if fast < slow {
            Some(Self::Down)
        } else {
            None
        }
    }
}

/// One entry of the bounded trade log: the triggering price and the signal
/// direction at that tick.
#[derive(Debug, Clone, Serialize)]
pub struct TradeEntry {
    pub direction: Direction,
    pub price: f64,
    pub at_ms: i64,
}

impl TradeEntry {
    pub fn new(direction: Direction, price: f64) -> Self {
        Self {
            direction,
            price,
            at_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}
