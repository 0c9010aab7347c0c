/// Exponential Moving Average over a bounded price window.
///
/// Recomputed from scratch on the full window each tick rather than carried
/// incrementally across calls. The window is capped at 50 entries, so the
/// extra work per tick is negligible.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    multiplier: f64,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "EMA period must be > 0");
        Self {
            period,
            multiplier: 2.0 / (period as f64 + 1.0),
        }
    }

    /// EMA of `window`, or `None` if the window is shorter than the period.
    ///
    /// Seeds with the first element, then folds
    /// `ema = price * k + ema * (1 - k)` over the rest of the window.
    pub fn compute(&self, window: &[f64]) -> Option<f64> {
        if window.len() < self.period {
            return None;
        }
        let mut ema = window[0];
        for &price in &window[1..] {
            ema = price * self.multiplier + ema * (1.0 - self.multiplier);
        }
        Some(ema)
    }

    pub fn period(&self) -> usize {
        self.period
    }
}
