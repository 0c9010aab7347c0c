/// One price update from the feed. Transient; folded into the bounded series
/// and dropped.
#[derive(Debug, Clone)]
pub struct Tick {
    pub symbol: String,
    pub price: f64,
    pub epoch_ms: i64,
}
