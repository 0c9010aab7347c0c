pub mod tick;
pub mod trade;
