pub mod config;
pub mod error;
pub mod feed;
pub mod indicator;
pub mod model;
pub mod processor;
pub mod server;
pub mod state;
