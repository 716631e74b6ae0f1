//! Data-loading services behind the HTTP boundary.

pub mod market_data;

pub use market_data::{FileMarketDataProvider, MarketDataProvider};
