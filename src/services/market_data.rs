//! Market data providers feeding candle series to the engine.

use crate::models::Candle;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub trait MarketDataProvider {
    /// Get historical candles for a symbol, most recent `limit` entries
    /// (0 = all), ordered by ascending timestamp.
    fn get_candles(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Provider backed by a static JSON file holding an array of OHLCV candles.
///
/// Stands in for a live feed: the chart layer consumes whatever series the
/// file holds regardless of the requested symbol. Candles are sorted by
/// timestamp on load so the engine's index/timestamp alignment holds even
/// for hand-edited files.
pub struct FileMarketDataProvider {
    path: PathBuf,
}

impl FileMarketDataProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>> {
        let raw = fs::read_to_string(&self.path)?;
        let mut candles: Vec<Candle> = serde_json::from_str(&raw)?;
        candles.sort_by_key(|c| c.timestamp);
        debug!(path = %self.path.display(), count = candles.len(), "Loaded candle file");
        Ok(candles)
    }
}

impl MarketDataProvider for FileMarketDataProvider {
    fn get_candles(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>> {
        let mut candles = self.load()?;

        if limit > 0 && candles.len() > limit {
            candles.drain(..candles.len() - limit);
        }

        info!(symbol = symbol, count = candles.len(), "Serving candles");
        Ok(candles)
    }
}
