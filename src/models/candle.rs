//! OHLCV candle model

use crate::models::settings::SourceType;
use serde::{Deserialize, Serialize};

/// A single OHLCV candle. Timestamps are unix milliseconds, unique and
/// strictly increasing across a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Select the field that feeds an indicator computation.
    pub fn source_value(&self, source: SourceType) -> f64 {
        match source {
            SourceType::Open => self.open,
            SourceType::High => self.high,
            SourceType::Low => self.low,
            SourceType::Close => self.close,
        }
    }
}
