//! Public band-point model handed to the rendering layer

use serde::{Deserialize, Serialize};

/// One fully-defined Bollinger Bands point, paired with the timestamp of the
/// candle at the same index. Emitted only where basis, upper and lower all
/// exist after the offset shift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsData {
    pub timestamp: i64,
    pub basis: f64,
    pub upper: f64,
    pub lower: f64,
}
