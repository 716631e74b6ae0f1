//! Shared data models spanning the engine layers.

pub mod bands;
pub mod candle;
pub mod settings;

pub use bands::BollingerBandsData;
pub use candle::Candle;
pub use settings::{
    BackgroundFill, BandStyle, BollingerBandsSettings, LineStyle, MaType, SourceType,
};
