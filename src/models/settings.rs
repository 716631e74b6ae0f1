//! Bollinger Bands configuration models

use serde::{Deserialize, Deserializer, Serialize};

/// Moving-average type for the basis band. Only SMA is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaType {
    #[default]
    #[serde(rename = "SMA")]
    Sma,
}

/// Which candle field feeds the computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Close,
    Open,
    High,
    Low,
}

impl SourceType {
    /// Parse a source name, falling back to `Close` for anything
    /// unrecognized. The settings form never constrained this field, so an
    /// unknown name selects the close price rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "open" => SourceType::Open,
            "high" => SourceType::High,
            "low" => SourceType::Low,
            _ => SourceType::Close,
        }
    }
}

fn source_or_close<'de, D>(deserializer: D) -> Result<SourceType, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(SourceType::from_name(&name))
}

/// Line style for a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

/// Presentation settings for one band line. Never affects numeric output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandStyle {
    pub visible: bool,
    pub color: String,
    /// Line width in pixels, 1 to 5
    pub line_width: u32,
    pub line_style: LineStyle,
}

impl Default for BandStyle {
    fn default() -> Self {
        Self {
            visible: true,
            color: "#2196F3".to_string(),
            line_width: 1,
            line_style: LineStyle::Solid,
        }
    }
}

/// Fill between the upper and lower bands. Presentation only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundFill {
    pub visible: bool,
    /// Opacity in [0, 1]
    pub opacity: f64,
}

impl Default for BackgroundFill {
    fn default() -> Self {
        Self {
            visible: true,
            opacity: 0.1,
        }
    }
}

/// Full Bollinger Bands configuration.
///
/// The numeric fields (`length`, `source`, `std_dev_multiplier`, `offset`)
/// drive the computation; changing any of them requires a full recompute over
/// the input series. The style fields only affect rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerBandsSettings {
    /// Rolling window size, must be >= 2
    pub length: usize,
    pub basic_ma_type: MaType,
    #[serde(deserialize_with = "source_or_close")]
    pub source: SourceType,
    /// Band width in standard deviations, must be > 0
    pub std_dev_multiplier: f64,
    /// Bars to shift the computed series: positive = later, negative = earlier
    pub offset: i32,
    pub basic_band: BandStyle,
    pub upper_band: BandStyle,
    pub lower_band: BandStyle,
    pub background_fill: BackgroundFill,
}

impl Default for BollingerBandsSettings {
    fn default() -> Self {
        Self {
            length: 20,
            basic_ma_type: MaType::Sma,
            source: SourceType::Close,
            std_dev_multiplier: 2.0,
            offset: 0,
            basic_band: BandStyle::default(),
            upper_band: BandStyle::default(),
            lower_band: BandStyle::default(),
            background_fill: BackgroundFill::default(),
        }
    }
}
