//! Bollinger Bands indicator
//!
//! Basis (middle band) = SMA(source, length)
//! StdDev = sample standard deviation of the window (N-1 divisor)
//! Upper = Basis + (multiplier * StdDev)
//! Lower = Basis - (multiplier * StdDev)
//! Offset: shifts the computed series by whole bars after computation.

use crate::indicators::validation::validate_bollinger_input;
use crate::models::{BollingerBandsData, BollingerBandsSettings, Candle};
use tracing::warn;

/// Input to the band computation engine. One value per candle, aligned by
/// index with the candle series it was extracted from.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBandsInput {
    pub values: Vec<f64>,
    pub length: usize,
    pub std_dev_multiplier: f64,
    pub offset: i32,
}

impl BollingerBandsInput {
    /// Extract source values from a candle series per the settings.
    pub fn from_candles(candles: &[Candle], settings: &BollingerBandsSettings) -> Self {
        Self {
            values: candles
                .iter()
                .map(|c| c.source_value(settings.source))
                .collect(),
            length: settings.length,
            std_dev_multiplier: settings.std_dev_multiplier,
            offset: settings.offset,
        }
    }
}

/// Per-index band values. `None` marks an index without a full window, or one
/// vacated by the offset shift; NaN and infinities never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BollingerBandsOutput {
    pub basis: Option<f64>,
    pub upper: Option<f64>,
    pub lower: Option<f64>,
    pub std_dev: Option<f64>,
}

impl BollingerBandsOutput {
    pub fn is_defined(&self) -> bool {
        self.basis.is_some() && self.upper.is_some() && self.lower.is_some()
    }
}

/// SMA of the `length` values ending at `index`, or `None` without a full window.
fn sma_at_index(values: &[f64], index: usize, length: usize) -> Option<f64> {
    if index + 1 < length {
        return None;
    }

    let window = &values[index + 1 - length..=index];
    Some(window.iter().sum::<f64>() / length as f64)
}

/// Sample standard deviation (N-1 divisor) of the same window around `mean`.
///
/// The N-1 divisor is deliberate and must not be swapped for N: it matches
/// the band widths users see on the original charts.
fn std_dev_at_index(values: &[f64], index: usize, length: usize, mean: f64) -> Option<f64> {
    if index + 1 < length {
        return None;
    }

    let window = &values[index + 1 - length..=index];
    let sum_squared_diffs: f64 = window.iter().map(|v| (v - mean) * (v - mean)).sum();
    let variance = sum_squared_diffs / (length - 1) as f64;
    Some(variance.sqrt())
}

/// Compute the band values for a single index. The offset shift is not
/// applied here; it operates on whole sequences.
pub fn compute_bollinger_bands_at_index(
    input: &BollingerBandsInput,
    index: usize,
) -> BollingerBandsOutput {
    let basis = match sma_at_index(&input.values, index, input.length) {
        Some(basis) => basis,
        None => return BollingerBandsOutput::default(),
    };

    let std_dev = match std_dev_at_index(&input.values, index, input.length, basis) {
        Some(std_dev) => std_dev,
        None => {
            return BollingerBandsOutput {
                basis: Some(basis),
                ..Default::default()
            }
        }
    };

    BollingerBandsOutput {
        basis: Some(basis),
        upper: Some(basis + input.std_dev_multiplier * std_dev),
        lower: Some(basis - input.std_dev_multiplier * std_dev),
        std_dev: Some(std_dev),
    }
}

/// Compute band values for every index of the input, then apply the offset
/// shift. The result has the same length as `input.values`; the first
/// `length - 1` indices are undefined before shifting.
pub fn compute_bollinger_bands(input: &BollingerBandsInput) -> Vec<BollingerBandsOutput> {
    let results: Vec<BollingerBandsOutput> = (0..input.values.len())
        .map(|i| compute_bollinger_bands_at_index(input, i))
        .collect();

    if input.offset != 0 {
        return apply_offset(&results, input.offset);
    }

    results
}

/// Shift a computed sequence by `offset` bars. Positive shifts entries toward
/// the end of the series, negative toward the start. Entries shifted past
/// either end are dropped; vacated slots stay undefined.
fn apply_offset(results: &[BollingerBandsOutput], offset: i32) -> Vec<BollingerBandsOutput> {
    if offset == 0 {
        return results.to_vec();
    }

    let mut shifted = vec![BollingerBandsOutput::default(); results.len()];
    for (i, result) in results.iter().enumerate() {
        let new_index = i as i64 + offset as i64;
        if new_index >= 0 && (new_index as usize) < results.len() {
            shifted[new_index as usize] = *result;
        }
    }

    shifted
}

/// Calculate Bollinger Bands over a candle series.
///
/// Full integration pipeline: source extraction per `settings.source`,
/// validation, per-index computation, offset shift, then filtering down to
/// the points where all three bands are defined, each paired with the
/// timestamp of the candle at the same index.
///
/// Invalid parameters degrade to an empty sequence rather than an error; the
/// rejection is logged. The engine itself never fails on validated input.
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    settings: &BollingerBandsSettings,
) -> Vec<BollingerBandsData> {
    if candles.is_empty() {
        return Vec::new();
    }

    let input = BollingerBandsInput::from_candles(candles, settings);

    if let Err(e) = validate_bollinger_input(&input) {
        warn!(error = %e, "Invalid Bollinger Bands parameters, returning empty series");
        return Vec::new();
    }

    let results = compute_bollinger_bands(&input);

    candles
        .iter()
        .zip(results.iter())
        .filter(|(_, result)| result.is_defined())
        .map(|(candle, result)| BollingerBandsData {
            timestamp: candle.timestamp,
            basis: result.basis.unwrap_or_default(),
            upper: result.upper.unwrap_or_default(),
            lower: result.lower.unwrap_or_default(),
        })
        .collect()
}
