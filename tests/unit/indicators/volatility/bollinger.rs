//! Unit tests for the Bollinger Bands engine

use bandtrix::indicators::{
    calculate_bollinger_bands, compute_bollinger_bands, compute_bollinger_bands_at_index,
    BollingerBandsInput,
};
use bandtrix::models::{BollingerBandsSettings, Candle, SourceType};

const EPS: f64 = 1e-9;

fn input(values: Vec<f64>, length: usize, std_dev_multiplier: f64, offset: i32) -> BollingerBandsInput {
    BollingerBandsInput {
        values,
        length,
        std_dev_multiplier,
        offset,
    }
}

/// The flat-then-rising series used throughout: five 10s, then 12..20.
fn sample_values() -> Vec<f64> {
    vec![10.0, 10.0, 10.0, 10.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0]
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_output_length_matches_input() {
    for offset in [-3, 0, 3] {
        let results = compute_bollinger_bands(&input(sample_values(), 5, 2.0, offset));
        assert_eq!(results.len(), 10);
    }
}

#[test]
fn test_leading_indices_undefined() {
    let results = compute_bollinger_bands(&input(sample_values(), 5, 2.0, 0));
    for (i, result) in results.iter().take(4).enumerate() {
        assert!(!result.is_defined(), "index {} should be undefined", i);
        assert_eq!(result.basis, None);
        assert_eq!(result.std_dev, None);
    }
    assert!(results[4].is_defined());
}

#[test]
fn test_flat_window_has_zero_std_dev() {
    let results = compute_bollinger_bands(&input(sample_values(), 5, 2.0, 0));
    // values[0..=4] are all 10
    assert_close(results[4].basis.unwrap(), 10.0);
    assert_close(results[4].std_dev.unwrap(), 0.0);
    assert_close(results[4].upper.unwrap(), 10.0);
    assert_close(results[4].lower.unwrap(), 10.0);
}

#[test]
fn test_window_mean_and_sample_std_dev() {
    let results = compute_bollinger_bands(&input(sample_values(), 5, 2.0, 0));
    // values[5..=9] = [12, 14, 16, 18, 20]: mean 16, squared diffs sum 40,
    // sample variance 40/4 = 10
    let expected_std = 10.0_f64.sqrt();
    assert_close(results[9].basis.unwrap(), 16.0);
    assert_close(results[9].std_dev.unwrap(), expected_std);
    assert_close(results[9].upper.unwrap(), 16.0 + 2.0 * expected_std);
    assert_close(results[9].lower.unwrap(), 16.0 - 2.0 * expected_std);
}

#[test]
fn test_band_symmetry() {
    let values: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
    let multiplier = 2.5;
    let results = compute_bollinger_bands(&input(values, 20, multiplier, 0));
    for result in results.iter().filter(|r| r.is_defined()) {
        let basis = result.basis.unwrap();
        let upper = result.upper.unwrap();
        let lower = result.lower.unwrap();
        let std_dev = result.std_dev.unwrap();
        assert_close(upper - basis, basis - lower);
        assert_close(upper - basis, multiplier * std_dev);
    }
}

#[test]
fn test_at_index_matches_full_compute_without_offset() {
    let in_seq = input(sample_values(), 5, 2.0, 0);
    let results = compute_bollinger_bands(&in_seq);
    for i in 0..in_seq.values.len() {
        assert_eq!(compute_bollinger_bands_at_index(&in_seq, i), results[i]);
    }
}

#[test]
fn test_at_index_ignores_offset() {
    let shifted = input(sample_values(), 5, 2.0, 3);
    let unshifted = input(sample_values(), 5, 2.0, 0);
    for i in 0..10 {
        assert_eq!(
            compute_bollinger_bands_at_index(&shifted, i),
            compute_bollinger_bands_at_index(&unshifted, i)
        );
    }
}

#[test]
fn test_positive_offset_shifts_later() {
    let base = compute_bollinger_bands(&input(sample_values(), 5, 2.0, 0));
    let shifted = compute_bollinger_bands(&input(sample_values(), 5, 2.0, 2));

    // Vacated start stays undefined
    assert!(!shifted[0].is_defined());
    assert!(!shifted[1].is_defined());
    // First defined entry moved from index 4 to 6
    for i in 2..6 {
        assert!(!shifted[i].is_defined(), "index {} should be undefined", i);
    }
    for i in 6..10 {
        assert_eq!(shifted[i], base[i - 2]);
    }
    // base[8] and base[9] were shifted past the end and dropped
    let defined = shifted.iter().filter(|r| r.is_defined()).count();
    assert_eq!(defined, 4);
}

#[test]
fn test_negative_offset_shifts_earlier() {
    let base = compute_bollinger_bands(&input(sample_values(), 5, 2.0, 0));
    let shifted = compute_bollinger_bands(&input(sample_values(), 5, 2.0, -2));

    for i in 2..8 {
        assert_eq!(shifted[i], base[i + 2]);
    }
    // Tail vacated by the shift
    assert!(!shifted[8].is_defined());
    assert!(!shifted[9].is_defined());
}

#[test]
fn test_offset_round_trip_restores_surviving_entries() {
    let n = sample_values().len();
    for k in [1i32, 3] {
        let base = compute_bollinger_bands(&input(sample_values(), 5, 2.0, 0));
        let there = compute_bollinger_bands(&input(sample_values(), 5, 2.0, k));

        // Shift back by -k in place and compare the surviving defined entries
        for (i, result) in there.iter().enumerate() {
            if !result.is_defined() {
                continue;
            }
            let original = i as i32 - k;
            assert!(original >= 0 && (original as usize) < n);
            assert_eq!(*result, base[original as usize]);
        }
        // Everything not shifted off the end survived
        let survivors = there.iter().filter(|r| r.is_defined()).count();
        let base_defined = base.iter().filter(|r| r.is_defined()).count();
        assert_eq!(survivors, base_defined - k as usize);
    }
}

#[test]
fn test_offset_larger_than_series_drops_everything() {
    let results = compute_bollinger_bands(&input(sample_values(), 5, 2.0, 100));
    assert_eq!(results.len(), 10);
    assert!(results.iter().all(|r| !r.is_defined()));
}

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::new(
                1_700_000_000_000 + i as i64 * 60_000,
                close - 1.0,
                close + 2.0,
                close - 2.0,
                close,
                1000.0,
            )
        })
        .collect()
}

fn settings(length: usize, multiplier: f64, offset: i32, source: SourceType) -> BollingerBandsSettings {
    BollingerBandsSettings {
        length,
        std_dev_multiplier: multiplier,
        offset,
        source,
        ..Default::default()
    }
}

#[test]
fn test_calculate_filters_to_defined_points() {
    let candles = candles_from_closes(&sample_values());
    let points = calculate_bollinger_bands(&candles, &settings(5, 2.0, 0, SourceType::Close));

    // 10 candles minus the 4 leading undefined indices
    assert_eq!(points.len(), 6);
    assert_eq!(points[0].timestamp, candles[4].timestamp);
    assert_close(points[0].basis, 10.0);
    assert_close(points[5].basis, 16.0);
}

#[test]
fn test_calculate_pairs_timestamps_after_offset() {
    let candles = candles_from_closes(&sample_values());
    let points = calculate_bollinger_bands(&candles, &settings(5, 2.0, 2, SourceType::Close));

    // Defined entries live at indices 6..=9 after the shift
    assert_eq!(points.len(), 4);
    assert_eq!(points[0].timestamp, candles[6].timestamp);
    // The value at index 6 is the one computed at index 4
    assert_close(points[0].basis, 10.0);
}

#[test]
fn test_calculate_uses_selected_source() {
    let candles = candles_from_closes(&sample_values());
    let close_points =
        calculate_bollinger_bands(&candles, &settings(5, 2.0, 0, SourceType::Close));
    let high_points = calculate_bollinger_bands(&candles, &settings(5, 2.0, 0, SourceType::High));

    // highs are closes + 2, so every basis moves up by exactly 2
    assert_eq!(high_points.len(), close_points.len());
    for (high, close) in high_points.iter().zip(close_points.iter()) {
        assert_close(high.basis, close.basis + 2.0);
    }
}

#[test]
fn test_calculate_fails_soft_on_invalid_settings() {
    let candles = candles_from_closes(&sample_values());
    // length 1 and a zero multiplier are both validator rejections
    assert!(calculate_bollinger_bands(&candles, &settings(1, 2.0, 0, SourceType::Close)).is_empty());
    assert!(calculate_bollinger_bands(&candles, &settings(5, 0.0, 0, SourceType::Close)).is_empty());
}

#[test]
fn test_calculate_fails_soft_on_non_finite_candle() {
    let mut candles = candles_from_closes(&sample_values());
    candles[3].close = f64::NAN;
    assert!(calculate_bollinger_bands(&candles, &settings(5, 2.0, 0, SourceType::Close)).is_empty());
}

#[test]
fn test_calculate_empty_candles() {
    let points = calculate_bollinger_bands(&[], &BollingerBandsSettings::default());
    assert!(points.is_empty());
}

#[test]
fn test_calculate_style_fields_do_not_affect_output() {
    let candles = candles_from_closes(&sample_values());
    let plain = settings(5, 2.0, 0, SourceType::Close);
    let mut styled = plain.clone();
    styled.basic_band.visible = false;
    styled.upper_band.color = "#FF0000".to_string();
    styled.lower_band.line_width = 5;
    styled.background_fill.opacity = 0.9;

    assert_eq!(
        calculate_bollinger_bands(&candles, &plain),
        calculate_bollinger_bands(&candles, &styled)
    );
}
