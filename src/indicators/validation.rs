//! Input validation for the Bollinger Bands engine

use crate::indicators::error::ValidationError;
use crate::indicators::volatility::BollingerBandsInput;

/// Validate a [`BollingerBandsInput`] before computation.
///
/// Checks, in order: non-empty values, `length >= 2`, a positive finite
/// standard deviation multiplier, and that every value is finite. Performs no
/// computation and has no side effects. Integer-ness of `length` and `offset`
/// is carried by their types; fractional inputs are rejected where untyped
/// data is deserialized.
pub fn validate_bollinger_input(input: &BollingerBandsInput) -> Result<(), ValidationError> {
    if input.values.is_empty() {
        return Err(ValidationError::EmptyValues);
    }

    if input.length < 2 {
        return Err(ValidationError::InvalidLength(input.length));
    }

    if !input.std_dev_multiplier.is_finite() || input.std_dev_multiplier <= 0.0 {
        return Err(ValidationError::InvalidStdDevMultiplier(
            input.std_dev_multiplier,
        ));
    }

    for (index, &value) in input.values.iter().enumerate() {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue { index, value });
        }
    }

    Ok(())
}
