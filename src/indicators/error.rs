//! Indicator input validation errors

use std::fmt;

/// Rejection raised by the input validator before any computation runs.
///
/// Recoverable by design: the integration layer catches it and degrades to an
/// empty output sequence instead of crashing the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The source values sequence is empty
    EmptyValues,
    /// Window length below the minimum of 2
    InvalidLength(usize),
    /// Standard deviation multiplier is not a positive finite number
    InvalidStdDevMultiplier(f64),
    /// A source value is NaN or infinite
    NonFiniteValue { index: usize, value: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyValues => {
                write!(f, "values must be a non-empty sequence")
            }
            ValidationError::InvalidLength(length) => {
                write!(f, "length must be an integer >= 2, got {}", length)
            }
            ValidationError::InvalidStdDevMultiplier(multiplier) => {
                write!(
                    f,
                    "standard deviation multiplier must be a positive number, got {}",
                    multiplier
                )
            }
            ValidationError::NonFiniteValue { index, value } => {
                write!(
                    f,
                    "all values must be finite numbers, got {} at index {}",
                    value, index
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
