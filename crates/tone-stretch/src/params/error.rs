//! Parameter domain errors.

use std::fmt;

/// A stretch parameter outside its documented domain.
///
/// Returned by [`StretchParams::validate`](super::StretchParams::validate)
/// before any pixel is touched, so invalid input never turns into NaN output.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// Value is NaN or infinite.
    NotFinite { field: &'static str },
    /// Gamma or multiplier must be strictly positive.
    NonPositive { field: &'static str, value: f32 },
    /// Threshold must lie in `[0, 1]`.
    ThresholdOutOfRange { field: &'static str, value: f32 },
    /// `dark_threshold` must be strictly below `mid_threshold`.
    ThresholdOrder { dark: f32, mid: f32 },
    /// Saturation boost must be non-negative.
    NegativeSaturation(f32),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::NotFinite { field } => write!(f, "{} must be a finite number", field),
            ParamError::NonPositive { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            ParamError::ThresholdOutOfRange { field, value } => {
                write!(f, "{} must be within [0, 1], got {}", field, value)
            }
            ParamError::ThresholdOrder { dark, mid } => write!(
                f,
                "dark_threshold ({}) must be below mid_threshold ({})",
                dark, mid
            ),
            ParamError::NegativeSaturation(value) => {
                write!(f, "saturation_boost must not be negative, got {}", value)
            }
        }
    }
}

impl std::error::Error for ParamError {}
