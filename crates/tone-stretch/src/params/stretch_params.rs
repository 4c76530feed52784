//! Stretch parameters and their defaults.

use serde::{Deserialize, Serialize};

use super::ParamError;

/// Parameters for channel correction, the tone curve and saturation boost.
///
/// Constructed once per request and read-only during processing. Every field
/// has a default; partially specified records (e.g. from a config file) fill
/// the rest from [`StretchParams::default`].
///
/// # Defaults
///
/// | Field | Default |
/// |---|---|
/// | `gamma_red` | 0.7 |
/// | `gamma_green` | 0.8 |
/// | `gamma_blue` | 0.75 |
/// | `green_multiplier` | 0.93 |
/// | `blue_multiplier` | 1.08 |
/// | `dark_threshold` | 0.15 |
/// | `dark_multiplier` | 0.3 |
/// | `mid_threshold` | 0.4 |
/// | `mid_boost` | 1.5 |
/// | `bright_multiplier` | 1.1 |
/// | `saturation_boost` | 1.0 |
///
/// # Example
///
/// ```
/// use tone_stretch::StretchParams;
///
/// let params = StretchParams::new()
///     .gamma_red(0.65)
///     .saturation_boost(0.5);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StretchParams {
    /// Exponent applied to the red channel.
    pub gamma_red: f32,
    /// Exponent applied to the green channel.
    pub gamma_green: f32,
    /// Exponent applied to the blue channel.
    pub gamma_blue: f32,
    /// Green gain after gamma; may exceed 1 (clipped afterwards).
    pub green_multiplier: f32,
    /// Blue gain after gamma; may exceed 1 (clipped afterwards).
    pub blue_multiplier: f32,
    /// Luminosity below which the dark segment of the tone curve applies.
    pub dark_threshold: f32,
    /// Slope of the dark segment.
    pub dark_multiplier: f32,
    /// Luminosity at and above which the bright segment applies.
    pub mid_threshold: f32,
    /// Slope of the middle segment.
    pub mid_boost: f32,
    /// Slope of the bright segment.
    pub bright_multiplier: f32,
    /// Strength of the brightness-weighted saturation boost (0 = off).
    pub saturation_boost: f32,
}

impl Default for StretchParams {
    fn default() -> Self {
        Self {
            gamma_red: 0.7,
            gamma_green: 0.8,
            gamma_blue: 0.75,
            green_multiplier: 0.93,
            blue_multiplier: 1.08,
            dark_threshold: 0.15,
            dark_multiplier: 0.3,
            mid_threshold: 0.4,
            mid_boost: 1.5,
            bright_multiplier: 1.1,
            saturation_boost: 1.0,
        }
    }
}

impl StretchParams {
    /// Parameters with every field at its default.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters that leave the channel corrector as the identity
    /// (all gammas and multipliers 1.0), other fields at their defaults.
    pub fn neutral_correction() -> Self {
        Self {
            gamma_red: 1.0,
            gamma_green: 1.0,
            gamma_blue: 1.0,
            green_multiplier: 1.0,
            blue_multiplier: 1.0,
            ..Self::default()
        }
    }

    #[inline]
    pub fn gamma_red(mut self, value: f32) -> Self {
        self.gamma_red = value;
        self
    }

    #[inline]
    pub fn gamma_green(mut self, value: f32) -> Self {
        self.gamma_green = value;
        self
    }

    #[inline]
    pub fn gamma_blue(mut self, value: f32) -> Self {
        self.gamma_blue = value;
        self
    }

    #[inline]
    pub fn green_multiplier(mut self, value: f32) -> Self {
        self.green_multiplier = value;
        self
    }

    #[inline]
    pub fn blue_multiplier(mut self, value: f32) -> Self {
        self.blue_multiplier = value;
        self
    }

    /// Set both tone-curve thresholds.
    #[inline]
    pub fn thresholds(mut self, dark: f32, mid: f32) -> Self {
        self.dark_threshold = dark;
        self.mid_threshold = mid;
        self
    }

    #[inline]
    pub fn dark_multiplier(mut self, value: f32) -> Self {
        self.dark_multiplier = value;
        self
    }

    #[inline]
    pub fn mid_boost(mut self, value: f32) -> Self {
        self.mid_boost = value;
        self
    }

    #[inline]
    pub fn bright_multiplier(mut self, value: f32) -> Self {
        self.bright_multiplier = value;
        self
    }

    #[inline]
    pub fn saturation_boost(mut self, value: f32) -> Self {
        self.saturation_boost = value;
        self
    }

    /// Check every field against its domain, returning the first violation.
    pub fn validate(&self) -> Result<(), ParamError> {
        match self.violations().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// All domain violations, in field order.
    pub fn violations(&self) -> Vec<ParamError> {
        let mut errors = Vec::new();

        let strictly_positive = [
            ("gamma_red", self.gamma_red),
            ("gamma_green", self.gamma_green),
            ("gamma_blue", self.gamma_blue),
            ("green_multiplier", self.green_multiplier),
            ("blue_multiplier", self.blue_multiplier),
            ("dark_multiplier", self.dark_multiplier),
            ("mid_boost", self.mid_boost),
            ("bright_multiplier", self.bright_multiplier),
        ];
        for (field, value) in strictly_positive {
            if !value.is_finite() {
                errors.push(ParamError::NotFinite { field });
            } else if value <= 0.0 {
                errors.push(ParamError::NonPositive { field, value });
            }
        }

        let mut thresholds_ok = true;
        for (field, value) in [
            ("dark_threshold", self.dark_threshold),
            ("mid_threshold", self.mid_threshold),
        ] {
            if !value.is_finite() {
                errors.push(ParamError::NotFinite { field });
                thresholds_ok = false;
            } else if !(0.0..=1.0).contains(&value) {
                errors.push(ParamError::ThresholdOutOfRange { field, value });
                thresholds_ok = false;
            }
        }
        if thresholds_ok && self.dark_threshold >= self.mid_threshold {
            errors.push(ParamError::ThresholdOrder {
                dark: self.dark_threshold,
                mid: self.mid_threshold,
            });
        }

        if !self.saturation_boost.is_finite() {
            errors.push(ParamError::NotFinite {
                field: "saturation_boost",
            });
        } else if self.saturation_boost < 0.0 {
            errors.push(ParamError::NegativeSaturation(self.saturation_boost));
        }

        errors
    }
}
