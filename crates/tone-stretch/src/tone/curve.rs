//! Luminosity-driven piecewise tone curve.

use crate::buffer::RgbBuffer;
use crate::params::StretchParams;

/// Rec. 601 luma weights.
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Upper bound of the per-pixel gain.
pub const MAX_RATIO: f32 = 3.0;

/// Keeps the ratio finite for black pixels.
pub const LUMA_EPSILON: f32 = 1e-10;

/// Luminosity of a linear RGB pixel.
#[inline]
pub fn luminosity(rgb: [f32; 3]) -> f32 {
    LUMA_WEIGHTS[0] * rgb[0] + LUMA_WEIGHTS[1] * rgb[1] + LUMA_WEIGHTS[2] * rgb[2]
}

/// Three-segment curve over luminosity.
///
/// ```text
/// L <  dark            : L * dark_multiplier
/// dark <= L < mid      : dark * dark_multiplier + (L - dark) * mid_boost
/// L >= mid             : L * bright_multiplier
/// ```
///
/// The curve is continuous at `dark` but not, in general, at `mid`. The
/// parameters are used exactly as given; [`ToneCurve::mid_discontinuity`]
/// measures the resulting jump.
///
/// # Example
///
/// ```
/// use tone_stretch::{StretchParams, ToneCurve};
///
/// let curve = ToneCurve::new(&StretchParams::default());
/// assert!((curve.value(0.5) - 0.55).abs() < 1e-6);
/// assert!((curve.ratio(0.5) - 1.1).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneCurve {
    dark_threshold: f32,
    dark_multiplier: f32,
    mid_threshold: f32,
    mid_boost: f32,
    bright_multiplier: f32,
}

impl ToneCurve {
    pub fn new(params: &StretchParams) -> Self {
        Self {
            dark_threshold: params.dark_threshold,
            dark_multiplier: params.dark_multiplier,
            mid_threshold: params.mid_threshold,
            mid_boost: params.mid_boost,
            bright_multiplier: params.bright_multiplier,
        }
    }

    /// Curve output for luminosity `l`.
    #[inline]
    pub fn value(&self, l: f32) -> f32 {
        if l < self.dark_threshold {
            l * self.dark_multiplier
        } else if l < self.mid_threshold {
            self.dark_segment_end() + (l - self.dark_threshold) * self.mid_boost
        } else {
            l * self.bright_multiplier
        }
    }

    /// Gain applied to every channel of a pixel with luminosity `l`,
    /// clamped to `[0, 3]`.
    #[inline]
    pub fn ratio(&self, l: f32) -> f32 {
        (self.value(l) / (l + LUMA_EPSILON)).clamp(0.0, MAX_RATIO)
    }

    /// Jump at `mid_threshold`: the bright segment's value there minus the
    /// middle segment's left limit. Zero when the curve is continuous.
    ///
    /// About `0.02` with default parameters.
    pub fn mid_discontinuity(&self) -> f32 {
        let left = self.dark_segment_end()
            + (self.mid_threshold - self.dark_threshold) * self.mid_boost;
        let right = self.mid_threshold * self.bright_multiplier;
        right - left
    }

    /// Scale every pixel by its ratio, then clip to `[0, 1]`.
    pub fn apply(&self, buffer: &mut RgbBuffer) {
        for px in buffer.pixels_mut() {
            let ratio = self.ratio(luminosity([px[0], px[1], px[2]]));
            for v in px.iter_mut() {
                *v *= ratio;
            }
        }
        buffer.clip();
    }

    #[inline]
    fn dark_segment_end(&self) -> f32 {
        self.dark_threshold * self.dark_multiplier
    }
}
