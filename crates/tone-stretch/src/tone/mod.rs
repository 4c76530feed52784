//! Tone curve and saturation (pipeline stage 4, standard branch only).
//!
//! ```text
//! RgbBuffer (f32, corrected)
//!     |
//!     v
//! ToneCurve::apply        L = 0.299R + 0.587G + 0.114B, per-pixel gain
//!     |
//!     v
//! RgbBuffer::to_rgb8      truncating quantization
//!     |
//!     v
//! boost_saturation        HSV, S *= 1 + sqrt(V/255) * boost
//!     |
//!     v
//! Rgb8Image
//! ```

mod curve;
mod hsv;
mod saturation;

pub use curve::{luminosity, ToneCurve, LUMA_EPSILON, LUMA_WEIGHTS, MAX_RATIO};
pub use hsv::Hsv;
pub use saturation::{boost_saturation, saturation_multiplier};

use crate::buffer::RgbBuffer;
use crate::output::Rgb8Image;
use crate::params::StretchParams;

/// Run the whole stage: tone curve, quantization, saturation boost.
pub fn apply_tone_stage(mut buffer: RgbBuffer, params: &StretchParams) -> Rgb8Image {
    ToneCurve::new(params).apply(&mut buffer);
    let mut image = buffer.to_rgb8();
    boost_saturation(&mut image, params.saturation_boost);
    image
}
