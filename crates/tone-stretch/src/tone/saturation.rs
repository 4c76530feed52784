//! Brightness-weighted saturation boost.

use super::hsv::Hsv;
use crate::output::Rgb8Image;

/// Saturation gain for a pixel of value `v`: `1 + sqrt(v / 255) * boost`.
///
/// Bright pixels are boosted more than dark ones, which keeps the noisy sky
/// background from turning into colored speckle.
#[inline]
pub fn saturation_multiplier(v: u8, boost: f32) -> f32 {
    1.0 + (f32::from(v) / 255.0).sqrt() * boost
}

/// Scale the saturation of every pixel by [`saturation_multiplier`], clamped
/// to full saturation. Hue and value are unchanged.
pub fn boost_saturation(image: &mut Rgb8Image, boost: f32) {
    for px in image.pixels_mut() {
        let mut hsv = Hsv::from_rgb8([px[0], px[1], px[2]]);
        hsv.s = (hsv.s * saturation_multiplier(hsv.v, boost)).clamp(0.0, 1.0);
        px.copy_from_slice(&hsv.to_rgb8());
    }
}
