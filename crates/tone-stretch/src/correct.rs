//! Per-channel gamma and gain (pipeline stage 3).

use crate::buffer::RgbBuffer;
use crate::params::StretchParams;

/// Apply `R^gamma_red`, `G^gamma_green * green_multiplier` and
/// `B^gamma_blue * blue_multiplier`, then clip to `[0, 1]`.
///
/// Runs on both branches. Gains above 1 are allowed; the clip absorbs them.
pub fn apply_channel_correction(buffer: &mut RgbBuffer, params: &StretchParams) {
    for px in buffer.pixels_mut() {
        let [r, g, b] = correct_pixel([px[0], px[1], px[2]], params);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }
    buffer.clip();
}

/// Corrected pixel before clipping.
#[inline]
pub fn correct_pixel(rgb: [f32; 3], params: &StretchParams) -> [f32; 3] {
    [
        rgb[0].powf(params.gamma_red),
        rgb[1].powf(params.gamma_green) * params.green_multiplier,
        rgb[2].powf(params.gamma_blue) * params.blue_multiplier,
    ]
}
