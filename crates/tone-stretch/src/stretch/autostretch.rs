//! Aggressive percentile stretch for raw, very dark captures.

use super::percentile::percentile;
use crate::buffer::{Channel, RgbBuffer};

/// Low clip point, in percent. Almost the minimum.
pub const LOW_PERCENTILE: f64 = 0.001;

/// High clip point, in percent. Almost the maximum.
pub const HIGH_PERCENTILE: f64 = 99.999;

/// Exponent of the midtone lift applied after the linear stretch.
pub const MIDTONE_EXPONENT: f32 = 0.35;

/// Guards the rescale against a zero-width channel range.
pub const RANGE_EPSILON: f32 = 1e-10;

/// Clip range found for one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    pub channel: Channel,
    pub low: f32,
    pub high: f32,
}

impl ChannelRange {
    /// A channel with no dynamic range. The epsilon keeps the rescale
    /// finite, but the stretched channel collapses to (near) zero.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.high - self.low <= 0.0
    }
}

/// Stretch each channel to its own `[0.001%, 99.999%]` range, clip, then lift
/// midtones with `v^0.35`.
///
/// Returns the clip range used for each channel, in R, G, B order.
pub fn auto_stretch(buffer: &mut RgbBuffer) -> [ChannelRange; 3] {
    let ranges = Channel::ALL.map(|channel| {
        let mut samples = buffer.channel(channel);
        let low = percentile(&mut samples, LOW_PERCENTILE);
        let high = percentile(&mut samples, HIGH_PERCENTILE);
        ChannelRange { channel, low, high }
    });

    for range in &ranges {
        let scale = range.high - range.low + RANGE_EPSILON;
        buffer.map_channel(range.channel, |v| {
            (v.clamp(range.low, range.high) - range.low) / scale
        });
    }

    buffer.clip();
    for value in buffer.as_mut_slice() {
        *value = value.powf(MIDTONE_EXPONENT);
    }

    ranges
}
