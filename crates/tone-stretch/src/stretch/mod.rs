//! Branch selection and auto-stretch (pipeline stages 2a and 2b).
//!
//! A buffer whose maximum is below [`MAX_THRESHOLD`] and whose mean is below
//! [`MEAN_THRESHOLD`] is treated as raw linear sensor data and gets the
//! aggressive [`auto_stretch`]. Everything else is assumed to be already
//! stretched and goes through the tone stage instead.

mod autostretch;
mod percentile;

pub use autostretch::{
    auto_stretch, ChannelRange, HIGH_PERCENTILE, LOW_PERCENTILE, MIDTONE_EXPONENT,
    RANGE_EPSILON,
};
pub use percentile::percentile;

use crate::buffer::RgbBuffer;

/// Buffers with a maximum at or above this are never auto-stretched.
pub const MAX_THRESHOLD: f32 = 0.9;

/// Buffers with a mean at or above this are never auto-stretched.
pub const MEAN_THRESHOLD: f64 = 0.1;

/// Which processing path a buffer takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Dim linear data: auto-stretch, then channel correction only.
    Raw,
    /// Pre-stretched data: channel correction, tone curve and saturation.
    Standard,
}

impl Branch {
    /// Decide the branch from the buffer's global maximum and mean.
    pub fn detect(buffer: &RgbBuffer) -> Self {
        if needs_autostretch(buffer.max(), buffer.mean()) {
            Branch::Raw
        } else {
            Branch::Standard
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Branch::Raw => "raw",
            Branch::Standard => "standard",
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both strict: a buffer with `max == 0.9` or `mean == 0.1` is standard.
#[inline]
pub fn needs_autostretch(max: f32, mean: f64) -> bool {
    max < MAX_THRESHOLD && mean < MEAN_THRESHOLD
}
