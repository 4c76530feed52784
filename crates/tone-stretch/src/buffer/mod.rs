//! In-memory image buffer shared by all pipeline stages.
//!
//! [`RgbBuffer`] owns interleaved `f32` RGB samples. Any native raster
//! (integer or float, 1 to N channels) enters through
//! [`RgbBuffer::from_samples`], which keeps sample values as-is; the global
//! scale into `[0, 1]` is applied by [`RgbBuffer::normalize`].

mod rgb_buffer;
mod sample;

pub use rgb_buffer::{Channel, RgbBuffer};
pub use sample::RawSample;
