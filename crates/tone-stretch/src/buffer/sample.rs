//! Native raster sample types.
//!
//! Decoders hand over samples in whatever type the file stores. The loader
//! keeps their *values*: a 16-bit sample of 3000 becomes `3000.0`, not
//! `3000.0 / 65535.0`. Scaling into [0,1] happens once, globally, in
//! [`RgbBuffer::normalize`](super::RgbBuffer::normalize).

/// A raster sample that can be widened to `f32` by value.
pub trait RawSample: Copy {
    fn to_f32(self) -> f32;
}

macro_rules! impl_raw_sample {
    ($($t:ty),*) => {
        $(
            impl RawSample for $t {
                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}

impl_raw_sample!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// Clamp a widened sample into the loader's accepted domain.
///
/// NaN, infinities and negative values become 0.0 so that later power
/// laws never see a negative base.
#[inline]
pub(crate) fn sanitize(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
