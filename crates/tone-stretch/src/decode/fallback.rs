//! Generic fallback reader via the `image` crate.
//!
//! Used when the TIFF reader rejects the input (PNG, JPEG, TIFF variants the
//! `tiff` crate alone cannot handle). Native sample values are preserved.

use image::DynamicImage;

use super::DecodeError;
use crate::buffer::RgbBuffer;

pub(crate) fn decode_generic(bytes: &[u8]) -> Result<RgbBuffer, DecodeError> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| DecodeError::UnsupportedLayout(e.to_string()))?;
    from_dynamic(&image)
}

/// Convert a decoded [`DynamicImage`] without rescaling its samples.
pub(crate) fn from_dynamic(image: &DynamicImage) -> Result<RgbBuffer, DecodeError> {
    let (w, h) = (image.width() as usize, image.height() as usize);
    match image {
        DynamicImage::ImageLuma8(buf) => RgbBuffer::from_samples(buf.as_raw(), w, h, 1),
        DynamicImage::ImageLumaA8(buf) => RgbBuffer::from_samples(buf.as_raw(), w, h, 2),
        DynamicImage::ImageRgb8(buf) => RgbBuffer::from_samples(buf.as_raw(), w, h, 3),
        DynamicImage::ImageRgba8(buf) => RgbBuffer::from_samples(buf.as_raw(), w, h, 4),
        DynamicImage::ImageLuma16(buf) => RgbBuffer::from_samples(buf.as_raw(), w, h, 1),
        DynamicImage::ImageLumaA16(buf) => RgbBuffer::from_samples(buf.as_raw(), w, h, 2),
        DynamicImage::ImageRgb16(buf) => RgbBuffer::from_samples(buf.as_raw(), w, h, 3),
        DynamicImage::ImageRgba16(buf) => RgbBuffer::from_samples(buf.as_raw(), w, h, 4),
        DynamicImage::ImageRgb32F(buf) => RgbBuffer::from_samples(buf.as_raw(), w, h, 3),
        DynamicImage::ImageRgba32F(buf) => RgbBuffer::from_samples(buf.as_raw(), w, h, 4),
        other => {
            let rgb = other.to_rgb32f();
            RgbBuffer::from_samples(rgb.as_raw(), w, h, 3)
        }
    }
}
