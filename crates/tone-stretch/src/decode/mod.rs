//! Raster loading and normalization (pipeline stage 1).
//!
//! The loader tries the TIFF reader first and falls back to the generic
//! `image` reader. Only when both fail does loading fail with
//! [`DecodeError::Unreadable`].
//!
//! The returned buffer is already normalized: if its global maximum exceeds
//! 1 the whole buffer is divided by that maximum.

mod error;
mod fallback;
mod tiff_reader;

use std::path::Path;

pub use error::DecodeError;

use crate::buffer::RgbBuffer;

/// Decode an in-memory raster and normalize it into `[0, 1]`.
///
/// # Example
///
/// ```
/// use tone_stretch::decode::load_bytes;
///
/// assert!(load_bytes(b"not an image").is_err());
/// ```
pub fn load_bytes(bytes: &[u8]) -> Result<RgbBuffer, DecodeError> {
    let mut buffer = decode_raw(bytes)?;
    buffer.normalize();
    Ok(buffer)
}

/// Read a raster file and normalize it into `[0, 1]`.
pub fn load_path(path: impl AsRef<Path>) -> Result<RgbBuffer, DecodeError> {
    let bytes = std::fs::read(path.as_ref())?;
    load_bytes(&bytes)
}

/// Decode without normalizing, trying the TIFF reader then the fallback.
pub fn decode_raw(bytes: &[u8]) -> Result<RgbBuffer, DecodeError> {
    match tiff_reader::decode_tiff(bytes) {
        Ok(buffer) => Ok(buffer),
        Err(primary) => fallback::decode_generic(bytes).map_err(|fallback| {
            DecodeError::Unreadable {
                primary: primary.to_string(),
                fallback: fallback.to_string(),
            }
        }),
    }
}
