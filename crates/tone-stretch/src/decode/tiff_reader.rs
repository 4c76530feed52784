//! Primary reader: TIFF via the `tiff` crate.
//!
//! Astro capture and stacking tools write 16-bit integer or 32-bit float
//! TIFFs; this reader accepts every numeric sample format the crate decodes.

use std::io::Cursor;

use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::ColorType;

use super::DecodeError;
use crate::buffer::RgbBuffer;

/// Upper bound for decoder buffers (stacked full-frame captures).
const MAX_DECODE_BYTES: usize = 1024 * 1024 * 1024;

/// Decode TIFF bytes into an un-normalized [`RgbBuffer`].
pub(crate) fn decode_tiff(bytes: &[u8]) -> Result<RgbBuffer, DecodeError> {
    let mut limits = Limits::default();
    limits.decoding_buffer_size = MAX_DECODE_BYTES;
    limits.ifd_value_size = MAX_DECODE_BYTES;
    limits.intermediate_buffer_size = MAX_DECODE_BYTES;

    let mut decoder = Decoder::new(Cursor::new(bytes))
        .map_err(|e| DecodeError::UnsupportedLayout(format!("tiff header: {}", e)))?
        .with_limits(limits);

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| DecodeError::UnsupportedLayout(format!("tiff dimensions: {}", e)))?;
    let color_type = decoder
        .colortype()
        .map_err(|e| DecodeError::UnsupportedLayout(format!("tiff color type: {}", e)))?;
    let channels = channel_count(color_type)?;

    let image = decoder
        .read_image()
        .map_err(|e| DecodeError::UnsupportedLayout(format!("tiff data: {}", e)))?;

    let (width, height) = (width as usize, height as usize);
    match image {
        DecodingResult::U8(buf) => RgbBuffer::from_samples(&buf, width, height, channels),
        DecodingResult::U16(buf) => RgbBuffer::from_samples(&buf, width, height, channels),
        DecodingResult::U32(buf) => RgbBuffer::from_samples(&buf, width, height, channels),
        DecodingResult::U64(buf) => RgbBuffer::from_samples(&buf, width, height, channels),
        DecodingResult::I8(buf) => RgbBuffer::from_samples(&buf, width, height, channels),
        DecodingResult::I16(buf) => RgbBuffer::from_samples(&buf, width, height, channels),
        DecodingResult::I32(buf) => RgbBuffer::from_samples(&buf, width, height, channels),
        DecodingResult::I64(buf) => RgbBuffer::from_samples(&buf, width, height, channels),
        DecodingResult::F32(buf) => RgbBuffer::from_samples(&buf, width, height, channels),
        DecodingResult::F64(buf) => RgbBuffer::from_samples(&buf, width, height, channels),
        DecodingResult::F16(buf) => {
            let widened: Vec<f32> = buf.iter().map(|&v| v.to_f32()).collect();
            RgbBuffer::from_samples(&widened, width, height, channels)
        }
        #[allow(unreachable_patterns)]
        _ => Err(DecodeError::UnsupportedLayout(
            "unknown tiff sample format".to_string(),
        )),
    }
}

fn channel_count(color_type: ColorType) -> Result<usize, DecodeError> {
    match color_type {
        ColorType::Gray(_) => Ok(1),
        ColorType::GrayA(_) => Ok(2),
        ColorType::RGB(_) => Ok(3),
        ColorType::RGBA(_) => Ok(4),
        other => Err(DecodeError::UnsupportedLayout(format!("{:?}", other))),
    }
}
