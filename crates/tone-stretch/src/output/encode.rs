//! Encoders for the full-resolution artifact.

use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tiff::encoder::{colortype, TiffEncoder};

use super::{EncodeError, Rgb8Image};

/// File format of the full-resolution output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Uncompressed 8-bit RGB TIFF.
    #[default]
    Tiff,
    /// 8-bit RGB PNG.
    Png,
}

impl OutputFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Tiff => "tif",
            OutputFormat::Png => "png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Tiff => f.write_str("tiff"),
            OutputFormat::Png => f.write_str("png"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tif" | "tiff" => Ok(OutputFormat::Tiff),
            "png" => Ok(OutputFormat::Png),
            other => Err(format!(
                "unknown output format '{}' (expected tiff or png)",
                other
            )),
        }
    }
}

/// Encode in the requested format.
pub fn encode(image: &Rgb8Image, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        OutputFormat::Tiff => encode_tiff(image),
        OutputFormat::Png => encode_png(image),
    }
}

/// Encode as 8-bit RGB PNG.
pub fn encode_png(image: &Rgb8Image) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = dimensions_u32(image)?;
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| EncodeError::Png(e.to_string()))?;
        writer
            .write_image_data(image.as_raw())
            .map_err(|e| EncodeError::Png(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode as uncompressed 8-bit RGB TIFF.
pub fn encode_tiff(image: &Rgb8Image) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = dimensions_u32(image)?;
    let mut buf = Cursor::new(Vec::new());
    TiffEncoder::new(&mut buf)
        .map_err(|e| EncodeError::Tiff(e.to_string()))?
        .write_image::<colortype::RGB8>(width, height, image.as_raw())
        .map_err(|e| EncodeError::Tiff(e.to_string()))?;
    Ok(buf.into_inner())
}

pub(crate) fn dimensions_u32(image: &Rgb8Image) -> Result<(u32, u32), EncodeError> {
    let too_large = || EncodeError::TooLarge {
        width: image.width(),
        height: image.height(),
    };
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;
    Ok((width, height))
}
