//! Error type for output encoding and preview resampling.

use std::fmt;

/// Error returned when an output image cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Dimensions do not fit the encoder's 32-bit fields.
    TooLarge { width: usize, height: usize },
    /// Preview width bound of zero.
    InvalidPreviewWidth,
    /// PNG encoder failure.
    Png(String),
    /// TIFF encoder failure.
    Tiff(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::TooLarge { width, height } => {
                write!(f, "image too large to encode ({}x{})", width, height)
            }
            EncodeError::InvalidPreviewWidth => {
                write!(f, "preview width must be at least 1 pixel")
            }
            EncodeError::Png(msg) => write!(f, "png encoding failed: {}", msg),
            EncodeError::Tiff(msg) => write!(f, "tiff encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for EncodeError {}
