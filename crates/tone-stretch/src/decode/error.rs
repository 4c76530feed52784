//! Error type for raster loading.

use std::fmt;

/// Error returned when an input cannot be interpreted as a raster.
///
/// Decode failures are deterministic: retrying with the same bytes fails
/// the same way.
#[derive(Debug)]
pub enum DecodeError {
    /// Image has a zero dimension.
    Empty { width: usize, height: usize },
    /// Sample count does not match `width * height * channels`.
    ShapeMismatch { expected: usize, actual: usize },
    /// Raster has a channel count the loader cannot map to RGB.
    UnsupportedChannels(usize),
    /// Raster uses a sample layout the loader does not handle (CMYK, palette, ...).
    UnsupportedLayout(String),
    /// Neither the TIFF reader nor the generic fallback could decode the input.
    Unreadable { primary: String, fallback: String },
    /// The input file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Empty { width, height } => {
                write!(f, "image is empty ({}x{})", width, height)
            }
            DecodeError::ShapeMismatch { expected, actual } => write!(
                f,
                "sample count mismatch: expected {}, got {}",
                expected, actual
            ),
            DecodeError::UnsupportedChannels(n) => {
                write!(f, "unsupported channel count: {}", n)
            }
            DecodeError::UnsupportedLayout(layout) => {
                write!(f, "unsupported sample layout: {}", layout)
            }
            DecodeError::Unreadable { primary, fallback } => write!(
                f,
                "not a readable raster (tiff: {}; fallback: {})",
                primary, fallback
            ),
            DecodeError::Io(err) => write!(f, "failed to read input: {}", err),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DecodeError {
    fn from(err: std::io::Error) -> Self {
        DecodeError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty() {
        let err = DecodeError::Empty {
            width: 0,
            height: 10,
        };
        assert_eq!(err.to_string(), "image is empty (0x10)");
    }

    #[test]
    fn test_display_unreadable() {
        let err = DecodeError::Unreadable {
            primary: "bad magic".to_string(),
            fallback: "unknown format".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "not a readable raster (tiff: bad magic; fallback: unknown format)"
        );
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error;
        let err = DecodeError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(err.source().is_some());
    }
}
