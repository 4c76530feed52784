//! Unified error type for the tone-stretch public API.

use crate::decode::DecodeError;
use crate::output::EncodeError;
use crate::params::ParamError;
use std::fmt;

/// Unified error type for the tone-stretch public API.
///
/// Wraps every error of the crate into a single enum for convenient `?`
/// propagation in application code.
///
/// # Example
///
/// ```
/// use tone_stretch::{process_bytes, StretchError, StretchParams};
///
/// let err = process_bytes(b"not a raster", &StretchParams::default()).unwrap_err();
/// assert!(matches!(err, StretchError::Decode(_)));
/// ```
#[derive(Debug)]
pub enum StretchError {
    /// Input could not be loaded as a raster
    Decode(DecodeError),
    /// A parameter is outside its domain
    Params(ParamError),
    /// Output could not be encoded or resampled
    Encode(EncodeError),
}

impl fmt::Display for StretchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StretchError::Decode(err) => write!(f, "decode error: {}", err),
            StretchError::Params(err) => write!(f, "invalid parameters: {}", err),
            StretchError::Encode(err) => write!(f, "encode error: {}", err),
        }
    }
}

impl std::error::Error for StretchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StretchError::Decode(err) => Some(err),
            StretchError::Params(err) => Some(err),
            StretchError::Encode(err) => Some(err),
        }
    }
}

impl From<DecodeError> for StretchError {
    fn from(err: DecodeError) -> Self {
        StretchError::Decode(err)
    }
}

impl From<ParamError> for StretchError {
    fn from(err: ParamError) -> Self {
        StretchError::Params(err)
    }
}

impl From<EncodeError> for StretchError {
    fn from(err: EncodeError) -> Self {
        StretchError::Encode(err)
    }
}
