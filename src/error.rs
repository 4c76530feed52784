use std::path::PathBuf;

use thiserror::Error;
use tone_stretch::{EncodeError, StretchError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Processing error: {0}")]
    Stretch(#[from] StretchError),

    #[error("Output error: {0}")]
    Encode(#[from] EncodeError),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Batch error: {0}")]
    Batch(String),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tone_stretch::ParamError;

    #[test]
    fn test_config_error() {
        let error = AppError::Config {
            path: PathBuf::from("config.yaml"),
            message: "bad indent".to_string(),
        };
        assert_eq!(error.to_string(), "Config error in config.yaml: bad indent");
    }

    #[test]
    fn test_unknown_key() {
        let error = AppError::UnknownKey("params.nope".to_string());
        assert_eq!(error.to_string(), "Unknown configuration key: params.nope");
    }

    #[test]
    fn test_from_stretch_error() {
        let error: AppError = StretchError::Params(ParamError::NegativeSaturation(-1.0)).into();
        match error {
            AppError::Stretch(_) => {}
            _ => panic!("Expected Stretch variant"),
        }
        assert!(error_text_contains(
            AppError::from(StretchError::Params(ParamError::NegativeSaturation(-1.0))),
            "saturation_boost"
        ));
    }

    #[test]
    fn test_from_encode_error() {
        let error: AppError = EncodeError::InvalidPreviewWidth.into();
        assert_eq!(
            error.to_string(),
            "Output error: preview width must be at least 1 pixel"
        );
    }

    #[test]
    fn test_io_error() {
        let error = AppError::io(
            "/tmp/x.tif",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(error.to_string(), "IO error on /tmp/x.tif: missing");
    }

    fn error_text_contains(error: AppError, needle: &str) -> bool {
        error.to_string().contains(needle)
    }
}
