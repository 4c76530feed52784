use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tone_stretch::output::DEFAULT_PREVIEW_WIDTH;
use tone_stretch::{OutputFormat, StretchParams};

use crate::error::AppError;

/// Config file used when neither `--config` nor `CONFIG_FILE` is given
pub const DEFAULT_CONFIG_FILE: &str = "astrostretch.yaml";

/// Accepted values for `log_level` (case-insensitive)
pub const LOG_LEVELS: [&str; 5] = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

/// Application configuration loaded from a YAML or JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Version of the program that wrote the file
    pub version: String,

    /// One of DEBUG, INFO, WARNING, ERROR, CRITICAL
    pub log_level: String,

    /// Directory for generated outputs and previews
    pub output_dir: PathBuf,

    /// Format of the full-resolution output
    pub output_format: OutputFormat,

    /// Preview generation
    pub preview: PreviewConfig,

    /// Default stretch parameters, overridable per invocation
    pub params: StretchParams,
}

/// Settings for the bounded-width preview image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub enabled: bool,
    pub max_width: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_width: DEFAULT_PREVIEW_WIDTH,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "INFO".to_string(),
            output_dir: PathBuf::from("output"),
            output_format: OutputFormat::default(),
            preview: PreviewConfig::default(),
            params: StretchParams::default(),
        }
    }
}

/// Serialization used for a config file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

impl AppConfig {
    /// Resolve the config path: explicit flag, then `CONFIG_FILE`, then the default
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration, failing on a missing or malformed file
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        Self::parse(&content, ConfigFormat::from_path(path)).map_err(|message| AppError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Load configuration, falling back to defaults when the file is
    /// missing or cannot be parsed
    pub fn load_or_default(path: &Path) -> Self {
        Self::or_default(path, Self::load(path))
    }

    /// Unwrap a [`load`](Self::load) result, logging why defaults are used.
    /// Lets callers load before the log subscriber exists and report after.
    pub fn or_default(path: &Path, loaded: Result<Self, AppError>) -> Self {
        match loaded {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    format = ?ConfigFormat::from_path(path),
                    "Loaded configuration"
                );
                config
            }
            Err(AppError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Read a standalone parameter file (YAML, or JSON by extension)
    pub fn load_params(path: &Path) -> Result<StretchParams, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let parsed = match ConfigFormat::from_path(path) {
            ConfigFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| AppError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse config text; missing fields take their defaults
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, String> {
        match format {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    pub fn to_text(&self, format: ConfigFormat) -> Result<String, String> {
        match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
        }
    }

    /// Write the configuration, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let text = self
            .to_text(ConfigFormat::from_path(path))
            .map_err(|message| AppError::Config {
                path: path.to_path_buf(),
                message,
            })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }
        std::fs::write(path, text).map_err(|e| AppError::io(path, e))?;
        tracing::info!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// Write a default configuration. Returns false if the file exists and
    /// `force` is not set.
    pub fn create_default(path: &Path, force: bool) -> Result<bool, AppError> {
        if path.exists() && !force {
            return Ok(false);
        }
        Self::default().save(path)?;
        Ok(true)
    }

    /// Look up a value by dotted key, e.g. `params.gamma_red`
    pub fn get(&self, key: &str) -> Option<Value> {
        let tree = serde_json::to_value(self).ok()?;
        key.split('.')
            .try_fold(&tree, |node, part| node.get(part))
            .cloned()
    }

    /// Set a value by dotted key. The raw value is parsed as JSON when
    /// possible (numbers, booleans, objects) and taken as a string otherwise.
    ///
    /// Keys must exist in the schema; the updated tree must still deserialize.
    pub fn set(&mut self, key: &str, raw: &str) -> Result<(), AppError> {
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

        let mut tree = serde_json::to_value(&*self).map_err(|e| AppError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        let slot = key
            .split('.')
            .try_fold(&mut tree, |node, part| node.get_mut(part))
            .ok_or_else(|| AppError::UnknownKey(key.to_string()))?;
        *slot = value;

        *self = serde_json::from_value(tree).map_err(|e| AppError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// All problems with this configuration, empty when valid
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_uppercase().as_str()) {
            errors.push(format!(
                "Invalid log_level: {}. Must be one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        if self.preview.max_width == 0 {
            errors.push("Invalid preview.max_width: 0. Must be positive".to_string());
        }

        errors.extend(
            self.params
                .violations()
                .into_iter()
                .map(|e| format!("Invalid params: {e}")),
        );

        errors
    }

    /// `tracing` directive for the configured level (unknown levels map to info)
    pub fn tracing_level(&self) -> &'static str {
        match self.log_level.to_ascii_uppercase().as_str() {
            "DEBUG" => "debug",
            "WARNING" => "warn",
            "ERROR" | "CRITICAL" => "error",
            _ => "info",
        }
    }
}
