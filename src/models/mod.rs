pub mod config;
pub mod overrides;

pub use config::{AppConfig, ConfigFormat, PreviewConfig, DEFAULT_CONFIG_FILE, LOG_LEVELS};
pub use overrides::ParamOverrides;
