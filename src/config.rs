use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{warn, Level};

use crate::error::ConfigError;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "gomoku.toml";

const MIN_WINDOW_SIDE: f32 = 320.0;

/// Front-end settings, loadable from TOML.
///
/// Board size and win length are fixed by the rules and are not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub show_coordinates: bool,
    pub show_last_move: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window_width: 900.0,
            window_height: 700.0,
            show_coordinates: true,
            show_last_move: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window_width >= MIN_WINDOW_SIDE) {
            return Err(ConfigError::Validation(format!(
                "window_width must be >= {MIN_WINDOW_SIDE}"
            )));
        }
        if !(self.window_height >= MIN_WINDOW_SIDE) {
            return Err(ConfigError::Validation(format!(
                "window_height must be >= {MIN_WINDOW_SIDE}"
            )));
        }
        self.level()?;
        Ok(())
    }

    /// Parsed `log_level`
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level.parse::<Level>().map_err(|_| {
            ConfigError::Validation(format!(
                "log_level must be one of trace, debug, info, warn, error (got '{}')",
                self.log_level
            ))
        })
    }
}
