use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;

/// Accepted tick interval range in milliseconds.
const TICK_RATE_RANGE_MS: std::ops::RangeInclusive<u64> = 10..=5000;
/// Accepted number of list grid columns.
const GRID_COLUMNS_RANGE: std::ops::RangeInclusive<usize> = 1..=4;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/wonderfluff/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("wonderfluff").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !TICK_RATE_RANGE_MS.contains(&self.ui.tick_rate_ms) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.tick_rate_ms must be between {} and {}, got {}",
                    TICK_RATE_RANGE_MS.start(),
                    TICK_RATE_RANGE_MS.end(),
                    self.ui.tick_rate_ms
                ),
            });
        }

        if !GRID_COLUMNS_RANGE.contains(&self.ui.grid_columns) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.grid_columns must be between {} and {}, got {}",
                    GRID_COLUMNS_RANGE.start(),
                    GRID_COLUMNS_RANGE.end(),
                    self.ui.grid_columns
                ),
            });
        }

        Ok(())
    }
}
