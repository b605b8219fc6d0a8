//! Configuration loading logic.
//!
//! Loading is never fatal: a missing file, an unreadable file, and a file
//! that does not parse all yield the default configuration. The failure is
//! classified as a [`ConfigError`] for logging.

use std::path::{Path, PathBuf};

use crate::config::types::ConsoleConfig;
use crate::errors::MocktowerError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    ReadFailed { path: PathBuf, message: String },

    #[error("Failed to parse config file '{path}': {message}")]
    ParseFailed { path: PathBuf, message: String },
}

impl MocktowerError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ReadFailed { .. } => "CONFIG_READ_FAILED",
            ConfigError::ParseFailed { .. } => "CONFIG_PARSE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ConfigError::ReadFailed { .. } => false,
            ConfigError::ParseFailed { .. } => true,
        }
    }
}

/// Load configuration from `~/.mocktower/config.toml`.
///
/// A missing file, an undeterminable home directory, or a file that fails
/// to read or parse all yield defaults; the failure is logged.
pub fn load() -> ConsoleConfig {
    let Some(home_dir) = dirs::home_dir() else {
        tracing::warn!(
            event = "core.config.home_dir_unavailable",
            "Could not find home directory, using default configuration"
        );
        return ConsoleConfig::default();
    };

    load_from_file(&home_dir.join(".mocktower").join("config.toml"))
}

/// Load configuration from the given path, defaulting on any failure.
///
/// Extracted for testability - allows unit tests to provide a temp path
/// instead of relying on the actual user config location.
pub fn load_from_file(path: &Path) -> ConsoleConfig {
    if !path.exists() {
        tracing::debug!(
            event = "core.config.file_absent",
            path = %path.display()
        );
        return ConsoleConfig::default();
    }

    match read_config_file(path) {
        Ok(config) => {
            tracing::info!(
                event = "core.config.loaded",
                path = %path.display(),
                api_base_url = %config.api_base_url
            );
            config
        }
        Err(e) => {
            tracing::warn!(
                event = "core.config.load_failed",
                path = %path.display(),
                code = e.error_code(),
                error = %e,
                "Falling back to default configuration"
            );
            ConsoleConfig::default()
        }
    }
}

/// Read and parse one config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed. Callers decide
/// whether the failure is fatal; [`load_from_file`] treats it as
/// defaults-with-a-warning.
pub fn read_config_file(path: &Path) -> Result<ConsoleConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
