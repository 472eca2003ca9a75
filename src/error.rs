//! Error types for scrollthumb
//!
//! The scrollbar widgets themselves never fail: missing targets are no-ops
//! and numeric edge cases are clamped. Errors only come from the host:
//! - reading files and talking to the terminal
//! - loading the configuration file

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for scrollthumb
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(String),
}

/// Errors related to the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Other(err.to_string())
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn test_config_error_message() {
        let err: AppError = ConfigError::InvalidValue {
            key: "cell_height",
            value: "-1".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Config error: Invalid value for cell_height: -1");
    }

    #[test]
    fn test_string_conversions() {
        assert!(matches!(AppError::from("boom"), AppError::Other(msg) if msg == "boom"));
        let err = AppError::from(anyhow::anyhow!("wrapped"));
        assert_eq!(err.to_string(), "wrapped");
    }
}
