//! Configuration file support for scrollthumb.
//!
//! Configuration is loaded from `~/.config/scrollthumb/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/scrollthumb/config.toml
//! quiet_period_ms = 800
//! thumb_offset = 0
//! min_thumb_height = 20
//! cell_height = 16
//! always_active = false
//! wheel_lines = 3
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::scrollbar::{DEFAULT_QUIET_PERIOD, MIN_THUMB_HEIGHT};

const DEFAULT_CELL_HEIGHT: f64 = 16.0;
const DEFAULT_WHEEL_LINES: u16 = 3;

/// Environment variable overriding the quiet period (milliseconds).
pub const QUIET_PERIOD_ENV: &str = "SCROLLTHUMB_QUIET_MS";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Milliseconds without scrolling before the activity flag clears
    pub quiet_period_ms: Option<u64>,

    /// Pixels added to the rendered thumb top
    pub thumb_offset: Option<f64>,

    /// Minimum thumb height in pixels (never below 20)
    pub min_thumb_height: Option<f64>,

    /// Pixels per terminal row
    pub cell_height: Option<f64>,

    /// Keep the scrollbar visible instead of showing it on hover
    pub always_active: Option<bool>,

    /// Lines scrolled per wheel tick
    pub wheel_lines: Option<u16>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                crate::log::log(&format!("Config ignored: {}", e));
                Self::default()
            }
        }
    }

    /// Load and validate configuration from `path`.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scrollthumb")
            .join("config.toml")
    }

    fn validate(&self) -> ConfigResult<()> {
        if let Some(cell_height) = self.cell_height {
            if !(cell_height.is_finite() && cell_height > 0.0) {
                return Err(ConfigError::InvalidValue {
                    key: "cell_height",
                    value: cell_height.to_string(),
                });
            }
        }
        if let Some(offset) = self.thumb_offset {
            if !offset.is_finite() {
                return Err(ConfigError::InvalidValue {
                    key: "thumb_offset",
                    value: offset.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(
        mut self,
        quiet_period_ms: Option<u64>,
        thumb_offset: Option<f64>,
        always_active: Option<bool>,
    ) -> Self {
        if quiet_period_ms.is_some() {
            self.quiet_period_ms = quiet_period_ms;
        }
        if thumb_offset.is_some() {
            self.thumb_offset = thumb_offset;
        }
        if always_active.is_some() {
            self.always_active = always_active;
        }
        self
    }

    /// Get the quiet period, falling back to environment variable or default.
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period_ms
            .or_else(|| {
                std::env::var(QUIET_PERIOD_ENV)
                    .ok()
                    .and_then(|value| value.trim().parse().ok())
            })
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_QUIET_PERIOD)
    }

    pub fn thumb_offset(&self) -> f64 {
        self.thumb_offset.unwrap_or(0.0)
    }

    pub fn min_thumb_height(&self) -> f64 {
        self.min_thumb_height
            .unwrap_or(MIN_THUMB_HEIGHT)
            .max(MIN_THUMB_HEIGHT)
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height.unwrap_or(DEFAULT_CELL_HEIGHT)
    }

    pub fn always_active(&self) -> bool {
        self.always_active.unwrap_or(false)
    }

    pub fn wheel_lines(&self) -> u16 {
        self.wheel_lines.unwrap_or(DEFAULT_WHEEL_LINES).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.quiet_period_ms.is_none());
        assert_eq!(config.thumb_offset(), 0.0);
        assert_eq!(config.min_thumb_height(), 20.0);
        assert_eq!(config.cell_height(), 16.0);
        assert!(!config.always_active());
        assert_eq!(config.wheel_lines(), 3);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            quiet_period_ms = 500
            thumb_offset = 4.0
            min_thumb_height = 32.0
            always_active = true
            wheel_lines = 5
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.quiet_period(), Duration::from_millis(500));
        assert_eq!(config.thumb_offset(), 4.0);
        assert_eq!(config.min_thumb_height(), 32.0);
        assert!(config.always_active());
        assert_eq!(config.wheel_lines(), 5);
    }

    #[test]
    fn test_min_thumb_height_never_below_default() {
        let config: Config = toml::from_str("min_thumb_height = 4.0").unwrap();
        assert_eq!(config.min_thumb_height(), MIN_THUMB_HEIGHT);
    }

    #[test]
    fn test_cli_overrides_win() {
        let config: Config = toml::from_str("quiet_period_ms = 500\nalways_active = true").unwrap();
        let config = config.with_overrides(Some(1200), Some(2.0), None);
        assert_eq!(config.quiet_period(), Duration::from_millis(1200));
        assert_eq!(config.thumb_offset(), 2.0);
        assert!(config.always_active());
    }

    #[test]
    fn test_load_from_rejects_bad_cell_height() {
        let path = std::env::temp_dir().join(format!(
            "scrollthumb_config_test_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "cell_height = 0.0").unwrap();
        let result = Config::load_from(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "cell_height", .. })
        ));
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!(
            "scrollthumb_config_parse_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "quiet_period_ms = \"soon\"").unwrap();
        let result = Config::load_from(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
