//! Configuration loading traits and types.
//!
//! Monitor settings live in a single TOML file. Limits are deliberately
//! absent: they are compile-time constants (see [`crate::consts`]).
//!
//! # TOML Example
//!
//! ```toml
//! output = "json"
//!
//! [shared]
//! log_level = "debug"
//! service_name = "bms-monitor-01"
//!
//! [warnings]
//! enabled = true
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use bms_common::config::{ConfigError, ConfigLoader, MonitorConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = MonitorConfig::load_validated(Path::new("bms.toml"))?;
//!     println!("Service: {}", config.shared.service_name);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Error type for configuration loading operations.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log level for application logging.
///
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Common configuration fields for any BMS process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Logging verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Application instance identifier.
    pub service_name: String,
}

impl SharedConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if `service_name` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            service_name: "bms-monitor".to_string(),
        }
    }
}

/// Early-warning settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningConfig {
    /// Report readings inside the warning band near either limit.
    #[serde(default = "default_warnings_enabled")]
    pub enabled: bool,
}

fn default_warnings_enabled() -> bool {
    true
}

impl Default for WarningConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Verdict output format of the monitor binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Top-level monitor configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorConfig {
    #[serde(default)]
    pub shared: SharedConfig,
    #[serde(default)]
    pub warnings: WarningConfig,
    #[serde(default)]
    pub output: OutputFormat,
}

impl MonitorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()
    }

    /// Load from `path` and run semantic validation.
    pub fn load_validated(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            service = %config.shared.service_name,
            warnings = config.warnings.enabled,
            "monitor config loaded"
        );
        Ok(config)
    }
}

/// Trait for loading configuration from TOML files.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_default() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_log_level_maps_to_tracing_level() {
        assert_eq!(tracing::Level::from(LogLevel::Trace), tracing::Level::TRACE);
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
        assert_eq!(tracing::Level::from(LogLevel::Error), tracing::Level::ERROR);
    }

    #[test]
    fn test_log_level_deserialization() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            level: LogLevel,
        }

        let parse = |s: &str| toml::from_str::<Wrapper>(s).unwrap().level;
        assert_eq!(parse("level = \"trace\""), LogLevel::Trace);
        assert_eq!(parse("level = \"debug\""), LogLevel::Debug);
        assert_eq!(parse("level = \"warn\""), LogLevel::Warn);
    }

    #[test]
    fn test_shared_config_validation_empty_service_name() {
        let config = SharedConfig {
            log_level: LogLevel::Info,
            service_name: "  ".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_monitor_config_defaults_from_empty_toml() {
        let config = MonitorConfig::from_toml("").unwrap();
        assert!(config.warnings.enabled);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.shared.service_name, "bms-monitor");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_monitor_config_full() {
        let config = MonitorConfig::from_toml(
            r#"
output = "json"

[shared]
log_level = "debug"
service_name = "pack-a"

[warnings]
enabled = false
"#,
        )
        .unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.shared.log_level, LogLevel::Debug);
        assert_eq!(config.shared.service_name, "pack-a");
        assert!(!config.warnings.enabled);
    }

    #[test]
    fn test_monitor_config_rejects_limit_overrides() {
        let result = MonitorConfig::from_toml("[limits]\ntemperature = [0.0, 60.0]\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
