//! Configuration module for the cost engine.
//!
//! Loads YAML configuration with serde defaults for every field, so an
//! absent file or empty document yields a fully usable configuration.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cost_engine::config::load_config;
//!
//! // Load from default path (config.yaml), falling back to defaults
//! let config = load_config(None)?;
//!
//! // Load from custom path (must exist)
//! let config = load_config(Some("custom/config.yaml"))?;
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file path.
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Offline report configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Snapshot persistence configuration.
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

impl Config {
    /// Parse a configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for malformed YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_bw::from_str(yaml)?)
    }
}

/// Offline report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path to the farm data fixture JSON.
    #[serde(default = "default_fixture_path")]
    pub fixture_path: String,
    /// Report date in `YYYY-MM-DD` form; overridable via `REPORT_DATE`.
    #[serde(default)]
    pub date: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            fixture_path: default_fixture_path(),
            date: None,
        }
    }
}

/// Snapshot persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Enable daily cost snapshot persistence.
    #[serde(default = "default_persistence_enabled")]
    pub enabled: bool,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            enabled: default_persistence_enabled(),
        }
    }
}

fn default_fixture_path() -> String {
    "fixtures/sample-farm.json".to_string()
}

const fn default_persistence_enabled() -> bool {
    true
}

/// Load configuration from a YAML file.
///
/// With an explicit `path` the file must exist. With `None`, the default
/// `config.yaml` is used when present and built-in defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigError` if an explicit file cannot be read, or if the
/// YAML fails to parse.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => {
            let contents =
                std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
                    path: path.to_string(),
                    source,
                })?;
            Config::from_yaml(&contents)
        }
        None => match std::fs::read_to_string(DEFAULT_CONFIG_PATH) {
            Ok(contents) => Config::from_yaml(&contents),
            Err(_) => Ok(Config::default()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = Config::default();
        assert_eq!(config.report.fixture_path, "fixtures/sample-farm.json");
        assert!(config.report.date.is_none());
        assert!(config.persistence.enabled);
    }

    #[test]
    fn config_from_empty_yaml_is_default() {
        let config = Config::from_yaml("").unwrap();
        assert!(config.persistence.enabled);
    }

    #[test]
    fn config_from_yaml_overrides_fields() {
        let yaml = r"
report:
  fixture_path: data/farm.json
  date: 2025-08-01
persistence:
  enabled: false
";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.report.fixture_path, "data/farm.json");
        assert_eq!(config.report.date.as_deref(), Some("2025-08-01"));
        assert!(!config.persistence.enabled);
    }

    #[test]
    fn config_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("persistence:\n  enabled: false\n").unwrap();
        assert!(!config.persistence.enabled);
        assert_eq!(config.report.fixture_path, "fixtures/sample-farm.json");
    }

    #[test]
    fn config_rejects_malformed_yaml() {
        assert!(Config::from_yaml("report: [not a map").is_err());
    }

    #[test]
    fn load_config_missing_explicit_path_errors() {
        let result = load_config(Some("does/not/exist.yaml"));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }
}
