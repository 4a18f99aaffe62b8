//! Main application configuration
//!
//! This module defines the primary configuration structures for the
//! tracker, including environment variable loading, TOML file loading and
//! validation.

use crate::config::gate::GateSettings;
use crate::config::storage::StorageSettings;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub storage: StorageSettings,
    pub gate: GateSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "mus-tracker".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to
    /// defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var("MUS_SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }
        if let Ok(data_dir) = env::var("MUS_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(data_dir);
        }
        if let Ok(code) = env::var("MUS_DELETION_CODE") {
            config.gate.deletion_code = code;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; absent sections fall back to
    /// defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let config: Self = toml::from_str(&raw)
            .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))?;

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.storage.data_dir.as_os_str().is_empty() {
        return Err(anyhow!("Data directory cannot be empty"));
    }

    if config.gate.deletion_code.is_empty() {
        return Err(anyhow!("Deletion code cannot be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.service.name, "mus-tracker");
        assert_eq!(config.gate.deletion_code, "1234");
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = AppConfig::default();
        config.service.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_deletion_code_rejected() {
        let mut config = AppConfig::default();
        config.gate.deletion_code = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let raw = r#"
            [gate]
            deletion_code = "9876"
        "#;

        let config: AppConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.gate.deletion_code, "9876");
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
    }
}
