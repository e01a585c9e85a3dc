//! Configuration management for the workspace
//!
//! Configuration is loaded from a file (TOML, JSON or YAML, decided by
//! the file extension) and can be overridden through `CAMPUS__`-prefixed
//! environment variables.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Assistant identity used by the runner
    #[serde(default)]
    pub assistant: AssistantSettings,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON format instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

/// Assistant identity settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantSettings {
    /// Assistant name/identifier
    #[serde(default = "default_assistant_name")]
    pub name: String,

    /// Instructions given to the assistant
    #[serde(default = "default_instructions")]
    pub instructions: String,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_assistant_name() -> String {
    "schedule-assistant".to_string()
}

fn default_instructions() -> String {
    "Help students with schedule questions.".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            name: default_assistant_name(),
            instructions: default_instructions(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            assistant: AssistantSettings::default(),
        }
    }
}

/// Load configuration from a file
///
/// # Example
///
/// ```no_run
/// use campus_core::config::load_config;
///
/// let config = load_config("config.toml").unwrap();
/// println!("Assistant: {}", config.assistant.name);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CoreError::config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("CAMPUS").separator("__"))
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;

    tracing::info!("Configuration loaded from {}", path.display());

    Ok(config)
}

/// Load configuration with defaults if the file doesn't exist
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> AppConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert_eq!(config.assistant.name, "schedule-assistant");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.assistant.name, deserialized.assistant.name);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "logging": {
                "level": "debug",
                "json": true
            },
            "assistant": {
                "name": "gatekeeper",
                "instructions": "Only admit students of our own school."
            }
        }"#;

        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(config.assistant.name, "gatekeeper");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = r#"{"logging": {"level": "trace"}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.assistant.name, "schedule-assistant");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default() {
        let config = load_config_or_default("nonexistent.toml");
        assert_eq!(config.assistant.name, "schedule-assistant");
    }
}
