//! Configuration file support for fitstat.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitstat/config.toml`.

use crate::batch::{default_readings, ErrorPolicy};
use crate::{Error, RawReading, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub processing: ProcessingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub input: InputConfig,
}

/// Batch processing configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ProcessingConfig {
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

/// Logging configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Readings processed when no input is given on the command line
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_readings")]
    pub readings: Vec<RawReading>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            readings: default_readings(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "warn".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            config_path => {
                tracing::info!(
                    "No config file found at {:?}, using defaults",
                    config_path
                );
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("fitstat").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::Config(format!(
                "Unknown log level {:?}",
                self.logging.level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.processing.on_error, ErrorPolicy::Continue);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.input.readings.len(), 3);
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.processing.on_error = ErrorPolicy::Abort;
        config.save_to(&path).unwrap();

        let parsed = Config::load_from(&path).unwrap();
        assert_eq!(parsed.processing.on_error, ErrorPolicy::Abort);
        assert_eq!(parsed.input.readings, config.input.readings);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[processing]
on_error = "abort"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.processing.on_error, ErrorPolicy::Abort);
        assert_eq!(config.logging.level, "warn"); // default
        assert_eq!(config.input.readings, default_readings()); // default
    }

    #[test]
    fn test_custom_readings() {
        let toml_str = r#"
[[input.readings]]
workout_code = "RUN"
fields = [5000, 0.5, 60]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.input.readings,
            vec![RawReading::new("RUN", vec![5000.0, 0.5, 60.0])]
        );
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
