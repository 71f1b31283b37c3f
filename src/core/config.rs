//! Application configuration
//!
//! Read-only settings loaded from `config.toml` in the platform config
//! directory. Missing files and missing keys fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{RideError, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Delay between confirming a ride and the driver being assigned
    #[serde(default = "default_assignment_delay")]
    pub driver_assignment_delay_ms: u64,

    /// UI tick interval, drives the spinner
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_assignment_delay() -> u64 {
    3000
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            driver_assignment_delay_ms: default_assignment_delay(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, or defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(RideError::Config(
                "tick_rate_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "ridehail", "ridehail")
            .ok_or_else(|| RideError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    pub fn driver_assignment_delay(&self) -> Duration {
        Duration::from_millis(self.driver_assignment_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Render as TOML for display
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RideError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.driver_assignment_delay(), Duration::from_secs(3));
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "driver_assignment_delay_ms = 500\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.driver_assignment_delay_ms, 500);
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "driver_assignment_delay_ms = \"soon\"\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(RideError::Toml(_))));

        fs::write(&path, "tick_rate_ms = 0\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(RideError::Config(_))));
    }

    #[test]
    fn test_to_toml() {
        let rendered = Config::default().to_toml().unwrap();
        assert!(rendered.contains("driver_assignment_delay_ms = 3000"));
        assert!(rendered.contains("tick_rate_ms = 250"));
    }
}
