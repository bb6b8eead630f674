//! Config persistence and path resolution methods for `Config`.
//!
//! Covers:
//! - `load_from` / `load_or_default` (YAML file I/O with default fallback)
//! - `save_to` / `write_atomic` (atomic write)
//! - XDG-compliant path helpers (`config_path`, `config_dir`)

use super::config_struct::Config;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load configuration from an explicit path.
    ///
    /// Returns defaults when the file does not exist. Nothing is written to
    /// disk.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        log::debug!("Loading existing config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml_ng::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file cannot be
    /// read or parsed. Invalid field values are replaced by their defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(mut config) => {
                config.sanitize();
                config
            }
            Err(e) => {
                log::warn!("Config unavailable ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        let yaml = serde_yaml_ng::to_string(self)?;
        Self::write_atomic(path, &yaml)
    }

    /// Write YAML text to `path`, creating parent directories.
    pub(crate) fn write_atomic(path: &Path, yaml: &str) -> Result<(), ConfigError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, yaml)?;
        fs::rename(&temp_path, path)?;

        log::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("unicode-hover")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/unicode-hover/config.yaml
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("unicode-hover")
            } else {
                PathBuf::from(".")
            }
        }
    }
}
