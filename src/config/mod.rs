//! Configuration loading and management

mod io;
mod settings;

pub use settings::Settings;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for: .shotlog/config.toml, then the global config
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let local_path = dir.join(".shotlog/config.toml");
        if local_path.exists() {
            return Self::from_file(&local_path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            return Self::from_file(&global_path);
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::with_defaults())
    }

    /// Explicit path when given, otherwise the directory lookup
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::from_dir(dir),
        }
    }

    /// Create a config with sensible defaults
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Achievement database location for this config
    pub fn database_path(&self) -> std::path::PathBuf {
        self.settings
            .resolved_database_path(&Self::global_config_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::with_defaults();
        assert_eq!(config.settings.heatmap_weeks, 17);
        assert_eq!(config.settings.default_window_days, 30);
        assert_eq!(config.settings.user_id, "local");
        assert!(config.database_path().ends_with("achievements.db"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings]\nheatmap_weeks = 8\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.settings.heatmap_weeks, 8);
        assert_eq!(config.settings.user_id, "local");
    }

    #[test]
    fn test_local_dir_config_wins() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".shotlog")).unwrap();
        std::fs::write(
            dir.path().join(".shotlog/config.toml"),
            "[settings]\nuser_id = \"coach\"\ndatabase_path = \"/tmp/x.db\"\n",
        )
        .unwrap();

        let config = Config::from_dir(dir.path()).unwrap();
        assert_eq!(config.settings.user_id, "coach");
        assert_eq!(config.database_path(), std::path::PathBuf::from("/tmp/x.db"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings\n").unwrap();
        assert!(Config::from_file(&path).is_err());
    }
}
