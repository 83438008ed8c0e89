//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Achievement database path. Relative paths resolve against the global
    /// config dir; empty means `~/.shotlog/achievements.db`.
    #[serde(default)]
    pub database_path: String,

    /// Number of week columns in the training heatmap
    #[serde(default = "default_heatmap_weeks")]
    pub heatmap_weeks: u32,

    /// Date window used by `summary` when no `--from` is given
    #[serde(default = "default_window_days")]
    pub default_window_days: u32,

    /// User id badges are recorded under
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_heatmap_weeks() -> u32 {
    17
}

fn default_window_days() -> u32 {
    30
}

fn default_user_id() -> String {
    "local".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: String::new(),
            heatmap_weeks: default_heatmap_weeks(),
            default_window_days: default_window_days(),
            user_id: default_user_id(),
        }
    }
}

impl Settings {
    /// Database path with the empty/relative cases resolved against `base`
    pub fn resolved_database_path(&self, base: &std::path::Path) -> PathBuf {
        let trimmed = self.database_path.trim();
        if trimmed.is_empty() {
            return base.join("achievements.db");
        }
        let path = PathBuf::from(trimmed);
        if path.is_absolute() { path } else { base.join(path) }
    }
}
