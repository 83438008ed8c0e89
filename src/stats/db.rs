//! SQLite achievement store
//!
//! Manages the achievements database (`Config::database_path`, by default
//! `~/.shotlog/achievements.db`) with automatic schema migration. Unlocks are keyed by (user, badge), so repeated or concurrent
//! awards collapse into one row.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::stats::achievements::{
    Achievement, AchievementId, AchievementStore, StoreError, UnlockedAchievement,
};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);

CREATE TABLE IF NOT EXISTS achievements (
    uid TEXT NOT NULL,
    id TEXT NOT NULL,
    unlocked_at INTEGER NOT NULL,
    PRIMARY KEY (uid, id)
);
"#;

/// Database wrapper implementing [`AchievementStore`]
#[derive(Clone)]
pub struct SqliteAchievementStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteAchievementStore {
    /// Open or create the database at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data dir: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open achievements db: {}", path.display()))?;

        // WAL so a second process evaluating the same user does not block
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        Self::with_connection(conn)
    }

    /// Throwaway database, mainly for tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory db")?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_schema()?;
        Ok(db)
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Initialize the database schema
    fn init_schema(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute_batch(SCHEMA_SQL)
            .context("Failed to create achievements schema")?;

        let version: i32 = conn
            .query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |r| r.get(0))
            .unwrap_or(0);
        if version < 1 {
            conn.execute("INSERT OR REPLACE INTO schema_version VALUES (1)", [])?;
        }
        Ok(())
    }

    /// Delete every unlock of one user
    pub fn reset_user(&self, uid: &str) -> Result<usize, StoreError> {
        let conn = self.conn()?;
        Ok(conn.execute("DELETE FROM achievements WHERE uid = ?1", [uid])?)
    }
}

#[async_trait]
impl AchievementStore for SqliteAchievementStore {
    async fn has_achievement(&self, uid: &str, id: AchievementId) -> Result<bool, StoreError> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM achievements WHERE uid = ?1 AND id = ?2",
            (uid, id.as_str()),
            |r| r.get(0),
        )?;
        Ok(count > 0)
    }

    async fn award(&self, uid: &str, unlocked: &UnlockedAchievement) -> Result<(), StoreError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT OR IGNORE INTO achievements (uid, id, unlocked_at) VALUES (?1, ?2, ?3)",
            (uid, unlocked.id().as_str(), unlocked.unlocked_at.timestamp_millis()),
        )?;
        Ok(())
    }

    async fn list(&self, uid: &str) -> Result<Vec<UnlockedAchievement>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, unlocked_at FROM achievements WHERE uid = ?1 ORDER BY unlocked_at DESC",
        )?;
        let rows = stmt.query_map([uid], |r| Ok((r.get::<_, String>(0)?, r.get::<_, i64>(1)?)))?;

        let mut unlocked = Vec::new();
        for row in rows {
            let (id, millis) = row?;
            // Ids from an older catalog are kept in the table but not listed
            let Some(id) = AchievementId::from_str(&id) else {
                tracing::debug!("Skipping unknown badge id {} for {}", id, uid);
                continue;
            };
            unlocked.push(UnlockedAchievement {
                achievement: Achievement::get(id),
                unlocked_at: DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default(),
            });
        }
        Ok(unlocked)
    }
}
