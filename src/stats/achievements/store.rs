//! Achievement persistence seam
//!
//! The award orchestration only needs "does the user have it?" and "record
//! it". Stores must make `award` idempotent per (user, badge): concurrent
//! evaluations for the same user rely on that, not on any in-process lock.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;

use super::definitions::{Achievement, AchievementId};

/// Achievement store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Achievement store unavailable: {0}")]
    Backend(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Achievement store lock poisoned")]
    Poisoned,
}

/// An achievement that has been unlocked
#[derive(Debug, Clone, Serialize)]
pub struct UnlockedAchievement {
    pub achievement: &'static Achievement,
    pub unlocked_at: DateTime<Utc>,
}

impl UnlockedAchievement {
    pub fn now(id: AchievementId) -> Self {
        Self {
            achievement: Achievement::get(id),
            unlocked_at: Utc::now(),
        }
    }

    pub fn id(&self) -> AchievementId {
        self.achievement.id
    }
}

#[async_trait]
pub trait AchievementStore: Send + Sync {
    /// Whether `uid` already holds badge `id`
    async fn has_achievement(&self, uid: &str, id: AchievementId) -> Result<bool, StoreError>;

    /// Record an unlock. Recording an id the user already holds is a no-op
    /// and keeps the original `unlocked_at`.
    async fn award(&self, uid: &str, unlocked: &UnlockedAchievement) -> Result<(), StoreError>;

    /// All unlocked badges for `uid`, most recent first
    async fn list(&self, uid: &str) -> Result<Vec<UnlockedAchievement>, StoreError>;
}

/// In-process store, used by tests and as a scratch store
#[derive(Debug, Default)]
pub struct MemoryAchievementStore {
    unlocked: RwLock<HashMap<String, Vec<UnlockedAchievement>>>,
}

impl MemoryAchievementStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AchievementStore for MemoryAchievementStore {
    async fn has_achievement(&self, uid: &str, id: AchievementId) -> Result<bool, StoreError> {
        let unlocked = self.unlocked.read().await;
        Ok(unlocked
            .get(uid)
            .is_some_and(|list| list.iter().any(|u| u.id() == id)))
    }

    async fn award(&self, uid: &str, unlocked: &UnlockedAchievement) -> Result<(), StoreError> {
        let mut all = self.unlocked.write().await;
        let list = all.entry(uid.to_string()).or_default();
        if !list.iter().any(|u| u.id() == unlocked.id()) {
            list.push(unlocked.clone());
        }
        Ok(())
    }

    async fn list(&self, uid: &str) -> Result<Vec<UnlockedAchievement>, StoreError> {
        let unlocked = self.unlocked.read().await;
        let mut list = unlocked.get(uid).cloned().unwrap_or_default();
        list.sort_by(|a, b| b.unlocked_at.cmp(&a.unlocked_at));
        Ok(list)
    }
}
