//! Achievement Manager - award orchestration
//!
//! Runs after a session is saved: assigns XP, detects level-ups, evaluates
//! badge rules over the full history and records new unlocks through an
//! [`AchievementStore`]. Newly unlocked badges are also pushed to an injected
//! [`BadgeObserver`] so the save flow never depends on the UI.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use super::checker::evaluate_qualifying_badges;
use super::levels::{LevelUp, level_up};
use super::lifetime::aggregate_lifetime_stats;
use super::store::{AchievementStore, UnlockedAchievement};
use super::xp::{prepare_for_save, total_xp};
use crate::domain::Session;

/// Award orchestration errors.
///
/// Per-badge store failures are not errors here: they are logged and the
/// badge is skipped.
#[derive(Debug, Error)]
pub enum AwardError {
    #[error("Cannot award achievements without a user id")]
    MissingUser,
}

/// Events that can happen during a save
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GamificationEvent {
    XpAwarded { amount: u32, total: u32 },
    LevelUp(LevelUp),
    AchievementUnlocked(UnlockedAchievement),
}

/// Receives newly unlocked badges (toasts, notifications, ...)
pub trait BadgeObserver: Send + Sync {
    fn badges_unlocked(&self, uid: &str, unlocked: &[UnlockedAchievement]);
}

/// Evaluate badge rules over `sessions` and record every qualifying badge
/// `uid` does not hold yet.
///
/// Candidates are checked and awarded one at a time. A store failure on one
/// candidate is logged and the rest are still tried; the return value holds
/// only the badges that were actually recorded. Calling this again with the
/// same history returns an empty list.
pub async fn evaluate_and_award<S>(
    uid: &str,
    sessions: &[Session],
    store: &S,
) -> Result<Vec<UnlockedAchievement>, AwardError>
where
    S: AchievementStore + ?Sized,
{
    if uid.trim().is_empty() {
        return Err(AwardError::MissingUser);
    }

    let stats = aggregate_lifetime_stats(sessions);
    let mut awarded = Vec::new();

    for badge in evaluate_qualifying_badges(&stats) {
        match store.has_achievement(uid, badge.id).await {
            Ok(true) => continue,
            Ok(false) => {}
            Err(e) => {
                tracing::warn!("Failed to check badge {} for {}: {}", badge.id, uid, e);
                continue;
            }
        }

        let unlocked = UnlockedAchievement::now(badge.id);
        match store.award(uid, &unlocked).await {
            Ok(()) => {
                tracing::info!("Unlocked badge {} ({}) for {}", badge.name, badge.id, uid);
                awarded.push(unlocked);
            }
            Err(e) => {
                tracing::warn!("Failed to award badge {} to {}: {}", badge.id, uid, e);
            }
        }
    }

    Ok(awarded)
}

/// Result of [`AchievementManager::record_session`]
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    /// The session as it should be persisted (totals refreshed, XP assigned)
    pub session: Session,
    pub events: Vec<GamificationEvent>,
}

/// Main manager for the gamification side of a save
pub struct AchievementManager<S: AchievementStore> {
    store: S,
    observer: Option<Arc<dyn BadgeObserver>>,
}

impl<S: AchievementStore> AchievementManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn BadgeObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Evaluate and award badges for a history that already includes the
    /// saved session, notifying the observer when anything was unlocked.
    pub async fn award_after_save(
        &self,
        uid: &str,
        sessions: &[Session],
    ) -> Result<Vec<UnlockedAchievement>, AwardError> {
        let awarded = evaluate_and_award(uid, sessions, &self.store).await?;
        if !awarded.is_empty() {
            if let Some(observer) = &self.observer {
                observer.badges_unlocked(uid, &awarded);
            }
        }
        Ok(awarded)
    }

    /// Prepare `session` for saving and run everything that follows a save.
    ///
    /// `history` is the user's saved sessions; an entry with the same id as
    /// `session` is treated as the previous version of it.
    pub async fn record_session(
        &self,
        uid: &str,
        history: &[Session],
        session: &Session,
    ) -> Result<SaveOutcome, AwardError> {
        let mut events = Vec::new();
        let saved = prepare_for_save(session);

        let old_xp = total_xp(history);
        let mut updated: Vec<Session> = history
            .iter()
            .filter(|s| saved.id.is_none() || s.id != saved.id)
            .cloned()
            .collect();
        updated.push(saved.clone());
        let new_xp = total_xp(&updated);

        if session.xp_earned.is_none() {
            events.push(GamificationEvent::XpAwarded {
                amount: saved.xp_earned.unwrap_or(0),
                total: new_xp,
            });
        }
        if let Some(up) = level_up(old_xp, new_xp) {
            tracing::info!("Level up for {}: {} -> {}", uid, up.old_level, up.new_level);
            events.push(GamificationEvent::LevelUp(up));
        }

        let awarded = self.award_after_save(uid, &updated).await?;
        events.extend(awarded.into_iter().map(GamificationEvent::AchievementUnlocked));

        Ok(SaveOutcome {
            session: saved,
            events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, Position, Round, ShotRange, TrainingType, Zone};
    use crate::stats::achievements::{AchievementId, MemoryAchievementStore};
    use std::sync::Mutex;

    fn session(date: &str, made: u32, attempts: u32) -> Session {
        Session::new(
            date,
            TrainingType::Spot,
            vec![Round::new(
                Direction::Static,
                ShotRange::ThreePoint,
                vec![Zone::new(Position::Center, made, attempts)],
            )],
        )
    }

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<AchievementId>>,
    }

    impl BadgeObserver for Recorder {
        fn badges_unlocked(&self, _uid: &str, unlocked: &[UnlockedAchievement]) {
            self.seen
                .lock()
                .unwrap()
                .extend(unlocked.iter().map(UnlockedAchievement::id));
        }
    }

    #[tokio::test]
    async fn test_missing_user() {
        let store = MemoryAchievementStore::new();
        let result = evaluate_and_award("  ", &[], &store).await;
        assert!(matches!(result, Err(AwardError::MissingUser)));
    }

    #[tokio::test]
    async fn test_record_session_events() {
        let recorder = Arc::new(Recorder::default());
        let manager =
            AchievementManager::new(MemoryAchievementStore::new()).with_observer(recorder.clone());

        // 180/200 = 90% -> (200 + 50) * 1.0 = 250 XP, enough for level 2
        let outcome = manager
            .record_session("u1", &[], &session("2024-06-01", 180, 200))
            .await
            .unwrap();

        assert_eq!(outcome.session.xp_earned, Some(250));
        assert_eq!(outcome.session.totals.accuracy, 90);

        let mut saw_xp = false;
        let mut saw_level = false;
        let mut badges = Vec::new();
        for event in &outcome.events {
            match event {
                GamificationEvent::XpAwarded { amount, total } => {
                    saw_xp = true;
                    assert_eq!((*amount, *total), (250, 250));
                }
                GamificationEvent::LevelUp(up) => {
                    saw_level = true;
                    assert_eq!((up.old_level, up.new_level), (1, 2));
                }
                GamificationEvent::AchievementUnlocked(u) => badges.push(u.id()),
            }
        }
        assert!(saw_xp && saw_level);
        assert_eq!(badges, vec![AchievementId::Sniper]);
        assert_eq!(*recorder.seen.lock().unwrap(), vec![AchievementId::Sniper]);
    }

    #[tokio::test]
    async fn test_editing_keeps_xp_and_skips_xp_event() {
        let manager = AchievementManager::new(MemoryAchievementStore::new());
        let mut first = session("2024-06-01", 5, 10);
        first.id = Some("s1".into());
        let saved = manager.record_session("u1", &[], &first).await.unwrap().session;

        let mut edited = saved.clone();
        edited.rounds[0].zones[0].made = 1;
        let outcome = manager
            .record_session("u1", std::slice::from_ref(&saved), &edited)
            .await
            .unwrap();

        assert_eq!(outcome.session.xp_earned, saved.xp_earned);
        assert!(outcome.events.is_empty());
    }
}
