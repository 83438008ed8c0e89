//! evaluate_and_award with in-memory and failing stores

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use shotlog::TrainingType;
use shotlog::stats::achievements::{
    AchievementId, AchievementStore, MemoryAchievementStore, StoreError, UnlockedAchievement,
    evaluate_and_award,
};

use crate::common::{daily_sessions, ymd};

fn ids(unlocked: &[UnlockedAchievement]) -> Vec<AchievementId> {
    unlocked.iter().map(UnlockedAchievement::id).collect()
}

#[tokio::test]
async fn test_second_evaluation_awards_nothing() {
    let store = MemoryAchievementStore::new();
    // 7 days of catch & shoot at 80%, 50 shots a day
    let sessions = daily_sessions(ymd(2024, 4, 1), 7, TrainingType::CatchShoot, 8, 10);

    let first = evaluate_and_award("player", &sessions, &store).await.unwrap();
    assert_eq!(
        ids(&first),
        vec![
            AchievementId::Marksman,
            AchievementId::HotStreak,
            AchievementId::CatchShootRegular
        ]
    );

    let second = evaluate_and_award("player", &sessions, &store).await.unwrap();
    assert!(second.is_empty());
    assert_eq!(store.list("player").await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_higher_tier_awarded_later() {
    let store = MemoryAchievementStore::new();
    let mut sessions = daily_sessions(ymd(2024, 4, 1), 1, TrainingType::Spot, 8, 10);
    let first = evaluate_and_award("player", &sessions, &store).await.unwrap();
    assert_eq!(ids(&first), vec![AchievementId::Marksman]);

    sessions.extend(daily_sessions(ymd(2024, 4, 3), 1, TrainingType::Spot, 9, 10));
    let second = evaluate_and_award("player", &sessions, &store).await.unwrap();
    assert_eq!(ids(&second), vec![AchievementId::Sniper]);
}

/// Fails every call that touches one badge id
struct FlakyStore {
    inner: MemoryAchievementStore,
    broken: AchievementId,
    calls: Mutex<Vec<AchievementId>>,
}

#[async_trait]
impl AchievementStore for FlakyStore {
    async fn has_achievement(&self, uid: &str, id: AchievementId) -> Result<bool, StoreError> {
        self.calls.lock().unwrap().push(id);
        if id == self.broken {
            return Err(StoreError::Backend("timeout".into()));
        }
        self.inner.has_achievement(uid, id).await
    }

    async fn award(&self, uid: &str, unlocked: &UnlockedAchievement) -> Result<(), StoreError> {
        self.inner.award(uid, unlocked).await
    }

    async fn list(&self, uid: &str) -> Result<Vec<UnlockedAchievement>, StoreError> {
        self.inner.list(uid).await
    }
}

#[tokio::test]
async fn test_store_failure_skips_only_that_badge() {
    let store = FlakyStore {
        inner: MemoryAchievementStore::new(),
        broken: AchievementId::HotStreak,
        calls: Mutex::new(Vec::new()),
    };
    let sessions = daily_sessions(ymd(2024, 4, 1), 7, TrainingType::OffDribble, 8, 10);

    let awarded = evaluate_and_award("player", &sessions, &store).await.unwrap();
    assert_eq!(
        ids(&awarded),
        vec![AchievementId::Marksman, AchievementId::OffDribbleRegular]
    );

    // Every candidate was still checked
    let checked: HashSet<_> = store.calls.lock().unwrap().iter().copied().collect();
    assert!(checked.contains(&AchievementId::HotStreak));
    assert!(checked.contains(&AchievementId::OffDribbleRegular));
}

#[tokio::test]
async fn test_no_sessions_no_badges() {
    let store = MemoryAchievementStore::new();
    assert!(evaluate_and_award("player", &[], &store).await.unwrap().is_empty());
}
