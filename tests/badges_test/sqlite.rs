//! SQLite store on disk

use shotlog::TrainingType;
use shotlog::stats::SqliteAchievementStore;
use shotlog::stats::achievements::{
    AchievementId, AchievementManager, AchievementStore, GamificationEvent, evaluate_and_award,
};
use tempfile::tempdir;

use crate::common::{daily_sessions, ymd};

#[tokio::test]
async fn test_awards_survive_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("data/achievements.db");
    let sessions = daily_sessions(ymd(2024, 7, 1), 2, TrainingType::Spot, 9, 10);

    {
        let store = SqliteAchievementStore::open(&db_path).unwrap();
        let awarded = evaluate_and_award("u1", &sessions, &store).await.unwrap();
        assert_eq!(awarded.len(), 1);
        assert_eq!(awarded[0].id(), AchievementId::Sniper);
    }

    let store = SqliteAchievementStore::open(&db_path).unwrap();
    assert!(store.has_achievement("u1", AchievementId::Sniper).await.unwrap());
    assert!(evaluate_and_award("u1", &sessions, &store).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_two_handles_do_not_double_award() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("achievements.db");
    let a = SqliteAchievementStore::open(&db_path).unwrap();
    let b = SqliteAchievementStore::open(&db_path).unwrap();
    let sessions = daily_sessions(ymd(2024, 7, 1), 1, TrainingType::Spot, 8, 10);

    let (first, second) = tokio::join!(
        evaluate_and_award("u1", &sessions, &a),
        evaluate_and_award("u1", &sessions, &b)
    );
    assert!(first.unwrap().len() + second.unwrap().len() >= 1);
    assert_eq!(a.list("u1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_manager_over_sqlite() {
    let manager = AchievementManager::new(SqliteAchievementStore::open_in_memory().unwrap());
    let history = daily_sessions(ymd(2024, 7, 1), 6, TrainingType::Spot, 5, 10);
    let today = daily_sessions(ymd(2024, 7, 7), 1, TrainingType::Spot, 5, 10);

    let outcome = manager
        .record_session("u1", &history, &today[0])
        .await
        .unwrap();

    let unlocked: Vec<_> = outcome
        .events
        .iter()
        .filter_map(|e| match e {
            GamificationEvent::AchievementUnlocked(u) => Some(u.id()),
            _ => None,
        })
        .collect();
    assert_eq!(unlocked, vec![AchievementId::HotStreak]);
    assert_eq!(manager.store().list("u1").await.unwrap().len(), 1);
}
