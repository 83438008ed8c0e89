//! Badge rule evaluation
//!
//! Pure functions: given lifetime stats, which catalog entries qualify.
//! Whether a badge was already awarded is the store's concern, not ours.

use super::definitions::{Achievement, AchievementCategory, AchievementId};
use super::lifetime::LifetimeStats;
use crate::domain::TrainingType;

/// Highest tier of a category whose threshold `value` reaches.
/// Relies on `Achievement::in_category` yielding highest tier first.
fn highest_tier(category: AchievementCategory, value: u64) -> Option<&'static Achievement> {
    Achievement::in_category(category).find(|a| value >= a.threshold)
}

/// Best single-session accuracy (1 badge at most)
pub fn check_accuracy_badges(stats: &LifetimeStats) -> Option<&'static Achievement> {
    highest_tier(
        AchievementCategory::Accuracy,
        stats.best_single_session_accuracy as u64,
    )
}

/// Longest-ever daily streak (1 badge at most)
pub fn check_streak_badges(stats: &LifetimeStats) -> Option<&'static Achievement> {
    highest_tier(AchievementCategory::Streak, stats.longest_streak() as u64)
}

/// Lifetime attempts (1 badge at most)
pub fn check_volume_badges(stats: &LifetimeStats) -> Option<&'static Achievement> {
    highest_tier(AchievementCategory::Volume, stats.total_attempts)
}

/// Drill-type badges; each is independent of the others
pub fn check_type_badges(stats: &LifetimeStats) -> Vec<&'static Achievement> {
    let rules = [
        (TrainingType::CatchShoot, AchievementId::CatchShootRegular),
        (TrainingType::OffDribble, AchievementId::OffDribbleRegular),
    ];

    let mut qualifying = Vec::new();
    for (training_type, id) in rules {
        let badge = Achievement::get(id);
        if stats.sessions_of(&training_type) as u64 >= badge.threshold {
            qualifying.push(badge);
        }
    }
    qualifying
}

/// Every badge the stats currently qualify for, in catalog order
pub fn evaluate_qualifying_badges(stats: &LifetimeStats) -> Vec<&'static Achievement> {
    let mut qualifying = Vec::new();
    qualifying.extend(check_accuracy_badges(stats));
    qualifying.extend(check_streak_badges(stats));
    qualifying.extend(check_volume_badges(stats));
    qualifying.extend(check_type_badges(stats));
    qualifying
}
