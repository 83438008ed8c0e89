//! Gamification system: XP, Levels, Streaks and Badges
//!
//! Scoring and rule evaluation are pure. The only I/O is in
//! [`evaluate_and_award`], which goes through an [`AchievementStore`].

mod checker;
mod definitions;
mod levels;
mod lifetime;
mod manager;
mod store;
mod streaks;
mod xp;

pub use checker::{
    check_accuracy_badges, check_streak_badges, check_type_badges, check_volume_badges,
    evaluate_qualifying_badges,
};
pub use definitions::{ACHIEVEMENTS, Achievement, AchievementCategory, AchievementId};
pub use levels::{LEVELS, Level, LevelUp, PlayerLevel, level_for_xp, level_up};
pub use lifetime::{LifetimeStats, aggregate_lifetime_stats};
pub use manager::{
    AchievementManager, AwardError, BadgeObserver, GamificationEvent, SaveOutcome,
    evaluate_and_award,
};
pub use store::{AchievementStore, MemoryAchievementStore, StoreError, UnlockedAchievement};
pub use streaks::{
    DayIntensity, IntensityTier, StreakSummary, build_day_intensity_map, compute_current_streak,
    current_streak_on, heatmap_window, longest_streak, normalize_trained_date_set,
    presence_counts, trained_day_counts, week_columns,
};
pub use xp::{
    ACCURACY_TIERS, SessionXp, XpBreakdown, XpInput, accuracy_bonus, calculate_session_xp,
    prepare_for_save, session_xp, total_xp,
};
