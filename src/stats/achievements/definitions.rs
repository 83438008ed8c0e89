//! Badge definitions and metadata
//!
//! The catalog is static. Each category is a tier ladder; only the highest
//! qualifying tier of a category is ever awarded in one evaluation, except
//! for drill-type badges, which are independent of each other.

use serde::Serialize;

/// Unique identifier for each badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AchievementId {
    // Accuracy (best single session)
    Sniper,
    Sharpshooter,
    Marksman,

    // Streak (longest run of consecutive training days)
    IronStreak,
    HotStreak,

    // Volume (lifetime attempts)
    VolumeLegend,
    VolumeGrinder,

    // Drill types
    CatchShootRegular,
    OffDribbleRegular,
}

impl AchievementId {
    /// Get the string ID for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sniper => "acc_90",
            Self::Sharpshooter => "acc_85",
            Self::Marksman => "acc_80",
            Self::IronStreak => "streak_30",
            Self::HotStreak => "streak_7",
            Self::VolumeLegend => "volume_5000",
            Self::VolumeGrinder => "volume_500",
            Self::CatchShootRegular => "type_catch_shoot_5",
            Self::OffDribbleRegular => "type_off_dribble_5",
        }
    }

    /// Parse from storage string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "acc_90" => Some(Self::Sniper),
            "acc_85" => Some(Self::Sharpshooter),
            "acc_80" => Some(Self::Marksman),
            "streak_30" => Some(Self::IronStreak),
            "streak_7" => Some(Self::HotStreak),
            "volume_5000" => Some(Self::VolumeLegend),
            "volume_500" => Some(Self::VolumeGrinder),
            "type_catch_shoot_5" => Some(Self::CatchShootRegular),
            "type_off_dribble_5" => Some(Self::OffDribbleRegular),
            _ => None,
        }
    }

    /// Get all badge IDs, in catalog order
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::Sniper,
            Self::Sharpshooter,
            Self::Marksman,
            Self::IronStreak,
            Self::HotStreak,
            Self::VolumeLegend,
            Self::VolumeGrinder,
            Self::CatchShootRegular,
            Self::OffDribbleRegular,
        ]
    }

    fn catalog_index(&self) -> usize {
        match self {
            Self::Sniper => 0,
            Self::Sharpshooter => 1,
            Self::Marksman => 2,
            Self::IronStreak => 3,
            Self::HotStreak => 4,
            Self::VolumeLegend => 5,
            Self::VolumeGrinder => 6,
            Self::CatchShootRegular => 7,
            Self::OffDribbleRegular => 8,
        }
    }
}

impl Serialize for AchievementId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge category for grouping in UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Accuracy,
    Streak,
    Volume,
    Type,
}

impl AchievementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accuracy => "accuracy",
            Self::Streak => "streak",
            Self::Volume => "volume",
            Self::Type => "type",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Accuracy => "Accuracy",
            Self::Streak => "Streaks",
            Self::Volume => "Volume",
            Self::Type => "Drill Types",
        }
    }
}

/// Badge definition with all metadata
#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    /// Value the qualifying stat must reach
    pub threshold: u64,
}

/// All badge definitions. Order must match `AchievementId::all()`.
pub static ACHIEVEMENTS: &[Achievement] = &[
    // === ACCURACY ===
    Achievement {
        id: AchievementId::Sniper,
        name: "Sniper",
        description: "Shoot 90% or better in a single session",
        icon: "🎯",
        category: AchievementCategory::Accuracy,
        threshold: 90,
    },
    Achievement {
        id: AchievementId::Sharpshooter,
        name: "Sharpshooter",
        description: "Shoot 85% or better in a single session",
        icon: "🏹",
        category: AchievementCategory::Accuracy,
        threshold: 85,
    },
    Achievement {
        id: AchievementId::Marksman,
        name: "Marksman",
        description: "Shoot 80% or better in a single session",
        icon: "🔫",
        category: AchievementCategory::Accuracy,
        threshold: 80,
    },
    // === STREAK ===
    Achievement {
        id: AchievementId::IronStreak,
        name: "Iron Will",
        description: "Train 30 days in a row",
        icon: "👑",
        category: AchievementCategory::Streak,
        threshold: 30,
    },
    Achievement {
        id: AchievementId::HotStreak,
        name: "On Fire",
        description: "Train 7 days in a row",
        icon: "🔥",
        category: AchievementCategory::Streak,
        threshold: 7,
    },
    // === VOLUME ===
    Achievement {
        id: AchievementId::VolumeLegend,
        name: "Gym Rat",
        description: "Attempt 5,000 shots",
        icon: "🏆",
        category: AchievementCategory::Volume,
        threshold: 5000,
    },
    Achievement {
        id: AchievementId::VolumeGrinder,
        name: "Grinder",
        description: "Attempt 500 shots",
        icon: "💪",
        category: AchievementCategory::Volume,
        threshold: 500,
    },
    // === TYPE ===
    Achievement {
        id: AchievementId::CatchShootRegular,
        name: "Quick Release",
        description: "Complete 5 catch & shoot sessions",
        icon: "⚡",
        category: AchievementCategory::Type,
        threshold: 5,
    },
    Achievement {
        id: AchievementId::OffDribbleRegular,
        name: "Shot Creator",
        description: "Complete 5 off-the-dribble sessions",
        icon: "🏀",
        category: AchievementCategory::Type,
        threshold: 5,
    },
];

impl Achievement {
    /// Get badge definition by ID
    pub fn get(id: AchievementId) -> &'static Achievement {
        &ACHIEVEMENTS[id.catalog_index()]
    }

    /// Get total number of badges
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }

    /// Badges of one category, highest tier first
    pub fn in_category(category: AchievementCategory) -> impl Iterator<Item = &'static Achievement> {
        ACHIEVEMENTS.iter().filter(move |a| a.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_ids() {
        assert_eq!(ACHIEVEMENTS.len(), AchievementId::all().len());
        for id in AchievementId::all() {
            assert_eq!(Achievement::get(*id).id, *id);
            assert_eq!(AchievementId::from_str(id.as_str()), Some(*id));
        }
    }

    #[test]
    fn test_tiers_descend_within_category() {
        for category in [
            AchievementCategory::Accuracy,
            AchievementCategory::Streak,
            AchievementCategory::Volume,
        ] {
            let thresholds: Vec<_> = Achievement::in_category(category).map(|a| a.threshold).collect();
            assert!(thresholds.windows(2).all(|w| w[0] > w[1]), "{:?}", category);
        }
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(AchievementId::from_str("first_job"), None);
    }
}
