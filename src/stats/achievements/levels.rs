//! XP and Level system
//!
//! Level is a pure function of cumulative XP. Nothing here is persisted.

use serde::Serialize;

/// Level definition
#[derive(Debug, Clone, Serialize)]
pub struct Level {
    pub level: u32,
    pub xp_required: u32,
}

/// All level definitions (must be sorted by level)
pub static LEVELS: &[Level] = &[
    Level { level: 1, xp_required: 0 },
    Level { level: 2, xp_required: 200 },
    Level { level: 3, xp_required: 500 },
    Level { level: 4, xp_required: 1000 },
    Level { level: 5, xp_required: 2000 },
    Level { level: 6, xp_required: 3500 },
    Level { level: 7, xp_required: 5500 },
    Level { level: 8, xp_required: 8000 },
    Level { level: 9, xp_required: 11000 },
    Level { level: 10, xp_required: 15000 },
];

impl Level {
    /// Highest level whose threshold is reached
    pub fn for_xp(xp: u32) -> &'static Level {
        LEVELS
            .iter()
            .rev()
            .find(|l| xp >= l.xp_required)
            .unwrap_or(&LEVELS[0])
    }

    /// Threshold of the level after `current_level`.
    ///
    /// At the cap this returns the cap's own threshold, so a progress bar
    /// simply stays full.
    pub fn next_level_xp(current_level: u32) -> u32 {
        LEVELS
            .iter()
            .find(|l| l.level == current_level + 1)
            .or_else(|| LEVELS.last())
            .map(|l| l.xp_required)
            .unwrap_or(0)
    }

    /// Get max level
    pub fn max_level() -> u32 {
        LEVELS.last().map(|l| l.level).unwrap_or(1)
    }
}

/// Level number for a cumulative XP total
pub fn level_for_xp(xp: u32) -> u32 {
    Level::for_xp(xp).level
}

/// Level progress derived from a cumulative XP total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlayerLevel {
    pub total_xp: u32,
    pub level: u32,
    /// XP needed for current level
    pub current_level_xp: u32,
    /// XP needed for next level (equal to `current_level_xp` at the cap)
    pub next_level_xp: u32,
}

impl PlayerLevel {
    pub fn new(total_xp: u32) -> Self {
        let level_info = Level::for_xp(total_xp);
        Self {
            total_xp,
            level: level_info.level,
            current_level_xp: level_info.xp_required,
            next_level_xp: Level::next_level_xp(level_info.level),
        }
    }

    /// Progress towards the next level, `0..=100`
    pub fn progress_percent(&self) -> u32 {
        if self.is_max_level() {
            return 100;
        }
        let span = self.next_level_xp.saturating_sub(self.current_level_xp).max(1);
        let into = self.total_xp.saturating_sub(self.current_level_xp);
        ((into as f64 / span as f64) * 100.0).round().min(100.0) as u32
    }

    /// XP still missing for the next level
    pub fn xp_to_next(&self) -> u32 {
        self.next_level_xp.saturating_sub(self.total_xp)
    }

    /// Check if at max level
    pub fn is_max_level(&self) -> bool {
        self.level >= Level::max_level()
    }
}

/// A level up event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

/// `Some` when going from `old_xp` to `new_xp` crosses at least one threshold
pub fn level_up(old_xp: u32, new_xp: u32) -> Option<LevelUp> {
    let old_level = level_for_xp(old_xp);
    let new_level = level_for_xp(new_xp);
    (new_level > old_level).then_some(LevelUp { old_level, new_level })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_xp() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(199), 1);
        assert_eq!(level_for_xp(200), 2);
        assert_eq!(level_for_xp(14999), 9);
        assert_eq!(level_for_xp(15000), 10);
        assert_eq!(level_for_xp(100000), 10); // Beyond max
    }

    #[test]
    fn test_next_level_xp_at_cap() {
        assert_eq!(Level::next_level_xp(1), 200);
        assert_eq!(Level::next_level_xp(10), 15000);
    }

    #[test]
    fn test_player_level_progress() {
        let player = PlayerLevel::new(350); // Between level 2 (200) and level 3 (500)
        assert_eq!(player.level, 2);
        assert_eq!(player.progress_percent(), 50);
        assert_eq!(player.xp_to_next(), 150);

        let capped = PlayerLevel::new(20000);
        assert!(capped.is_max_level());
        assert_eq!(capped.progress_percent(), 100);
    }

    #[test]
    fn test_level_up_detection() {
        assert_eq!(level_up(150, 210), Some(LevelUp { old_level: 1, new_level: 2 }));
        assert_eq!(level_up(150, 1200), Some(LevelUp { old_level: 1, new_level: 4 }));
        assert_eq!(level_up(210, 300), None);
        assert_eq!(level_up(20000, 30000), None);
    }
}
