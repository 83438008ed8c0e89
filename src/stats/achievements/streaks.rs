//! Training streaks and the day-by-day intensity heatmap
//!
//! Streaks are derived from the set of distinct local days with at least one
//! session. Nothing is stored: every call recomputes from the sessions.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::Session;
use crate::stats::dates::{add_days, days_inclusive, start_of_week_monday, today};

/// Distinct days on which at least one session exists.
/// Sessions whose date cannot be resolved are skipped.
pub fn normalize_trained_date_set(sessions: &[Session]) -> BTreeSet<NaiveDate> {
    sessions.iter().filter_map(Session::day).collect()
}

/// Number of sessions per trained day
pub fn trained_day_counts(sessions: &[Session]) -> BTreeMap<NaiveDate, u32> {
    let mut counts = BTreeMap::new();
    for day in sessions.iter().filter_map(Session::day) {
        *counts.entry(day).or_insert(0) += 1;
    }
    counts
}

/// Presence-only counts (1 per trained day) for callers holding just a date set
pub fn presence_counts(trained: &BTreeSet<NaiveDate>) -> BTreeMap<NaiveDate, u32> {
    trained.iter().map(|d| (*d, 1)).collect()
}

/// Consecutive trained days ending at `today`.
///
/// No grace day: if `today` itself has no session the streak is `0`.
pub fn current_streak_on(trained: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = today;
    while trained.contains(&cursor) {
        streak += 1;
        let previous = add_days(cursor, -1);
        if previous == cursor {
            break;
        }
        cursor = previous;
    }
    streak
}

/// Current streak as of the local calendar day
pub fn compute_current_streak(trained: &BTreeSet<NaiveDate>) -> u32 {
    current_streak_on(trained, today())
}

/// Longest run of consecutive trained days anywhere in the history
pub fn longest_streak(trained: &BTreeSet<NaiveDate>) -> u32 {
    let days: Vec<NaiveDate> = trained.iter().copied().collect();
    if days.is_empty() {
        return 0;
    }

    let mut best = 1u32;
    let mut run = 1u32;
    for window in days.windows(2) {
        if add_days(window[0], 1) == window[1] {
            run += 1;
            best = best.max(run);
        } else {
            run = 1;
        }
    }
    best
}

/// Streak numbers for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
    pub active_days: u32,
}

impl StreakSummary {
    pub fn from_sessions(sessions: &[Session], today: NaiveDate) -> Self {
        let trained = normalize_trained_date_set(sessions);
        Self {
            current: current_streak_on(&trained, today),
            longest: longest_streak(&trained),
            active_days: trained.len() as u32,
        }
    }
}

/// Display bucket for a day's session count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityTier {
    Rest,
    Light,
    Solid,
    Heavy,
}

impl IntensityTier {
    /// 0 → rest, 1 → light, 2 → solid, 3+ → heavy
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self::Rest,
            1 => Self::Light,
            2 => Self::Solid,
            _ => Self::Heavy,
        }
    }

    pub fn legend(&self) -> &'static str {
        match self {
            Self::Rest => "0",
            Self::Light => "1",
            Self::Solid => "2",
            Self::Heavy => "3+",
        }
    }
}

/// One heatmap cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayIntensity {
    pub date: NaiveDate,
    /// Raw number of sessions that day
    pub sessions: u32,
}

impl DayIntensity {
    pub fn trained(&self) -> bool {
        self.sessions > 0
    }

    pub fn tier(&self) -> IntensityTier {
        IntensityTier::from_count(self.sessions)
    }
}

/// One cell per day from `start` to `end` inclusive, with raw session counts
pub fn build_day_intensity_map(
    start: NaiveDate,
    end: NaiveDate,
    counts: &BTreeMap<NaiveDate, u32>,
) -> Vec<DayIntensity> {
    days_inclusive(start, end)
        .map(|date| DayIntensity {
            date,
            sessions: counts.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

/// Heatmap range covering `weeks` Monday-start weeks and ending at `today`
pub fn heatmap_window(today: NaiveDate, weeks: u32) -> (NaiveDate, NaiveDate) {
    let back = 7 * weeks.saturating_sub(1) as i64;
    (start_of_week_monday(add_days(today, -back)), today)
}

/// Split cells into week columns (Mon..Sun); the last column may be short
pub fn week_columns(cells: &[DayIntensity]) -> Vec<Vec<DayIntensity>> {
    cells.chunks(7).map(<[DayIntensity]>::to_vec).collect()
}
