//! Data models returned by the analytics functions
//!
//! These are plain values handed to the presentation layer; nothing here
//! touches storage.

use serde::Serialize;

use crate::domain::{Position, ShotRange, TrainingType};

/// Rounded accuracy percentage in `0..=100`. Zero attempts is `0`.
pub fn accuracy_pct(made: u64, attempts: u64) -> u32 {
    if attempts == 0 {
        return 0;
    }
    let made = made.min(attempts);
    ((made as f64 / attempts as f64) * 100.0).round() as u32
}

/// Running made/attempts sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ShotTotals {
    pub made: u64,
    pub attempts: u64,
}

impl ShotTotals {
    pub fn add(&mut self, made: u32, attempts: u32) {
        self.made += made as u64;
        self.attempts += attempts as u64;
    }

    pub fn merge(&mut self, other: ShotTotals) {
        self.made += other.made;
        self.attempts += other.attempts;
    }

    pub fn accuracy(&self) -> u32 {
        accuracy_pct(self.made, self.attempts)
    }
}

/// Per-position rollup for the court heatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ZoneAccuracy {
    pub made: u64,
    pub attempts: u64,
    pub acc: u32,
}

impl From<ShotTotals> for ZoneAccuracy {
    fn from(t: ShotTotals) -> Self {
        Self {
            made: t.made,
            attempts: t.attempts,
            acc: t.accuracy(),
        }
    }
}

/// One point on the accuracy trend line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateAccuracy {
    pub date: String, // YYYY-MM-DD
    pub acc: u32,
}

/// Attempts vs made for one drill type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeTotals {
    #[serde(rename = "type")]
    pub training_type: TrainingType,
    pub made: u64,
    pub attempts: u64,
}

/// Made/attempts for one shot range. `range` is `None` for the unknown bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeSummary {
    pub range: Option<ShotRange>,
    pub made: u64,
    pub attempts: u64,
    pub acc: u32,
}

impl RangeSummary {
    pub fn label(&self) -> &str {
        self.range.as_ref().map(ShotRange::as_str).unwrap_or("unknown")
    }
}

impl std::fmt::Display for RangeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{} ({}%)", self.label(), self.made, self.attempts, self.acc)
    }
}

/// Best-performing court position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestZone {
    pub position: Position,
    pub label: String,
    pub acc: u32,
}

/// Headline metrics for the dashboard tiles
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Kpis {
    /// Overall accuracy across every included zone
    pub accuracy: u32,
    /// Total attempts
    pub volume: u64,
    pub best_zone: Option<BestZone>,
}
