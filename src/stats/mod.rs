//! Shooting statistics for ShotLog
//!
//! Everything here works on in-memory session lists handed in by the caller.
//! The only storage is the achievement database in [`db`].
//!
//! # Architecture
//!
//! ```text
//!   sessions (JSON / document store)
//!          │
//!          ├──► filter ──► aggregate / kpi ──► dashboard
//!          │
//!          └──► achievements (xp, levels, streaks, badges)
//!                          │
//!                          ▼
//!              AchievementStore (memory / SQLite)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let filter = SessionFilter::last_days(today(), 30);
//! let dashboard = Dashboard::build(&sessions, &filter, &ZoneFilter::all());
//! println!("{}% on {} shots", dashboard.kpis.accuracy, dashboard.kpis.volume);
//! ```

pub mod achievements;
pub mod dates;

mod aggregate;
mod db;
mod export;
mod filter;
mod kpi;
mod models;

pub use aggregate::{
    aggregate_accuracy_by_date, aggregate_by_position, aggregate_by_type, range_summary_line,
    summarize_by_range,
};
pub use db::SqliteAchievementStore;
pub use export::{export_csv, export_file_name};
pub use filter::{ALL_SENTINELS, SessionFilter, ZoneFilter, filter_sessions, matching_zones};
pub use kpi::compute_kpis;
pub use models::{
    BestZone, DateAccuracy, Kpis, RangeSummary, ShotTotals, TypeTotals, ZoneAccuracy,
    accuracy_pct,
};

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{Position, Session};

/// Every chart and tile of the dashboard for one filter selection
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub sessions: usize,
    pub kpis: Kpis,
    pub by_position: BTreeMap<Position, ZoneAccuracy>,
    pub by_date: Vec<DateAccuracy>,
    pub by_type: Vec<TypeTotals>,
    pub by_range: Vec<RangeSummary>,
}

impl Dashboard {
    /// Apply the date/type filter once, then run every rollup with the same
    /// zone filter
    pub fn build(sessions: &[Session], filter: &SessionFilter, zones: &ZoneFilter) -> Self {
        let selected = filter_sessions(sessions, filter);
        tracing::debug!(
            "Dashboard over {} of {} sessions",
            selected.len(),
            sessions.len()
        );

        Self {
            sessions: selected.len(),
            kpis: compute_kpis(&selected, zones),
            by_position: aggregate_by_position(&selected, zones),
            by_date: aggregate_accuracy_by_date(&selected, zones),
            by_type: aggregate_by_type(&selected, zones),
            by_range: summarize_by_range(&selected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, Round, ShotRange, TrainingType, Zone};
    use chrono::NaiveDate;

    #[test]
    fn test_dashboard_applies_filters_once() {
        let sessions = vec![
            Session::new(
                "2024-03-01",
                TrainingType::Spot,
                vec![Round::new(
                    Direction::Static,
                    ShotRange::ThreePoint,
                    vec![Zone::new(Position::Center, 4, 10)],
                )],
            ),
            Session::new(
                "2024-03-05",
                TrainingType::OffDribble,
                vec![Round::new(
                    Direction::LeftToRight,
                    ShotRange::Paint,
                    vec![Zone::new(Position::RightWing, 9, 10)],
                )],
            ),
        ];
        let filter = SessionFilter::new().from(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        let dashboard = Dashboard::build(&sessions, &filter, &ZoneFilter::all());

        assert_eq!(dashboard.sessions, 1);
        assert_eq!(dashboard.kpis.volume, 10);
        assert_eq!(dashboard.kpis.accuracy, 90);
        assert_eq!(dashboard.by_date.len(), 1);
        assert_eq!(dashboard.by_type.len(), 4);
        assert_eq!(dashboard.by_range.len(), 1);
        assert!(dashboard.by_position.contains_key(&Position::RightWing));
    }
}
