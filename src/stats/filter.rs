//! Session and round/zone filters
//!
//! Two layers: [`SessionFilter`] picks whole sessions by day range and drill
//! type, [`ZoneFilter`] refines the zones inside them by direction and range.
//! Heatmaps, trend lines, per-type bars and KPI tiles all go through the same
//! `ZoneFilter::passes`, so they always agree numerically.

use chrono::NaiveDate;

use crate::domain::{Direction, Round, Session, ShotRange, TrainingType, Zone};

/// Values upstream components have emitted for "no direction filter" or
/// "no range filter". Compared case-insensitively.
pub const ALL_SENTINELS: &[&str] = &["all", "all_directions", "all directions"];

fn is_all_sentinel(value: &str) -> bool {
    let lowered = value.trim().to_lowercase();
    ALL_SENTINELS.contains(&lowered.as_str())
}

/// Date window and drill-type selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionFilter {
    /// Inclusive lower bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound
    pub to: Option<NaiveDate>,
    /// Empty means every type
    pub types: Vec<TrainingType>,
}

impl SessionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    pub fn to(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    pub fn types(mut self, types: impl IntoIterator<Item = TrainingType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    /// Last `days` days ending at `today`, inclusive
    pub fn last_days(today: NaiveDate, days: u32) -> Self {
        let span = days.saturating_sub(1) as i64;
        Self::new().from(super::dates::add_days(today, -span)).to(today)
    }

    pub fn matches(&self, session: &Session) -> bool {
        if self.from.is_some() || self.to.is_some() {
            // A session whose date cannot be resolved is outside any window.
            let Some(day) = session.day() else {
                return false;
            };
            if self.from.is_some_and(|from| day < from) {
                return false;
            }
            if self.to.is_some_and(|to| day > to) {
                return false;
            }
        }
        self.types.is_empty() || self.types.contains(&session.training_type)
    }
}

/// Select sessions by day range and drill type, keeping input order.
pub fn filter_sessions(sessions: &[Session], filter: &SessionFilter) -> Vec<Session> {
    sessions.iter().filter(|s| filter.matches(s)).cloned().collect()
}

/// Direction/range refinement applied at the round/zone level
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneFilter {
    pub direction: Option<Direction>,
    pub range: Option<ShotRange>,
}

impl ZoneFilter {
    /// No refinement
    pub fn all() -> Self {
        Self::default()
    }

    /// Build from raw UI values. Empty strings and every "all" sentinel mean
    /// no filter on that dimension; any other value is a literal filter.
    pub fn from_raw(direction: Option<&str>, range: Option<&str>) -> Self {
        let direction = direction
            .map(str::trim)
            .filter(|d| !d.is_empty() && !is_all_sentinel(d))
            .map(Direction::parse);
        let range = range
            .map(str::trim)
            .filter(|r| !r.is_empty() && !is_all_sentinel(r))
            .map(ShotRange::parse);
        Self { direction, range }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_range(mut self, range: ShotRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Whether a zone of `round` is counted. A round without a direction, or a
    /// zone without any range, is never excluded by that dimension.
    pub fn passes(&self, round: &Round, zone: &Zone) -> bool {
        if let (Some(wanted), Some(actual)) = (&self.direction, &round.direction) {
            if wanted != actual {
                return false;
            }
        }
        if let (Some(wanted), Some(actual)) = (&self.range, zone.effective_range(round)) {
            if wanted != actual {
                return false;
            }
        }
        true
    }
}

/// Every (round, zone) of a session that passes `filter`
pub fn matching_zones<'a>(
    session: &'a Session,
    filter: &'a ZoneFilter,
) -> impl Iterator<Item = (&'a Round, &'a Zone)> + 'a {
    session
        .rounds
        .iter()
        .flat_map(|round| round.zones.iter().map(move |zone| (round, zone)))
        .filter(move |(round, zone)| filter.passes(round, zone))
}
