//! Full-history aggregate the badge rules are evaluated against

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::domain::{Session, TrainingType};

use super::streaks::longest_streak;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LifetimeStats {
    pub total_attempts: u64,
    pub total_made: u64,
    pub trained_dates: BTreeSet<NaiveDate>,
    /// Sessions with at least one attempt, per drill type
    pub type_counts: BTreeMap<TrainingType, u32>,
    /// Best rounded accuracy of any single session with attempts
    pub best_single_session_accuracy: u32,
}

impl LifetimeStats {
    pub fn longest_streak(&self) -> u32 {
        longest_streak(&self.trained_dates)
    }

    pub fn sessions_of(&self, training_type: &TrainingType) -> u32 {
        self.type_counts.get(training_type).copied().unwrap_or(0)
    }
}

/// Single pass over every session, re-deriving shots from rounds and zones
pub fn aggregate_lifetime_stats(sessions: &[Session]) -> LifetimeStats {
    let mut stats = LifetimeStats::default();

    for session in sessions {
        let totals = session.derived_totals();
        stats.total_attempts += totals.attempts as u64;
        stats.total_made += totals.made as u64;

        if let Some(day) = session.day() {
            stats.trained_dates.insert(day);
        }

        if totals.attempts > 0 {
            *stats
                .type_counts
                .entry(session.training_type.clone())
                .or_insert(0) += 1;
            stats.best_single_session_accuracy =
                stats.best_single_session_accuracy.max(totals.accuracy);
        }
    }

    stats
}
