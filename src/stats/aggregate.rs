//! Accuracy and volume rollups
//!
//! All rollups re-sum made/attempts from rounds and zones; the cached
//! `Session::totals` is never read here.

use std::collections::BTreeMap;

use crate::domain::{Position, Session, ShotRange, TrainingType};

use super::filter::{ZoneFilter, matching_zones};
use super::models::{DateAccuracy, RangeSummary, ShotTotals, TypeTotals, ZoneAccuracy};

/// Made/attempts of one session after the zone filter
fn session_totals(session: &Session, filter: &ZoneFilter) -> ShotTotals {
    let mut totals = ShotTotals::default();
    for (_, zone) in matching_zones(session, filter) {
        totals.add(zone.made_clamped(), zone.attempts);
    }
    totals
}

/// Accuracy by court position.
///
/// Zones without a position are collected under `Position::Other("unknown")`.
pub fn aggregate_by_position(
    sessions: &[Session],
    filter: &ZoneFilter,
) -> BTreeMap<Position, ZoneAccuracy> {
    let mut by_position: BTreeMap<Position, ShotTotals> = BTreeMap::new();
    for session in sessions {
        for (_, zone) in matching_zones(session, filter) {
            let key = zone
                .position
                .clone()
                .unwrap_or_else(|| Position::Other("unknown".to_string()));
            by_position
                .entry(key)
                .or_default()
                .add(zone.made_clamped(), zone.attempts);
        }
    }
    by_position
        .into_iter()
        .map(|(position, totals)| (position, totals.into()))
        .collect()
}

/// Daily accuracy for the trend line, ascending by date.
///
/// One entry per distinct day present, even when the zone filter leaves it
/// with no attempts. Sessions whose date cannot be resolved are skipped.
pub fn aggregate_accuracy_by_date(sessions: &[Session], filter: &ZoneFilter) -> Vec<DateAccuracy> {
    let mut daily: BTreeMap<String, ShotTotals> = BTreeMap::new();
    for session in sessions {
        let Some(day) = session.day() else {
            tracing::debug!("Skipping session with unresolvable date in trend");
            continue;
        };
        daily
            .entry(super::dates::to_iso_date(day))
            .or_default()
            .merge(session_totals(session, filter));
    }
    daily
        .into_iter()
        .map(|(date, totals)| DateAccuracy {
            date,
            acc: totals.accuracy(),
        })
        .collect()
}

/// Attempts vs made per drill type.
///
/// Always contains the four catalog types (in catalog order, zero when
/// unused), followed by ad-hoc types in first-seen order.
pub fn aggregate_by_type(sessions: &[Session], filter: &ZoneFilter) -> Vec<TypeTotals> {
    let mut order: Vec<TrainingType> = TrainingType::CATALOG.to_vec();
    let mut totals: Vec<ShotTotals> = vec![ShotTotals::default(); order.len()];

    for session in sessions {
        let idx = match order.iter().position(|t| *t == session.training_type) {
            Some(idx) => idx,
            None => {
                order.push(session.training_type.clone());
                totals.push(ShotTotals::default());
                order.len() - 1
            }
        };
        totals[idx].merge(session_totals(session, filter));
    }

    order
        .into_iter()
        .zip(totals)
        .map(|(training_type, t)| TypeTotals {
            training_type,
            made: t.made,
            attempts: t.attempts,
        })
        .collect()
}

/// Made/attempts per effective shot range, ignoring direction/range filters.
/// Ranges with no attempts are omitted; zones with no range at all land in
/// the unknown bucket (sorted last).
pub fn summarize_by_range(sessions: &[Session]) -> Vec<RangeSummary> {
    let mut by_range: BTreeMap<Option<ShotRange>, ShotTotals> = BTreeMap::new();
    for session in sessions {
        for round in &session.rounds {
            for zone in &round.zones {
                by_range
                    .entry(zone.effective_range(round).cloned())
                    .or_default()
                    .add(zone.made_clamped(), zone.attempts);
            }
        }
    }

    let (known, unknown): (Vec<_>, Vec<_>) = by_range
        .into_iter()
        .filter(|(_, t)| t.attempts > 0)
        .map(|(range, t)| RangeSummary {
            range,
            made: t.made,
            attempts: t.attempts,
            acc: t.accuracy(),
        })
        .partition(|s| s.range.is_some());
    known.into_iter().chain(unknown).collect()
}

/// One-line table form: `3pt: 12/20 (60%) • paint: 8/10 (80%)`
pub fn range_summary_line(summaries: &[RangeSummary]) -> String {
    summaries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" • ")
}
