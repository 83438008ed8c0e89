//! Headline KPI tiles

use crate::domain::{Position, Session};

use super::filter::{ZoneFilter, matching_zones};
use super::models::{BestZone, Kpis, ShotTotals};

/// Overall accuracy, volume and best zone for an already date/type-filtered
/// set of sessions.
///
/// Uses the same zone filter as the heatmap so tiles and charts agree. The
/// best zone is picked among the five catalog positions with at least one
/// attempt; ties keep the earlier position in `Position::CATALOG` order.
pub fn compute_kpis(sessions: &[Session], filter: &ZoneFilter) -> Kpis {
    let mut overall = ShotTotals::default();
    let mut per_zone = [ShotTotals::default(); Position::CATALOG.len()];

    for session in sessions {
        for (_, zone) in matching_zones(session, filter) {
            let made = zone.made_clamped();
            overall.add(made, zone.attempts);

            let slot = zone
                .position
                .as_ref()
                .and_then(|p| Position::CATALOG.iter().position(|c| c == p));
            if let Some(idx) = slot {
                per_zone[idx].add(made, zone.attempts);
            }
        }
    }

    let mut best: Option<BestZone> = None;
    for (position, totals) in Position::CATALOG.iter().zip(per_zone.iter()) {
        if totals.attempts == 0 {
            continue;
        }
        let acc = totals.accuracy();
        if best.as_ref().is_none_or(|b| acc > b.acc) {
            best = Some(BestZone {
                position: position.clone(),
                label: position.label().to_string(),
                acc,
            });
        }
    }

    Kpis {
        accuracy: overall.accuracy(),
        volume: overall.attempts,
        best_zone: best,
    }
}
