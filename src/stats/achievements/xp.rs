//! Per-session XP scoring
//!
//! The formula is user-facing, so it is kept exactly:
//! one point per attempt, plus the highest accuracy tier bonus (accuracy is
//! rounded to a whole percent *before* the tier check), times the drill
//! multiplier, rounded once at the end.

use serde::Serialize;

use crate::domain::{Session, TrainingType};
use crate::stats::models::accuracy_pct;

/// Accuracy tiers, highest first: (minimum rounded %, bonus XP)
pub const ACCURACY_TIERS: [(u32, u32); 3] = [(90, 50), (80, 25), (70, 10)];

/// Raw inputs for one session. Signed so upstream garbage can be clamped here.
#[derive(Debug, Clone, PartialEq)]
pub struct XpInput {
    pub attempts: i64,
    pub made: i64,
    pub training_type: TrainingType,
}

impl XpInput {
    pub fn new(attempts: i64, made: i64, training_type: TrainingType) -> Self {
        Self { attempts, made, training_type }
    }

    /// Inputs taken from the totals re-derived from rounds and zones
    pub fn from_session(session: &Session) -> Self {
        let totals = session.derived_totals();
        Self {
            attempts: totals.attempts as i64,
            made: totals.made as i64,
            training_type: session.training_type.clone(),
        }
    }
}

/// How the XP number was reached
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct XpBreakdown {
    pub volume_xp: u32,
    pub accuracy_pct: u32,
    pub accuracy_bonus: u32,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionXp {
    pub xp: u32,
    pub breakdown: XpBreakdown,
}

/// Bonus for a rounded accuracy percentage (highest tier only)
pub fn accuracy_bonus(accuracy_pct: u32) -> u32 {
    ACCURACY_TIERS
        .iter()
        .find(|(min, _)| accuracy_pct >= *min)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

pub fn calculate_session_xp(input: &XpInput) -> SessionXp {
    let attempts = input.attempts.clamp(0, u32::MAX as i64) as u32;
    let made = input.made.clamp(0, attempts as i64) as u32;

    let volume_xp = attempts;
    let accuracy_pct = accuracy_pct(made as u64, attempts as u64);
    let accuracy_bonus = accuracy_bonus(accuracy_pct);
    let multiplier = input.training_type.xp_multiplier();

    let xp = ((volume_xp as f64 + accuracy_bonus as f64) * multiplier).round() as u32;

    SessionXp {
        xp,
        breakdown: XpBreakdown {
            volume_xp,
            accuracy_pct,
            accuracy_bonus,
            multiplier,
        },
    }
}

/// XP for a session: the stored value when present, else computed from its shots
pub fn session_xp(session: &Session) -> u32 {
    session
        .xp_earned
        .unwrap_or_else(|| calculate_session_xp(&XpInput::from_session(session)).xp)
}

/// Cumulative XP across the history
pub fn total_xp(sessions: &[Session]) -> u32 {
    sessions
        .iter()
        .fold(0u32, |acc, s| acc.saturating_add(session_xp(s)))
}

/// Refresh cached totals and assign XP once.
///
/// `xp_earned` is only written when absent; editing a saved session never
/// changes the XP it already earned.
pub fn prepare_for_save(session: &Session) -> Session {
    let mut out = session.clone();
    out.totals = out.derived_totals();
    if out.xp_earned.is_none() {
        out.xp_earned = Some(calculate_session_xp(&XpInput::from_session(&out)).xp);
    }
    out
}
