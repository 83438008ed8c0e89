//! Shared fixtures for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use shotlog::stats::dates::{add_days, to_iso_date};
use shotlog::{Direction, Position, Round, Session, ShotRange, TrainingType, Zone};

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Builds a session one round at a time
pub struct SessionBuilder {
    session: Session,
}

impl SessionBuilder {
    pub fn new(date: &str, training_type: TrainingType) -> Self {
        Self {
            session: Session::new(date, training_type, vec![]),
        }
    }

    /// One round with the same made/attempts at every catalog position
    pub fn round(mut self, direction: Direction, range: ShotRange, made: u32, attempts: u32) -> Self {
        let zones = Position::CATALOG
            .iter()
            .map(|p| Zone::new(p.clone(), made, attempts))
            .collect();
        self.session.rounds.push(Round::new(direction, range, zones));
        self
    }

    pub fn zones(mut self, direction: Direction, range: ShotRange, zones: Vec<Zone>) -> Self {
        self.session.rounds.push(Round::new(direction, range, zones));
        self
    }

    pub fn build(self) -> Session {
        self.session
    }
}

/// `days` consecutive days of the same drill, starting at `start`
pub fn daily_sessions(
    start: NaiveDate,
    days: i64,
    training_type: TrainingType,
    made_per_zone: u32,
    attempts_per_zone: u32,
) -> Vec<Session> {
    (0..days)
        .map(|n| {
            SessionBuilder::new(&to_iso_date(add_days(start, n)), training_type.clone())
                .round(Direction::Static, ShotRange::ThreePoint, made_per_zone, attempts_per_zone)
                .build()
        })
        .collect()
}
