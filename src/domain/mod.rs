//! Core domain types for shooting sessions

mod date_value;
pub mod lenient;
mod session;

pub use date_value::DateValue;
pub use session::{Direction, Position, Round, Session, SessionTotals, ShotRange, TrainingType, Zone};
