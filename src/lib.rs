//! ShotLog - shooting practice analytics
//!
//! ShotLog turns a log of basketball shooting sessions into the numbers a
//! player looks at after practice: accuracy by court position, trend over
//! time, drill-type breakdowns and headline KPIs. On top of that sits a small
//! gamification layer (XP, levels, training streaks and badges).
//!
//! ## Layout
//!
//! - [`domain`]: session records as they come out of storage, with lenient
//!   decoding of loosely-typed fields.
//! - [`stats`]: filters, rollups, KPIs and CSV export.
//! - [`stats::achievements`]: XP scoring, levels, streaks and badge awarding.
//! - [`config`]: `~/.shotlog/config.toml`.

pub mod config;
pub mod domain;
pub mod stats;

pub use domain::*;
