//! CSV export of the session log

use std::fmt::Write;

use crate::domain::Session;

const CSV_HEADER: &str = "Date,Type,Rounds,Accuracy,Attempts,Made,Notes";

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Quote a field only when it holds a separator, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        quoted(value)
    } else {
        value.to_string()
    }
}

fn csv_row(session: &Session) -> String {
    let totals = session.derived_totals();
    let date = session
        .day()
        .map(super::dates::to_iso_date)
        .unwrap_or_default();
    format!(
        "{},{},{},{}%,{},{},{}",
        date,
        csv_field(session.training_type.as_str()),
        session.rounds.len(),
        totals.accuracy,
        totals.attempts,
        totals.made,
        quoted(&session.notes)
    )
}

/// Render sessions as CSV, one row per session in the given order.
pub fn export_csv(sessions: &[Session]) -> String {
    let mut out = String::from(CSV_HEADER);
    for session in sessions {
        // Writing to a String cannot fail
        let _ = write!(out, "\n{}", csv_row(session));
    }
    out
}

/// Default export file name for a given day
pub fn export_file_name(day: chrono::NaiveDate) -> String {
    format!("training_log_{}.csv", super::dates::to_iso_date(day))
}
