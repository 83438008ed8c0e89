//! Session file loading

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde_json::Value;
use std::path::Path;

use shotlog::Session;
use shotlog::stats::dates::parse_iso_date;

/// Read sessions from a JSON export, either a bare array or
/// `{ "sessions": [...] }`. Malformed entries are dropped with a warning.
pub fn load_sessions(path: &Path) -> Result<Vec<Session>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sessions file: {}", path.display()))?;

    let root: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse sessions file: {}", path.display()))?;

    let items = match root {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("sessions") {
            Some(Value::Array(items)) => items,
            _ => bail!("{} has no \"sessions\" array", path.display()),
        },
        _ => bail!("{} is not a JSON array of sessions", path.display()),
    };

    let total = items.len();
    let sessions: Vec<Session> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value(item) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Skipping session #{}: {}", idx, e);
                None
            }
        })
        .collect();

    tracing::debug!(
        "Loaded {}/{} sessions from {}",
        sessions.len(),
        total,
        path.display()
    );
    Ok(sessions)
}

pub fn parse_day(value: &str, flag: &str) -> Result<NaiveDate> {
    match parse_iso_date(value) {
        Some(day) => Ok(day),
        None => bail!("Invalid {} date '{}', expected YYYY-MM-DD", flag, value),
    }
}
