//! Session date values in every shape the document store has produced
//!
//! Dates have been persisted as `YYYY-MM-DD` strings, full ISO timestamps,
//! epoch milliseconds and backend timestamp wrappers (`{seconds, nanoseconds}`).
//! [`DateValue::to_day`] resolves any of them to a local calendar day by trying
//! a fixed chain of extractors; the first one that yields a day wins.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Value, json};

/// A date as it arrived from storage or from a caller
#[derive(Debug, Clone, PartialEq)]
pub enum DateValue {
    /// Calendar day supplied directly by Rust code
    Day(NaiveDate),
    /// Point in time supplied directly by Rust code
    Instant(DateTime<Utc>),
    /// Backend timestamp wrapper
    Timestamp { seconds: i64, nanos: u32 },
    /// Raw epoch milliseconds
    EpochMillis(f64),
    /// Text, usually `YYYY-MM-DD`
    Text(String),
    /// Anything else (objects without a timestamp shape, booleans, ...)
    Unrecognized,
}

type DayExtractor = fn(&DateValue) -> Option<NaiveDate>;

/// Extraction order: native accessor, wrapper seconds, epoch number, text.
const DAY_EXTRACTORS: [DayExtractor; 4] = [via_native, via_seconds, via_epoch, via_text];

impl DateValue {
    pub fn day(date: NaiveDate) -> Self {
        Self::Day(date)
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Classify an untyped JSON value
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s.clone()),
            Value::Number(n) => n.as_f64().map(Self::EpochMillis).unwrap_or(Self::Unrecognized),
            Value::Object(map) => {
                let seconds = map
                    .get("seconds")
                    .or_else(|| map.get("_seconds"))
                    .and_then(Value::as_i64);
                let nanos = map
                    .get("nanoseconds")
                    .or_else(|| map.get("_nanoseconds"))
                    .or_else(|| map.get("nanos"))
                    .and_then(Value::as_u64)
                    .unwrap_or(0);
                match seconds {
                    Some(seconds) => Self::Timestamp {
                        seconds,
                        nanos: nanos.min(999_999_999) as u32,
                    },
                    None => Self::Unrecognized,
                }
            }
            _ => Self::Unrecognized,
        }
    }

    /// Resolve to a local calendar day, `None` when no extractor understands it
    pub fn to_day(&self) -> Option<NaiveDate> {
        DAY_EXTRACTORS.iter().find_map(|extract| extract(self))
    }

    /// Resolved day as `YYYY-MM-DD`
    pub fn to_iso(&self) -> Option<String> {
        self.to_day().map(|d| d.format("%Y-%m-%d").to_string())
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self::Day(date)
    }
}

impl From<&str> for DateValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

fn local_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

fn via_native(value: &DateValue) -> Option<NaiveDate> {
    match value {
        DateValue::Day(d) => Some(*d),
        DateValue::Instant(t) => Some(local_day(*t)),
        _ => None,
    }
}

fn via_seconds(value: &DateValue) -> Option<NaiveDate> {
    match value {
        DateValue::Timestamp { seconds, nanos } => {
            DateTime::from_timestamp(*seconds, *nanos).map(local_day)
        }
        _ => None,
    }
}

fn via_epoch(value: &DateValue) -> Option<NaiveDate> {
    match value {
        DateValue::EpochMillis(ms) if ms.is_finite() => {
            DateTime::from_timestamp_millis(*ms as i64).map(local_day)
        }
        _ => None,
    }
}

fn via_text(value: &DateValue) -> Option<NaiveDate> {
    let DateValue::Text(raw) = value else {
        return None;
    };
    let raw = raw.trim();

    // Full timestamps carry an offset; convert before taking the local day.
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Local).date_naive());
    }
    // Plain calendar days are stored in local time already.
    let day_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day_part, "%Y-%m-%d").ok()
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

impl Serialize for DateValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Day(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            Self::Instant(t) => serializer.serialize_str(&t.to_rfc3339()),
            Self::Timestamp { seconds, nanos } => {
                json!({ "seconds": seconds, "nanoseconds": nanos }).serialize(serializer)
            }
            Self::EpochMillis(ms) => serializer.serialize_f64(*ms),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Unrecognized => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_day_string_is_not_shifted() {
        assert_eq!(DateValue::text("2024-01-03").to_day(), Some(ymd(2024, 1, 3)));
    }

    #[test]
    fn test_timestamp_wrapper() {
        let local_noon = Local.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        let value = DateValue::from_json(&json!({ "seconds": local_noon.timestamp(), "nanoseconds": 0 }));
        assert_eq!(value.to_day(), Some(ymd(2024, 3, 9)));

        let underscored = DateValue::from_json(&json!({ "_seconds": local_noon.timestamp() }));
        assert_eq!(underscored.to_day(), Some(ymd(2024, 3, 9)));
    }

    #[test]
    fn test_epoch_millis() {
        let local_noon = Local.with_ymd_and_hms(2023, 12, 28, 12, 0, 0).unwrap();
        let value = DateValue::from_json(&json!(local_noon.timestamp_millis()));
        assert_eq!(value.to_day(), Some(ymd(2023, 12, 28)));
    }

    #[test]
    fn test_native_day_wins() {
        assert_eq!(DateValue::day(ymd(2022, 2, 2)).to_day(), Some(ymd(2022, 2, 2)));
    }

    #[test]
    fn test_unparseable_is_none() {
        assert_eq!(DateValue::text("yesterday").to_day(), None);
        assert_eq!(DateValue::from_json(&json!({ "when": "now" })).to_day(), None);
        assert_eq!(DateValue::from_json(&json!(true)).to_day(), None);
        assert_eq!(DateValue::EpochMillis(f64::NAN).to_day(), None);
    }

    #[test]
    fn test_to_iso() {
        assert_eq!(
            DateValue::text("2024-05-07T00:00:00").to_iso().as_deref(),
            Some("2024-05-07")
        );
    }
}
