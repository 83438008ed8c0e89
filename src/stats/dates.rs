//! Calendar helpers shared by filtering, streaks and the heatmap
//!
//! Everything works on local calendar days (`NaiveDate`). Storage and display
//! both use local dates, so UTC conversion would move late-evening sessions
//! onto the wrong day.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeDelta, TimeZone};

/// Drop the time-of-day, keeping the calendar day in the value's own timezone.
pub fn strip_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// Shift a day by `n` days (negative goes back). Saturates at the calendar limits.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    TimeDelta::try_days(n)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if n < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Monday of the week containing `date`.
pub fn start_of_week_monday(date: NaiveDate) -> NaiveDate {
    add_days(date, -(date.weekday().num_days_from_monday() as i64))
}

/// Format a day as `YYYY-MM-DD`.
pub fn to_iso_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Format an instant as `YYYY-MM-DD` using local calendar fields.
pub fn to_local_iso_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    to_iso_date(instant.with_timezone(&Local).date_naive())
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Today's local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Every day from `start` to `end`, both inclusive. Empty when `start > end`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Weekday};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_strip_time_uses_own_offset() {
        // 23:30 at UTC-5 is already the next day in UTC
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let late = tz.with_ymd_and_hms(2024, 1, 31, 23, 30, 0).unwrap();
        assert_eq!(strip_time(&late), ymd(2024, 1, 31));
    }

    #[test]
    fn test_add_days_crosses_months() {
        assert_eq!(add_days(ymd(2024, 2, 28), 1), ymd(2024, 2, 29));
        assert_eq!(add_days(ymd(2024, 3, 1), -1), ymd(2024, 2, 29));
        assert_eq!(add_days(ymd(2023, 12, 31), 1), ymd(2024, 1, 1));
    }

    #[test]
    fn test_start_of_week_monday() {
        // 2024-01-07 is a Sunday
        assert_eq!(start_of_week_monday(ymd(2024, 1, 7)), ymd(2024, 1, 1));
        assert_eq!(start_of_week_monday(ymd(2024, 1, 1)), ymd(2024, 1, 1));
        assert_eq!(start_of_week_monday(ymd(2024, 1, 3)).weekday(), Weekday::Mon);
    }

    #[test]
    fn test_iso_round_trip() {
        assert_eq!(to_iso_date(ymd(2024, 3, 5)), "2024-03-05");
        assert_eq!(parse_iso_date("2024-03-05"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_iso_date("03/05/2024"), None);
    }

    #[test]
    fn test_local_iso_date_ignores_source_offset() {
        let noon = Local.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).single().unwrap();
        assert_eq!(to_local_iso_date(&noon), "2024-03-05");
        assert_eq!(to_local_iso_date(&noon.with_timezone(&chrono::Utc)), "2024-03-05");
    }

    #[test]
    fn test_days_inclusive() {
        let days: Vec<_> = days_inclusive(ymd(2024, 1, 30), ymd(2024, 2, 2)).collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days_inclusive(ymd(2024, 2, 2), ymd(2024, 1, 30)).count(), 0);
    }
}
