//! Time window resolution for report requests.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Concrete date range for one report request.
///
/// Only the `from`/`to`/`label` triple is part of the response
/// contract; the calendar dates drive the historical archive query.
#[derive(Debug, Clone, Serialize)]
pub struct TimeWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub label: String,
    #[serde(skip_serializing)]
    pub start_date: NaiveDate,
    #[serde(skip_serializing)]
    pub end_date: NaiveDate,
    #[serde(skip_serializing)]
    pub days: u32,
}

/// Map a range token to its day count. Unrecognized tokens (including
/// empty input) degrade silently to 7 days.
fn days_for_token(token: &str) -> u32 {
    match token.trim() {
        "7days" | "7d" => 7,
        "15days" | "15d" => 15,
        "30days" | "30d" => 30,
        _ => 7,
    }
}

/// Resolve a range token against the current UTC date.
pub fn resolve_window(token: &str) -> TimeWindow {
    window_ending_on(token, Utc::now().date_naive())
}

/// Resolve a range token against an explicit end date.
pub fn window_ending_on(token: &str, today: NaiveDate) -> TimeWindow {
    let days = days_for_token(token);
    let start_date = today - chrono::Duration::days(i64::from(days) - 1);
    let end_date = today;

    let from = start_date.and_time(chrono::NaiveTime::MIN).and_utc();
    // End-of-day boundary: last representable microsecond of end_date.
    let to = (end_date + chrono::Duration::days(1))
        .and_time(chrono::NaiveTime::MIN)
        .and_utc()
        - chrono::Duration::microseconds(1);

    TimeWindow {
        from,
        to,
        label: format!("Last {} days", days),
        start_date,
        end_date,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn recognized_tokens_map_to_day_counts() {
        for (token, days) in [
            ("7days", 7),
            ("7d", 7),
            ("15days", 15),
            ("15d", 15),
            ("30days", 30),
            ("30d", 30),
        ] {
            assert_eq!(days_for_token(token), days, "token {token}");
        }
    }

    #[test]
    fn unknown_token_defaults_to_seven_days() {
        let window = window_ending_on("quarterly", day("2024-03-10"));
        assert_eq!(window.days, 7);
        assert_eq!(window.label, "Last 7 days");
        assert_eq!(window.start_date, day("2024-03-04"));
        assert_eq!(window.end_date, day("2024-03-10"));
    }

    #[test]
    fn empty_token_defaults_to_seven_days() {
        assert_eq!(window_ending_on("", day("2024-03-10")).days, 7);
    }

    #[test]
    fn window_spans_whole_days() {
        let window = window_ending_on("15days", day("2024-02-20"));
        assert_eq!(window.start_date, day("2024-02-06"));
        assert_eq!(window.from.to_rfc3339(), "2024-02-06T00:00:00+00:00");
        assert!(window.to.to_rfc3339().starts_with("2024-02-20T23:59:59"));
        assert!(window.start_date <= window.end_date);
    }
}
