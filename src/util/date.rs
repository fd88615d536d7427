//! Display formatting for server timestamps (en-US, long month).
//!
//! Input that does not parse renders as `"Invalid Date"` instead of failing,
//! the same text a browser prints for an unparseable `Date`.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const INVALID_DATE: &str = "Invalid Date";

const DATE_FORMAT: &str = "%B %-d, %Y";
const DATE_TIME_FORMAT: &str = "%B %-d, %Y, %I:%M %p";

const NAIVE_DATE_TIME_FORMATS: [&str; 4] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// `"2024-03-05"` → `"March 5, 2024"`.
pub fn format_date(input: &str) -> String {
    render(input, DATE_FORMAT)
}

/// `"2024-03-05T14:30:00"` → `"March 5, 2024, 02:30 PM"`.
pub fn format_date_time(input: &str) -> String {
    render(input, DATE_TIME_FORMAT)
}

fn render(input: &str, format: &str) -> String {
    parse_timestamp(input).map_or_else(|| INVALID_DATE.to_owned(), |ts| ts.format(format).to_string())
}

/// Wall-clock time of a date, naive ISO date-time, or RFC 3339 timestamp.
///
/// Offsets are kept as written; no conversion to the viewer's zone.
fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(ts.naive_local());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}
