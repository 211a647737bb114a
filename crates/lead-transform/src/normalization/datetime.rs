//! Create-date parsing and formatting.
//!
//! The export writes timestamps as `YYYY-MM-DD HH:MM` (24-hour, no seconds,
//! no timezone). The seed file wants ISO 8601 with seconds precision and a
//! trailing literal `Z`. The `Z` labels the value for the consumer; the
//! source timezone is unknown and nothing is converted.

use chrono::NaiveDateTime;

/// Input timestamp pattern expected from the export.
const CREATE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses an export timestamp, returning `None` for anything that does not
/// match the expected pattern exactly (wrong shape, trailing text, invalid
/// date components, empty string).
pub fn parse_create_date(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, CREATE_DATE_FORMAT).ok()
}

/// Formats a parsed timestamp as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_create_date(dt: NaiveDateTime) -> String {
    format!("{}Z", dt.format("%Y-%m-%dT%H:%M:%S"))
}
