//! Human-readable date display
//!
//! Dates are shown the way the zh-CN locale renders them
//! (`2024/1/5 08:03:07`), always in China Standard Time regardless of the
//! host's time zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::{Result, ShieldError};

/// Region every formatted date is shown in
pub const DISPLAY_TIMEZONE: Tz = chrono_tz::Asia::Shanghai;

const DISPLAY_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S";

/// Format an instant for display
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use edgeshield_domain::format_date;
///
/// let instant = Utc.with_ymd_and_hms(2024, 1, 5, 0, 3, 7).unwrap();
/// assert_eq!(format_date(&instant), "2024/1/5 08:03:07");
/// ```
pub fn format_date<Z: TimeZone>(date: &DateTime<Z>) -> String {
    date.with_timezone(&DISPLAY_TIMEZONE).format(DISPLAY_FORMAT).to_string()
}

/// Format milliseconds since the Unix epoch
///
/// # Errors
/// Returns `ShieldError::InvalidInput` when the timestamp is out of range.
pub fn format_timestamp_millis(millis: i64) -> Result<String> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|instant| format_date(&instant))
        .ok_or_else(|| ShieldError::InvalidInput(format!("timestamp out of range: {millis}")))
}

/// Parse a date string and format it for display
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS` / `YYYY-MM-DD HH:MM:SS`
/// without an offset (read as UTC) and bare `YYYY-MM-DD` dates (UTC
/// midnight).
///
/// # Errors
/// Returns `ShieldError::InvalidInput` when the string matches none of those
/// forms.
pub fn format_date_str(input: &str) -> Result<String> {
    let trimmed = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(format_date(&instant));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(format_date(&naive.and_utc()));
        }
    }

    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = day.and_hms_opt(0, 0, 0) {
            return Ok(format_date(&midnight.and_utc()));
        }
    }

    Err(ShieldError::InvalidInput(format!("unrecognised date: {input}")))
}
