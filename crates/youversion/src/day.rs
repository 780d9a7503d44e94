//! Day-of-year helpers.
//!
//! Verses of the day are addressed by the ordinal day of the year (1-366).
//!
//! ```
//! use chrono::NaiveDate;
//! use youversion::day;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
//! assert_eq!(day::day_of_year(date), 366);
//! assert_eq!(day::day_of_year_from_iso_date("2023-02-01").unwrap(), 32);
//! ```

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};

/// First valid day of the year.
pub const FIRST_DAY: u16 = 1;

/// Last valid day of the year (leap years included).
pub const LAST_DAY: u16 = 366;

/// Day of the year for a date.
pub fn day_of_year(date: NaiveDate) -> u16 {
    // ordinal() is always within 1..=366
    date.ordinal() as u16
}

/// Day of the year for a Unix timestamp (seconds), in local time.
pub fn day_of_year_from_timestamp(secs: i64) -> Result<u16> {
    let utc = DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| Error::InvalidDate(format!("timestamp {} out of range", secs)))?;
    Ok(day_of_year(utc.with_timezone(&Local).date_naive()))
}

/// Day of the year for an ISO 8601 date or date-time string.
///
/// Accepts `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM:SS` with optional fractional
/// seconds.
pub fn day_of_year_from_iso_date(date: &str) -> Result<u16> {
    let date = date.trim();
    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Ok(day_of_year(d));
    }
    NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| day_of_year(dt.date()))
        .map_err(|_| Error::InvalidDate(date.to_string()))
}

/// Today's day of the year in local time.
pub fn current_day_of_year() -> u16 {
    day_of_year(Local::now().date_naive())
}

/// Check that a day lies within `1..=366`.
pub fn check_day(day: u16) -> Result<u16> {
    if (FIRST_DAY..=LAST_DAY).contains(&day) {
        Ok(day)
    } else {
        Err(Error::DayOutOfBounds(day))
    }
}
