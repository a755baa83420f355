//! Calendar utility functions

use chrono::{DateTime, Datelike, Local, TimeZone};

/// Gregorian leap-year rule: divisible by 4 and not by 100, or divisible by 400
pub fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Check whether the local calendar year of `dt` is a leap year.
///
/// The instant is converted to the host's local time zone first, so a
/// `DateTime<Utc>` or a parsed `DateTime<FixedOffset>` is judged by the year
/// it falls in locally, not by the year of its own offset.
///
/// # Arguments
/// * `dt` - Any instant, in any time zone
///
/// # Returns
/// * `bool` - Whether the local year has 366 days
pub fn is_leap_year<Tz: TimeZone>(dt: &DateTime<Tz>) -> bool {
    is_leap(dt.with_timezone(&Local).year())
}
