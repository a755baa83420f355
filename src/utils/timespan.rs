//! Fixed-width timespan formatting

use crate::constants::{MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// What to do when the end of a timespan precedes its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeTimespan {
    /// Format the magnitude with a leading `-`
    #[default]
    Signed,
    /// Format as `00:00:00.000`
    Clamp,
}

/// Format the time between `start` and `end` as `HH:mm:ss.sss`.
///
/// All fields are truncated, never rounded. Hours are not wrapped at 24, so a
/// span of several days gives more than two hour digits. A negative span is
/// formatted with a leading `-`; see [`format_timespan_with`] to clamp instead.
pub fn format_timespan<Tz1: TimeZone, Tz2: TimeZone>(start: &DateTime<Tz1>, end: &DateTime<Tz2>) -> String {
    format_timespan_with(start, end, NegativeTimespan::default())
}

/// Same as [`format_timespan`] with an explicit policy for negative spans.
pub fn format_timespan_with<Tz1: TimeZone, Tz2: TimeZone>(
    start: &DateTime<Tz1>,
    end: &DateTime<Tz2>,
    negative: NegativeTimespan,
) -> String {
    format_millis(end.timestamp_millis() - start.timestamp_millis(), negative)
}

/// Format a signed millisecond count as `HH:mm:ss.sss`.
pub fn format_millis(delta: i64, negative: NegativeTimespan) -> String {
    let (sign, magnitude) = match negative {
        _ if delta >= 0 => ("", delta.unsigned_abs()),
        NegativeTimespan::Signed => ("-", delta.unsigned_abs()),
        NegativeTimespan::Clamp => ("", 0),
    };

    let hours = magnitude / MILLIS_PER_HOUR;
    let minutes = (magnitude % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
    let seconds = (magnitude % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;
    let millis = magnitude % MILLIS_PER_SECOND;

    format!("{}{:02}:{:02}:{:02}.{:03}", sign, hours, minutes, seconds, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millis_zero() {
        assert_eq!(format_millis(0, NegativeTimespan::Signed), "00:00:00.000");
    }

    #[test]
    fn test_format_millis_truncates() {
        // 1h 59m 59.999s
        assert_eq!(format_millis(7_199_999, NegativeTimespan::Signed), "01:59:59.999");
    }

    #[test]
    fn test_format_millis_i64_min() {
        let formatted = format_millis(i64::MIN, NegativeTimespan::Signed);
        assert!(formatted.starts_with('-'));
        assert!(formatted.ends_with(".808"));
    }
}
