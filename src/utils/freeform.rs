//! Lenient, free-form date parsing
//!
//! This is the general-purpose parser the RFC 2822 and ISO 8601 parsers try
//! first. It never reports *why* a string was rejected; callers only learn
//! whether an instant came out, and fall back to their own tokenizers when
//! it did not.

use crate::constants::{ISO8601_OFFSET_FORMAT, NAIVE_DATETIME_LAYOUTS, NAIVE_DATE_LAYOUTS};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

/// Parse `text` with every strategy the crate knows about.
///
/// Strategies, in order:
/// 1. RFC 2822 (`Tue, 26 Jan 2016 13:48:02 GMT`)
/// 2. RFC 3339 (`2016-01-19T16:07:37+00:00`)
/// 3. A naive layout followed by an optional zone token (`GMT+1`, `EST`, `+0100`)
/// 4. ISO 8601 with an offset glued to the time (`2016-01-19T16:07:37+0100`)
///
/// Text carrying no zone at all is read as UTC.
pub fn parse(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        log::trace!("'{}' parsed as RFC 2822", text);
        Some(dt)
    } else if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        log::trace!("'{}' parsed as RFC 3339", text);
        Some(dt)
    } else if let Some(dt) = parse_with_zone_token(text) {
        log::trace!("'{}' parsed with a trailing zone token", text);
        Some(dt)
    } else if let Ok(dt) = DateTime::parse_from_str(text, ISO8601_OFFSET_FORMAT) {
        log::trace!("'{}' parsed as ISO 8601 with a glued offset", text);
        Some(dt)
    } else {
        None
    }
}

/// Split off a trailing zone token, if there is one, and parse the rest as a
/// naive date-time in that zone.
fn parse_with_zone_token(text: &str) -> Option<DateTime<FixedOffset>> {
    let (body, offset) = match text.rsplit_once(char::is_whitespace) {
        Some((body, token)) => match parse_zone(token) {
            Some(offset) => (body.trim_end(), offset),
            None => (text, Utc.fix()),
        },
        None => (text, Utc.fix()),
    };

    let naive = parse_naive(body)?;
    offset.from_local_datetime(&naive).single()
}

fn parse_naive(body: &str) -> Option<NaiveDateTime> {
    NAIVE_DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(body, layout).ok())
        .or_else(|| {
            NAIVE_DATE_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(body, layout).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Interpret a zone designator such as `GMT`, `EST`, `GMT+01`, `UTC-05:30`
/// or `+0100`.
pub(crate) fn parse_zone(token: &str) -> Option<FixedOffset> {
    let upper = token.to_ascii_uppercase();
    let named_hours = match upper.as_str() {
        "Z" | "UT" | "UTC" | "GMT" => Some(0),
        "EDT" => Some(-4),
        "EST" | "CDT" => Some(-5),
        "CST" | "MDT" => Some(-6),
        "MST" | "PDT" => Some(-7),
        "PST" => Some(-8),
        _ => None,
    };
    if let Some(hours) = named_hours {
        return FixedOffset::east_opt(hours * 3600);
    }

    let numeric = upper
        .strip_prefix("GMT")
        .or_else(|| upper.strip_prefix("UTC"))
        .unwrap_or(&upper);
    parse_numeric_offset(numeric)
}

/// `±h`, `±hh`, `±hhmm`, `±h:mm` or `±hh:mm`.
fn parse_numeric_offset(text: &str) -> Option<FixedOffset> {
    let (sign, rest) = if let Some(rest) = text.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = text.strip_prefix('-') {
        (-1, rest)
    } else {
        return None;
    };

    if !rest.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }

    let (hours, minutes) = match rest.split_once(':') {
        Some((hours, minutes)) if (1..=2).contains(&hours.len()) && minutes.len() == 2 => (hours, minutes),
        None if (1..=2).contains(&rest.len()) => (rest, "00"),
        None if rest.len() == 4 => rest.split_at(2),
        _ => return None,
    };

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
