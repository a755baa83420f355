//! RFC 2822 and ISO 8601 parsing and formatting
//!
//! Both parsers hand the text to [`freeform::parse`] first. Only when that
//! yields nothing do they tokenize the string themselves, normalize it, and
//! build the instant from the pieces.

use crate::constants::ISO8601_FORMAT;
use crate::error::{DateError, Result};
use crate::utils::freeform;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc, Weekday};

/// Fields pulled out of an RFC 2822 string by the fallback tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rfc2822Fields<'a> {
    pub day: &'a str,
    pub month: &'a str,
    pub year: &'a str,
    pub hours: &'a str,
    pub minutes: &'a str,
    pub seconds: &'a str,
    pub zone: &'a str,
}

impl Rfc2822Fields<'_> {
    /// Reassemble as `day month year hours:minutes:seconds zone`.
    pub fn canonical(&self) -> String {
        format!(
            "{} {} {} {}:{}:{} {}",
            self.day, self.month, self.year, self.hours, self.minutes, self.seconds, self.zone
        )
    }
}

/// Fields pulled out of an ISO 8601 string by the fallback tokenizer.
///
/// `month` is one-based here, as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iso8601Fields {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub offset_hours: i64,
    pub offset_minutes: i64,
}

impl Iso8601Fields {
    /// Offset in milliseconds, as written (always positive).
    pub fn offset_millis(&self) -> i64 {
        (self.offset_hours * 60 + self.offset_minutes) * 60_000
    }
}

/// Parse an RFC 2822 date such as `Tue, 26 Jan 2016 13:48:02 GMT`.
///
/// Strings the free-form parser rejects are tokenized, normalized to
/// `day month year hh:mm:ss zone` and parsed again.
///
/// # Arguments
/// * `text` - Date string, ideally RFC 2822 but free-form text is accepted
///
/// # Returns
/// * `Result<DateTime<FixedOffset>>` - Parsed instant in its written offset, or why it failed
///
/// # Errors
/// * [`DateError::InvalidFormat`] - a token is missing or empty
/// * [`DateError::Unrecognized`] - the normalized string is still not a date
pub fn parse_rfc2822(text: &str) -> Result<DateTime<FixedOffset>> {
    if let Some(dt) = freeform::parse(text) {
        return Ok(dt);
    }

    log::debug!("Falling back to RFC 2822 tokenizer for '{}'", text);
    let fields = tokenize_rfc2822(text)?;
    let canonical = fields.canonical();
    freeform::parse(&canonical).ok_or_else(|| DateError::unrecognized(text))
}

/// Split an RFC 2822 string into its fields.
///
/// Tokens are separated by single spaces; a leading weekday is optional and
/// dropped, and the day may carry a trailing comma.
///
/// # Arguments
/// * `text` - RFC 2822-shaped string such as `Sun, 17 May 1998 03:00:00 GMT+01`
///
/// # Returns
/// * `Result<Rfc2822Fields>` - Borrowed field slices, or `InvalidFormat` naming the missing field
pub fn tokenize_rfc2822(text: &str) -> Result<Rfc2822Fields<'_>> {
    let mut tokens = text.split(' ').peekable();
    if tokens.peek().is_some_and(|token| is_weekday(token)) {
        tokens.next();
    }

    let day = required(text, tokens.next(), "day")?;
    let day = day.strip_suffix(',').unwrap_or(day);
    let month = required(text, tokens.next(), "month")?;
    let year = required(text, tokens.next(), "year")?;
    let time = required(text, tokens.next(), "time")?;
    let zone = required(text, tokens.next(), "timezone")?;

    if tokens.next().is_some() {
        return Err(DateError::invalid_format(text, "unexpected trailing token"));
    }
    if day.is_empty() {
        return Err(DateError::invalid_format(text, "missing day"));
    }

    let mut parts = time.split(':');
    let hours = required(text, parts.next(), "hours")?;
    let minutes = required(text, parts.next(), "minutes")?;
    let seconds = required(text, parts.next(), "seconds")?;
    if parts.next().is_some() {
        return Err(DateError::invalid_format(text, "time has more than three parts"));
    }

    Ok(Rfc2822Fields {
        day,
        month,
        year,
        hours,
        minutes,
        seconds,
        zone,
    })
}

fn required<'a>(input: &str, token: Option<&'a str>, name: &str) -> Result<&'a str> {
    token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| DateError::invalid_format(input, format!("missing {}", name)))
}

fn is_weekday(token: &str) -> bool {
    let name = token.strip_suffix(',').unwrap_or(token);
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic()) && name.parse::<Weekday>().is_ok()
}

/// Parse an ISO 8601 date such as `2016-01-19T16:07:37+00:00`.
///
/// Strings the free-form parser rejects are sliced at fixed positions
/// (`YYYY-MM-DD` and `hh:mm:ss`, then an optional `+hh:mm`). The offset is
/// added to the UTC instant built from the fields. Only `+` offsets are
/// recognized on this path; a `-hh:mm` suffix is ignored.
///
/// # Arguments
/// * `text` - Date string, ideally ISO 8601 but free-form text is accepted
///
/// # Returns
/// * `Result<DateTime<FixedOffset>>` - Parsed instant, or why it failed
///
/// # Errors
/// * [`DateError::InvalidFormat`] - the date or time part is missing, or a
///   field is absent or not numeric
/// * [`DateError::Unrecognized`] - the fields do not describe a representable instant
pub fn parse_iso8601(text: &str) -> Result<DateTime<FixedOffset>> {
    if let Some(dt) = freeform::parse(text) {
        return Ok(dt);
    }

    log::debug!("Falling back to ISO 8601 tokenizer for '{}'", text);
    let fields = tokenize_iso8601(text)?;
    let utc = utc_from_fields(&fields).ok_or_else(|| DateError::unrecognized(text))?;
    let shifted = utc
        .checked_add_signed(Duration::milliseconds(fields.offset_millis()))
        .ok_or_else(|| DateError::unrecognized(text))?;
    Ok(shifted.fixed_offset())
}

/// Split an ISO 8601 string into its numeric fields.
///
/// # Arguments
/// * `text` - String shaped like `YYYY-MM-DDThh:mm:ss[+hh[:mm]]`
///
/// # Returns
/// * `Result<Iso8601Fields>` - Fields as written, with no range checks
pub fn tokenize_iso8601(text: &str) -> Result<Iso8601Fields> {
    let mut halves = text.split('T');
    let date = halves.next().unwrap_or_default();
    let time_and_zone = halves.next().unwrap_or_default();
    let time_and_zone = time_and_zone.strip_suffix('Z').unwrap_or(time_and_zone);

    let mut pieces = time_and_zone.split('+');
    let time = pieces.next().unwrap_or_default();
    let offset = pieces.next().unwrap_or_default();

    if date.is_empty() {
        return Err(DateError::invalid_format(text, "missing date"));
    }
    if time.is_empty() {
        return Err(DateError::invalid_format(text, "missing time"));
    }
    if offset.is_empty() && time.contains('-') {
        log::warn!("Negative UTC offset in '{}' is not supported and was ignored", text);
    }

    let (offset_hours, offset_minutes) = if offset.is_empty() {
        (0, 0)
    } else {
        let minutes = if offset.len() > 3 {
            field(text, offset, 3..5, "offset minutes")?
        } else {
            0
        };
        (field(text, offset, 0..2, "offset hours")?, minutes)
    };

    Ok(Iso8601Fields {
        year: field(text, date, 0..4, "year")?,
        month: field(text, date, 5..7, "month")?,
        day: field(text, date, 8..10, "day")?,
        hours: field(text, time, 0..2, "hours")?,
        minutes: field(text, time, 3..5, "minutes")?,
        seconds: field(text, time, 6..8, "seconds")?,
        offset_hours,
        offset_minutes,
    })
}

fn field(input: &str, part: &str, range: std::ops::Range<usize>, name: &str) -> Result<i64> {
    let digits = part
        .get(range)
        .ok_or_else(|| DateError::invalid_format(input, format!("missing {}", name)))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::invalid_format(input, format!("{} is not numeric", name)));
    }
    digits
        .parse()
        .map_err(|_| DateError::invalid_format(input, format!("{} is not numeric", name)))
}

/// Build a UTC instant from calendar fields, rolling over out-of-range
/// months, days and times into the next unit (month 13 is January of the
/// following year, day 0 is the last day of the previous month).
pub(crate) fn utc_from_fields(fields: &Iso8601Fields) -> Option<DateTime<Utc>> {
    let total_months = fields.year.checked_mul(12)?.checked_add(fields.month - 1)?;
    let year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let month = u32::try_from(total_months.rem_euclid(12) + 1).ok()?;

    let first = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
    let elapsed = Duration::days(fields.day - 1)
        + Duration::hours(fields.hours)
        + Duration::minutes(fields.minutes)
        + Duration::seconds(fields.seconds);
    Some(first.checked_add_signed(elapsed)?.and_utc())
}

/// Format as ISO 8601 in UTC with millisecond precision.
///
/// # Arguments
/// * `dt` - Any instant, in any time zone
///
/// # Returns
/// * `String` - For example `2016-01-19T08:07:37.000Z`
pub fn format_iso8601<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&Utc).format(ISO8601_FORMAT).to_string()
}

/// Format as RFC 2822 in the value's own offset.
///
/// # Arguments
/// * `dt` - Any instant whose offset can be displayed
///
/// # Returns
/// * `String` - For example `Tue, 26 Jan 2016 13:48:02 +0100`
pub fn format_rfc2822<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.to_rfc2822()
}

/// Milliseconds since the Unix epoch.
pub fn to_epoch_millis<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    dt.timestamp_millis()
}

/// Instant at `millis` milliseconds since the Unix epoch, if representable.
pub fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}
