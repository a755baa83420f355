//! Constants used throughout the crate
//!
//! This module centralizes parse layouts, unit sizes and config file names
//! so the utilities and the config layer agree on them.

// Config locations
pub const CONFIG_FILE_NAME: &str = "datekit.toml";
pub const CONFIG_DIR_NAME: &str = "datekit";
pub const CONFIG_DIR_FILE_NAME: &str = "config.toml";
pub const CONFIG_GENERATED: &str = "Configuration file generated";

// Logging
pub const LOG_LEVEL_ENV: &str = "DATEKIT_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

// Unit sizes in milliseconds
pub const MILLIS_PER_SECOND: u64 = 1_000;
pub const MILLIS_PER_MINUTE: u64 = 60_000;
pub const MILLIS_PER_HOUR: u64 = 3_600_000;

// Clock face, in degrees
pub const DEGREES_PER_HOUR: f64 = 30.0;
pub const DEGREES_PER_MINUTE: f64 = 6.0;
pub const HALF_TURN_DEGREES: f64 = 180.0;
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// ISO 8601 output layout, always UTC with millisecond precision
pub const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// ISO 8601 layout with an offset glued to the time (`+0100` or `+01:00`)
pub const ISO8601_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Naive date-time layouts accepted by the free-form parser, tried in order.
///
/// `%.f` also matches when no fractional part is present. `%A` and `%B`
/// accept both full and abbreviated names (`Tuesday`/`Tue`, `January`/`Jan`).
pub const NAIVE_DATETIME_LAYOUTS: &[&str] = &[
    "%A, %d %B %Y %H:%M:%S",
    "%A, %d %B %Y %H:%M",
    "%A %d %B %Y %H:%M:%S",
    "%A %B %d %Y %H:%M:%S",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%B %d %Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Date-only layouts accepted by the free-form parser, midnight implied.
pub const NAIVE_DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%A, %d %B %Y",
    "%d %B %Y",
    "%B %d %Y",
    "%B %d, %Y",
];
