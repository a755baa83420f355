//! datekit - small date/time helpers built on chrono
//!
//! This library parses RFC 2822 and ISO 8601 strings, checks leap years,
//! formats the time between two instants and computes the angle between the
//! hands of an analog clock. Every operation is a pure function over a
//! `chrono::DateTime`.
//!
//! # Modules
//!
//! * [`config`] - Optional TOML configuration (timespan policy, logging)
//! * [`error`] - Parse errors
//! * [`logger`] - `fern` logger installation
//! * [`utils`] - The date/time functions themselves

/// Configuration module for managing library settings
pub mod config;

/// Constants and default values
pub mod constants;

/// Error types returned by the parsers
pub mod error;

/// Logging setup
pub mod logger;

/// Date/time parsing, formatting and arithmetic helpers
pub mod utils;

pub use config::Config;
pub use error::{DateError, Result};
pub use utils::clock::clock_angle;
pub use utils::date::{is_leap, is_leap_year};
pub use utils::datetime::{
    format_iso8601, format_rfc2822, from_epoch_millis, parse_iso8601, parse_rfc2822, to_epoch_millis,
};
pub use utils::timespan::{format_timespan, format_timespan_with, NegativeTimespan};
