//! Date and time utilities.
//!
//! Every function here is a pure computation over a `chrono::DateTime`
//! value; nothing is cached or shared between calls, so all of them can be
//! called from any thread.
//!
//! # Available Utilities
//!
//! - [`datetime`] - RFC 2822 / ISO 8601 parsing and formatting, epoch helpers
//! - [`freeform`] - Lenient parser the two format parsers try first
//! - [`date`] - Leap-year checks
//! - [`timespan`] - `HH:mm:ss.sss` formatting of the time between two instants
//! - [`clock`] - Angle between the hands of an analog clock

pub mod clock;
pub mod date;
pub mod datetime;
pub mod freeform;
pub mod timespan;
