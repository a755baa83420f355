//! Analog clock geometry

use crate::constants::{DEGREES_PER_HOUR, DEGREES_PER_MINUTE, FULL_TURN_DEGREES, HALF_TURN_DEGREES};
use chrono::{DateTime, TimeZone, Timelike, Utc};

/// Angle between the hour and minute hands at the UTC time of `dt`, in
/// radians within `[0, π]`.
///
/// Only the hour and minute are used. The hour hand advances half a degree
/// per minute.
pub fn clock_angle<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    let utc = dt.with_timezone(&Utc);
    let hours = f64::from(utc.hour() % 12);
    let minutes = f64::from(utc.minute());

    let hour_hand = hours * DEGREES_PER_HOUR + minutes / 2.0;
    let minute_hand = minutes * DEGREES_PER_MINUTE;

    let mut degrees = (hour_hand - minute_hand).abs();
    while degrees > HALF_TURN_DEGREES {
        degrees = FULL_TURN_DEGREES - degrees;
    }

    // Single conversion
    degrees.to_radians()
}
