//! Conversion between typed values and [`std::time::SystemTime`].
//!
//! A zoned value converts losslessly: the same instant, with the zone
//! forgotten. Plain values carry no instant, so producing a `SystemTime`
//! from one requires a timezone assumption — the implicit variants use
//! the default zone (Asia/Seoul) and are lossy in exactly that sense;
//! the `*_in` variants take the zone explicitly.

use std::time::SystemTime;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::Result;
use crate::timezone::to_zoned;
use crate::value::{DateInput, DEFAULT_TZ};

/// Convert a value to a `SystemTime`, assuming the default zone for plain
/// values.
///
/// Zoned inputs convert losslessly. A plain date is taken as midnight in
/// the default zone; a plain date-time as that wall clock in the default
/// zone — an assuming, lossy conversion. Use [`to_system_time_in`] to
/// state the zone explicitly.
///
/// # Errors
///
/// Parser faults for string inputs; [`crate::DateError::InvalidDate`] for
/// wall clocks that are ambiguous or nonexistent in the assumed zone.
pub fn to_system_time<'a>(date: impl Into<DateInput<'a>>) -> Result<SystemTime> {
    to_system_time_in(date, DEFAULT_TZ)
}

/// Convert a value to a `SystemTime`, interpreting plain values in `zone`.
pub fn to_system_time_in<'a>(date: impl Into<DateInput<'a>>, zone: Tz) -> Result<SystemTime> {
    let zoned = to_zoned(date, zone)?;
    Ok(SystemTime::from(zoned))
}

/// Express a `SystemTime` instant in the default zone.
pub fn from_system_time(t: SystemTime) -> DateTime<Tz> {
    from_system_time_in(t, DEFAULT_TZ)
}

/// Express a `SystemTime` instant in `zone`. Lossless: the instant is
/// preserved, including times before the Unix epoch.
pub fn from_system_time_in(t: SystemTime, zone: Tz) -> DateTime<Tz> {
    DateTime::<Utc>::from(t).with_timezone(&zone)
}
