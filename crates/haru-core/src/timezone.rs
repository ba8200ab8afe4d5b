//! Thin timezone helpers over chrono-tz.
//!
//! Current-time getters, zone conversion, and instant-anchored offset
//! differences. Offsets are always resolved at a specific instant, so DST
//! is reflected correctly; nothing here carries a static per-zone offset.

use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{DateError, Result};
use crate::value::{DateInput, DateValue, DEFAULT_TZ};

/// The current time in the default zone (Asia/Seoul).
pub fn now() -> DateTime<Tz> {
    Utc::now().with_timezone(&DEFAULT_TZ)
}

/// The current time in UTC.
pub fn now_utc() -> DateTime<Tz> {
    Utc::now().with_timezone(&chrono_tz::UTC)
}

/// Bind a value to a timezone, producing a zoned date-time.
///
/// A plain date is placed at midnight in `zone`; a plain date-time keeps
/// its wall clock in `zone`; an already-zoned value converts
/// instant-preserving.
///
/// # Errors
///
/// Parser faults for string inputs, and [`DateError::InvalidDate`] when
/// the wall clock is ambiguous or nonexistent in `zone` (DST gaps).
///
/// # Examples
///
/// ```
/// use haru_core::to_zoned;
/// use chrono_tz::Asia::Seoul;
///
/// let z = to_zoned("2024-01-15", Seoul).unwrap();
/// assert_eq!(z.to_rfc3339(), "2024-01-15T00:00:00+09:00");
/// ```
pub fn to_zoned<'a>(date: impl Into<DateInput<'a>>, zone: Tz) -> Result<DateTime<Tz>> {
    let value = date.into().resolve()?;
    let naive = match value {
        DateValue::Zoned(z) => return Ok(z.with_timezone(&zone)),
        DateValue::Date(d) => d.and_hms_opt(0, 0, 0).ok_or_else(|| {
            DateError::InvalidDate(format!("no midnight for {d}"))
        })?,
        DateValue::DateTime(dt) => dt,
    };
    zone.from_local_datetime(&naive).single().ok_or_else(|| {
        DateError::InvalidDate(format!(
            "ambiguous or nonexistent local time {naive} in {}",
            zone.name()
        ))
    })
}

/// [`to_zoned`] in the default zone.
pub fn to_zoned_default<'a>(date: impl Into<DateInput<'a>>) -> Result<DateTime<Tz>> {
    to_zoned(date, DEFAULT_TZ)
}

/// Re-express a zoned value in UTC (same instant).
pub fn to_utc(z: DateTime<Tz>) -> DateTime<Tz> {
    z.with_timezone(&chrono_tz::UTC)
}

/// Re-express a zoned value in `zone` (same instant).
pub fn from_utc(z: DateTime<Tz>, zone: Tz) -> DateTime<Tz> {
    z.with_timezone(&zone)
}

/// [`from_utc`] into the default zone.
pub fn from_utc_default(z: DateTime<Tz>) -> DateTime<Tz> {
    from_utc(z, DEFAULT_TZ)
}

/// The offset difference `to − from` in hours at `reference` (default:
/// now).
///
/// Because both offsets are resolved at the reference instant, the result
/// tracks DST: Seoul−New York is 14 in January and 13 in July.
///
/// # Errors
///
/// [`DateError::InvalidTimezone`] for names outside the IANA database.
///
/// # Examples
///
/// ```
/// use haru_core::timezone_offset;
///
/// // Seoul has no DST, so this holds at any reference instant.
/// assert_eq!(timezone_offset("UTC", "Asia/Seoul", None).unwrap(), 9.0);
/// ```
pub fn timezone_offset(
    from: &str,
    to: &str,
    reference: Option<DateTime<Utc>>,
) -> Result<f64> {
    let from_tz = parse_timezone(from)?;
    let to_tz = parse_timezone(to)?;
    let instant = reference.unwrap_or_else(Utc::now);

    let from_secs = instant.with_timezone(&from_tz).offset().fix().local_minus_utc();
    let to_secs = instant.with_timezone(&to_tz).offset().fix().local_minus_utc();

    Ok(f64::from(to_secs - from_secs) / 3600.0)
}

/// Parse an IANA timezone name.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| DateError::InvalidTimezone(s.to_string()))
}
