//! Rendering typed date/time values to strings.
//!
//! Four fixed styles plus a custom token pattern, a Korean convenience
//! style, and Korean relative-time phrasing ("3일 후", "방금 전").

use chrono::{Datelike, Timelike, Utc};
use serde::Serialize;
use std::str::FromStr;

use crate::error::{DateError, Result};
use crate::timezone::to_zoned;
use crate::value::{DateInput, DateValue, DEFAULT_TZ};

/// The closed set of output styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    /// `YYYY-MM-DD` of the calendar-date projection.
    Date,
    /// `HH:mm:ss`; requires the value to carry a time of day.
    Time,
    /// `YYYY-MM-DD HH:mm:ss`; date-only values render midnight.
    #[default]
    DateTime,
    /// The value's canonical ISO string; zoned values include offset and
    /// a bracketed zone name.
    Iso,
    /// Literal token substitution against a caller-supplied pattern.
    Custom,
}

impl FromStr for FormatType {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "date" => Ok(FormatType::Date),
            "time" => Ok(FormatType::Time),
            "datetime" => Ok(FormatType::DateTime),
            "iso" => Ok(FormatType::Iso),
            "custom" => Ok(FormatType::Custom),
            other => Err(DateError::UnsupportedFormatType(other.to_string())),
        }
    }
}

/// Render a date value (or parseable string) in the given style.
///
/// # Errors
///
/// - Parser faults for string inputs.
/// - [`DateError::IncompatibleOperation`] when a date-only value is asked
///   to render as [`FormatType::Time`].
/// - [`DateError::MissingParameter`] when [`FormatType::Custom`] is used
///   without a pattern.
///
/// # Examples
///
/// ```
/// use haru_core::{format, FormatType};
///
/// let s = format("2024-01-15T14:30:00", FormatType::Custom, Some("YYYY/MM/DD HH:mm")).unwrap();
/// assert_eq!(s, "2024/01/15 14:30");
/// ```
pub fn format<'a>(
    date: impl Into<DateInput<'a>>,
    ftype: FormatType,
    pattern: Option<&str>,
) -> Result<String> {
    let value = date.into().resolve()?;
    match ftype {
        FormatType::Date => Ok(value.date().format("%Y-%m-%d").to_string()),
        FormatType::Time => {
            let time = value.time().ok_or(DateError::IncompatibleOperation {
                operation: "formatting as time",
                reason: "value has no time component",
            })?;
            Ok(time.format("%H:%M:%S").to_string())
        }
        FormatType::DateTime => match &value {
            // Zoned values project to their local wall clock here; the
            // offset and zone name are dropped from the string.
            DateValue::Date(d) => Ok(format!("{} 00:00:00", d.format("%Y-%m-%d"))),
            DateValue::DateTime(dt) => Ok(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            DateValue::Zoned(z) => Ok(z.format("%Y-%m-%d %H:%M:%S").to_string()),
        },
        FormatType::Iso => match &value {
            DateValue::Date(d) => Ok(d.format("%Y-%m-%d").to_string()),
            DateValue::DateTime(dt) => Ok(dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
            DateValue::Zoned(z) => Ok(format!("{}[{}]", z.to_rfc3339(), z.timezone().name())),
        },
        FormatType::Custom => {
            let pattern = pattern.ok_or(DateError::MissingParameter(
                "customPattern is required for the custom format type",
            ))?;
            Ok(substitute_tokens(pattern, &value))
        }
    }
}

/// `YYYY년 M월 D일`.
///
/// # Examples
///
/// ```
/// use haru_core::format_korean;
///
/// assert_eq!(format_korean("2024-01-15").unwrap(), "2024년 1월 15일");
/// ```
pub fn format_korean<'a>(date: impl Into<DateInput<'a>>) -> Result<String> {
    format(date, FormatType::Custom, Some("YYYY년 M월 D일"))
}

/// Korean relative phrasing of `date` against `base` (default: now in the
/// default zone).
///
/// Both sides are normalized to zoned values in the default zone — a
/// plain date at local midnight, a plain date-time at its own wall time.
/// The most significant nonzero unit wins, day first: "n일 후"/"n일 전",
/// then "n시간 후/전", then "n분 후/전", and "방금 전" below a minute.
pub fn format_relative<'a>(
    date: impl Into<DateInput<'a>>,
    base: Option<DateInput<'a>>,
) -> Result<String> {
    let target = to_zoned(date, DEFAULT_TZ)?;
    let base = match base {
        Some(b) => to_zoned(b, DEFAULT_TZ)?,
        None => Utc::now().with_timezone(&DEFAULT_TZ),
    };

    let diff = target - base;
    let (n, unit) = if diff.num_days() != 0 {
        (diff.num_days(), "일")
    } else if diff.num_hours() != 0 {
        (diff.num_hours(), "시간")
    } else if diff.num_minutes() != 0 {
        (diff.num_minutes(), "분")
    } else {
        return Ok("방금 전".to_string());
    };

    let direction = if n > 0 { "후" } else { "전" };
    Ok(format!("{}{} {}", n.abs(), unit, direction))
}

/// Greedy longest-first token substitution, per field: `YYYY` before `YY`,
/// `MM` before `M`, and so on, case-sensitive. Time tokens are only
/// substituted when the value carries a time of day; on a date-only value
/// they pass through as literals.
fn substitute_tokens(pattern: &str, value: &DateValue) -> String {
    let d = value.date();
    let mut out = pattern.to_string();
    out = out.replace("YYYY", &format!("{:04}", d.year()));
    out = out.replace("YY", &format!("{:02}", d.year().rem_euclid(100)));
    out = out.replace("MM", &format!("{:02}", d.month()));
    out = out.replace('M', &d.month().to_string());
    out = out.replace("DD", &format!("{:02}", d.day()));
    out = out.replace('D', &d.day().to_string());

    if let Some(t) = value.time() {
        out = out.replace("HH", &format!("{:02}", t.hour()));
        out = out.replace('H', &t.hour().to_string());
        out = out.replace("mm", &format!("{:02}", t.minute()));
        out = out.replace('m', &t.minute().to_string());
        out = out.replace("ss", &format!("{:02}", t.second()));
        out = out.replace('s', &t.second().to_string());
    }
    out
}
