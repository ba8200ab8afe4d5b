//! The closed set of date/time value kinds and the polymorphic argument
//! type accepted by every public operation.
//!
//! All three kinds are immutable chrono values; every transformation in
//! this crate returns a new value. Only [`DateValue::Zoned`] pins down an
//! unambiguous instant — the two plain kinds stay ambiguous until a
//! timezone is supplied.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;

use crate::error::Result;

/// The default IANA timezone used by every zone-defaulting operation.
pub const DEFAULT_TZ: Tz = chrono_tz::Asia::Seoul;

/// A parsed or caller-supplied date/time value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    /// Calendar date — no time of day, no zone.
    Date(NaiveDate),
    /// Wall-clock date-time — no zone, ambiguous as to instant.
    DateTime(NaiveDateTime),
    /// Date-time bound to an IANA timezone, resolving to an instant.
    Zoned(DateTime<Tz>),
}

impl DateValue {
    /// The calendar-date projection. Zoned values project to their local
    /// wall-clock date.
    pub fn date(&self) -> NaiveDate {
        match self {
            DateValue::Date(d) => *d,
            DateValue::DateTime(dt) => dt.date(),
            DateValue::Zoned(z) => z.date_naive(),
        }
    }

    /// The time-of-day component, if the value carries one.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            DateValue::Date(_) => None,
            DateValue::DateTime(dt) => Some(dt.time()),
            DateValue::Zoned(z) => Some(z.time()),
        }
    }

    /// Whether the value carries a time of day.
    pub fn has_time(&self) -> bool {
        !matches!(self, DateValue::Date(_))
    }

    /// ISO weekday of the calendar-date projection (1 = Monday .. 7 = Sunday).
    pub fn iso_weekday(&self) -> u32 {
        self.date().weekday().number_from_monday()
    }

    /// Epoch milliseconds, defined only for zoned values.
    pub fn timestamp_millis(&self) -> Option<i64> {
        match self {
            DateValue::Zoned(z) => Some(z.timestamp_millis()),
            _ => None,
        }
    }
}

impl From<NaiveDate> for DateValue {
    fn from(d: NaiveDate) -> Self {
        DateValue::Date(d)
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(dt: NaiveDateTime) -> Self {
        DateValue::DateTime(dt)
    }
}

impl From<DateTime<Tz>> for DateValue {
    fn from(z: DateTime<Tz>) -> Self {
        DateValue::Zoned(z)
    }
}

/// A date argument: either an already-typed value or a string routed
/// through the flexible parser.
///
/// Public functions take `impl Into<DateInput<'_>>`, so callers can pass
/// `"2024-01-15"`, a `NaiveDate`, or any [`DateValue`] interchangeably.
#[derive(Debug, Clone)]
pub enum DateInput<'a> {
    Value(DateValue),
    Text(&'a str),
}

impl DateInput<'_> {
    /// Resolve to a typed value, parsing text inputs.
    pub fn resolve(self) -> Result<DateValue> {
        match self {
            DateInput::Value(v) => Ok(v),
            DateInput::Text(s) => crate::parse::parse(s),
        }
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(s: &'a str) -> Self {
        DateInput::Text(s)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(s: &'a String) -> Self {
        DateInput::Text(s)
    }
}

impl From<DateValue> for DateInput<'_> {
    fn from(v: DateValue) -> Self {
        DateInput::Value(v)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(d: NaiveDate) -> Self {
        DateInput::Value(DateValue::Date(d))
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::Value(DateValue::DateTime(dt))
    }
}

impl From<DateTime<Tz>> for DateInput<'_> {
    fn from(z: DateTime<Tz>) -> Self {
        DateInput::Value(DateValue::Zoned(z))
    }
}
