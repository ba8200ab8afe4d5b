//! Flexible date-string parsing.
//!
//! Turns heterogeneous textual date representations into a typed
//! [`DateValue`] by trying a fixed, ordered list of structural recognizers
//! and taking the first match. Order matters: the formats are ambiguous
//! (a two-digit year is only recoverable under an assumption), so each
//! recognizer is a pure structural check on the trimmed input, and the
//! first structural match decides how the string is read.
//!
//! A recognizer that matches structurally but produces an impossible
//! calendar value (month 13, February 30) fails with
//! [`DateError::InvalidDate`] rather than falling through — structure
//! matched, the value did not. Only a string no recognizer claims raises
//! [`DateError::UnrecognizedFormat`].
//!
//! # Supported shapes, in match order
//!
//! 1. `2024-01-15T14:30:00+09:00[Asia/Seoul]`, `…Z`, `…+09:00` — zoned
//! 2. `2024-01-15T14:30:00` — plain date-time
//! 3. `2024-01-15`, `2024-1-5` — ISO-style dashed date
//! 4. `2024년 1월 15일` — Korean textual date
//! 5. `2024.01.15`, `24.01.15` — dotted date (two-digit year expands to
//!    the current century)
//! 6. `2024/01/15`, `01/15/2024`, `01/15/24` — slashed date, disambiguated
//!    by field widths
//! 7. `20240115` — compact eight-digit date
//! 8. Fallback: whatever chrono itself accepts as a date, date-time, or
//!    RFC 3339 instant
//!
//! # Century heuristic
//!
//! Two-digit years expand against the century of the *current* year
//! (`24` parsed in 2026 → `2024`). The result therefore depends on when
//! the code runs; across a century boundary the same string parses
//! differently. This is a documented limitation, not a bug.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{DateError, Result, SUPPORTED_FORMATS};
use crate::value::{DateValue, DEFAULT_TZ};

/// Parse a date string into a typed value.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] when a recognizer matched the
/// string's shape but the calendar value is impossible, and
/// [`DateError::UnrecognizedFormat`] when no recognizer matched at all.
///
/// # Examples
///
/// ```
/// use haru_core::{parse, DateValue};
/// use chrono::NaiveDate;
///
/// let value = parse("2024년 1월 15일").unwrap();
/// assert_eq!(value, DateValue::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
/// ```
pub fn parse(input: &str) -> Result<DateValue> {
    let current_year = Utc::now().with_timezone(&DEFAULT_TZ).year();
    parse_with_current_year(input, current_year)
}

/// Parse with an explicit "current year" anchor for the two-digit-year
/// century expansion. [`parse`] supplies the clock year; tests pin one.
pub(crate) fn parse_with_current_year(input: &str, current_year: i32) -> Result<DateValue> {
    let s = input.trim();

    // Each recognizer returns None when the shape does not match, and
    // Some(Err(..)) when the shape matched but the value is impossible.
    if let Some(result) = try_zoned(s) {
        return result;
    }
    if let Some(result) = try_plain_datetime(s) {
        return result;
    }
    if let Some(result) = try_dashed(s) {
        return result;
    }
    if let Some(result) = try_korean(s) {
        return result;
    }
    if let Some(result) = try_dotted(s, current_year) {
        return result;
    }
    if let Some(result) = try_slashed(s, current_year) {
        return result;
    }
    if let Some(result) = try_compact(s) {
        return result;
    }
    try_native_fallback(s)
}

// ── Recognizers ─────────────────────────────────────────────────────────────

/// `T` plus an offset marker (`+`, `Z`) or a `[Zone]` bracket → zoned.
fn try_zoned(s: &str) -> Option<Result<DateValue>> {
    if !s.contains('T') || !(s.contains('+') || s.contains('Z') || s.contains('[')) {
        return None;
    }
    Some(parse_zoned(s))
}

fn parse_zoned(s: &str) -> Result<DateValue> {
    // Bracketed IANA zone: "2024-01-15T14:30:00+09:00[Asia/Seoul]" or
    // "2024-01-15T14:30:00[Asia/Seoul]" (offset optional).
    if let Some(open) = s.find('[') {
        let close = s
            .rfind(']')
            .ok_or_else(|| DateError::InvalidDate(format!("unclosed zone bracket in '{s}'")))?;
        if close < open {
            return Err(DateError::InvalidDate(format!(
                "malformed zone bracket in '{s}'"
            )));
        }
        let zone_name = &s[open + 1..close];
        let tz: Tz = zone_name
            .parse()
            .map_err(|_| DateError::InvalidTimezone(zone_name.to_string()))?;

        let head = s[..open].trim_end();
        if let Ok(dt) = DateTime::parse_from_rfc3339(head) {
            return Ok(DateValue::Zoned(dt.with_timezone(&tz)));
        }
        // No offset before the bracket: interpret the wall clock in the zone.
        let naive: NaiveDateTime = head
            .parse()
            .map_err(|e| DateError::InvalidDate(format!("'{s}': {e}")))?;
        return tz
            .from_local_datetime(&naive)
            .single()
            .map(DateValue::Zoned)
            .ok_or_else(|| {
                DateError::InvalidDate(format!("ambiguous or nonexistent local time in '{s}'"))
            });
    }

    let dt = DateTime::parse_from_rfc3339(s)
        .map_err(|e| DateError::InvalidDate(format!("'{s}': {e}")))?;

    // A trailing Z means UTC; a bare numeric offset carries no IANA name,
    // so the instant is expressed in the default zone.
    if s.ends_with('Z') || s.ends_with('z') {
        Ok(DateValue::Zoned(dt.with_timezone(&chrono_tz::UTC)))
    } else {
        Ok(DateValue::Zoned(dt.with_timezone(&DEFAULT_TZ)))
    }
}

/// `T` with no offset marker → plain date-time.
fn try_plain_datetime(s: &str) -> Option<Result<DateValue>> {
    if !s.contains('T') {
        return None;
    }
    Some(
        s.parse::<NaiveDateTime>()
            .map(DateValue::DateTime)
            .map_err(|e| DateError::InvalidDate(format!("'{s}': {e}"))),
    )
}

/// `YYYY-M(M)-D(D)` — four-digit year, one- or two-digit month and day.
fn try_dashed(s: &str) -> Option<Result<DateValue>> {
    let fields = numeric_fields(s, '-')?;
    let [y, m, d] = fields.as_slice() else {
        return None;
    };
    if y.len() != 4 || m.len() > 2 || d.len() > 2 {
        return None;
    }
    Some(build_date(parse_int(y), parse_num(m), parse_num(d), s))
}

/// `<year>년 <month>월 <day>일`, whitespace optional around the markers.
fn try_korean(s: &str) -> Option<Result<DateValue>> {
    let (year_part, rest) = s.split_once('년')?;
    let (month_part, rest) = rest.split_once('월')?;
    let (day_part, tail) = rest.split_once('일')?;
    if !tail.trim().is_empty() {
        return None;
    }
    let y = digits_only(year_part.trim())?;
    let m = digits_only(month_part.trim())?;
    let d = digits_only(day_part.trim())?;
    Some(build_date(parse_int(y), parse_num(m), parse_num(d), s))
}

/// `Y(YYY).M(M).D(D)` — dotted; a two-digit year expands to the current
/// century.
fn try_dotted(s: &str, current_year: i32) -> Option<Result<DateValue>> {
    let fields = numeric_fields(s, '.')?;
    let [y, m, d] = fields.as_slice() else {
        return None;
    };
    if y.len() > 4 || m.len() > 2 || d.len() > 2 {
        return None;
    }
    let year = if y.len() == 2 {
        expand_two_digit_year(parse_num(y), current_year)
    } else {
        parse_int(y)
    };
    Some(build_date(year, parse_num(m), parse_num(d), s))
}

/// Slash-separated, disambiguated by field widths: a four-digit first
/// field reads as `YYYY/MM/DD`; otherwise a short third field reads as
/// `MM/DD/YY` (century-expanded) and a long one as `MM/DD/YYYY`.
fn try_slashed(s: &str, current_year: i32) -> Option<Result<DateValue>> {
    let fields = numeric_fields(s, '/')?;
    let [a, b, c] = fields.as_slice() else {
        return None;
    };
    if a.len() > 4 || b.len() > 2 || c.len() > 4 {
        return None;
    }
    let (year, month, day) = if a.len() == 4 {
        (parse_int(a), parse_num(b), parse_num(c))
    } else if c.len() <= 2 {
        (
            expand_two_digit_year(parse_num(c), current_year),
            parse_num(a),
            parse_num(b),
        )
    } else {
        (parse_int(c), parse_num(a), parse_num(b))
    };
    Some(build_date(year, month, day, s))
}

/// Exactly eight digits → `YYYYMMDD`.
fn try_compact(s: &str) -> Option<Result<DateValue>> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(build_date(
        parse_int(&s[..4]),
        parse_num(&s[4..6]),
        parse_num(&s[6..8]),
        s,
    ))
}

/// Last resort: whatever chrono accepts natively, then give up with the
/// full list of supported families.
fn try_native_fallback(s: &str) -> Result<DateValue> {
    if let Ok(d) = s.parse::<NaiveDate>() {
        return Ok(DateValue::Date(d));
    }
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Ok(DateValue::DateTime(dt));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(DateValue::Zoned(dt.with_timezone(&DEFAULT_TZ)));
    }
    Err(DateError::UnrecognizedFormat {
        input: s.to_string(),
        supported: SUPPORTED_FORMATS,
    })
}

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Split on `sep` and return the fields only if there are exactly three
/// and every field is nonempty ASCII digits.
fn numeric_fields(s: &str, sep: char) -> Option<Vec<&str>> {
    let fields: Vec<&str> = s.split(sep).collect();
    if fields.len() != 3 {
        return None;
    }
    for field in &fields {
        digits_only(field)?;
    }
    Some(fields)
}

fn digits_only(s: &str) -> Option<&str> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        Some(s)
    } else {
        None
    }
}

/// Fields are pre-validated as short digit runs, so these cannot fail.
fn parse_num(s: &str) -> u32 {
    s.parse().unwrap_or(0)
}

fn parse_int(s: &str) -> i32 {
    s.parse().unwrap_or(0)
}

/// Expand a two-digit year into the century of `current_year`:
/// `floor(current_year / 100) * 100 + yy`. Does not look across century
/// boundaries — `99` parsed in 2026 yields 2099, not 1999.
pub(crate) fn expand_two_digit_year(yy: u32, current_year: i32) -> i32 {
    (current_year / 100) * 100 + yy as i32
}

fn build_date(year: i32, month: u32, day: u32, original: &str) -> Result<DateValue> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(DateValue::Date)
        .ok_or_else(|| {
            DateError::InvalidDate(format!(
                "impossible calendar date {year:04}-{month:02}-{day:02} in '{original}'"
            ))
        })
}
