//! Business-day predicates and week-of-month computation.
//!
//! Holiday lists are supplied per call and never persisted; the default
//! non-working weekdays are Saturday and Sunday (ISO 6 and 7) unless the
//! caller overrides them. Every function accepts either a typed value or
//! a string, which is routed through the flexible parser and reduced to
//! its calendar-date projection.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{DateError, Result};
use crate::value::DateInput;

/// Default non-working ISO weekdays: Saturday (6) and Sunday (7).
pub const DEFAULT_NON_WORKING: &[u32] = &[6, 7];

/// Upper bound on the next/previous-workday scan. A holiday list that
/// excludes every single day would otherwise never terminate; a full leap
/// year of lookahead is enough for any real holiday calendar.
const MAX_WORKDAY_SCAN: u32 = 366;

/// A holiday rule, matched against candidate dates.
///
/// `recurring` holidays match the month and day of `date` every year,
/// ignoring its year; non-recurring holidays match the exact ISO date
/// string including the year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// ISO date string (`YYYY-MM-DD`).
    pub date: String,
    /// Display name (e.g., "설날").
    pub name: String,
    /// Whether the rule repeats every year on the same month and day.
    #[serde(default)]
    pub recurring: bool,
}

impl Holiday {
    /// Whether this rule excludes `candidate`.
    fn matches(&self, candidate: NaiveDate) -> bool {
        if self.recurring {
            match self.date.parse::<NaiveDate>() {
                Ok(rule) => rule.month() == candidate.month() && rule.day() == candidate.day(),
                // An unparseable rule date matches nothing.
                Err(_) => false,
            }
        } else {
            self.date == candidate.format("%Y-%m-%d").to_string()
        }
    }
}

/// The (year, month, week-within-month) a date belongs to, attributed to
/// the Monday of its ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekOfMonth {
    pub year: i32,
    /// Month of the week's Monday, which can differ from the input date's month
    /// when the week straddles a month boundary.
    pub month: u32,
    /// 1-based week number within that month, uncapped (up to 5, rarely 6).
    pub week_num: u32,
}

/// Whether a date is a working day under the given holiday list and
/// non-working weekdays.
///
/// The weekday test runs first and short-circuits the holiday scan.
///
/// # Errors
///
/// String inputs propagate the parser's faults unchanged.
///
/// # Examples
///
/// ```
/// use haru_core::{is_workday, Holiday};
///
/// // 2024-01-15 is a Monday
/// assert!(is_workday("2024-01-15", &[], &[6, 7]).unwrap());
///
/// let new_year = Holiday {
///     date: "2024-01-01".into(),
///     name: "New Year".into(),
///     recurring: false,
/// };
/// assert!(!is_workday("2024-01-01", &[new_year], &[6, 7]).unwrap());
/// ```
pub fn is_workday<'a>(
    date: impl Into<DateInput<'a>>,
    holidays: &[Holiday],
    non_working_weekdays: &[u32],
) -> Result<bool> {
    let day = date.into().resolve()?.date();
    Ok(is_workday_date(day, holidays, non_working_weekdays))
}

/// The predicate on an already-resolved calendar date.
fn is_workday_date(day: NaiveDate, holidays: &[Holiday], non_working_weekdays: &[u32]) -> bool {
    let weekday = day.weekday().number_from_monday();
    if non_working_weekdays.contains(&weekday) {
        return false;
    }
    !holidays.iter().any(|h| h.matches(day))
}

/// ISO weekday (1 = Monday .. 7 = Sunday) of the date's calendar-date
/// projection.
pub fn week_day<'a>(date: impl Into<DateInput<'a>>) -> Result<u32> {
    Ok(date.into().resolve()?.date().weekday().number_from_monday())
}

/// Which week of which month a date falls in.
///
/// Weeks start on Monday. The reported year and month are taken from the
/// Monday of the date's week, not from the date itself: a date early in a
/// month whose week began in the previous month reports the *previous*
/// month and a week number within it.
///
/// # Examples
///
/// ```
/// use haru_core::week_num;
///
/// // Feb 1, 2024 is a Thursday; its Monday (Jan 29) belongs to January.
/// let w = week_num("2024-02-01").unwrap();
/// assert_eq!((w.year, w.month, w.week_num), (2024, 1, 5));
/// ```
pub fn week_num<'a>(date: impl Into<DateInput<'a>>) -> Result<WeekOfMonth> {
    let day = date.into().resolve()?.date();

    let offset = day.weekday().number_from_monday() as i64 - 1;
    let monday = day - Duration::days(offset);

    let first_of_month = NaiveDate::from_ymd_opt(monday.year(), monday.month(), 1)
        .ok_or_else(|| DateError::InvalidDate(format!("no first day for {monday}")))?;
    let first_weekday = first_of_month.weekday().number_from_monday();
    let days_to_first_monday = if first_weekday == 1 {
        0
    } else {
        8 - first_weekday
    } as i64;
    let first_monday = first_of_month + Duration::days(days_to_first_monday);

    let week_num = ((monday - first_monday).num_days() / 7 + 1) as u32;

    Ok(WeekOfMonth {
        year: monday.year(),
        month: monday.month(),
        week_num,
    })
}

/// The first working day strictly after `date`.
///
/// # Errors
///
/// Parser faults for string inputs; [`DateError::NoWorkdayFound`] if no
/// working day exists within 366 days.
pub fn next_workday<'a>(
    date: impl Into<DateInput<'a>>,
    holidays: &[Holiday],
    non_working_weekdays: &[u32],
) -> Result<NaiveDate> {
    scan_workday(date, holidays, non_working_weekdays, 1)
}

/// The first working day strictly before `date`.
///
/// # Errors
///
/// Parser faults for string inputs; [`DateError::NoWorkdayFound`] if no
/// working day exists within 366 days.
pub fn previous_workday<'a>(
    date: impl Into<DateInput<'a>>,
    holidays: &[Holiday],
    non_working_weekdays: &[u32],
) -> Result<NaiveDate> {
    scan_workday(date, holidays, non_working_weekdays, -1)
}

fn scan_workday<'a>(
    date: impl Into<DateInput<'a>>,
    holidays: &[Holiday],
    non_working_weekdays: &[u32],
    step: i64,
) -> Result<NaiveDate> {
    let start = date.into().resolve()?.date();
    let mut candidate = start;
    for _ in 0..MAX_WORKDAY_SCAN {
        candidate += Duration::days(step);
        if is_workday_date(candidate, holidays, non_working_weekdays) {
            return Ok(candidate);
        }
    }
    Err(DateError::NoWorkdayFound {
        start: start.to_string(),
        scanned_days: MAX_WORKDAY_SCAN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(date: &str, name: &str, recurring: bool) -> Holiday {
        Holiday {
            date: date.into(),
            name: name.into(),
            recurring,
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekends_are_not_workdays_by_default() {
        assert!(is_workday("2024-01-15", &[], DEFAULT_NON_WORKING).unwrap()); // Mon
        assert!(!is_workday("2024-01-13", &[], DEFAULT_NON_WORKING).unwrap()); // Sat
        assert!(!is_workday("2024-01-14", &[], DEFAULT_NON_WORKING).unwrap()); // Sun
    }

    #[test]
    fn custom_non_working_weekdays() {
        // 2024-01-12 is a Friday; with a Fri/Sat weekend it is not a workday.
        assert!(!is_workday("2024-01-12", &[], &[5, 6]).unwrap());
        // But Sunday now is one.
        assert!(is_workday("2024-01-14", &[], &[5, 6]).unwrap());
    }

    #[test]
    fn exact_holiday_excludes_only_its_year() {
        let holidays = [holiday("2024-01-01", "New Year", false)];
        assert!(!is_workday("2024-01-01", &holidays, DEFAULT_NON_WORKING).unwrap());
        // 2025-01-01 is a Wednesday and the rule is not recurring.
        assert!(is_workday("2025-01-01", &holidays, DEFAULT_NON_WORKING).unwrap());
    }

    #[test]
    fn recurring_holiday_matches_every_year() {
        let holidays = [holiday("2020-03-01", "삼일절", true)];
        // 2024-03-01 is a Friday; excluded by the recurring rule anyway.
        assert!(!is_workday("2024-03-01", &holidays, DEFAULT_NON_WORKING).unwrap());
        assert!(!is_workday("2027-03-01", &holidays, DEFAULT_NON_WORKING).unwrap());
    }

    #[test]
    fn weekday_check_short_circuits_holidays() {
        // A Saturday that is also a holiday is simply not a workday.
        let holidays = [holiday("2024-01-13", "Some Day", false)];
        assert!(!is_workday("2024-01-13", &holidays, DEFAULT_NON_WORKING).unwrap());
    }

    #[test]
    fn typed_values_are_accepted_directly() {
        assert!(is_workday(ymd(2024, 1, 15), &[], DEFAULT_NON_WORKING).unwrap());
    }

    #[test]
    fn week_day_is_iso_numbered() {
        assert_eq!(week_day("2024-01-15").unwrap(), 1); // Monday
        assert_eq!(week_day("2024-01-21").unwrap(), 7); // Sunday
    }

    #[test]
    fn week_num_attributes_to_the_mondays_month() {
        // Feb 1, 2024 (Thu): Monday is Jan 29 → week 5 of January.
        let w = week_num("2024-02-01").unwrap();
        assert_eq!((w.year, w.month, w.week_num), (2024, 1, 5));

        // Feb 5, 2024 (Mon): first Monday of February → week 1.
        let w = week_num("2024-02-05").unwrap();
        assert_eq!((w.year, w.month, w.week_num), (2024, 2, 1));

        // Jan 1, 2024 is itself a Monday → week 1 of January.
        let w = week_num("2024-01-01").unwrap();
        assert_eq!((w.year, w.month, w.week_num), (2024, 1, 1));
    }

    #[test]
    fn week_num_carries_across_a_year_boundary() {
        // Jan 1, 2025 (Wed): Monday is Dec 30, 2024 → week 5 of December.
        let w = week_num("2025-01-01").unwrap();
        assert_eq!((w.year, w.month, w.week_num), (2024, 12, 5));
    }

    #[test]
    fn next_workday_is_strictly_after_and_minimal() {
        // Friday Jan 12 → Monday Jan 15 (skipping the weekend).
        assert_eq!(
            next_workday("2024-01-12", &[], DEFAULT_NON_WORKING).unwrap(),
            ymd(2024, 1, 15)
        );
        // A workday input still advances to the next one.
        assert_eq!(
            next_workday("2024-01-15", &[], DEFAULT_NON_WORKING).unwrap(),
            ymd(2024, 1, 16)
        );
    }

    #[test]
    fn next_workday_skips_holidays() {
        let holidays = [holiday("2024-01-15", "Bridge Day", false)];
        assert_eq!(
            next_workday("2024-01-12", &holidays, DEFAULT_NON_WORKING).unwrap(),
            ymd(2024, 1, 16)
        );
    }

    #[test]
    fn previous_workday_is_strictly_before() {
        // Monday Jan 15 → Friday Jan 12.
        assert_eq!(
            previous_workday("2024-01-15", &[], DEFAULT_NON_WORKING).unwrap(),
            ymd(2024, 1, 12)
        );
    }

    #[test]
    fn all_days_excluded_raises_no_workday_found() {
        let every_day: Vec<u32> = (1..=7).collect();
        let err = next_workday("2024-01-15", &[], &every_day).unwrap_err();
        assert!(matches!(err, DateError::NoWorkdayFound { .. }));
    }

    #[test]
    fn holiday_lists_deserialize_from_json() {
        let holidays: Vec<Holiday> = serde_json::from_str(
            r#"[
                {"date": "2024-01-01", "name": "신정", "recurring": true},
                {"date": "2024-02-09", "name": "설날 연휴"}
            ]"#,
        )
        .unwrap();
        assert!(holidays[0].recurring);
        assert!(!holidays[1].recurring);
        assert!(!is_workday("2025-01-01", &holidays, DEFAULT_NON_WORKING).unwrap());
    }
}
