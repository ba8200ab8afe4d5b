//! Property tests for parsing, formatting, and the workday search.

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

use haru_core::{
    format, format_korean, is_workday, next_workday, parse, previous_workday, week_day, week_num,
    DateValue, FormatType, Holiday, DEFAULT_NON_WORKING,
};

prop_compose! {
    /// An arbitrary valid Gregorian date within a wide but bounded range.
    fn arb_date()(year in 1900i32..=2100, ordinal in 1u32..=365) -> NaiveDate {
        NaiveDate::from_yo_opt(year, ordinal).unwrap()
    }
}

proptest! {
    #[test]
    fn canonical_iso_strings_round_trip(d in arb_date()) {
        let iso = d.format("%Y-%m-%d").to_string();
        prop_assert_eq!(format(iso.as_str(), FormatType::Date, None).unwrap(), iso.clone());
        prop_assert_eq!(parse(&iso).unwrap(), DateValue::Date(d));
    }

    #[test]
    fn every_parse_shape_agrees_on_the_same_date(d in arb_date()) {
        let dashed = d.format("%Y-%m-%d").to_string();
        let dotted = d.format("%Y.%m.%d").to_string();
        let compact = d.format("%Y%m%d").to_string();
        let korean = format!("{}년 {}월 {}일", d.year(), d.month(), d.day());
        let slashed = d.format("%Y/%m/%d").to_string();

        let expected = DateValue::Date(d);
        prop_assert_eq!(parse(&dashed).unwrap(), expected.clone());
        prop_assert_eq!(parse(&dotted).unwrap(), expected.clone());
        prop_assert_eq!(parse(&compact).unwrap(), expected.clone());
        prop_assert_eq!(parse(&korean).unwrap(), expected.clone());
        prop_assert_eq!(parse(&slashed).unwrap(), expected);
    }

    #[test]
    fn workday_predicate_matches_the_weekday_rule(d in arb_date()) {
        let weekday = d.weekday().number_from_monday();
        let expected = !DEFAULT_NON_WORKING.contains(&weekday);
        prop_assert_eq!(is_workday(d, &[], DEFAULT_NON_WORKING).unwrap(), expected);
    }

    #[test]
    fn next_workday_is_strictly_after_minimal_and_working(d in arb_date()) {
        let next = next_workday(d, &[], DEFAULT_NON_WORKING).unwrap();
        prop_assert!(next > d);
        prop_assert!(is_workday(next, &[], DEFAULT_NON_WORKING).unwrap());
        // Every date strictly between is not a workday.
        let mut between = d + Duration::days(1);
        while between < next {
            prop_assert!(!is_workday(between, &[], DEFAULT_NON_WORKING).unwrap());
            between += Duration::days(1);
        }
    }

    #[test]
    fn previous_workday_mirrors_next(d in arb_date()) {
        let next = next_workday(d, &[], DEFAULT_NON_WORKING).unwrap();
        let back = previous_workday(next, &[], DEFAULT_NON_WORKING).unwrap();
        // Not necessarily the input, but both sides satisfy the predicate.
        prop_assert!(back < next);
        prop_assert!(is_workday(back, &[], DEFAULT_NON_WORKING).unwrap());
    }

    #[test]
    fn week_day_stays_in_iso_range(d in arb_date()) {
        let wd = week_day(d).unwrap();
        prop_assert!((1..=7).contains(&wd));
        prop_assert_eq!(wd, d.weekday().number_from_monday());
    }

    #[test]
    fn week_num_is_anchored_to_the_weeks_monday(d in arb_date()) {
        let w = week_num(d).unwrap();
        let monday = d - Duration::days(i64::from(d.weekday().number_from_monday()) - 1);
        prop_assert_eq!(w.year, monday.year());
        prop_assert_eq!(w.month, monday.month());
        prop_assert!((1..=6).contains(&w.week_num));
        // The date's own Monday and the date itself report the same week.
        let w_monday = week_num(monday).unwrap();
        prop_assert_eq!(w, w_monday);
    }

    #[test]
    fn korean_formatting_is_idempotent_through_reparse(d in arb_date()) {
        let once = format_korean(d).unwrap();
        let twice = format_korean(once.as_str()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn recurring_holidays_exclude_the_day_in_every_year(d in arb_date()) {
        let rule = Holiday {
            date: d.format("%Y-%m-%d").to_string(),
            name: "rule".into(),
            recurring: true,
        };
        for year in [d.year() - 1, d.year(), d.year() + 1] {
            if let Some(candidate) = NaiveDate::from_ymd_opt(year, d.month(), d.day()) {
                prop_assert!(!is_workday(candidate, std::slice::from_ref(&rule), DEFAULT_NON_WORKING)
                    .unwrap());
            }
        }
    }
}
