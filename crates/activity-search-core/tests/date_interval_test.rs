// ABOUTME: Tests for date interval construction rules and overlap checks
// ABOUTME: Covers absolute, recurring, open-ended and year-wrapping intervals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use activity_search_core::errors::{DateIntervalError, IntervalEnd};
use activity_search_core::models::DateInterval;
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ============================================================================
// Construction rules
// ============================================================================

#[test]
fn test_infinite_start_rejects_start_day() {
    let result = DateInterval::builder()
        .infinite_start(true)
        .start_day(1)
        .end_day(1)
        .end_month(1)
        .end_year(2021)
        .build();
    assert_eq!(
        result,
        Err(DateIntervalError::InfiniteWithFixedParts(IntervalEnd::Start))
    );
}

#[test]
fn test_infinite_start_rejects_start_month() {
    let result = DateInterval::builder()
        .infinite_start(true)
        .start_month(1)
        .end_day(1)
        .end_month(1)
        .end_year(2021)
        .build();
    assert_eq!(
        result,
        Err(DateIntervalError::InfiniteWithFixedParts(IntervalEnd::Start))
    );
}

#[test]
fn test_infinite_start_rejects_start_year() {
    let result = DateInterval::builder()
        .infinite_start(true)
        .start_year(2020)
        .end_day(1)
        .end_month(1)
        .end_year(2021)
        .build();
    assert_eq!(
        result,
        Err(DateIntervalError::InfiniteWithFixedParts(IntervalEnd::Start))
    );
}

#[test]
fn test_infinite_start_requires_full_end_date() {
    let no_day = DateInterval::builder()
        .infinite_start(true)
        .end_month(1)
        .end_year(2021)
        .build();
    let no_month = DateInterval::builder()
        .infinite_start(true)
        .end_day(1)
        .end_year(2021)
        .build();
    let no_year = DateInterval::builder()
        .infinite_start(true)
        .end_day(1)
        .end_month(1)
        .build();

    for result in [no_day, no_month, no_year] {
        assert_eq!(result, Err(DateIntervalError::InfiniteStartWithoutFullEnd));
    }
}

#[test]
fn test_infinite_end_rejects_end_parts() {
    let with_day = DateInterval::builder()
        .start_day(1)
        .start_month(1)
        .start_year(2020)
        .infinite_end(true)
        .end_day(1)
        .build();
    let with_year = DateInterval::builder()
        .start_day(1)
        .start_month(1)
        .start_year(2020)
        .infinite_end(true)
        .end_year(2021)
        .build();

    for result in [with_day, with_year] {
        assert_eq!(
            result,
            Err(DateIntervalError::InfiniteWithFixedParts(IntervalEnd::End))
        );
    }
}

#[test]
fn test_infinite_end_requires_start_year() {
    let result = DateInterval::builder()
        .start_day(1)
        .start_month(1)
        .infinite_end(true)
        .build();
    assert_eq!(result, Err(DateIntervalError::InfiniteEndWithoutFullStart));
}

#[test]
fn test_infinite_end_requires_start_day_and_month() {
    let result = DateInterval::builder()
        .start_month(1)
        .start_year(2020)
        .infinite_end(true)
        .build();
    assert_eq!(
        result,
        Err(DateIntervalError::MissingDayOrMonth(IntervalEnd::Start))
    );
}

#[test]
fn test_year_on_start_only_is_rejected() {
    let result = DateInterval::builder()
        .start_day(1)
        .start_month(6)
        .start_year(2020)
        .end_day(1)
        .end_month(9)
        .build();
    assert_eq!(
        result,
        Err(DateIntervalError::UnbalancedYears(IntervalEnd::Start))
    );
}

#[test]
fn test_year_on_end_only_is_rejected() {
    let result = DateInterval::builder()
        .start_day(1)
        .start_month(6)
        .end_day(1)
        .end_month(9)
        .end_year(2020)
        .build();
    assert_eq!(
        result,
        Err(DateIntervalError::UnbalancedYears(IntervalEnd::End))
    );
}

#[test]
fn test_missing_start_is_rejected() {
    let result = DateInterval::builder().end_day(1).end_month(9).build();
    assert_eq!(
        result,
        Err(DateIntervalError::MissingDayOrMonth(IntervalEnd::Start))
    );
}

#[test]
fn test_missing_end_is_rejected() {
    let result = DateInterval::builder().start_day(1).start_month(6).build();
    assert_eq!(
        result,
        Err(DateIntervalError::MissingDayOrMonth(IntervalEnd::End))
    );
}

#[test]
fn test_start_day_without_month_is_rejected() {
    let result = DateInterval::builder()
        .start_day(1)
        .end_day(1)
        .end_month(9)
        .build();
    assert_eq!(
        result,
        Err(DateIntervalError::MissingDayOrMonth(IntervalEnd::Start))
    );
}

#[test]
fn test_end_month_without_day_is_rejected() {
    let result = DateInterval::builder()
        .start_day(1)
        .start_month(6)
        .end_month(9)
        .build();
    assert_eq!(
        result,
        Err(DateIntervalError::MissingDayOrMonth(IntervalEnd::End))
    );
}

#[test]
fn test_nonexistent_calendar_days_are_rejected() {
    let bad_month = DateInterval::recurring(13, 1, 9, 1);
    assert_eq!(
        bad_month,
        Err(DateIntervalError::InvalidMonth {
            end: IntervalEnd::Start,
            month: 13
        })
    );

    let bad_day = DateInterval::recurring(6, 1, 4, 31);
    assert_eq!(
        bad_day,
        Err(DateIntervalError::InvalidDay {
            end: IntervalEnd::End,
            day: 31,
            month: 4
        })
    );

    let not_a_leap_year = DateInterval::builder()
        .start_day(29)
        .start_month(2)
        .start_year(2021)
        .end_day(1)
        .end_month(3)
        .end_year(2021)
        .build();
    assert!(matches!(
        not_a_leap_year,
        Err(DateIntervalError::InvalidDay { day: 29, month: 2, .. })
    ));
}

#[test]
fn test_both_ends_infinite_is_always() {
    let interval = DateInterval::builder()
        .infinite_start(true)
        .infinite_end(true)
        .build()
        .unwrap();
    assert_eq!(interval, DateInterval::always());
    assert!(interval.is_infinite_start());
    assert!(interval.is_infinite_end());
}

#[test]
fn test_error_messages_name_the_rule() {
    assert_eq!(
        DateIntervalError::InfiniteStartWithoutFullEnd.to_string(),
        "an infinite start requires an end day, month and year"
    );
    assert_eq!(
        DateIntervalError::MissingDayOrMonth(IntervalEnd::End).to_string(),
        "end day and month are required, or mark the end as infinite"
    );
}

// ============================================================================
// Open-ended intervals
// ============================================================================

#[test]
fn test_always_covers_any_range() {
    assert!(DateInterval::always().covers(date(1990, 1, 1), date(2090, 1, 1)));
}

#[test]
fn test_infinite_start_covers_ranges_ending_on_or_before_end() {
    let interval = DateInterval::until(date(2020, 10, 13));
    assert!(interval.covers(date(2020, 10, 10), date(2020, 10, 12)));
    assert!(interval.covers(date(2020, 10, 10), date(2020, 10, 13)));
}

#[test]
fn test_infinite_start_rejects_ranges_after_end() {
    let interval = DateInterval::until(date(2020, 10, 9));
    assert!(!interval.covers(date(2020, 10, 10), date(2020, 10, 12)));
}

#[test]
fn test_infinite_end_covers_ranges_starting_on_or_after_start() {
    let interval = DateInterval::since(date(2020, 9, 30));
    assert!(interval.covers(date(2020, 10, 10), date(2020, 10, 12)));
    assert!(interval.covers(date(2020, 9, 30), date(2020, 9, 30)));
}

#[test]
fn test_infinite_end_rejects_ranges_before_start() {
    let interval = DateInterval::since(date(2020, 12, 1));
    assert!(!interval.covers(date(2020, 10, 10), date(2020, 10, 12)));
}

// ============================================================================
// Recurring intervals
// ============================================================================

#[test]
fn test_recurring_interval_overlapping_request() {
    let interval = DateInterval::recurring(10, 9, 10, 11).unwrap();
    assert!(interval.covers(date(2021, 10, 10), date(2021, 10, 20)));
}

#[test]
fn test_recurring_interval_before_request() {
    let interval = DateInterval::recurring(6, 1, 7, 31).unwrap();
    assert!(!interval.covers(date(2021, 10, 1), date(2021, 10, 7)));
}

#[test]
fn test_recurring_interval_after_request() {
    let interval = DateInterval::recurring(11, 1, 12, 1).unwrap();
    assert!(!interval.covers(date(2021, 10, 10), date(2021, 10, 21)));
}

#[test]
fn test_recurring_interval_touching_request_start() {
    let interval = DateInterval::recurring(10, 9, 10, 10).unwrap();
    assert!(interval.covers(date(2021, 10, 10), date(2021, 10, 20)));
}

#[test]
fn test_summer_interval_ignores_year() {
    let interval = DateInterval::recurring(6, 1, 9, 1).unwrap();
    assert!(interval.covers(date(2021, 7, 1), date(2021, 7, 1)));
    assert!(interval.covers(date(2035, 8, 15), date(2035, 8, 20)));
    assert!(!interval.covers(date(2021, 12, 1), date(2021, 12, 1)));
}

#[test]
fn test_winter_interval_wraps_new_year() {
    let interval = DateInterval::recurring(12, 1, 3, 1).unwrap();
    assert!(interval.covers(date(2021, 1, 1), date(2021, 1, 1)));
    assert!(interval.covers(date(2020, 12, 1), date(2020, 12, 5)));
    assert!(!interval.covers(date(2021, 6, 1), date(2021, 6, 30)));
}

#[test]
fn test_recurring_interval_covers_request_spanning_several_years() {
    let interval = DateInterval::recurring(6, 1, 9, 1).unwrap();
    assert!(interval.covers(date(2021, 1, 1), date(2025, 1, 1)));
}

// ============================================================================
// Absolute intervals
// ============================================================================

#[test]
fn test_absolute_interval_touching_request_end() {
    let interval = DateInterval::between(date(2021, 10, 20), date(2021, 10, 30));
    assert!(interval.covers(date(2021, 10, 10), date(2021, 10, 20)));
}

#[test]
fn test_absolute_interval_respects_year() {
    let interval = DateInterval::between(date(2021, 10, 10), date(2021, 10, 30));
    assert!(!interval.covers(date(2022, 10, 10), date(2022, 10, 20)));
}

#[test]
fn test_absolute_interval_across_new_year() {
    let interval = DateInterval::builder()
        .start_day(1)
        .start_month(12)
        .start_year(2020)
        .end_day(31)
        .end_month(3)
        .end_year(2021)
        .build()
        .unwrap();
    assert!(interval.covers(date(2021, 1, 1), date(2021, 1, 1)));
}

#[test]
fn test_absolute_interval_before_multi_year_request() {
    let interval = DateInterval::between(date(1900, 6, 1), date(1990, 9, 1));
    assert!(!interval.covers(date(2021, 1, 1), date(2025, 1, 1)));
}

#[test]
fn test_inverted_absolute_interval_covers_nothing() {
    let interval = DateInterval::builder()
        .start_day(1)
        .start_month(5)
        .start_year(2021)
        .end_day(1)
        .end_month(1)
        .end_year(2021)
        .build()
        .unwrap();
    assert!(!interval.covers(date(2021, 1, 1), date(2021, 6, 1)));
    assert!(!interval.covers(date(2021, 3, 1), date(2021, 3, 1)));

    let between = DateInterval::between(date(2021, 5, 1), date(2021, 1, 1));
    assert!(!between.covers(date(2020, 1, 1), date(2022, 1, 1)));
}

// ============================================================================
// Wire format
// ============================================================================

#[test]
fn test_deserialize_recurring_interval() {
    let interval: DateInterval =
        serde_json::from_str(r#"{"startDay":1,"startMonth":6,"endDay":1,"endMonth":9}"#).unwrap();
    assert_eq!(interval, DateInterval::recurring(6, 1, 9, 1).unwrap());
    assert!(interval.is_recurring());
}

#[test]
fn test_deserialize_rejects_invalid_interval() {
    let result = serde_json::from_str::<DateInterval>(
        r#"{"infiniteStart":true,"startDay":1,"endDay":1,"endMonth":1,"endYear":2021}"#,
    );
    let error = result.unwrap_err().to_string();
    assert!(error.contains("cannot combine an infinite start"), "{error}");
}

#[test]
fn test_serialize_open_ended_interval() {
    let json = serde_json::to_value(DateInterval::since(date(2021, 5, 1))).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "infiniteStart": false,
            "startDay": 1,
            "startMonth": 5,
            "startYear": 2021,
            "infiniteEnd": true
        })
    );
}
