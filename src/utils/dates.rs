// ABOUTME: Calendar helpers for search windows
// ABOUTME: Computes the upcoming weekend used by suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// The first Saturday strictly after `today` and the Sunday that follows it
///
/// On a Saturday this returns the weekend of the following week.
#[must_use]
pub fn next_weekend(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let saturday = Weekday::Sat.num_days_from_monday();
    let current = today.weekday().num_days_from_monday();
    let days_ahead = match (saturday + 7 - current) % 7 {
        0 => 7,
        days => days,
    };
    let start = today + Days::new(u64::from(days_ahead));
    (start, start + Days::new(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_next_weekend() {
        // Wednesday
        assert_eq!(
            next_weekend(date(2021, 6, 2)),
            (date(2021, 6, 5), date(2021, 6, 6))
        );
        // Saturday rolls over to the next week
        assert_eq!(
            next_weekend(date(2021, 6, 5)),
            (date(2021, 6, 12), date(2021, 6, 13))
        );
        // Sunday
        assert_eq!(
            next_weekend(date(2021, 6, 6)),
            (date(2021, 6, 12), date(2021, 6, 13))
        );
    }
}
