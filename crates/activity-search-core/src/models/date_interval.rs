// ABOUTME: Calendar availability window of an activity, absolute, recurring or open-ended
// ABOUTME: Validates field combinations on construction and decides overlap with requested ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::iter::once;

use crate::errors::{DateIntervalError, IntervalEnd};

/// Leap year used to check that a month/day pair exists at all
const REFERENCE_LEAP_YEAR: i32 = 2000;

/// A month/day pair without a year, ordered by month then day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Anchor to a year. February 29th falls back to the 28th in common years.
    fn in_year(self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .or_else(|| NaiveDate::from_ymd_opt(year, self.month, 28))
    }
}

/// Validated shape of an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    /// Both ends infinite, available on any date
    Always,
    /// Infinite start, available up to and including the date
    Until(NaiveDate),
    /// Infinite end, available from the date onwards
    Since(NaiveDate),
    /// Yearless range, repeats every calendar year
    Recurring { start: MonthDay, end: MonthDay },
    /// Fully dated range
    Absolute { start: NaiveDate, end: NaiveDate },
}

/// Period in which an activity can take place
///
/// A date interval is one of:
/// - an absolute range, both ends carrying day, month and year
/// - a recurring range, neither end carrying a year, matched against every year
/// - an open-ended range, `infinite_start` and/or `infinite_end`
///
/// Instances can only be obtained through [`DateIntervalBuilder::build`] (or
/// the convenience constructors), which rejects every invalid combination of
/// fields. Deserialization goes through the same validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DateIntervalBuilder", into = "DateIntervalBuilder")]
pub struct DateInterval {
    span: Span,
}

impl DateInterval {
    /// Start building an interval field by field
    #[must_use]
    pub fn builder() -> DateIntervalBuilder {
        DateIntervalBuilder::default()
    }

    /// Interval without any bound
    #[must_use]
    pub const fn always() -> Self {
        Self { span: Span::Always }
    }

    /// Absolute interval between two dates, both inclusive
    #[must_use]
    pub const fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            span: Span::Absolute { start, end },
        }
    }

    /// Interval with an infinite start, ending on `end` (inclusive)
    #[must_use]
    pub const fn until(end: NaiveDate) -> Self {
        Self {
            span: Span::Until(end),
        }
    }

    /// Interval starting on `start` (inclusive) with an infinite end
    #[must_use]
    pub const fn since(start: NaiveDate) -> Self {
        Self {
            span: Span::Since(start),
        }
    }

    /// Yearly recurring interval, e.g. June 1st to September 1st
    ///
    /// # Errors
    ///
    /// Returns an error when a month or day does not exist
    pub fn recurring(
        start_month: u32,
        start_day: u32,
        end_month: u32,
        end_day: u32,
    ) -> Result<Self, DateIntervalError> {
        Self::builder()
            .start_day(start_day)
            .start_month(start_month)
            .end_day(end_day)
            .end_month(end_month)
            .build()
    }

    /// Whether the interval has no start bound
    #[must_use]
    pub const fn is_infinite_start(&self) -> bool {
        matches!(self.span, Span::Always | Span::Until(_))
    }

    /// Whether the interval has no end bound
    #[must_use]
    pub const fn is_infinite_end(&self) -> bool {
        matches!(self.span, Span::Always | Span::Since(_))
    }

    /// Whether the interval repeats every year
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        matches!(self.span, Span::Recurring { .. })
    }

    /// Whether any day of `requested_start..=requested_end` falls in this interval
    ///
    /// `requested_start` is expected to be on or before `requested_end`.
    #[must_use]
    pub fn covers(&self, requested_start: NaiveDate, requested_end: NaiveDate) -> bool {
        match self.span {
            Span::Always => true,
            Span::Until(end) => requested_end <= end,
            Span::Since(start) => requested_start >= start,
            Span::Recurring { start, end } => {
                covers_recurring(start, end, requested_start, requested_end)
            }
            Span::Absolute { start, end } => {
                overlaps(start, end, requested_start, requested_end)
            }
        }
    }
}

/// Inclusive overlap of two closed date ranges
///
/// A range whose start lies after its end holds no days and overlaps nothing.
fn overlaps(
    start: NaiveDate,
    end: NaiveDate,
    requested_start: NaiveDate,
    requested_end: NaiveDate,
) -> bool {
    start <= end && start <= requested_end && requested_start <= end
}

fn covers_recurring(
    start: MonthDay,
    end: MonthDay,
    requested_start: NaiveDate,
    requested_end: NaiveDate,
) -> bool {
    // any yearly range falls inside a request spanning more than a full year
    if requested_end.year() - requested_start.year() > 1 {
        return true;
    }

    // a range like December to March wraps the new year and is anchored twice
    let wraps_new_year = end < start;
    let mut windows = (requested_start.year()..=requested_end.year()).flat_map(|year| {
        let previous = wraps_new_year.then_some((year - 1, year));
        let current = if wraps_new_year {
            (year, year + 1)
        } else {
            (year, year)
        };
        previous.into_iter().chain(once(current))
    });

    windows.any(|(start_year, end_year)| {
        match (start.in_year(start_year), end.in_year(end_year)) {
            (Some(window_start), Some(window_end)) => {
                overlaps(window_start, window_end, requested_start, requested_end)
            }
            _ => false,
        }
    })
}

/// Field-by-field description of a [`DateInterval`], also its wire format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateIntervalBuilder {
    #[serde(default)]
    infinite_start: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_year: Option<i32>,
    #[serde(default)]
    infinite_end: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_year: Option<i32>,
}

impl DateIntervalBuilder {
    /// Mark the start as infinite
    #[must_use]
    pub fn infinite_start(mut self, infinite: bool) -> Self {
        self.infinite_start = infinite;
        self
    }

    /// Set the start day of month
    #[must_use]
    pub fn start_day(mut self, day: u32) -> Self {
        self.start_day = Some(day);
        self
    }

    /// Set the start month (1-12)
    #[must_use]
    pub fn start_month(mut self, month: u32) -> Self {
        self.start_month = Some(month);
        self
    }

    /// Set the start year
    #[must_use]
    pub fn start_year(mut self, year: i32) -> Self {
        self.start_year = Some(year);
        self
    }

    /// Mark the end as infinite
    #[must_use]
    pub fn infinite_end(mut self, infinite: bool) -> Self {
        self.infinite_end = infinite;
        self
    }

    /// Set the end day of month
    #[must_use]
    pub fn end_day(mut self, day: u32) -> Self {
        self.end_day = Some(day);
        self
    }

    /// Set the end month (1-12)
    #[must_use]
    pub fn end_month(mut self, month: u32) -> Self {
        self.end_month = Some(month);
        self
    }

    /// Set the end year
    #[must_use]
    pub fn end_year(mut self, year: i32) -> Self {
        self.end_year = Some(year);
        self
    }

    /// Validate the fields and build the interval
    ///
    /// # Errors
    ///
    /// Returns a [`DateIntervalError`] naming the first violated rule
    pub fn build(self) -> Result<DateInterval, DateIntervalError> {
        DateInterval::try_from(self)
    }

    const fn start_is_empty(&self) -> bool {
        self.start_day.is_none() && self.start_month.is_none() && self.start_year.is_none()
    }

    const fn end_is_empty(&self) -> bool {
        self.end_day.is_none() && self.end_month.is_none() && self.end_year.is_none()
    }

    fn check_start(&self) -> Result<(), DateIntervalError> {
        if self.infinite_start {
            if !self.start_is_empty() {
                return Err(DateIntervalError::InfiniteWithFixedParts(IntervalEnd::Start));
            }
            if self.end_day.is_none() || self.end_month.is_none() || self.end_year.is_none() {
                return Err(DateIntervalError::InfiniteStartWithoutFullEnd);
            }
        } else {
            if self.start_day.is_none() || self.start_month.is_none() {
                return Err(DateIntervalError::MissingDayOrMonth(IntervalEnd::Start));
            }
            if self.start_year.is_none() && self.end_year.is_some() {
                return Err(DateIntervalError::UnbalancedYears(IntervalEnd::End));
            }
        }
        Ok(())
    }

    fn check_end(&self) -> Result<(), DateIntervalError> {
        if self.infinite_end {
            if !self.end_is_empty() {
                return Err(DateIntervalError::InfiniteWithFixedParts(IntervalEnd::End));
            }
            if self.start_year.is_none() {
                return Err(DateIntervalError::InfiniteEndWithoutFullStart);
            }
        } else {
            if self.end_day.is_none() || self.end_month.is_none() {
                return Err(DateIntervalError::MissingDayOrMonth(IntervalEnd::End));
            }
            if self.end_year.is_none() && self.start_year.is_some() {
                return Err(DateIntervalError::UnbalancedYears(IntervalEnd::Start));
            }
        }
        Ok(())
    }
}

/// Check that a month/day (and year, if any) names an existing day
fn calendar_day(
    end: IntervalEnd,
    day: Option<u32>,
    month: Option<u32>,
    year: Option<i32>,
) -> Result<Option<(MonthDay, Option<NaiveDate>)>, DateIntervalError> {
    let (Some(day), Some(month)) = (day, month) else {
        return Ok(None);
    };
    if !(1..=12).contains(&month) {
        return Err(DateIntervalError::InvalidMonth { end, month });
    }
    let invalid_day = || DateIntervalError::InvalidDay { end, day, month };
    NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, month, day).ok_or_else(invalid_day)?;
    let date = match year {
        Some(year) => Some(NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid_day)?),
        None => None,
    };
    Ok(Some((MonthDay { month, day }, date)))
}

impl TryFrom<DateIntervalBuilder> for DateInterval {
    type Error = DateIntervalError;

    fn try_from(fields: DateIntervalBuilder) -> Result<Self, Self::Error> {
        if fields.infinite_start
            && fields.infinite_end
            && fields.start_is_empty()
            && fields.end_is_empty()
        {
            return Ok(Self::always());
        }

        fields.check_start()?;
        fields.check_end()?;

        let start = calendar_day(
            IntervalEnd::Start,
            fields.start_day,
            fields.start_month,
            fields.start_year,
        )?;
        let end = calendar_day(
            IntervalEnd::End,
            fields.end_day,
            fields.end_month,
            fields.end_year,
        )?;

        let span = match (start, end) {
            (None, Some((_, Some(end)))) => Span::Until(end),
            (Some((_, Some(start))), None) => Span::Since(start),
            (Some((_, Some(start))), Some((_, Some(end)))) => Span::Absolute { start, end },
            (Some((start, None)), Some((end, None))) => Span::Recurring { start, end },
            // every other combination is rejected by check_start/check_end
            _ => return Err(DateIntervalError::MissingDayOrMonth(IntervalEnd::Start)),
        };
        Ok(Self { span })
    }
}

impl From<DateInterval> for DateIntervalBuilder {
    fn from(interval: DateInterval) -> Self {
        let dated = |date: NaiveDate| (Some(date.day()), Some(date.month()), Some(date.year()));
        let yearless = |md: MonthDay| (Some(md.day), Some(md.month), None);

        let (infinite_start, start, infinite_end, end) = match interval.span {
            Span::Always => (true, (None, None, None), true, (None, None, None)),
            Span::Until(end) => (true, (None, None, None), false, dated(end)),
            Span::Since(start) => (false, dated(start), true, (None, None, None)),
            Span::Recurring { start, end } => (false, yearless(start), false, yearless(end)),
            Span::Absolute { start, end } => (false, dated(start), false, dated(end)),
        };

        Self {
            infinite_start,
            start_day: start.0,
            start_month: start.1,
            start_year: start.2,
            infinite_end,
            end_day: end.0,
            end_month: end.1,
            end_year: end.2,
        }
    }
}
