// ABOUTME: Construction validation errors for activity search domain types
// ABOUTME: One variant per violated invariant so callers can report precise input problems
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Validation Error Types
//!
//! - `DateIntervalError` - a `DateInterval` violates its field invariants
//! - `WeatherError` - a weather constraint lies outside its scale

use std::fmt;
use thiserror::Error;

/// Which end of a date interval an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalEnd {
    /// The start of the interval
    Start,
    /// The end of the interval
    End,
}

impl fmt::Display for IntervalEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Errors raised while constructing a `DateInterval`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateIntervalError {
    /// An infinite end was combined with a concrete day, month or year on that end
    #[error("cannot combine an infinite {0} with a specific {0} day, month or year")]
    InfiniteWithFixedParts(IntervalEnd),

    /// An infinite start needs a fully specified end date
    #[error("an infinite start requires an end day, month and year")]
    InfiniteStartWithoutFullEnd,

    /// An infinite end needs a fully specified start date
    #[error("an infinite end requires a start day, month and year")]
    InfiniteEndWithoutFullStart,

    /// A finite end is missing its day or month
    #[error("{0} day and month are required, or mark the {0} as infinite")]
    MissingDayOrMonth(IntervalEnd),

    /// Exactly one of the two ends carries a year
    #[error("if the {0} defines a year, the other end must define one as well")]
    UnbalancedYears(IntervalEnd),

    /// Month outside 1..=12
    #[error("{end} month {month} is not between 1 and 12")]
    InvalidMonth {
        /// Offending end
        end: IntervalEnd,
        /// Supplied month
        month: u32,
    },

    /// Day that does not exist in the given month (and year, when set)
    #[error("{end} day {day} does not exist in month {month}")]
    InvalidDay {
        /// Offending end
        end: IntervalEnd,
        /// Supplied day
        day: u32,
        /// Supplied month
        month: u32,
    },
}

/// Errors raised while validating a `Weather` constraint set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// A bounded axis holds a value above its scale maximum
    #[error("{axis} value {value} exceeds the maximum of {max}")]
    OutOfScale {
        /// Name of the axis (e.g. `max_rain`)
        axis: &'static str,
        /// Supplied value
        value: u8,
        /// Scale maximum
        max: u8,
    },

    /// A lower bound is greater than its upper bound
    #[error("{axis} minimum {min} is greater than its maximum {max}")]
    InvertedBounds {
        /// Name of the axis (e.g. `temperature`)
        axis: &'static str,
        /// Lower bound
        min: i32,
        /// Upper bound
        max: i32,
    },
}
