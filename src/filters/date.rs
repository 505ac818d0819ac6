// ABOUTME: Availability filter matching an activity's date intervals against the requested range
// ABOUTME: Activities without date intervals are available on any date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use activity_search_core::models::Activity;

use super::ItemFilter;
use crate::constants::filter_costs;
use crate::search::{ParameterKind, SearchParameter};

/// Keeps activities available on at least one requested day
#[derive(Debug, Clone, Copy)]
pub struct DateFilter {
    cost: u32,
}

impl DateFilter {
    /// Create the filter with the default per-record cost
    #[must_use]
    pub const fn new() -> Self {
        Self::with_cost(filter_costs::ITEM_FILTER)
    }

    /// Create the filter with a custom cost
    #[must_use]
    pub const fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for DateFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemFilter for DateFilter {
    fn name(&self) -> &'static str {
        "date"
    }

    fn kind(&self) -> ParameterKind {
        ParameterKind::Date
    }

    fn cost(&self) -> u32 {
        self.cost
    }

    fn apply(&self, activity: &Activity, parameter: &SearchParameter) -> bool {
        let SearchParameter::Date(date) = parameter else {
            return true;
        };
        let intervals = activity.date_intervals();
        intervals.is_empty()
            || intervals
                .iter()
                .any(|interval| interval.covers(date.start_date, date.end_date))
    }
}
