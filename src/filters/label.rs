// ABOUTME: Label filter keeping activities that carry at least one requested label
// ABOUTME: Activities without labels never match a label search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use activity_search_core::models::Activity;

use super::ItemFilter;
use crate::constants::filter_costs;
use crate::search::{ParameterKind, SearchParameter};

/// Keeps activities sharing a label with the request
#[derive(Debug, Clone, Copy)]
pub struct LabelFilter {
    cost: u32,
}

impl LabelFilter {
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

impl Default for LabelFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemFilter for LabelFilter {
    fn name(&self) -> &'static str {
        "label"
    }

    fn kind(&self) -> ParameterKind {
        ParameterKind::Label
    }

    fn cost(&self) -> u32 {
        self.cost
    }

    fn apply(&self, activity: &Activity, parameter: &SearchParameter) -> bool {
        let SearchParameter::Label(label) = parameter else {
            return true;
        };
        let labels = activity.labels();
        label
            .labels_to_look_for()
            .iter()
            .any(|wanted| labels.contains(wanted))
    }
}
