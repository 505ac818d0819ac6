// ABOUTME: Group size filter comparing the requested count with an activity's participant bounds
// ABOUTME: An absent maximum means the activity accepts groups of any size above the minimum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use activity_search_core::models::Activity;

use super::ItemFilter;
use crate::constants::filter_costs;
use crate::search::{ParameterKind, SearchParameter};

/// Keeps activities that accept the requested group size
#[derive(Debug, Clone, Copy)]
pub struct ParticipantsFilter {
    cost: u32,
}

impl ParticipantsFilter {
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

impl Default for ParticipantsFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemFilter for ParticipantsFilter {
    fn name(&self) -> &'static str {
        "participants"
    }

    fn kind(&self) -> ParameterKind {
        ParameterKind::Participants
    }

    fn cost(&self) -> u32 {
        self.cost
    }

    fn apply(&self, activity: &Activity, parameter: &SearchParameter) -> bool {
        let SearchParameter::Participants(participants) = parameter else {
            return true;
        };
        let count = participants.count;
        count >= activity.min_number_of_participants()
            && activity
                .max_number_of_participants()
                .is_none_or(|max| count <= max)
    }
}
