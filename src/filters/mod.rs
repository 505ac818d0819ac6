// ABOUTME: Filter traits and the concrete per-record and batched filters
// ABOUTME: Per-record filters judge one activity at a time, batched filters narrow a whole set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Filters
//!
//! Two filter families exist:
//!
//! - [`ItemFilter`]: a cheap, pure predicate over a single activity
//!   (date, participants, label).
//! - [`ListFilter`]: a predicate that needs a collaborator and therefore
//!   evaluates the whole working set with one batched call (location,
//!   weather).
//!
//! Every filter declares a cost. The search engine runs cheaper filters
//! first.

use activity_search_core::models::Activity;
use async_trait::async_trait;

use crate::search::{ParameterKind, SearchParameter};

/// Availability filter
pub mod date;
/// Label intersection filter
pub mod label;
/// Distance filter backed by the location service
pub mod location;
/// Group size filter
pub mod participants;
/// Forecast filter backed by the weather service
pub mod weather;

pub use date::DateFilter;
pub use label::LabelFilter;
pub use location::LocationFilter;
pub use participants::ParticipantsFilter;
pub use weather::WeatherFilter;

/// Predicate evaluated independently for each activity
pub trait ItemFilter: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Parameter kind this filter evaluates
    fn kind(&self) -> ParameterKind;

    /// Declared evaluation cost, lower runs first
    fn cost(&self) -> u32;

    /// Whether this filter can evaluate the parameter
    fn supports(&self, parameter: &SearchParameter) -> bool {
        parameter.kind() == self.kind()
    }

    /// Whether the activity satisfies the parameter
    ///
    /// A parameter of another kind imposes no constraint and passes.
    fn apply(&self, activity: &Activity, parameter: &SearchParameter) -> bool;
}

/// Predicate evaluated over a whole set of activities at once
#[async_trait]
pub trait ListFilter: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Parameter kind this filter evaluates
    fn kind(&self) -> ParameterKind;

    /// Declared evaluation cost, lower runs first
    fn cost(&self) -> u32;

    /// Whether this filter can evaluate the parameter
    fn supports(&self, parameter: &SearchParameter) -> bool {
        parameter.kind() == self.kind()
    }

    /// Keep the activities that satisfy the parameter
    ///
    /// The result is a subset of `activities` in their original order. A
    /// parameter of another kind returns the input unchanged.
    async fn apply(&self, activities: Vec<Activity>, parameter: &SearchParameter)
        -> Vec<Activity>;
}
