// ABOUTME: Search engine running per-record filters then batched filters in cost order
// ABOUTME: Filter registries are sorted and indexed once at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Search Engine
//!
//! A search runs in two stages:
//!
//! 1. **Per-record AND**: an activity survives when, for every parameter
//!    with a supporting [`ItemFilter`], that filter accepts it. Parameters
//!    without a supporting item filter pass.
//! 2. **Batched narrowing**: [`ListFilter`]s run one after another in cost
//!    order, each narrowing the working set once per parameter it supports,
//!    in parameter order.
//!
//! Both registries are sorted by ascending cost when the engine is built.
//! Each parameter kind is routed to the cheapest item filter supporting it.

use activity_search_core::models::Activity;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info};

use super::parameters::{ParameterKind, SearchParameter};
use crate::config::FilterCosts;
use crate::filters::{
    DateFilter, ItemFilter, LabelFilter, ListFilter, LocationFilter, ParticipantsFilter,
    WeatherFilter,
};
use crate::services::{DistanceResolver, ForecastResolver};

/// Every parameter kind, used to build the dispatch table
const ALL_KINDS: [ParameterKind; 5] = [
    ParameterKind::Location,
    ParameterKind::Date,
    ParameterKind::Participants,
    ParameterKind::Weather,
    ParameterKind::Label,
];

/// Two-stage filter pipeline over an activity set
pub struct SearchEngine {
    item_filters: Vec<Arc<dyn ItemFilter>>,
    list_filters: Vec<Arc<dyn ListFilter>>,
    item_filter_by_kind: HashMap<ParameterKind, usize>,
}

impl SearchEngine {
    /// Build an engine from filter registries in any order
    #[must_use]
    pub fn new(
        mut item_filters: Vec<Arc<dyn ItemFilter>>,
        mut list_filters: Vec<Arc<dyn ListFilter>>,
    ) -> Self {
        // stable sorts, equal costs keep registration order
        item_filters.sort_by_key(|filter| filter.cost());
        list_filters.sort_by_key(|filter| filter.cost());

        let item_filter_by_kind = ALL_KINDS
            .iter()
            .filter_map(|kind| {
                item_filters
                    .iter()
                    .position(|filter| filter.kind() == *kind)
                    .map(|index| (*kind, index))
            })
            .collect();

        Self {
            item_filters,
            list_filters,
            item_filter_by_kind,
        }
    }

    /// Engine with the date, participants, label, location and weather filters
    #[must_use]
    pub fn standard(
        distance_resolver: Arc<dyn DistanceResolver>,
        forecast_resolver: Arc<dyn ForecastResolver>,
        costs: &FilterCosts,
    ) -> Self {
        let item_filters: Vec<Arc<dyn ItemFilter>> = vec![
            Arc::new(DateFilter::with_cost(costs.item)),
            Arc::new(ParticipantsFilter::with_cost(costs.item)),
            Arc::new(LabelFilter::with_cost(costs.item)),
        ];
        let list_filters: Vec<Arc<dyn ListFilter>> = vec![
            Arc::new(LocationFilter::with_cost(distance_resolver, costs.location)),
            Arc::new(WeatherFilter::with_cost(forecast_resolver, costs.weather)),
        ];
        Self::new(item_filters, list_filters)
    }

    /// Names of the item filters, cheapest first
    #[must_use]
    pub fn item_filter_names(&self) -> Vec<&'static str> {
        self.item_filters.iter().map(|filter| filter.name()).collect()
    }

    /// Names of the list filters, cheapest first
    #[must_use]
    pub fn list_filter_names(&self) -> Vec<&'static str> {
        self.list_filters.iter().map(|filter| filter.name()).collect()
    }

    /// Keep the activities satisfying every parameter
    ///
    /// An empty parameter list returns the activities unchanged. The result
    /// keeps the input order.
    pub async fn filter(
        &self,
        activities: Vec<Activity>,
        parameters: &[SearchParameter],
    ) -> Vec<Activity> {
        let remaining = self.apply_item_filters(activities, parameters);
        self.apply_list_filters(remaining, parameters).await
    }

    fn item_filter_for(&self, parameter: &SearchParameter) -> Option<&dyn ItemFilter> {
        self.item_filter_by_kind
            .get(&parameter.kind())
            .and_then(|index| self.item_filters.get(*index))
            .map(|filter| &**filter)
            .filter(|filter| filter.supports(parameter))
    }

    fn apply_item_filters(
        &self,
        activities: Vec<Activity>,
        parameters: &[SearchParameter],
    ) -> Vec<Activity> {
        activities
            .into_iter()
            .filter(|activity| {
                parameters.iter().all(|parameter| {
                    self.item_filter_for(parameter).is_none_or(|filter| {
                        let passes = filter.apply(activity, parameter);
                        debug!(
                            filter = filter.name(),
                            activity = activity.name(),
                            %parameter,
                            passes,
                            "item filter decision"
                        );
                        passes
                    })
                })
            })
            .collect()
    }

    async fn apply_list_filters(
        &self,
        mut activities: Vec<Activity>,
        parameters: &[SearchParameter],
    ) -> Vec<Activity> {
        for filter in &self.list_filters {
            for parameter in parameters.iter().filter(|p| filter.supports(p)) {
                let before = ids(&activities);
                activities = filter.apply(activities, parameter).await;
                let rejected = rejected_ids(&before, &activities);
                info!(
                    filter = filter.name(),
                    %parameter,
                    candidates = ?before,
                    rejected = ?rejected,
                    "list filter narrowed activities"
                );
            }
        }
        activities
    }
}

fn ids(activities: &[Activity]) -> Vec<String> {
    activities
        .iter()
        .map(|activity| activity.id().to_owned())
        .collect()
}

/// Ids of `before` no longer present in `kept`
fn rejected_ids<'a>(before: &'a [String], kept: &[Activity]) -> Vec<&'a str> {
    let kept: HashSet<&str> = kept.iter().map(Activity::id).collect();
    before
        .iter()
        .map(String::as_str)
        .filter(|id| !kept.contains(id))
        .collect()
}
