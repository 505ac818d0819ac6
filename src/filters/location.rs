// ABOUTME: Location filter keeping activities near the requested place
// ABOUTME: Literal matches skip the distance service; the rest are resolved with one batched call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use activity_search_core::models::{Activity, Distance};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, instrument};

use super::ListFilter;
use crate::constants::filter_costs;
use crate::search::{LocationParameter, ParameterKind, SearchParameter};
use crate::services::DistanceResolver;

/// Keeps activities within the requested radius of a place
///
/// An activity passes when its city, province or country literally equals
/// the requested name, or when the distance service places it within the
/// radius. Activities without a usable location never pass.
pub struct LocationFilter {
    resolver: Arc<dyn DistanceResolver>,
    cost: u32,
}

impl LocationFilter {
    /// Create the filter with the default cost
    #[must_use]
    pub fn new(resolver: Arc<dyn DistanceResolver>) -> Self {
        Self::with_cost(resolver, filter_costs::LOCATION_FILTER)
    }

    /// Create the filter with a custom cost
    #[must_use]
    pub fn with_cost(resolver: Arc<dyn DistanceResolver>, cost: u32) -> Self {
        Self { resolver, cost }
    }

    #[instrument(skip(self, activities), fields(candidates = activities.len()))]
    async fn narrow(&self, activities: Vec<Activity>, parameter: &LocationParameter) -> Vec<Activity> {
        let user_input = parameter.name.trim();

        // (activity, rendered location, literal match)
        let located: Vec<(Activity, String, bool)> = activities
            .into_iter()
            .filter_map(|activity| {
                let rendered = activity.location_query()?;
                let literal = activity
                    .location()
                    .is_some_and(|location| location.literal_match(user_input));
                Some((activity, rendered, literal))
            })
            .collect();

        let destinations: HashSet<String> = located
            .iter()
            .filter(|(_, _, literal)| !literal)
            .map(|(_, rendered, _)| rendered.clone())
            .collect();

        if destinations.is_empty() {
            debug!("every located activity matches literally, skipping distance lookup");
            return located.into_iter().map(|(activity, _, _)| activity).collect();
        }

        let distances = self.resolver.find_distance(user_input, &destinations).await;
        let km_by_destination = index_by_destination(&distances);
        let radius = f64::from(parameter.radius_km);

        located
            .into_iter()
            .filter(|(_, rendered, literal)| {
                *literal
                    || km_by_destination
                        .get(rendered.as_str())
                        .is_some_and(|km| *km <= radius)
            })
            .map(|(activity, _, _)| activity)
            .collect()
    }
}

/// First resolved distance per destination query
fn index_by_destination(distances: &[Distance]) -> HashMap<&str, f64> {
    let mut index = HashMap::with_capacity(distances.len());
    for distance in distances {
        index
            .entry(distance.destination_query.as_str())
            .or_insert(distance.km);
    }
    index
}

#[async_trait]
impl ListFilter for LocationFilter {
    fn name(&self) -> &'static str {
        "location"
    }

    fn kind(&self) -> ParameterKind {
        ParameterKind::Location
    }

    fn cost(&self) -> u32 {
        self.cost
    }

    async fn apply(
        &self,
        activities: Vec<Activity>,
        parameter: &SearchParameter,
    ) -> Vec<Activity> {
        match parameter {
            SearchParameter::Location(location) => self.narrow(activities, location).await,
            _ => activities,
        }
    }
}
