// ABOUTME: Weather filter keeping activities whose weather needs are met by the forecast
// ABOUTME: Fetches forecasts for all checkable activities in one batched call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use activity_search_core::models::{Activity, Forecast, Weather};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, instrument};

use super::ListFilter;
use crate::constants::filter_costs;
use crate::search::{ParameterKind, SearchParameter, WeatherParameter};
use crate::services::ForecastResolver;
use crate::suitability::is_suitable;

/// Keeps activities that can take place in the forecast weather
///
/// Only activities with both a location and weather constraints are checked.
/// All others pass unconditionally, as do checked activities for which no
/// forecast is available.
pub struct WeatherFilter {
    resolver: Arc<dyn ForecastResolver>,
    cost: u32,
}

impl WeatherFilter {
    /// Create the filter with the default cost
    #[must_use]
    pub fn new(resolver: Arc<dyn ForecastResolver>) -> Self {
        Self::with_cost(resolver, filter_costs::WEATHER_FILTER)
    }

    /// Create the filter with a custom cost
    #[must_use]
    pub fn with_cost(resolver: Arc<dyn ForecastResolver>, cost: u32) -> Self {
        Self { resolver, cost }
    }

    #[instrument(skip(self, activities), fields(candidates = activities.len()))]
    async fn narrow(&self, activities: Vec<Activity>, parameter: &WeatherParameter) -> Vec<Activity> {
        let locations: HashSet<String> = activities
            .iter()
            .filter_map(checkable)
            .map(|(location, _)| location)
            .collect();

        if locations.is_empty() {
            debug!("no activity has both a location and weather constraints");
            return activities;
        }

        let forecasts = self
            .resolver
            .find_forecasts(&locations, parameter.start_date, parameter.end_date)
            .await;
        let by_location = group_by_location(&forecasts);

        activities
            .into_iter()
            .filter(|activity| {
                checkable(activity).is_none_or(|(location, constraints)| {
                    let forecasts = by_location.get(location.as_str()).into_iter().flatten();
                    is_suitable(constraints, forecasts.copied())
                })
            })
            .collect()
    }
}

/// Rendered location and constraints of an activity the forecast can judge
fn checkable(activity: &Activity) -> Option<(String, &Weather)> {
    Some((activity.location_query()?, activity.weather()?))
}

fn group_by_location(forecasts: &[Forecast]) -> HashMap<&str, Vec<&Forecast>> {
    let mut grouped: HashMap<&str, Vec<&Forecast>> = HashMap::new();
    for forecast in forecasts {
        grouped
            .entry(forecast.location.as_str())
            .or_default()
            .push(forecast);
    }
    grouped
}

#[async_trait]
impl ListFilter for WeatherFilter {
    fn name(&self) -> &'static str {
        "weather"
    }

    fn kind(&self) -> ParameterKind {
        ParameterKind::Weather
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
            SearchParameter::Weather(weather) => self.narrow(activities, weather).await,
            _ => activities,
        }
    }
}
