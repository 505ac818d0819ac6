// ABOUTME: Inbound search request with every criterion optional
// ABOUTME: Turns the raw inputs into the list of search parameters the engine evaluates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::parameters::{
    DateParameter, LabelParameter, LocationParameter, ParticipantsParameter, SearchParameter,
    WeatherParameter,
};
use crate::errors::{AppError, AppResult};

/// Raw search inputs as received from a caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Place to search around
    #[serde(default)]
    pub location: Option<String>,
    /// Radius around `location` in kilometres
    #[serde(default)]
    pub radius: Option<u32>,
    /// First day of the requested window
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of the requested window
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Group size
    #[serde(default)]
    pub number_of_participants: Option<u32>,
    /// Whether the forecast should be taken into account
    #[serde(default)]
    pub consider_weather: Option<bool>,
    /// Labels to look for
    #[serde(default)]
    pub labels: Option<Vec<String>>,
}

impl SearchRequest {
    /// Build the search parameters, skipping every criterion whose inputs are incomplete
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error when the start date is after the end date
    pub fn into_parameters(self, default_radius_km: u32) -> AppResult<Vec<SearchParameter>> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(AppError::invalid_input(format!(
                    "start date {start} is after end date {end}"
                )));
            }
        }

        let parameters = [
            LocationParameter::create(self.location, self.radius, default_radius_km)
                .map(SearchParameter::from),
            DateParameter::create(self.start_date, self.end_date).map(SearchParameter::from),
            ParticipantsParameter::create(self.number_of_participants).map(SearchParameter::from),
            WeatherParameter::create(self.consider_weather, self.start_date, self.end_date)
                .map(SearchParameter::from),
            LabelParameter::create(self.labels).map(SearchParameter::from),
        ];

        Ok(parameters.into_iter().flatten().collect())
    }
}
