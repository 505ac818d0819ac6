// ABOUTME: HTTP client for the weather service fetching forecasts for many locations at once
// ABOUTME: Any transport, status or body failure is logged and reported as no forecasts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use activity_search_core::models::Forecast;
use async_trait::async_trait;
use chrono::{Days, NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

use super::ForecastResolver;
use crate::config::CollaboratorConfig;
use crate::constants::{endpoints, service_names};
use crate::errors::{AppError, AppResult};
use crate::utils::http_client::{collaborator_client, shared_client};

/// One location and window to forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ForecastRequest {
    location: String,
    start_date_time: NaiveDateTime,
    end_date_time: NaiveDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ForecastRequests {
    forecast_requests: Vec<ForecastRequest>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    forecasts: Option<Vec<Forecast>>,
}

/// Forecast resolver backed by the weather service
///
/// Sends `POST <base>/forecasts` with
/// `{"forecastRequests": [{location, startDateTime, endDateTime}]}` where
/// the window runs from the start date at midnight up to the day after the
/// end date at midnight.
#[derive(Debug, Clone)]
pub struct HttpForecastResolver {
    client: Client,
    base_url: String,
}

impl HttpForecastResolver {
    /// Create a resolver using the shared HTTP client
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(shared_client().clone(), base_url)
    }

    /// Create a resolver with a specific HTTP client
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a resolver from the collaborator configuration
    #[must_use]
    pub fn from_config(config: &CollaboratorConfig) -> Self {
        Self::with_client(
            collaborator_client(config),
            config.weather_service_url.clone(),
        )
    }

    fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoints::FORECASTS_PATH
        )
    }

    #[instrument(skip(self, locations), fields(service = service_names::WEATHER_SERVICE, locations = locations.len()))]
    async fn fetch_forecasts(
        &self,
        locations: &HashSet<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Vec<Forecast>> {
        let body = ForecastRequests {
            forecast_requests: forecast_requests(locations, start_date, end_date)?,
        };

        let response = self
            .client
            .post(self.url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::external_unavailable(
                    service_names::WEATHER_SERVICE,
                    format!("Failed to send forecast request: {e}"),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::external_service(
                service_names::WEATHER_SERVICE,
                format!("Forecast lookup returned status: {status}"),
            ));
        }

        let parsed: ForecastResponse = response.json().await.map_err(|e| {
            AppError::external_service(
                service_names::WEATHER_SERVICE,
                format!("Failed to parse forecast response: {e}"),
            )
        })?;
        Ok(parsed.forecasts.unwrap_or_default())
    }
}

/// Midnight at the start of `date`
fn midnight(date: NaiveDate) -> AppResult<NaiveDateTime> {
    date.and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::internal(format!("no midnight on {date}")))
}

/// One request per location, sorted by location, covering every requested day
fn forecast_requests(
    locations: &HashSet<String>,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> AppResult<Vec<ForecastRequest>> {
    let start_date_time = midnight(start_date)?;
    let day_after_end = end_date
        .checked_add_days(Days::new(1))
        .ok_or_else(|| AppError::invalid_input(format!("end date {end_date} is out of range")))?;
    let end_date_time = midnight(day_after_end)?;

    let mut sorted: Vec<&String> = locations.iter().collect();
    sorted.sort();
    Ok(sorted
        .into_iter()
        .map(|location| ForecastRequest {
            location: location.clone(),
            start_date_time,
            end_date_time,
        })
        .collect())
}

#[async_trait]
impl ForecastResolver for HttpForecastResolver {
    async fn find_forecasts(
        &self,
        locations: &HashSet<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Vec<Forecast> {
        if locations.is_empty() {
            return Vec::new();
        }
        match self.fetch_forecasts(locations, start_date, end_date).await {
            Ok(forecasts) => {
                debug!(received = forecasts.len(), "Forecasts received");
                forecasts
            }
            Err(e) => {
                warn!(%start_date, %end_date, error = %e, "Could not retrieve forecasts, treating as unknown");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_window_ends_the_day_after() {
        let locations = HashSet::from(["Ghent".to_owned()]);
        let start = NaiveDate::from_ymd_opt(2021, 6, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2021, 6, 6).unwrap();

        let requests = forecast_requests(&locations, start, end).unwrap();
        let json = serde_json::to_value(&requests).unwrap();

        assert_eq!(json[0]["location"], "Ghent");
        assert_eq!(json[0]["startDateTime"], "2021-06-05T00:00:00");
        assert_eq!(json[0]["endDateTime"], "2021-06-07T00:00:00");
    }
}
