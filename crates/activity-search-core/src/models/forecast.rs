// ABOUTME: Daily weather forecast for one location, as returned by the forecast collaborator
// ABOUTME: Carries the derived values the suitability check compares against activity constraints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Forecast for one location on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    /// Location query the forecast was made for (a rendered `Location`)
    pub location: String,
    /// Day the forecast applies to
    pub date: NaiveDate,
    /// Forecast provider, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Temperatures in Celsius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Temperature>,
    /// Wind force and direction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<Wind>,
    /// Cloudiness, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloudiness: Option<u8>,
    /// Expected precipitation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<Precipitation>,
}

impl Forecast {
    /// Empty forecast for a location and day, to be completed with the `with_*` setters
    #[must_use]
    pub fn new(location: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            location: location.into(),
            date,
            source: None,
            temperature: None,
            wind: None,
            cloudiness: None,
            precipitation: None,
        }
    }

    /// Set the temperatures
    #[must_use]
    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the wind force in Beaufort
    #[must_use]
    pub fn with_wind(mut self, beaufort: u8) -> Self {
        self.wind = Some(Wind {
            beaufort,
            direction: None,
        });
        self
    }

    /// Set the cloudiness
    #[must_use]
    pub fn with_cloudiness(mut self, cloudiness: u8) -> Self {
        self.cloudiness = Some(cloudiness);
        self
    }

    /// Set the precipitation
    #[must_use]
    pub fn with_precipitation(mut self, precipitation: Precipitation) -> Self {
        self.precipitation = Some(precipitation);
        self
    }
}

/// Forecast temperatures in Celsius
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Temperature {
    /// Lowest temperature of the day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_temperature: Option<f64>,
    /// Highest temperature of the day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_temperature: Option<f64>,
    /// Perceived temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<f64>,
}

impl Temperature {
    /// Temperature to judge the day by: the perceived one, else the maximum
    #[must_use]
    pub fn effective(&self) -> Option<f64> {
        self.feels_like.or(self.max_temperature)
    }
}

/// Forecast wind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wind {
    /// Wind force, 0-12 Beaufort
    pub beaufort: u8,
    /// Compass direction the wind blows from (e.g. "SW")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

/// Kind of precipitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrecipitationType {
    /// Fog
    Fog,
    /// Rain
    Rain,
    /// Snow
    Snow,
    /// Anything else (hail, sleet, ...), never constrained
    #[serde(other)]
    Other,
}

/// Forecast precipitation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Precipitation {
    /// Kind of precipitation
    #[serde(rename = "type")]
    pub kind: PrecipitationType,
    /// Intensity, 0-100
    pub intensity: u8,
    /// Probability, 0-100
    pub probability: f64,
}

impl Precipitation {
    /// Create a precipitation forecast
    #[must_use]
    pub const fn new(kind: PrecipitationType, intensity: u8, probability: f64) -> Self {
        Self {
            kind,
            intensity,
            probability,
        }
    }

    /// Intensity weighted by probability, on a 0-100 scale
    ///
    /// 50% intensity at 50% probability gives 25.
    #[must_use]
    pub fn effective_percentage(&self) -> f64 {
        (f64::from(self.intensity) / 100.0) * (self.probability / 100.0) * 100.0
    }
}
