// ABOUTME: Weather constraints an activity places on the forecast
// ABOUTME: Every bound is optional; an unset bound places no constraint on its axis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::weather_scales::{MAX_BEAUFORT, MAX_PERCENTAGE};
use crate::errors::WeatherError;

/// Weather an activity needs in order to be enjoyable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    /// Minimum temperature in Celsius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_temperature: Option<i32>,
    /// Maximum temperature in Celsius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_temperature: Option<i32>,
    /// Maximum cloudiness, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cloudiness: Option<u8>,
    /// Maximum effective rain percentage, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rain: Option<u8>,
    /// Maximum effective snow percentage, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_snow: Option<u8>,
    /// Maximum effective fog percentage, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fog: Option<u8>,
    /// Minimum wind force in Beaufort
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_wind: Option<u8>,
    /// Maximum wind force in Beaufort
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_wind: Option<u8>,
}

impl Weather {
    /// Whether no axis is constrained at all
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.min_temperature.is_none()
            && self.max_temperature.is_none()
            && self.max_cloudiness.is_none()
            && self.max_rain.is_none()
            && self.max_snow.is_none()
            && self.max_fog.is_none()
            && self.min_wind.is_none()
            && self.max_wind.is_none()
    }

    /// Check that every bound lies on its scale and lower bounds do not exceed upper bounds
    ///
    /// # Errors
    ///
    /// Returns the first [`WeatherError`] found
    pub fn validate(&self) -> Result<(), WeatherError> {
        let percentages = [
            ("max_cloudiness", self.max_cloudiness),
            ("max_rain", self.max_rain),
            ("max_snow", self.max_snow),
            ("max_fog", self.max_fog),
        ];
        let winds = [("min_wind", self.min_wind), ("max_wind", self.max_wind)];

        for (axis, value, max) in percentages
            .into_iter()
            .map(|(axis, value)| (axis, value, MAX_PERCENTAGE))
            .chain(winds.into_iter().map(|(axis, value)| (axis, value, MAX_BEAUFORT)))
        {
            if let Some(value) = value.filter(|value| *value > max) {
                return Err(WeatherError::OutOfScale { axis, value, max });
            }
        }

        if let (Some(min), Some(max)) = (self.min_temperature, self.max_temperature) {
            if min > max {
                return Err(WeatherError::InvertedBounds {
                    axis: "temperature",
                    min,
                    max,
                });
            }
        }
        if let (Some(min), Some(max)) = (self.min_wind, self.max_wind) {
            if min > max {
                return Err(WeatherError::InvertedBounds {
                    axis: "wind",
                    min: i32::from(min),
                    max: i32::from(max),
                });
            }
        }
        Ok(())
    }
}
