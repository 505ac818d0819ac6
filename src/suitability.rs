// ABOUTME: Weather suitability check comparing forecasts with an activity's weather constraints
// ABOUTME: Every forecast day must satisfy every constrained axis; unknown values never fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Weather Suitability
//!
//! An activity is suitable for a window when each forecast of the window
//! satisfies all of its constraints. One bad day disqualifies the whole
//! window.
//!
//! Per axis:
//!
//! | Axis | Forecast value | Fails when |
//! |---|---|---|
//! | temperature | feels-like, else maximum | below `min_temperature` or above `max_temperature` |
//! | wind | Beaufort force | below `min_wind` or above `max_wind` |
//! | cloudiness | cloudiness | above `max_cloudiness` |
//! | precipitation | intensity x probability | above `max_fog`, `max_rain` or `max_snow` depending on its type |
//!
//! An axis passes when the forecast lacks the value or the activity sets
//! no bound for it.

use activity_search_core::models::{Forecast, Precipitation, PrecipitationType, Weather};

/// Whether every forecast satisfies the constraints
///
/// An empty forecast list means the weather is unknown, which passes.
#[must_use]
pub fn is_suitable<'a>(
    constraints: &Weather,
    forecasts: impl IntoIterator<Item = &'a Forecast>,
) -> bool {
    forecasts
        .into_iter()
        .all(|forecast| forecast_satisfies(constraints, forecast))
}

/// Whether a single forecast satisfies all constraints
#[must_use]
pub fn forecast_satisfies(constraints: &Weather, forecast: &Forecast) -> bool {
    temperature_ok(constraints, forecast)
        && wind_ok(constraints, forecast)
        && cloudiness_ok(constraints, forecast)
        && precipitation_ok(constraints, forecast)
}

fn temperature_ok(constraints: &Weather, forecast: &Forecast) -> bool {
    let Some(actual) = forecast.temperature.as_ref().and_then(|t| t.effective()) else {
        return true;
    };
    let above_min = constraints
        .min_temperature
        .is_none_or(|min| f64::from(min) <= actual);
    let below_max = constraints
        .max_temperature
        .is_none_or(|max| actual <= f64::from(max));
    above_min && below_max
}

fn wind_ok(constraints: &Weather, forecast: &Forecast) -> bool {
    let Some(wind) = forecast.wind.as_ref() else {
        return true;
    };
    constraints.min_wind.is_none_or(|min| wind.beaufort >= min)
        && constraints.max_wind.is_none_or(|max| wind.beaufort <= max)
}

fn cloudiness_ok(constraints: &Weather, forecast: &Forecast) -> bool {
    match (forecast.cloudiness, constraints.max_cloudiness) {
        (Some(cloudiness), Some(max)) => cloudiness <= max,
        _ => true,
    }
}

fn precipitation_ok(constraints: &Weather, forecast: &Forecast) -> bool {
    let Some(precipitation) = forecast.precipitation.as_ref() else {
        return true;
    };
    threshold_for(constraints, precipitation)
        .is_none_or(|max| precipitation.effective_percentage() <= f64::from(max))
}

/// Activity threshold matching the forecast's precipitation type
const fn threshold_for(constraints: &Weather, precipitation: &Precipitation) -> Option<u8> {
    match precipitation.kind {
        PrecipitationType::Fog => constraints.max_fog,
        PrecipitationType::Rain => constraints.max_rain,
        PrecipitationType::Snow => constraints.max_snow,
        PrecipitationType::Other => None,
    }
}
