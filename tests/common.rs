// ABOUTME: Shared test utilities for the activity search integration tests
// ABOUTME: Recording collaborator fakes, activity fixtures and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `activity_search`

use activity_search::models::{
    Activity, ActivityBuilder, Distance, Forecast, Location, Precipitation, PrecipitationType,
    Temperature, Weather,
};
use activity_search::services::{DistanceResolver, ForecastResolver};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::env;
use std::sync::{Mutex, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Activity located in a city, with no other constraint
pub fn activity_in(id: &str, name: &str, city: &str) -> Activity {
    ActivityBuilder::new(id, name)
        .location(Location::city(city))
        .build()
}

/// Activity located in a city with weather constraints
pub fn outdoor_activity(id: &str, name: &str, city: &str, weather: Weather) -> Activity {
    ActivityBuilder::new(id, name)
        .location(Location::city(city))
        .weather(weather)
        .build()
}

pub fn names(activities: &[Activity]) -> Vec<&str> {
    activities.iter().map(Activity::name).collect()
}

/// Forecast with rain at the given intensity and probability
pub fn rainy_forecast(location: &str, day: NaiveDate, intensity: u8, probability: f64) -> Forecast {
    Forecast::new(location, day).with_precipitation(Precipitation::new(
        PrecipitationType::Rain,
        intensity,
        probability,
    ))
}

/// Forecast with a feels-like temperature
pub fn forecast_feeling(location: &str, day: NaiveDate, feels_like: f64) -> Forecast {
    Forecast::new(location, day).with_temperature(Temperature {
        min_temperature: None,
        max_temperature: None,
        feels_like: Some(feels_like),
    })
}

/// Arguments of one distance lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceCall {
    pub origin: String,
    pub destinations: HashSet<String>,
}

/// Distance resolver answering from a fixed table and recording every call
#[derive(Default)]
pub struct RecordingDistanceResolver {
    distances: Vec<Distance>,
    calls: Mutex<Vec<DistanceCall>>,
}

impl RecordingDistanceResolver {
    pub fn new(distances: Vec<Distance>) -> Self {
        Self {
            distances,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<DistanceCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DistanceResolver for RecordingDistanceResolver {
    async fn find_distance(&self, origin: &str, destinations: &HashSet<String>) -> Vec<Distance> {
        self.calls.lock().unwrap().push(DistanceCall {
            origin: origin.to_owned(),
            destinations: destinations.clone(),
        });
        self.distances
            .iter()
            .filter(|distance| destinations.contains(&distance.destination_query))
            .cloned()
            .collect()
    }
}

/// Arguments of one forecast lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastCall {
    pub locations: HashSet<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Forecast resolver answering from a fixed table and recording every call
#[derive(Default)]
pub struct RecordingForecastResolver {
    forecasts: Vec<Forecast>,
    calls: Mutex<Vec<ForecastCall>>,
}

impl RecordingForecastResolver {
    pub fn new(forecasts: Vec<Forecast>) -> Self {
        Self {
            forecasts,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ForecastCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ForecastResolver for RecordingForecastResolver {
    async fn find_forecasts(
        &self,
        locations: &HashSet<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Vec<Forecast> {
        self.calls.lock().unwrap().push(ForecastCall {
            locations: locations.clone(),
            start_date,
            end_date,
        });
        self.forecasts
            .iter()
            .filter(|forecast| locations.contains(&forecast.location))
            .cloned()
            .collect()
    }
}
