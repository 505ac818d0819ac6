// ABOUTME: Application constants for the activity search service
// ABOUTME: Environment variable names, collaborator endpoints, timeouts and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Domain defaults (radius, filter costs, weather scales) live in
//! `activity_search_core::constants` and are re-exported here.

pub use activity_search_core::constants::{filter_costs, search_defaults, weather_scales};

/// Names of the environment variables read by `SearchConfig`
pub mod env_vars {
    /// Radius used when a location search omits one
    pub const DEFAULT_RADIUS_KM: &str = "ACTIVITY_SEARCH_DEFAULT_RADIUS_KM";
    /// Declared cost of the per-record filters
    pub const ITEM_FILTER_COST: &str = "ACTIVITY_SEARCH_ITEM_FILTER_COST";
    /// Declared cost of the location filter
    pub const LOCATION_FILTER_COST: &str = "ACTIVITY_SEARCH_LOCATION_FILTER_COST";
    /// Declared cost of the weather filter
    pub const WEATHER_FILTER_COST: &str = "ACTIVITY_SEARCH_WEATHER_FILTER_COST";
    /// Base URL of the distance service
    pub const LOCATION_SERVICE_URL: &str = "LOCATION_SERVICE_URL";
    /// Base URL of the forecast service
    pub const WEATHER_SERVICE_URL: &str = "WEATHER_SERVICE_URL";
    /// Request timeout for collaborator calls
    pub const COLLABORATOR_TIMEOUT_SECS: &str = "COLLABORATOR_TIMEOUT_SECS";
    /// Connect timeout for collaborator calls
    pub const COLLABORATOR_CONNECT_TIMEOUT_SECS: &str = "COLLABORATOR_CONNECT_TIMEOUT_SECS";
    /// Location used for weekend suggestions
    pub const SUGGESTIONS_LOCATION: &str = "ACTIVITY_SUGGESTIONS_LOCATION";
    /// Radius used for weekend suggestions
    pub const SUGGESTIONS_RADIUS_KM: &str = "ACTIVITY_SUGGESTIONS_RADIUS_KM";
    /// JSON file holding the activity corpus
    pub const CORPUS_PATH: &str = "ACTIVITY_CORPUS_PATH";
}

/// Collaborator endpoints
pub mod endpoints {
    /// Default base URL of the distance service
    pub const DEFAULT_LOCATION_SERVICE_URL: &str = "http://localhost:8081";
    /// Default base URL of the forecast service
    pub const DEFAULT_WEATHER_SERVICE_URL: &str = "http://localhost:8082";
    /// Path of the batched distance lookup
    pub const DISTANCE_PATH: &str = "distance";
    /// Path of the batched forecast lookup
    pub const FORECASTS_PATH: &str = "forecasts";
}

/// HTTP timeouts
pub mod timeouts {
    /// Collaborator request timeout in seconds
    pub const COLLABORATOR_TIMEOUT_SECS: u64 = 30;
    /// Collaborator connect timeout in seconds
    pub const COLLABORATOR_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Service names used in logs and error messages
pub mod service_names {
    /// This service
    pub const ACTIVITY_SEARCH: &str = "activity-search";
    /// Distance collaborator
    pub const LOCATION_SERVICE: &str = "location-service";
    /// Forecast collaborator
    pub const WEATHER_SERVICE: &str = "weather-service";
}
