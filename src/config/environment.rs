// ABOUTME: Environment configuration for the activity search service
// ABOUTME: Parses radius, filter costs, collaborator endpoints and suggestion settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `ACTIVITY_SEARCH_DEFAULT_RADIUS_KM` | 15 |
//! | `ACTIVITY_SEARCH_ITEM_FILTER_COST` | 0 |
//! | `ACTIVITY_SEARCH_LOCATION_FILTER_COST` | 5 |
//! | `ACTIVITY_SEARCH_WEATHER_FILTER_COST` | 10 |
//! | `LOCATION_SERVICE_URL` | `http://localhost:8081` |
//! | `WEATHER_SERVICE_URL` | `http://localhost:8082` |
//! | `COLLABORATOR_TIMEOUT_SECS` | 30 |
//! | `COLLABORATOR_CONNECT_TIMEOUT_SECS` | 10 |
//! | `ACTIVITY_SUGGESTIONS_LOCATION` | unset |
//! | `ACTIVITY_SUGGESTIONS_RADIUS_KM` | 15 |
//! | `ACTIVITY_CORPUS_PATH` | unset |

use crate::constants::{endpoints, env_vars, filter_costs, search_defaults, timeouts};
use crate::errors::{AppError, AppResult};
use reqwest::Url;
use std::env::{self, VarError};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Declared evaluation cost of each filter family, cheapest runs first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCosts {
    /// Date, participants and label filters
    pub item: u32,
    /// Location filter
    pub location: u32,
    /// Weather filter
    pub weather: u32,
}

impl Default for FilterCosts {
    fn default() -> Self {
        Self {
            item: filter_costs::ITEM_FILTER,
            location: filter_costs::LOCATION_FILTER,
            weather: filter_costs::WEATHER_FILTER,
        }
    }
}

/// Where and how to reach the distance and forecast services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaboratorConfig {
    /// Base URL of the distance service
    pub location_service_url: String,
    /// Base URL of the forecast service
    pub weather_service_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for CollaboratorConfig {
    fn default() -> Self {
        Self {
            location_service_url: endpoints::DEFAULT_LOCATION_SERVICE_URL.to_owned(),
            weather_service_url: endpoints::DEFAULT_WEATHER_SERVICE_URL.to_owned(),
            timeout_secs: timeouts::COLLABORATOR_TIMEOUT_SECS,
            connect_timeout_secs: timeouts::COLLABORATOR_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Weekend suggestion settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionConfig {
    /// Location to suggest activities around, suggestions are disabled when unset
    pub location: Option<String>,
    /// Search radius around the location
    pub radius_km: u32,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            location: None,
            radius_km: search_defaults::DEFAULT_RADIUS_KM,
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Radius used when a location search omits one
    pub default_radius_km: u32,
    /// Filter costs
    pub filter_costs: FilterCosts,
    /// Collaborator endpoints
    pub collaborators: CollaboratorConfig,
    /// Weekend suggestions
    pub suggestions: SuggestionConfig,
    /// JSON file holding the activity corpus
    pub corpus_path: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius_km: search_defaults::DEFAULT_RADIUS_KM,
            filter_costs: FilterCosts::default(),
            collaborators: CollaboratorConfig::default(),
            suggestions: SuggestionConfig::default(),
            corpus_path: None,
        }
    }
}

impl SearchConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when a variable is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            default_radius_km: env_parse(
                env_vars::DEFAULT_RADIUS_KM,
                search_defaults::DEFAULT_RADIUS_KM,
            )?,
            filter_costs: FilterCosts {
                item: env_parse(env_vars::ITEM_FILTER_COST, filter_costs::ITEM_FILTER)?,
                location: env_parse(
                    env_vars::LOCATION_FILTER_COST,
                    filter_costs::LOCATION_FILTER,
                )?,
                weather: env_parse(env_vars::WEATHER_FILTER_COST, filter_costs::WEATHER_FILTER)?,
            },
            collaborators: CollaboratorConfig {
                location_service_url: env_url(
                    env_vars::LOCATION_SERVICE_URL,
                    endpoints::DEFAULT_LOCATION_SERVICE_URL,
                )?,
                weather_service_url: env_url(
                    env_vars::WEATHER_SERVICE_URL,
                    endpoints::DEFAULT_WEATHER_SERVICE_URL,
                )?,
                timeout_secs: env_parse(
                    env_vars::COLLABORATOR_TIMEOUT_SECS,
                    timeouts::COLLABORATOR_TIMEOUT_SECS,
                )?,
                connect_timeout_secs: env_parse(
                    env_vars::COLLABORATOR_CONNECT_TIMEOUT_SECS,
                    timeouts::COLLABORATOR_CONNECT_TIMEOUT_SECS,
                )?,
            },
            suggestions: SuggestionConfig {
                location: env_string(env_vars::SUGGESTIONS_LOCATION)?,
                radius_km: env_parse(
                    env_vars::SUGGESTIONS_RADIUS_KM,
                    search_defaults::DEFAULT_RADIUS_KM,
                )?,
            },
            corpus_path: env_string(env_vars::CORPUS_PATH)?.map(PathBuf::from),
        };

        info!(
            default_radius_km = config.default_radius_km,
            location_service = %config.collaborators.location_service_url,
            weather_service = %config.collaborators.weather_service_url,
            "Configuration loaded"
        );
        Ok(config)
    }
}

/// Read a variable, treating absent or blank values as unset
fn env_string(key: &str) -> AppResult<Option<String>> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_owned())),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(AppError::config_invalid(format!(
            "{key} is not valid unicode"
        ))),
    }
}

/// Parse a variable, falling back to the default when it is unset
fn env_parse<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    env_string(key)?.map_or(Ok(default), |raw| {
        raw.parse().map_err(|e| {
            AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}"))
        })
    })
}

/// Read a base URL, rejecting values that do not parse as a URL
fn env_url(key: &str, default: &str) -> AppResult<String> {
    let raw = env_string(key)?.unwrap_or_else(|| default.to_owned());
    Url::parse(&raw)
        .map_err(|e| AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}")))?;
    Ok(raw)
}
