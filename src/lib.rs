// ABOUTME: Main library entry point for the activity search service
// ABOUTME: Filters an activity corpus by date, location, group size, weather and labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Activity Search
//!
//! Selects, from a corpus of activities, those matching every criterion of a
//! search. There is no ranking: an activity either satisfies all parameters
//! or it is left out.
//!
//! ## Architecture
//!
//! - **Search**: typed parameters, request assembly, the two-stage engine
//!   and the corpus-backed service
//! - **Filters**: cheap per-record filters (date, participants, label) and
//!   batched filters backed by collaborators (location, weather)
//! - **Suitability**: comparison of forecasts with weather constraints
//! - **Services**: the activity corpus and the HTTP distance and forecast
//!   resolvers
//! - **Config**: environment-driven settings
//!
//! Domain models live in the `activity-search-core` crate.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use activity_search::config::SearchConfig;
//! use activity_search::errors::AppResult;
//! use activity_search::search::{ActivitySearchService, SearchEngine, SearchRequest};
//! use activity_search::services::{HttpDistanceResolver, HttpForecastResolver, InMemoryCorpus};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = SearchConfig::from_env()?;
//!     let corpus = InMemoryCorpus::from_json_file("activities.json").await?;
//!     let engine = SearchEngine::standard(
//!         Arc::new(HttpDistanceResolver::from_config(&config.collaborators)),
//!         Arc::new(HttpForecastResolver::from_config(&config.collaborators)),
//!         &config.filter_costs,
//!     );
//!     let service = ActivitySearchService::new(Arc::new(corpus), engine);
//!
//!     let request = SearchRequest {
//!         location: Some("Ghent".into()),
//!         number_of_participants: Some(4),
//!         ..SearchRequest::default()
//!     };
//!     let parameters = request.into_parameters(config.default_radius_km)?;
//!     for activity in service.search(&parameters).await {
//!         println!("{}", activity.name());
//!     }
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Per-record and batched filters
pub mod filters;

/// Structured logging setup
pub mod logging;

/// Parameters, engine and search service
pub mod search;

/// Activity corpus and collaborator resolvers
pub mod services;

/// Weather suitability of forecasts
pub mod suitability;

/// HTTP client and calendar helpers
pub mod utils;

pub use activity_search_core::models;
