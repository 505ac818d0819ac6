// ABOUTME: Collaborator contracts consumed by the search engine and their implementations
// ABOUTME: Activity corpus, distance resolver and forecast resolver behind async traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Collaborators
//!
//! The engine never performs I/O itself. It reads activities from an
//! [`ActivityCorpus`] and asks a [`DistanceResolver`] and a
//! [`ForecastResolver`] for the data its batched filters need.
//!
//! Resolvers are total: any failure is logged and reported as "no data".

use activity_search_core::models::{Activity, Distance, Forecast};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;

/// In-memory and file-backed activity corpus
pub mod corpus;
/// HTTP client for the location service
pub mod distance;
/// HTTP client for the weather service
pub mod forecast;

pub use corpus::InMemoryCorpus;
pub use distance::HttpDistanceResolver;
pub use forecast::HttpForecastResolver;

/// Source of the candidate activities
#[async_trait]
pub trait ActivityCorpus: Send + Sync {
    /// Every activity, in corpus order
    async fn find_all(&self) -> Vec<Activity>;
}

/// Resolves distances between a place and many destinations in one call
#[async_trait]
pub trait DistanceResolver: Send + Sync {
    /// Distance from `origin` to each destination
    ///
    /// Destinations the service could not resolve are absent from the result.
    /// Returns an empty list on any failure.
    async fn find_distance(&self, origin: &str, destinations: &HashSet<String>) -> Vec<Distance>;
}

/// Resolves forecasts for many locations in one call
#[async_trait]
pub trait ForecastResolver: Send + Sync {
    /// Forecasts for every location between both dates, inclusive
    ///
    /// Returns an empty list on any failure.
    async fn find_forecasts(
        &self,
        locations: &HashSet<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Vec<Forecast>;
}
