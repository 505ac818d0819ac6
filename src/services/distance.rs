// ABOUTME: HTTP client for the location service resolving distances in one batched request
// ABOUTME: Any transport, status or body failure is logged and reported as no distances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use activity_search_core::models::{Distance, DistanceQuery};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

use super::DistanceResolver;
use crate::config::CollaboratorConfig;
use crate::constants::{endpoints, service_names};
use crate::errors::{AppError, AppResult};
use crate::utils::http_client::{collaborator_client, shared_client};

/// Distance resolver backed by the location service
///
/// Sends `POST <base>/distance` with a JSON array of
/// `{location1Query, location2Query}` pairs and expects the same pairs back
/// with a `km` field.
#[derive(Debug, Clone)]
pub struct HttpDistanceResolver {
    client: Client,
    base_url: String,
}

impl HttpDistanceResolver {
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
            config.location_service_url.clone(),
        )
    }

    fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoints::DISTANCE_PATH
        )
    }

    #[instrument(skip(self, destinations), fields(service = service_names::LOCATION_SERVICE, destinations = destinations.len()))]
    async fn fetch_distances(
        &self,
        origin: &str,
        destinations: &HashSet<String>,
    ) -> AppResult<Vec<Distance>> {
        let mut sorted: Vec<&String> = destinations.iter().collect();
        sorted.sort();
        let queries: Vec<DistanceQuery> = sorted
            .into_iter()
            .map(|destination| DistanceQuery {
                origin_query: origin.to_owned(),
                destination_query: destination.clone(),
            })
            .collect();

        let response = self
            .client
            .post(self.url())
            .json(&queries)
            .send()
            .await
            .map_err(|e| {
                AppError::external_unavailable(
                    service_names::LOCATION_SERVICE,
                    format!("Failed to send distance request: {e}"),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::external_service(
                service_names::LOCATION_SERVICE,
                format!("Distance lookup returned status: {status}"),
            ));
        }

        response.json().await.map_err(|e| {
            AppError::external_service(
                service_names::LOCATION_SERVICE,
                format!("Failed to parse distance response: {e}"),
            )
        })
    }
}

#[async_trait]
impl DistanceResolver for HttpDistanceResolver {
    async fn find_distance(&self, origin: &str, destinations: &HashSet<String>) -> Vec<Distance> {
        if destinations.is_empty() {
            return Vec::new();
        }
        match self.fetch_distances(origin, destinations).await {
            Ok(distances) => {
                debug!(resolved = distances.len(), "Distances resolved");
                distances
            }
            Err(e) => {
                warn!(origin, error = %e, "Could not resolve distances, treating as unknown");
                Vec::new()
            }
        }
    }
}
