// ABOUTME: Shared HTTP client utilities with connection pooling and timeout configuration
// ABOUTME: Provides singleton and configurable HTTP clients for the collaborator resolvers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::CollaboratorConfig;
use crate::constants::timeouts;
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Global shared HTTP client with default configuration
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client with default settings
///
/// This client uses connection pooling and the default collaborator timeouts.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        create_client_with_timeout(
            timeouts::COLLABORATOR_TIMEOUT_SECS,
            timeouts::COLLABORATOR_CONNECT_TIMEOUT_SECS,
        )
    })
}

/// Create a new HTTP client with custom timeout settings
///
/// Falls back to a default client if the builder fails.
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Create the client used to reach the distance and forecast services
#[must_use]
pub fn collaborator_client(config: &CollaboratorConfig) -> Client {
    create_client_with_timeout(config.timeout_secs, config.connect_timeout_secs)
}
