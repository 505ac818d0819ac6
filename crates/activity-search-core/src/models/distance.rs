// ABOUTME: Distance between two free-text location queries, as resolved by the location collaborator
// ABOUTME: Also defines the query pair sent to that collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One origin/destination pair to resolve
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DistanceQuery {
    /// What the user searched for
    #[serde(rename = "location1Query")]
    pub origin_query: String,
    /// Rendered location of an activity
    #[serde(rename = "location2Query")]
    pub destination_query: String,
}

/// Resolved distance between an origin and a destination query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    /// Origin as it was queried
    #[serde(rename = "location1Query")]
    pub origin_query: String,
    /// Destination as it was queried
    #[serde(rename = "location2Query")]
    pub destination_query: String,
    /// Distance in kilometres
    pub km: f64,
}

impl Distance {
    /// Create a resolved distance
    #[must_use]
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, km: f64) -> Self {
        Self {
            origin_query: origin.into(),
            destination_query: destination.into(),
            km,
        }
    }
}
