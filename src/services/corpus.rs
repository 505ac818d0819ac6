// ABOUTME: Immutable in-memory activity corpus, optionally loaded from a JSON file
// ABOUTME: Date interval rules and weather scales are validated while loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use activity_search_core::models::Activity;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::info;

use super::ActivityCorpus;
use crate::errors::{AppError, AppResult};

/// Snapshot of activities held in memory
///
/// Clones share the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    activities: Arc<[Activity]>,
}

impl InMemoryCorpus {
    /// Corpus holding the given activities, in that order
    #[must_use]
    pub fn from_activities(activities: Vec<Activity>) -> Self {
        Self {
            activities: activities.into(),
        }
    }

    /// Parse a JSON array of activities
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed, a date interval breaks its
    /// construction rules, or a weather bound is out of scale
    pub fn from_json(json: &str) -> AppResult<Self> {
        let activities: Vec<Activity> = serde_json::from_str(json)?;
        for activity in &activities {
            if let Some(weather) = activity.weather() {
                weather.validate().map_err(|e| {
                    AppError::invalid_input(format!(
                        "activity '{}' has invalid weather constraints: {e}",
                        activity.id()
                    ))
                    .with_source(e)
                })?;
            }
        }
        Ok(Self::from_activities(activities))
    }

    /// Load a JSON array of activities from a file
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or its content is invalid
    pub async fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("Failed to read corpus {}: {e}", path.display()))
                .with_source(e)
        })?;
        let corpus = Self::from_json(&json)?;
        info!(path = %path.display(), activities = corpus.len(), "Activity corpus loaded");
        Ok(corpus)
    }

    /// Number of activities
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the corpus holds no activities
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

#[async_trait]
impl ActivityCorpus for InMemoryCorpus {
    async fn find_all(&self) -> Vec<Activity> {
        self.activities.to_vec()
    }
}
