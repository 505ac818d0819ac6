// ABOUTME: Activity search service combining the activity corpus with the search engine
// ABOUTME: Entry point for searches, label listing and weekend suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use activity_search_core::models::Activity;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, instrument};

use super::engine::SearchEngine;
use super::parameters::{LocationParameter, SearchParameter, WeatherParameter};
use crate::services::ActivityCorpus;
use crate::utils::dates::next_weekend;

/// Searches the corpus with the engine's filters
pub struct ActivitySearchService {
    corpus: Arc<dyn ActivityCorpus>,
    engine: SearchEngine,
}

impl ActivitySearchService {
    /// Create a service over a corpus
    #[must_use]
    pub fn new(corpus: Arc<dyn ActivityCorpus>, engine: SearchEngine) -> Self {
        Self { corpus, engine }
    }

    /// Activities satisfying every parameter, in corpus order
    ///
    /// Never fails: collaborator outages make filtering more permissive
    /// instead of aborting the search.
    pub async fn search(&self, parameters: &[SearchParameter]) -> Vec<Activity> {
        info!(
            parameters = ?parameters.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "Searching for activities"
        );

        let activities = self.corpus.find_all().await;
        let found = self.engine.filter(activities, parameters).await;

        info!(
            found = ?found.iter().map(Activity::name).collect::<Vec<_>>(),
            "Search finished"
        );
        found
    }

    /// Every distinct label in the corpus, in order of first appearance
    pub async fn labels(&self) -> Vec<String> {
        info!("Finding all labels");
        let mut seen = HashSet::new();
        self.corpus
            .find_all()
            .await
            .iter()
            .flat_map(Activity::labels)
            .filter(|label| seen.insert(label.as_str().to_owned()))
            .cloned()
            .collect()
    }

    /// Activities near `location` whose weather needs are met next weekend
    ///
    /// The weekend is the first Saturday strictly after `today` and the
    /// Sunday after it.
    #[instrument(skip(self))]
    pub async fn weekend_suggestions(
        &self,
        today: NaiveDate,
        location: &str,
        radius_km: u32,
    ) -> Vec<Activity> {
        let (saturday, sunday) = next_weekend(today);
        let parameters = [
            SearchParameter::Location(LocationParameter {
                name: location.to_owned(),
                radius_km,
            }),
            SearchParameter::Weather(WeatherParameter {
                start_date: saturday,
                end_date: sunday,
            }),
        ];

        let suggestions = self.search(&parameters).await;
        if suggestions.is_empty() {
            info!(%saturday, %sunday, "No activities found for next weekend");
        } else {
            info!(
                %saturday,
                %sunday,
                count = suggestions.len(),
                "Found activities for next weekend"
            );
        }
        suggestions
    }
}
