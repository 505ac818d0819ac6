// ABOUTME: Activity model and ActivityBuilder for the search corpus
// ABOUTME: Location, weather constraints, participant bounds, availability windows and labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{DateInterval, Location, TimeInterval, Weather};

/// Something to do, with the conditions under which it can be done
///
/// Activities are owned by the corpus; searches only read them. Fields are
/// private, use the accessors to read and [`ActivityBuilder`] to construct.
///
/// # Examples
///
/// ```rust
/// use activity_search_core::models::{ActivityBuilder, Location};
///
/// let activity = ActivityBuilder::new("1", "Kayaking on the Leie")
///     .location(Location::city("Ghent"))
///     .participants(2, Some(8))
///     .label("water")
///     .build();
///
/// assert_eq!(activity.min_number_of_participants(), 2);
/// assert!(activity.labels().contains("water"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    id: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weather: Option<Weather>,
    #[serde(default)]
    min_number_of_participants: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_number_of_participants: Option<u32>,
    #[serde(default)]
    date_intervals: Vec<DateInterval>,
    #[serde(default)]
    time_intervals: Vec<TimeInterval>,
    #[serde(default)]
    labels: BTreeSet<String>,
}

impl Activity {
    /// Unique identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Where the activity was found (website, book, friend)
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Where the activity takes place
    #[must_use]
    pub const fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Weather the activity needs
    #[must_use]
    pub const fn weather(&self) -> Option<&Weather> {
        self.weather.as_ref()
    }

    /// Minimum group size
    #[must_use]
    pub const fn min_number_of_participants(&self) -> u32 {
        self.min_number_of_participants
    }

    /// Maximum group size, unbounded when `None`
    #[must_use]
    pub const fn max_number_of_participants(&self) -> Option<u32> {
        self.max_number_of_participants
    }

    /// Periods in which the activity is available; empty means always
    #[must_use]
    pub fn date_intervals(&self) -> &[DateInterval] {
        &self.date_intervals
    }

    /// Hours in which the activity is available
    #[must_use]
    pub fn time_intervals(&self) -> &[TimeInterval] {
        &self.time_intervals
    }

    /// Labels attached to the activity
    #[must_use]
    pub const fn labels(&self) -> &BTreeSet<String> {
        &self.labels
    }

    /// Rendered location, `None` when there is no location or it is blank
    #[must_use]
    pub fn location_query(&self) -> Option<String> {
        self.location
            .as_ref()
            .map(Location::render)
            .filter(|rendered| !rendered.trim().is_empty())
    }
}

/// Builder for [`Activity`]
#[derive(Debug, Clone)]
pub struct ActivityBuilder {
    activity: Activity,
}

impl ActivityBuilder {
    /// Creates a new `ActivityBuilder` with required fields
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            activity: Activity {
                id: id.into(),
                name: name.into(),
                description: None,
                source: None,
                location: None,
                weather: None,
                min_number_of_participants: 0,
                max_number_of_participants: None,
                date_intervals: Vec::new(),
                time_intervals: Vec::new(),
                labels: BTreeSet::new(),
            },
        }
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.activity.description = Some(description.into());
        self
    }

    /// Set the source
    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.activity.source = Some(source.into());
        self
    }

    /// Set the location
    #[must_use]
    pub fn location(mut self, location: Location) -> Self {
        self.activity.location = Some(location);
        self
    }

    /// Set the weather constraints
    #[must_use]
    pub fn weather(mut self, weather: Weather) -> Self {
        self.activity.weather = Some(weather);
        self
    }

    /// Set the participant bounds
    #[must_use]
    pub fn participants(mut self, min: u32, max: Option<u32>) -> Self {
        self.activity.min_number_of_participants = min;
        self.activity.max_number_of_participants = max;
        self
    }

    /// Add an availability window
    #[must_use]
    pub fn date_interval(mut self, interval: DateInterval) -> Self {
        self.activity.date_intervals.push(interval);
        self
    }

    /// Add opening hours
    #[must_use]
    pub fn time_interval(mut self, interval: TimeInterval) -> Self {
        self.activity.time_intervals.push(interval);
        self
    }

    /// Add a label
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.activity.labels.insert(label.into());
        self
    }

    /// Build the activity
    #[must_use]
    pub fn build(self) -> Activity {
        self.activity
    }
}
