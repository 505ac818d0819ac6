// ABOUTME: Typed search criteria assembled from an inbound search request
// ABOUTME: Closed set of parameter variants, each created only when its inputs are present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of a [`SearchParameter`], used to route parameters to filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Proximity to a named place
    Location,
    /// Availability within a date range
    Date,
    /// Group size
    Participants,
    /// Forecast suitability within a date range
    Weather,
    /// Label intersection
    Label,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Location => "location",
            Self::Date => "date",
            Self::Participants => "participants",
            Self::Weather => "weather",
            Self::Label => "label",
        };
        f.write_str(name)
    }
}

/// Activities within `radius_km` of the place called `name`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationParameter {
    /// Place as typed by the user
    pub name: String,
    /// Maximum distance in kilometres
    pub radius_km: u32,
}

impl LocationParameter {
    /// Create the parameter when a location was given, applying `default_radius_km` when the radius is absent
    #[must_use]
    pub fn create(
        name: Option<String>,
        radius_km: Option<u32>,
        default_radius_km: u32,
    ) -> Option<Self> {
        name.map(|name| Self {
            name,
            radius_km: radius_km.unwrap_or(default_radius_km),
        })
    }
}

/// Activities available on at least one day between both dates, inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateParameter {
    /// First requested day
    pub start_date: NaiveDate,
    /// Last requested day
    pub end_date: NaiveDate,
}

impl DateParameter {
    /// Create the parameter when both dates are present
    #[must_use]
    pub fn create(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Option<Self> {
        Some(Self {
            start_date: start_date?,
            end_date: end_date?,
        })
    }
}

/// Activities that accept a group of `count` people
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantsParameter {
    /// Group size
    pub count: u32,
}

impl ParticipantsParameter {
    /// Create the parameter when a count is present
    #[must_use]
    pub fn create(count: Option<u32>) -> Option<Self> {
        count.map(|count| Self { count })
    }
}

/// Activities whose weather needs are met by the forecast between both dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherParameter {
    /// First requested day
    pub start_date: NaiveDate,
    /// Last requested day
    pub end_date: NaiveDate,
}

impl WeatherParameter {
    /// Create the parameter only when the caller opted in and both dates are present
    #[must_use]
    pub fn create(
        consider_weather: Option<bool>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Option<Self> {
        if consider_weather != Some(true) {
            return None;
        }
        Some(Self {
            start_date: start_date?,
            end_date: end_date?,
        })
    }
}

/// Activities carrying at least one of the labels
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "LabelList")]
pub struct LabelParameter {
    labels_to_look_for: Vec<String>,
}

/// Wire form of [`LabelParameter`] before the non-empty check
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LabelList {
    labels_to_look_for: Vec<String>,
}

impl TryFrom<LabelList> for LabelParameter {
    type Error = &'static str;

    fn try_from(list: LabelList) -> Result<Self, Self::Error> {
        Self::create(Some(list.labels_to_look_for))
            .ok_or("labelsToLookFor must name at least one label")
    }
}

impl LabelParameter {
    /// Create the parameter when at least one label is given
    #[must_use]
    pub fn create(labels: Option<Vec<String>>) -> Option<Self> {
        labels
            .filter(|labels| !labels.is_empty())
            .map(|labels_to_look_for| Self { labels_to_look_for })
    }

    /// Labels to look for, never empty
    #[must_use]
    pub fn labels_to_look_for(&self) -> &[String] {
        &self.labels_to_look_for
    }
}

/// One search criterion
///
/// A search is the conjunction of all its parameters. Every variant is
/// optional in a request, see [`crate::search::SearchRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchParameter {
    /// Proximity
    Location(LocationParameter),
    /// Availability
    Date(DateParameter),
    /// Group size
    Participants(ParticipantsParameter),
    /// Forecast suitability
    Weather(WeatherParameter),
    /// Labels
    Label(LabelParameter),
}

impl SearchParameter {
    /// Discriminant of this parameter
    #[must_use]
    pub const fn kind(&self) -> ParameterKind {
        match self {
            Self::Location(_) => ParameterKind::Location,
            Self::Date(_) => ParameterKind::Date,
            Self::Participants(_) => ParameterKind::Participants,
            Self::Weather(_) => ParameterKind::Weather,
            Self::Label(_) => ParameterKind::Label,
        }
    }
}

impl fmt::Display for SearchParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Location(p) => write!(f, "location({} within {} km)", p.name, p.radius_km),
            Self::Date(p) => write!(f, "date({}..={})", p.start_date, p.end_date),
            Self::Participants(p) => write!(f, "participants({})", p.count),
            Self::Weather(p) => write!(f, "weather({}..={})", p.start_date, p.end_date),
            Self::Label(p) => write!(f, "label({})", p.labels_to_look_for.join(", ")),
        }
    }
}

impl From<LocationParameter> for SearchParameter {
    fn from(parameter: LocationParameter) -> Self {
        Self::Location(parameter)
    }
}

impl From<DateParameter> for SearchParameter {
    fn from(parameter: DateParameter) -> Self {
        Self::Date(parameter)
    }
}

impl From<ParticipantsParameter> for SearchParameter {
    fn from(parameter: ParticipantsParameter) -> Self {
        Self::Participants(parameter)
    }
}

impl From<WeatherParameter> for SearchParameter {
    fn from(parameter: WeatherParameter) -> Self {
        Self::Weather(parameter)
    }
}

impl From<LabelParameter> for SearchParameter {
    fn from(parameter: LabelParameter) -> Self {
        Self::Label(parameter)
    }
}
