// ABOUTME: Postal location of an activity and its canonical rendering
// ABOUTME: The rendered string keys both distance queries and forecast lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::once;

/// Where an activity takes place. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Street name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// House number, kept as text ("21b")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// City or town
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Province, state or region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    /// Country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Returns the part when it holds something other than whitespace
fn filled(part: Option<&String>) -> Option<&str> {
    part.map(String::as_str).filter(|value| !value.trim().is_empty())
}

impl Location {
    /// Location consisting of a city only
    #[must_use]
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Self::default()
        }
    }

    /// Set the street and house number
    #[must_use]
    pub fn with_street(mut self, street: impl Into<String>, number: Option<String>) -> Self {
        self.street = Some(street.into());
        self.number = number;
        self
    }

    /// Set the province
    #[must_use]
    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    /// Set the country
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Whether the user input names this location's city, province or country exactly
    #[must_use]
    pub fn literal_match(&self, user_input: &str) -> bool {
        [&self.city, &self.province, &self.country]
            .into_iter()
            .any(|part| part.as_deref() == Some(user_input))
    }

    /// Canonical rendering, e.g. `"Zottekesstraat 21, Zottegem, Oost-Vlaanderen, België"`
    ///
    /// Blank parts are skipped, so an empty location renders as `""`.
    #[must_use]
    pub fn render(&self) -> String {
        let street_line = [filled(self.street.as_ref()), filled(self.number.as_ref())]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        once(street_line.as_str())
            .chain(filled(self.city.as_ref()))
            .chain(filled(self.province.as_ref()))
            .chain(filled(self.country.as_ref()))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether the rendering holds nothing usable for a lookup
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.render().trim().is_empty()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
