// ABOUTME: Domain defaults for activity searches
// ABOUTME: Default location radius and the declared evaluation cost of each filter family
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain constants
//!
//! These are the built-in defaults. The application crate lets the
//! environment override every one of them.

/// Defaults applied while assembling search parameters
pub mod search_defaults {
    /// Radius used when a location search does not specify one
    pub const DEFAULT_RADIUS_KM: u32 = 15;
}

/// Declared filter costs, used to order filter execution (cheapest first)
pub mod filter_costs {
    /// Per-record, in-memory filters (date, participants, label)
    pub const ITEM_FILTER: u32 = 0;

    /// Location filter, one call to the distance collaborator
    pub const LOCATION_FILTER: u32 = 5;

    /// Weather filter, one call to the forecast collaborator
    pub const WEATHER_FILTER: u32 = 10;
}

/// Scale bounds of weather axes
pub mod weather_scales {
    /// Upper bound of percentage axes (cloudiness, rain, snow, fog)
    pub const MAX_PERCENTAGE: u8 = 100;

    /// Upper bound of the Beaufort wind scale
    pub const MAX_BEAUFORT: u8 = 12;
}
