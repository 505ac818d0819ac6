// ABOUTME: Domain models consumed by the activity search engine
// ABOUTME: Activities, their schedule and weather constraints, and collaborator value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod activity;
mod date_interval;
mod distance;
mod forecast;
mod location;
mod time_interval;
mod weather;

pub use activity::{Activity, ActivityBuilder};
pub use date_interval::{DateInterval, DateIntervalBuilder};
pub use distance::{Distance, DistanceQuery};
pub use forecast::{Forecast, Precipitation, PrecipitationType, Temperature, Wind};
pub use location::Location;
pub use time_interval::TimeInterval;
pub use weather::Weather;
