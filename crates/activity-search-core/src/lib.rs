// ABOUTME: Core domain types and constants for the activity search engine
// ABOUTME: Foundation crate with activity models, calendar intervals, forecasts and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Activity Search Core
//!
//! Foundation crate providing the shared domain types of the activity search
//! engine. Nothing in here performs I/O: the types are value objects that the
//! search engine reads, plus the construction-time validation that guards
//! them.
//!
//! ## Modules
//!
//! - **models**: `Activity`, `Location`, `Weather`, `DateInterval`, `Forecast`, `Distance`
//! - **errors**: Construction validation errors
//! - **constants**: Default radius and filter costs

/// Construction validation errors for domain types
pub mod errors;

/// Domain defaults (search radius, filter costs)
pub mod constants;

/// Core data models (Activity, `DateInterval`, Weather, Forecast, etc.)
pub mod models;
