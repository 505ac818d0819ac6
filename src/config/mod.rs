// ABOUTME: Configuration module for the activity search service
// ABOUTME: Re-exports the environment-driven configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables and are parsed once into
//! [`SearchConfig`]. See [`environment`] for the variable names and defaults.

/// Environment configuration
pub mod environment;

pub use environment::{CollaboratorConfig, FilterCosts, SearchConfig, SuggestionConfig};
