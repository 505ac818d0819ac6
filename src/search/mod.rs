// ABOUTME: Search module with parameters, request assembly, the engine and the search service
// ABOUTME: Re-exports the types callers need to run a search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Two-stage filter pipeline
pub mod engine;
/// Typed search criteria
pub mod parameters;
/// Raw inbound search request
pub mod request;
/// Corpus-backed search service
pub mod service;

pub use engine::SearchEngine;
pub use parameters::{
    DateParameter, LabelParameter, LocationParameter, ParameterKind, ParticipantsParameter,
    SearchParameter, WeatherParameter,
};
pub use request::SearchRequest;
pub use service::ActivitySearchService;
