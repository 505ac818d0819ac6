// ABOUTME: Tests for the batched weather filter
// ABOUTME: Checkable activities, the single forecast lookup and permissive handling of missing data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use activity_search::filters::{ListFilter, WeatherFilter};
use activity_search::models::{ActivityBuilder, Forecast, Weather};
use activity_search::search::{SearchParameter, WeatherParameter};
use common::{
    activity_in, date, init_test_logging, names, outdoor_activity, rainy_forecast,
    RecordingForecastResolver,
};
use std::collections::HashSet;
use std::sync::Arc;

fn dry_only() -> Weather {
    Weather {
        max_rain: Some(20),
        ..Weather::default()
    }
}

fn weekend() -> SearchParameter {
    WeatherParameter {
        start_date: date(2021, 6, 5),
        end_date: date(2021, 6, 6),
    }
    .into()
}

fn filter_with(forecasts: Vec<Forecast>) -> (WeatherFilter, Arc<RecordingForecastResolver>) {
    init_test_logging();
    let resolver = Arc::new(RecordingForecastResolver::new(forecasts));
    (WeatherFilter::new(resolver.clone()), resolver)
}

#[tokio::test]
async fn test_no_lookup_without_checkable_activities() {
    let (filter, resolver) = filter_with(Vec::new());
    let activities = vec![
        activity_in("1", "Museum", "Ghent"),
        ActivityBuilder::new("2", "Picnic").weather(dry_only()).build(),
    ];

    let kept = filter.apply(activities, &weekend()).await;

    assert_eq!(names(&kept), ["Museum", "Picnic"]);
    assert_eq!(resolver.call_count(), 0);
}

#[tokio::test]
async fn test_one_lookup_for_all_checkable_locations() {
    let (filter, resolver) = filter_with(Vec::new());
    let activities = vec![
        outdoor_activity("1", "Picnic", "Ghent", dry_only()),
        outdoor_activity("2", "Canal tour", "Bruges", dry_only()),
        outdoor_activity("3", "Bike ride", "Ghent", dry_only()),
        activity_in("4", "Museum", "Antwerp"),
    ];

    filter.apply(activities, &weekend()).await;

    let calls = resolver.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].locations,
        HashSet::from(["Ghent".to_owned(), "Bruges".to_owned()])
    );
    assert_eq!(calls[0].start_date, date(2021, 6, 5));
    assert_eq!(calls[0].end_date, date(2021, 6, 6));
}

#[tokio::test]
async fn test_missing_forecasts_keep_everything() {
    let (filter, resolver) = filter_with(Vec::new());
    let activities = vec![
        outdoor_activity("1", "Picnic", "Ghent", dry_only()),
        outdoor_activity("2", "Canal tour", "Bruges", dry_only()),
    ];

    let kept = filter.apply(activities, &weekend()).await;

    assert_eq!(names(&kept), ["Picnic", "Canal tour"]);
    assert_eq!(resolver.call_count(), 1);
}

#[tokio::test]
async fn test_one_rainy_day_rejects_the_activity() {
    let (filter, _) = filter_with(vec![
        rainy_forecast("Ghent", date(2021, 6, 5), 0, 0.0),
        rainy_forecast("Ghent", date(2021, 6, 6), 100, 100.0),
        rainy_forecast("Bruges", date(2021, 6, 5), 10, 50.0),
        rainy_forecast("Bruges", date(2021, 6, 6), 0, 0.0),
    ]);
    let activities = vec![
        outdoor_activity("1", "Picnic", "Ghent", dry_only()),
        outdoor_activity("2", "Canal tour", "Bruges", dry_only()),
    ];

    let kept = filter.apply(activities, &weekend()).await;
    assert_eq!(names(&kept), ["Canal tour"]);
}

#[tokio::test]
async fn test_unchecked_activities_pass_alongside_checked_ones() {
    let (filter, _) = filter_with(vec![rainy_forecast("Ghent", date(2021, 6, 5), 100, 100.0)]);
    let activities = vec![
        activity_in("1", "Museum", "Ghent"),
        outdoor_activity("2", "Picnic", "Ghent", dry_only()),
        ActivityBuilder::new("3", "Stargazing").weather(dry_only()).build(),
        outdoor_activity("4", "Rain walk", "Ghent", Weather::default()),
    ];

    let kept = filter.apply(activities, &weekend()).await;
    assert_eq!(names(&kept), ["Museum", "Stargazing", "Rain walk"]);
}

#[tokio::test]
async fn test_forecasts_for_other_locations_are_ignored() {
    let (filter, _) = filter_with(vec![rainy_forecast("Bruges", date(2021, 6, 5), 100, 100.0)]);
    let activities = vec![outdoor_activity("1", "Picnic", "Ghent", dry_only())];

    let kept = filter.apply(activities, &weekend()).await;
    assert_eq!(names(&kept), ["Picnic"]);
}
