// ABOUTME: Tests for the batched location filter
// ABOUTME: Literal matches, the single distance lookup, radius checks and order preservation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use activity_search::filters::{ListFilter, LocationFilter};
use activity_search::models::{ActivityBuilder, Distance, Location};
use activity_search::search::{LocationParameter, ParticipantsParameter, SearchParameter};
use common::{activity_in, init_test_logging, names, RecordingDistanceResolver};
use std::collections::HashSet;
use std::sync::Arc;

fn near(name: &str, radius_km: u32) -> SearchParameter {
    LocationParameter {
        name: name.to_owned(),
        radius_km,
    }
    .into()
}

fn filter_with(distances: Vec<Distance>) -> (LocationFilter, Arc<RecordingDistanceResolver>) {
    init_test_logging();
    let resolver = Arc::new(RecordingDistanceResolver::new(distances));
    (LocationFilter::new(resolver.clone()), resolver)
}

#[tokio::test]
async fn test_literal_matches_skip_distance_lookup() {
    let (filter, resolver) = filter_with(Vec::new());
    let activities = vec![
        activity_in("1", "Castle visit", "Ghent"),
        ActivityBuilder::new("2", "Coast walk")
            .location(Location::city("De Panne").with_country("Belgium"))
            .build(),
    ];

    let kept = filter.apply(activities.clone(), &near("Ghent", 10)).await;
    assert_eq!(names(&kept), ["Castle visit"]);

    // every remaining activity matches literally, no lookup needed
    let kept = filter
        .apply(vec![activities[1].clone()], &near("Belgium", 10))
        .await;
    assert_eq!(names(&kept), ["Coast walk"]);
    assert_eq!(resolver.call_count(), 1);
}

#[tokio::test]
async fn test_no_lookup_when_all_match_literally() {
    let (filter, resolver) = filter_with(Vec::new());
    let activities = vec![
        activity_in("1", "Castle visit", "Ghent"),
        activity_in("2", "Boat trip", "Ghent"),
    ];

    let kept = filter.apply(activities, &near("Ghent", 10)).await;

    assert_eq!(names(&kept), ["Castle visit", "Boat trip"]);
    assert_eq!(resolver.call_count(), 0);
}

#[tokio::test]
async fn test_user_input_is_trimmed() {
    let (filter, resolver) = filter_with(Vec::new());
    let kept = filter
        .apply(vec![activity_in("1", "Castle visit", "Ghent")], &near("  Ghent ", 10))
        .await;

    assert_eq!(names(&kept), ["Castle visit"]);
    assert_eq!(resolver.call_count(), 0);
}

#[tokio::test]
async fn test_one_batched_lookup_for_all_destinations() {
    let (filter, resolver) = filter_with(vec![
        Distance::new("Ghent", "Bruges", 45.0),
        Distance::new("Ghent", "Aalst", 25.0),
        Distance::new("Ghent", "Deinze", 17.0),
    ]);
    let activities = vec![
        activity_in("1", "Canal tour", "Bruges"),
        activity_in("2", "Carnival", "Aalst"),
        activity_in("3", "Swimming", "Deinze"),
        activity_in("4", "Market", "Bruges"),
    ];

    let kept = filter.apply(activities, &near("Ghent", 30)).await;

    assert_eq!(names(&kept), ["Carnival", "Swimming"]);
    let calls = resolver.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].origin, "Ghent");
    assert_eq!(
        calls[0].destinations,
        HashSet::from(["Bruges".to_owned(), "Aalst".to_owned(), "Deinze".to_owned()])
    );
}

#[tokio::test]
async fn test_radius_boundary_is_inclusive() {
    let (filter, _) = filter_with(vec![
        Distance::new("Ghent", "Aalst", 25.0),
        Distance::new("Ghent", "Ninove", 25.1),
    ]);
    let activities = vec![
        activity_in("1", "Carnival", "Aalst"),
        activity_in("2", "Abbey", "Ninove"),
    ];

    let kept = filter.apply(activities, &near("Ghent", 25)).await;
    assert_eq!(names(&kept), ["Carnival"]);
}

#[tokio::test]
async fn test_unresolved_destination_is_rejected() {
    let (filter, resolver) = filter_with(Vec::new());
    let kept = filter
        .apply(vec![activity_in("1", "Canal tour", "Bruges")], &near("Ghent", 500))
        .await;

    assert!(kept.is_empty());
    assert_eq!(resolver.call_count(), 1);
}

#[tokio::test]
async fn test_activities_without_location_never_pass() {
    let (filter, resolver) = filter_with(Vec::new());
    let activities = vec![
        ActivityBuilder::new("1", "Read a book").build(),
        ActivityBuilder::new("2", "Nowhere")
            .location(Location::city("  "))
            .build(),
    ];

    let kept = filter.apply(activities, &near("Ghent", 10)).await;

    assert!(kept.is_empty());
    assert_eq!(resolver.call_count(), 0);
}

#[tokio::test]
async fn test_rendered_location_is_sent_as_destination() {
    let street = Location::city("Zottegem")
        .with_street("Zottekesstraat", Some("21".to_owned()))
        .with_country("België");
    let rendered = street.render();
    let (filter, resolver) = filter_with(vec![Distance::new("Ghent", rendered.clone(), 20.0)]);
    let activity = ActivityBuilder::new("1", "Brewery").location(street).build();

    let kept = filter.apply(vec![activity], &near("Ghent", 25)).await;

    assert_eq!(names(&kept), ["Brewery"]);
    assert_eq!(resolver.calls()[0].destinations, HashSet::from([rendered]));
}

#[tokio::test]
async fn test_order_is_preserved_with_mixed_literal_and_resolved() {
    let (filter, _) = filter_with(vec![Distance::new("Ghent", "Deinze", 17.0)]);
    let activities = vec![
        activity_in("1", "Swimming", "Deinze"),
        activity_in("2", "Castle visit", "Ghent"),
        activity_in("3", "Rowing", "Deinze"),
    ];

    let kept = filter.apply(activities, &near("Ghent", 20)).await;
    assert_eq!(names(&kept), ["Swimming", "Castle visit", "Rowing"]);
}

#[tokio::test]
async fn test_other_parameter_kinds_pass_through() {
    let (filter, resolver) = filter_with(Vec::new());
    let activities = vec![ActivityBuilder::new("1", "Read a book").build()];

    let kept = filter
        .apply(
            activities,
            &SearchParameter::from(ParticipantsParameter { count: 2 }),
        )
        .await;

    assert_eq!(names(&kept), ["Read a book"]);
    assert_eq!(resolver.call_count(), 0);
}
