// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API input validation tests.

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::{create_test_app, empty_request, json_request};

#[tokio::test]
async fn test_week_start_not_a_date() {
    let (app, _state) = create_test_app();

    let response = app
        .oneshot(empty_request("GET", "/api/users/alice/weeks/not-a-date"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_week_start_not_a_monday() {
    let (app, _state) = create_test_app();

    // 2025-01-07 is a Tuesday
    let response = app
        .oneshot(empty_request("GET", "/api/users/alice/weeks/2025-01-07"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_put_week_rejects_too_many_active_days() {
    let (app, state) = create_test_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/users/alice/weeks/2025-01-06",
            json!({ "active_days": 8, "workouts_completed": 8 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(state.db.list_weeks("alice").is_empty());
}

#[tokio::test]
async fn test_put_week_rejects_negative_volume() {
    let (app, _state) = create_test_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/users/alice/weeks/2025-01-06",
            json!({ "workouts_completed": 1, "total_volume_kg": -5.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_workout_id_too_long() {
    let (app, _state) = create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users/alice/workouts",
            json!({
                "workout_id": "w".repeat(129),
                "completed_at": "2025-01-08T07:00:00Z"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_streak_type() {
    let (app, _state) = create_test_app();

    let response = app
        .oneshot(empty_request(
            "GET",
            "/api/users/alice/streak?streak_type=WEEKLY_6",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_user_id_too_long() {
    let (app, _state) = create_test_app();

    let response = app
        .oneshot(empty_request(
            "GET",
            &format!("/api/users/{}/weeks", "u".repeat(129)),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_workout_sets_out_of_range() {
    let (app, state) = create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users/alice/workouts",
            json!({
                "workout_id": "w1",
                "completed_at": "2025-01-08T07:00:00Z",
                "sets": u32::MAX
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(state.db.list_weeks("alice").is_empty());
}

#[tokio::test]
async fn test_workout_volume_out_of_range() {
    let (app, _state) = create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users/alice/workouts",
            json!({
                "workout_id": "w1",
                "completed_at": "2025-01-08T07:00:00Z",
                "volume_kg": 1e300
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_workout_after_saturated_sync() {
    let (app, _state) = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/users/alice/weeks/2025-01-06",
            json!({ "workouts_completed": u32::MAX, "total_sets": u32::MAX }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users/alice/workouts",
            json!({
                "workout_id": "w1",
                "completed_at": "2025-01-08T07:00:00Z",
                "sets": 10
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["week"]["workouts_completed"], u32::MAX);
    assert_eq!(body["week"]["total_sets"], u32::MAX);
}
