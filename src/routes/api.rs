// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for weekly activity and streaks.

use crate::error::{AppError, Result};
use crate::models::{StreakType, WeekAggregates, WeeklyActivityRecord, Workout};
use crate::services::{compute_streak, StreakSummary};
use crate::time_utils::{format_utc_rfc3339, parse_week_start};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

const MAX_ID_LENGTH: usize = 128;
/// Per-workout ceilings; far above anything a human lifts in one session.
const MAX_WORKOUT_SETS: u32 = 10_000;
const MAX_WORKOUT_VOLUME_KG: f64 = 1_000_000.0;
/// Weekly volume ceiling for synced snapshots.
const MAX_WEEK_VOLUME_KG: f64 = 100_000_000.0;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users/{user_id}", delete(delete_user))
        .route("/api/users/{user_id}/weeks", get(list_weeks))
        .route(
            "/api/users/{user_id}/weeks/{week_start}",
            get(get_week).put(put_week),
        )
        .route("/api/users/{user_id}/workouts", post(log_workout))
        .route("/api/users/{user_id}/streak", get(get_streak))
}

fn check_user_id(user_id: &str) -> Result<()> {
    if user_id.is_empty() || user_id.len() > MAX_ID_LENGTH {
        return Err(AppError::BadRequest(format!(
            "user_id must be 1-{} characters",
            MAX_ID_LENGTH
        )));
    }
    Ok(())
}

// ─── Weeks ───────────────────────────────────────────────────

/// A weekly record together with its evaluation.
#[derive(Debug, Serialize)]
pub struct WeekResponse {
    #[serde(flatten)]
    pub record: WeeklyActivityRecord,
    pub week_range: String,
    pub is_perfect_week: bool,
    pub qualifies_for: Vec<StreakType>,
}

impl From<WeeklyActivityRecord> for WeekResponse {
    fn from(record: WeeklyActivityRecord) -> Self {
        Self {
            week_range: record.format_week_range(),
            is_perfect_week: record.is_perfect_week(),
            qualifies_for: record.qualifying_streak_types(),
            record,
        }
    }
}

async fn list_weeks(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<WeekResponse>>> {
    check_user_id(&user_id)?;

    let weeks = state
        .db
        .list_weeks(&user_id)
        .into_iter()
        .map(WeekResponse::from)
        .collect();

    Ok(Json(weeks))
}

async fn get_week(
    State(state): State<Arc<AppState>>,
    Path((user_id, week_start)): Path<(String, String)>,
) -> Result<Json<WeekResponse>> {
    check_user_id(&user_id)?;
    let week_start = parse_week_start(&week_start)?;

    let record = state.db.get_week(&user_id, week_start).ok_or_else(|| {
        AppError::NotFound(format!("No activity for {} in week {}", user_id, week_start))
    })?;

    Ok(Json(record.into()))
}

/// Week aggregates pushed by the sync backend.
#[derive(Debug, Deserialize, Validate)]
pub struct WeekUpsertRequest {
    #[validate(range(max = 7))]
    #[serde(default)]
    pub active_days: u8,
    #[serde(default)]
    pub workouts_completed: u32,
    #[serde(default)]
    pub total_sets: u32,
    #[validate(range(min = 0.0, max = MAX_WEEK_VOLUME_KG))]
    #[serde(default)]
    pub total_volume_kg: f64,
}

async fn put_week(
    State(state): State<Arc<AppState>>,
    Path((user_id, week_start)): Path<(String, String)>,
    Json(body): Json<WeekUpsertRequest>,
) -> Result<Json<WeekResponse>> {
    check_user_id(&user_id)?;
    let week_start = parse_week_start(&week_start)?;
    body.validate()?;

    let aggregates = WeekAggregates {
        active_days: body.active_days,
        workouts_completed: body.workouts_completed,
        total_sets: body.total_sets,
        total_volume_kg: body.total_volume_kg,
    };

    tracing::info!(%user_id, %week_start, ?aggregates, "Upserting synced week");
    let record = state
        .db
        .upsert_week(&user_id, week_start, aggregates, Utc::now());

    Ok(Json(record.into()))
}

// ─── Workouts ────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct WorkoutRequest {
    #[validate(length(min = 1, max = 128))]
    pub workout_id: String,
    pub completed_at: DateTime<Utc>,
    #[validate(range(max = MAX_WORKOUT_SETS))]
    #[serde(default)]
    pub sets: u32,
    /// Sign and finiteness are checked by the processor.
    #[validate(range(max = MAX_WORKOUT_VOLUME_KG))]
    #[serde(default)]
    pub volume_kg: f64,
}

#[derive(Debug, Serialize)]
pub struct WorkoutResponse {
    pub was_new: bool,
    pub newly_qualified: Vec<StreakType>,
    pub week: WeekResponse,
}

async fn log_workout(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(body): Json<WorkoutRequest>,
) -> Result<Json<WorkoutResponse>> {
    check_user_id(&user_id)?;
    body.validate()?;

    let workout = Workout {
        workout_id: body.workout_id,
        user_id,
        completed_at: body.completed_at,
        sets: body.sets,
        volume_kg: body.volume_kg,
    };

    let result = state
        .activity_processor
        .process_workout(&workout, Utc::now())?;

    Ok(Json(WorkoutResponse {
        was_new: result.was_new,
        newly_qualified: result.newly_qualified,
        week: result.record.into(),
    }))
}

// ─── Streaks ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct StreakQuery {
    /// Tier name, e.g. WEEKLY_3. Defaults to the configured tier.
    streak_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StreakResponse {
    #[serde(flatten)]
    pub summary: StreakSummary,
    pub as_of: String,
}

async fn get_streak(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(params): Query<StreakQuery>,
) -> Result<Json<StreakResponse>> {
    check_user_id(&user_id)?;

    let streak_type = match params.streak_type.as_deref() {
        Some(name) => name
            .parse::<StreakType>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?,
        None => state.config.default_streak_type,
    };

    let now = Utc::now();
    let records = state.db.list_weeks(&user_id);
    let summary = compute_streak(&records, streak_type, now.date_naive());

    Ok(Json(StreakResponse {
        summary,
        as_of: format_utc_rfc3339(now),
    }))
}

// ─── Account ─────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub deleted_weeks: usize,
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<DeleteUserResponse>> {
    check_user_id(&user_id)?;

    let deleted_weeks = state.db.delete_user(&user_id);
    tracing::info!(%user_id, deleted_weeks, "Deleted user activity");

    Ok(Json(DeleteUserResponse { deleted_weeks }))
}
