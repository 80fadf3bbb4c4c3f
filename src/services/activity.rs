// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout processing service.
//!
//! Handles the core workflow:
//! 1. Sanity-check the logged workout
//! 2. Fold it into the weekly record for its week
//! 3. Report whether the week newly reached any streak tier

use chrono::{DateTime, Utc};

use crate::db::ActivityStore;
use crate::error::{AppError, Result};
use crate::models::{StreakType, WeeklyActivityRecord, Workout};

/// Folds logged workouts into weekly records.
#[derive(Clone)]
pub struct ActivityProcessor {
    db: ActivityStore,
}

impl ActivityProcessor {
    pub fn new(db: ActivityStore) -> Self {
        Self { db }
    }

    /// Process a completed workout.
    pub fn process_workout(&self, workout: &Workout, now: DateTime<Utc>) -> Result<ProcessResult> {
        if !workout.volume_kg.is_finite() || workout.volume_kg < 0.0 {
            return Err(AppError::BadRequest(format!(
                "Invalid volume_kg {} for workout {}",
                workout.volume_kg, workout.workout_id
            )));
        }

        tracing::info!(
            user_id = %workout.user_id,
            workout_id = %workout.workout_id,
            "Processing workout"
        );

        let result = self.db.record_workout(workout, now);

        if !result.was_new {
            tracing::debug!(
                user_id = %workout.user_id,
                workout_id = %workout.workout_id,
                "Workout already processed (idempotent skip)"
            );
            return Ok(ProcessResult {
                record: result.record,
                was_new: false,
                newly_qualified: Vec::new(),
            });
        }

        let newly_qualified = newly_qualified(&result.qualified_before, &result.record);
        tracing::info!(
            user_id = %workout.user_id,
            week_start = %result.record.week_start,
            workouts_completed = result.record.workouts_completed,
            newly_qualified = ?newly_qualified,
            "Workout recorded"
        );

        Ok(ProcessResult {
            record: result.record,
            was_new: true,
            newly_qualified,
        })
    }
}

/// Result of processing a workout.
#[derive(Debug)]
pub struct ProcessResult {
    pub record: WeeklyActivityRecord,
    pub was_new: bool,
    /// Tiers the week reached because of this workout
    pub newly_qualified: Vec<StreakType>,
}

/// Tiers `record` satisfies that were not in `before`.
fn newly_qualified(before: &[StreakType], record: &WeeklyActivityRecord) -> Vec<StreakType> {
    record
        .qualifying_streak_types()
        .into_iter()
        .filter(|t| !before.contains(t))
        .collect()
}
