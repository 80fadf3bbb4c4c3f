// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly activity aggregate, one per user per calendar week.
//!
//! Records are created the first time a workout lands in a week and are
//! updated incrementally as more workouts are logged.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::models::{StreakType, Workout};
use crate::time_utils;

/// Completed workouts needed for a perfect week.
pub const PERFECT_WEEK_WORKOUTS: u32 = StreakType::Weekly5.threshold();

pub const DAYS_PER_WEEK: u8 = 7;

/// Aggregate values pushed by the sync backend for a whole week.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeekAggregates {
    pub active_days: u8,
    pub workouts_completed: u32,
    pub total_sets: u32,
    pub total_volume_kg: f64,
}

/// Aggregated activity of one user for one week.
///
/// Keyed by `(user_id, week_start)` in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyActivityRecord {
    /// Backend record ID
    pub server_id: String,
    /// Owner
    pub user_id: String,
    /// Monday of the week
    pub week_start: NaiveDate,

    // ─── Aggregates ──────────────────────────────────────────────
    /// Distinct days with any activity (0-7)
    #[serde(default)]
    pub active_days: u8,
    #[serde(default)]
    pub workouts_completed: u32,
    #[serde(default)]
    pub total_sets: u32,
    #[serde(default)]
    pub total_volume_kg: f64,

    // ─── Idempotency ─────────────────────────────────────────────
    /// Workouts already folded into the aggregates
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub processed_workout_ids: HashSet<String>,
    /// Days that had at least one workout
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub active_dates: BTreeSet<NaiveDate>,

    // ─── Metadata ────────────────────────────────────────────────
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WeeklyActivityRecord {
    /// Empty record for a new week.
    pub fn new(user_id: &str, week_start: NaiveDate, now: DateTime<Utc>) -> Self {
        Self {
            server_id: server_id_for(user_id, week_start),
            user_id: user_id.to_string(),
            week_start,
            active_days: 0,
            workouts_completed: 0,
            total_sets: 0,
            total_volume_kg: 0.0,
            processed_workout_ids: HashSet::new(),
            active_dates: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Fold a workout into the aggregates.
    ///
    /// Returns `true` if the workout was new, `false` if it was already applied.
    /// The caller is responsible for routing the workout to the right week.
    pub fn apply_workout(&mut self, workout: &Workout, now: DateTime<Utc>) -> bool {
        if self.processed_workout_ids.contains(&workout.workout_id) {
            return false;
        }

        self.processed_workout_ids
            .insert(workout.workout_id.clone());

        // Synced snapshots can already sit at the top of the range.
        self.workouts_completed = self.workouts_completed.saturating_add(1);
        self.total_sets = self.total_sets.saturating_add(workout.sets);
        self.total_volume_kg += workout.volume_kg;

        if self.active_dates.insert(workout.day()) {
            self.active_days = self.active_days.saturating_add(1).min(DAYS_PER_WEEK);
        }

        self.updated_at = now;
        true
    }

    /// Overwrite the aggregates with a synced snapshot.
    ///
    /// The snapshot is authoritative, so per-workout bookkeeping is reset.
    pub fn replace_aggregates(&mut self, aggregates: WeekAggregates, now: DateTime<Utc>) {
        self.active_days = aggregates.active_days.min(DAYS_PER_WEEK);
        self.workouts_completed = aggregates.workouts_completed;
        self.total_sets = aggregates.total_sets;
        self.total_volume_kg = aggregates.total_volume_kg;
        self.processed_workout_ids.clear();
        self.active_dates.clear();
        self.updated_at = now;
    }

    /// Does this week count toward a streak of the given tier?
    pub fn qualifies_for_streak(&self, streak_type: StreakType) -> bool {
        self.workouts_completed >= streak_type.threshold()
    }

    /// Five or more workouts.
    pub fn is_perfect_week(&self) -> bool {
        self.workouts_completed >= PERFECT_WEEK_WORKOUTS
    }

    /// Display range such as "Jan 6 - Jan 12".
    pub fn format_week_range(&self) -> String {
        time_utils::format_week_range(self.week_start)
    }

    /// Tiers this week satisfies, loosest first.
    pub fn qualifying_streak_types(&self) -> Vec<StreakType> {
        StreakType::ALL
            .into_iter()
            .filter(|t| self.qualifies_for_streak(*t))
            .collect()
    }
}

/// Record ID derived from its key.
pub fn server_id_for(user_id: &str, week_start: NaiveDate) -> String {
    format!("{}_{}", user_id, week_start.format("%Y-%m-%d"))
}
