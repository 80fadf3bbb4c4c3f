// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory weekly activity store.
//!
//! Records are keyed by `(user_id, week_start)`. Updates to a single week go
//! through the `DashMap` entry API, which holds the shard lock for the whole
//! read-modify-write, so concurrent workouts never lose increments.

use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;
use std::sync::Arc;

use crate::models::{StreakType, WeekAggregates, WeeklyActivityRecord, Workout};

type WeekKey = (String, NaiveDate);

/// Shared handle to the weekly activity records. Cheap to clone.
#[derive(Clone, Default)]
pub struct ActivityStore {
    weeks: Arc<DashMap<WeekKey, WeeklyActivityRecord>>,
}

/// Outcome of logging a workout.
#[derive(Debug, Clone)]
pub struct RecordWorkoutResult {
    pub record: WeeklyActivityRecord,
    /// `false` if the workout had already been applied
    pub was_new: bool,
    /// Tiers the week satisfied just before this workout, read under the same lock
    pub qualified_before: Vec<StreakType>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch one week's record.
    pub fn get_week(&self, user_id: &str, week_start: NaiveDate) -> Option<WeeklyActivityRecord> {
        self.weeks
            .get(&(user_id.to_string(), week_start))
            .map(|r| r.value().clone())
    }

    /// All of a user's records, oldest week first.
    pub fn list_weeks(&self, user_id: &str) -> Vec<WeeklyActivityRecord> {
        let mut weeks: Vec<WeeklyActivityRecord> = self
            .weeks
            .iter()
            .filter(|entry| entry.key().0 == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        weeks.sort_by_key(|r| r.week_start);
        weeks
    }

    /// Fold a workout into the record of the week it was completed in,
    /// creating the record if this is the first workout of that week.
    pub fn record_workout(&self, workout: &Workout, now: DateTime<Utc>) -> RecordWorkoutResult {
        let week_start = workout.week_start();
        let mut entry = self
            .weeks
            .entry((workout.user_id.clone(), week_start))
            .or_insert_with(|| {
                tracing::debug!(
                    user_id = %workout.user_id,
                    %week_start,
                    "Creating weekly activity record"
                );
                WeeklyActivityRecord::new(&workout.user_id, week_start, now)
            });

        let qualified_before = entry.qualifying_streak_types();
        let was_new = entry.apply_workout(workout, now);

        RecordWorkoutResult {
            record: entry.value().clone(),
            was_new,
            qualified_before,
        }
    }

    /// Replace a week's aggregates with a synced snapshot.
    ///
    /// An existing record keeps its `server_id` and `created_at`.
    pub fn upsert_week(
        &self,
        user_id: &str,
        week_start: NaiveDate,
        aggregates: WeekAggregates,
        now: DateTime<Utc>,
    ) -> WeeklyActivityRecord {
        let mut entry = self
            .weeks
            .entry((user_id.to_string(), week_start))
            .or_insert_with(|| WeeklyActivityRecord::new(user_id, week_start, now));

        entry.replace_aggregates(aggregates, now);
        entry.value().clone()
    }

    /// Remove every record belonging to a user. Returns how many were removed.
    pub fn delete_user(&self, user_id: &str) -> usize {
        let before = self.weeks.len();
        self.weeks.retain(|key, _| key.0 != user_id);
        before.saturating_sub(self.weeks.len())
    }
}
