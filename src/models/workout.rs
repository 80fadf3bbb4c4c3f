//! Completed workout as logged by the client.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::time_utils::week_start_of;

/// A single completed workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Client-assigned workout ID (used for duplicate detection)
    pub workout_id: String,
    /// Owner
    pub user_id: String,
    /// When the workout was finished
    pub completed_at: DateTime<Utc>,
    /// Number of sets performed
    pub sets: u32,
    /// Total lifted volume (kg)
    pub volume_kg: f64,
}

impl Workout {
    /// Calendar day (UTC) the workout counts toward.
    pub fn day(&self) -> NaiveDate {
        self.completed_at.date_naive()
    }

    /// Monday of the week the workout counts toward.
    pub fn week_start(&self) -> NaiveDate {
        week_start_of(self.day())
    }
}
