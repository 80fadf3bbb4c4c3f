// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod streak_type;
pub mod weekly_activity;
pub mod workout;

pub use streak_type::{StreakType, UnknownStreakType};
pub use weekly_activity::{WeekAggregates, WeeklyActivityRecord};
pub use workout::Workout;
