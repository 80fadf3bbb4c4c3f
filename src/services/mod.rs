// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod activity;
pub mod streak;

pub use activity::{ActivityProcessor, ProcessResult};
pub use streak::{compute_streak, StreakSummary};
