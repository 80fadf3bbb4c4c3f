// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Streak computation over a user's weekly records.
//!
//! A streak is a run of consecutive calendar weeks that each qualify for the
//! chosen tier. Weeks with no record break the run. The current week is still
//! in progress, so failing to qualify *yet* does not reset the current streak.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{StreakType, WeeklyActivityRecord};
use crate::time_utils::week_start_of;

/// Streak statistics for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    pub streak_type: StreakType,
    /// Consecutive qualifying weeks ending this week (or last week)
    pub current_streak: u32,
    /// Longest run of consecutive qualifying weeks ever
    pub longest_streak: u32,
    /// Weeks that met the tier's threshold
    pub qualifying_weeks: u32,
    /// Weeks with 5+ workouts
    pub perfect_weeks: u32,
}

/// Compute streak statistics from a user's records as of `today`.
///
/// Records may be in any order. Weeks after the week of `today` are ignored.
pub fn compute_streak(
    records: &[WeeklyActivityRecord],
    streak_type: StreakType,
    today: NaiveDate,
) -> StreakSummary {
    let this_week = week_start_of(today);

    let mut qualifying: Vec<NaiveDate> = Vec::new();
    let mut perfect_weeks: u32 = 0;
    for record in records.iter().filter(|r| r.week_start <= this_week) {
        if record.qualifies_for_streak(streak_type) {
            qualifying.push(week_start_of(record.week_start));
        }
        if record.is_perfect_week() {
            perfect_weeks += 1;
        }
    }
    qualifying.sort_unstable();
    qualifying.dedup();

    // Length of the run ending at each qualifying week.
    let mut run_ending_at: HashMap<NaiveDate, u32> = HashMap::with_capacity(qualifying.len());
    let mut longest_streak: u32 = 0;
    let mut prev: Option<NaiveDate> = None;
    let mut run: u32 = 0;
    for &week in &qualifying {
        run = match prev {
            Some(p) if p.checked_add_days(Days::new(7)) == Some(week) => run + 1,
            _ => 1,
        };
        run_ending_at.insert(week, run);
        longest_streak = longest_streak.max(run);
        prev = Some(week);
    }

    let current_streak = run_ending_at
        .get(&this_week)
        .or_else(|| {
            this_week
                .checked_sub_days(Days::new(7))
                .and_then(|last_week| run_ending_at.get(&last_week))
        })
        .copied()
        .unwrap_or(0);

    StreakSummary {
        streak_type,
        current_streak,
        longest_streak,
        qualifying_weeks: qualifying.len() as u32,
        perfect_weeks,
    }
}
