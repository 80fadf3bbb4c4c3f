// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting and calendar weeks.

use chrono::{DateTime, Datelike, Days, NaiveDate, SecondsFormat, Utc, Weekday};

use crate::error::{AppError, Result};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Week starts outside these years are rejected at the API boundary.
pub const MIN_WEEK_YEAR: i32 = 1970;
pub const MAX_WEEK_YEAR: i32 = 9999;

/// The Monday on or before `date`.
///
/// Saturates at `NaiveDate::MIN` for the partial first week of the calendar.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// Last day (Sunday) of the week starting at `week_start`.
///
/// Saturates at `NaiveDate::MAX`.
pub fn week_end(week_start: NaiveDate) -> NaiveDate {
    week_start
        .checked_add_days(Days::new(6))
        .unwrap_or(NaiveDate::MAX)
}

/// Parse a `YYYY-MM-DD` week start, rejecting anything that is not a Monday.
pub fn parse_week_start(text: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", text)))?;

    if !(MIN_WEEK_YEAR..=MAX_WEEK_YEAR).contains(&date.year()) {
        return Err(AppError::BadRequest(format!(
            "Week start {} is outside years {}-{}",
            date, MIN_WEEK_YEAR, MAX_WEEK_YEAR
        )));
    }

    if date.weekday() != Weekday::Mon {
        return Err(AppError::BadRequest(format!(
            "Week start {} is a {}, expected a Monday",
            date,
            date.weekday()
        )));
    }

    Ok(date)
}

/// Render a week as "Jan 6 - Jan 12".
pub fn format_week_range(week_start: NaiveDate) -> String {
    format!(
        "{} - {}",
        week_start.format("%b %-d"),
        week_end(week_start).format("%b %-d")
    )
}
