// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Streak-Tracker: weekly workout activity and streaks
//!
//! This crate keeps one aggregate record per user per calendar week,
//! evaluates each week against the streak tiers, and serves the results
//! over a small JSON API.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::ActivityStore;
use services::ActivityProcessor;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: ActivityStore,
    pub activity_processor: ActivityProcessor,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let db = ActivityStore::new();
        Self {
            config,
            activity_processor: ActivityProcessor::new(db.clone()),
            db,
        }
    }
}
