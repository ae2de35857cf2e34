// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, fixed dates, sample and person builders, and database helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `homebase`

use chrono::{Duration, NaiveDate};
use homebase::database::Database;
use homebase::errors::AppResult;
use homebase::models::{ContactFrequency, DailyMetricSample, Person};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory database with the schema applied
pub async fn create_test_database() -> AppResult<Database> {
    init_test_logging();
    Database::new("sqlite::memory:").await
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The fixed "today" every scenario is evaluated against (a Saturday)
pub fn today() -> NaiveDate {
    day(2024, 6, 1)
}

pub fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

/// Sample carrying the four headline scores; everything else is missing
pub fn sample(
    on: NaiveDate,
    sleep: Option<i64>,
    readiness: Option<i64>,
    activity: Option<i64>,
    steps: Option<i64>,
) -> DailyMetricSample {
    let mut sample = DailyMetricSample::new(on);
    sample.sleep_score = sleep;
    sample.readiness_score = readiness;
    sample.activity_score = activity;
    sample.activity_steps = steps;
    sample
}

/// Consecutive days ending on `last`, one sample per sleep score
pub fn sleep_series(last: NaiveDate, scores: &[i64]) -> Vec<DailyMetricSample> {
    let len = i64::try_from(scores.len()).unwrap();
    scores
        .iter()
        .zip(0_i64..)
        .map(|(score, offset)| {
            sample(
                last - Duration::days(len - 1 - offset),
                Some(*score),
                None,
                None,
                None,
            )
        })
        .collect()
}

/// Person last contacted `last_contact_days_ago` days before `today()`
pub fn person(
    id: i64,
    name: &str,
    frequency: ContactFrequency,
    last_contact_days_ago: Option<i64>,
) -> Person {
    let mut person = Person::new(id, name, frequency);
    person.last_contact = last_contact_days_ago.map(days_ago);
    person
}
