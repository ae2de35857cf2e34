// ABOUTME: Repository traits for health samples and the relationship tracker
// ABOUTME: Services depend on these seams; SQLite implementations live alongside
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

//! Repository pattern over the `SQLite` schema
//!
//! Rows whose stored day does not parse are skipped with a warning rather than
//! surfaced as errors, so one corrupt row never hides a whole window.

mod health_repository;
mod people_repository;

pub use health_repository::SqliteHealthRepository;
pub use people_repository::SqlitePeopleRepository;

use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use homebase_core::models::{
    DailyMetricSample, HealthGoal, Interaction, Person, SpecialDate, Workout,
};
use std::collections::BTreeSet;

/// Storage for Oura daily samples, workouts, and goals
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Insert or replace the sample for its day
    async fn upsert_daily_sample(&self, sample: &DailyMetricSample) -> AppResult<()>;

    /// Samples with `from <= day <= to`, oldest first
    async fn daily_samples(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<DailyMetricSample>>;

    /// Log a workout, returning its id
    async fn insert_workout(&self, workout: &Workout) -> AppResult<i64>;

    /// Distinct days with at least one workout in `from..=to`
    async fn workout_days(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<BTreeSet<NaiveDate>>;

    /// Workouts logged in `from..=to`, several per day counted separately
    async fn workout_count(&self, from: NaiveDate, to: NaiveDate) -> AppResult<u32>;

    /// Create or update the goal of this type, returning its id
    async fn upsert_goal(&self, goal: &HealthGoal) -> AppResult<i64>;

    /// All goals flagged active
    async fn active_goals(&self) -> AppResult<Vec<HealthGoal>>;
}

/// Storage for people, interactions, and special dates
#[async_trait]
pub trait PeopleRepository: Send + Sync {
    /// Add a person, returning their id
    async fn insert_person(&self, person: &Person) -> AppResult<i64>;

    /// One person with `last_contact` filled in
    ///
    /// Fails with `ResourceNotFound` for an unknown id.
    async fn get_person(&self, person_id: i64) -> AppResult<Person>;

    /// Everyone ordered by name, `last_contact` from their newest interaction
    async fn list_people(&self) -> AppResult<Vec<Person>>;

    /// Log an interaction, returning its id
    async fn insert_interaction(&self, interaction: &Interaction) -> AppResult<i64>;

    /// Remove an interaction, returning the person it belonged to
    ///
    /// `None` when no such interaction exists.
    async fn delete_interaction(&self, interaction_id: i64) -> AppResult<Option<i64>>;

    /// A person's interactions, newest first
    async fn interactions_for(&self, person_id: i64) -> AppResult<Vec<Interaction>>;

    /// Persist recomputed streak values
    async fn save_streak(&self, person_id: i64, current: u32, longest: u32) -> AppResult<()>;

    /// Add a special date, returning its id
    async fn insert_special_date(&self, special_date: &SpecialDate) -> AppResult<i64>;

    /// Every recurring special date with its person's name
    async fn recurring_special_dates(&self) -> AppResult<Vec<SpecialDate>>;
}
