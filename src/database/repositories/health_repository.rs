// ABOUTME: SQLite implementation of HealthRepository
// ABOUTME: Maps oura_daily, workouts, and health_goals rows to core health models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use super::HealthRepository;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use homebase_core::dates::{format_day, parse_day};
use homebase_core::models::{DailyMetricSample, GoalType, HealthGoal, Workout};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::collections::BTreeSet;
use tracing::warn;

/// `SQLite`-backed health storage
#[derive(Clone)]
pub struct SqliteHealthRepository {
    pool: SqlitePool,
}

impl SqliteHealthRepository {
    /// Create a repository over an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_sample(row: &SqliteRow) -> AppResult<Option<DailyMetricSample>> {
        let day_text: String = row.try_get("day")?;
        let Some(day) = parse_day(&day_text) else {
            warn!(day = %day_text, "Skipping oura_daily row with malformed day");
            return Ok(None);
        };

        Ok(Some(DailyMetricSample {
            day,
            sleep_score: row.try_get("sleep_score")?,
            sleep_deep_sleep: row.try_get("sleep_deep_sleep")?,
            sleep_efficiency: row.try_get("sleep_efficiency")?,
            sleep_latency: row.try_get("sleep_latency")?,
            sleep_rem_sleep: row.try_get("sleep_rem_sleep")?,
            sleep_restfulness: row.try_get("sleep_restfulness")?,
            sleep_timing: row.try_get("sleep_timing")?,
            sleep_total_sleep: row.try_get("sleep_total_sleep")?,
            readiness_score: row.try_get("readiness_score")?,
            readiness_activity_balance: row.try_get("readiness_activity_balance")?,
            readiness_body_temperature: row.try_get("readiness_body_temperature")?,
            readiness_hrv_balance: row.try_get("readiness_hrv_balance")?,
            readiness_previous_day_activity: row.try_get("readiness_previous_day_activity")?,
            readiness_previous_night: row.try_get("readiness_previous_night")?,
            readiness_recovery_index: row.try_get("readiness_recovery_index")?,
            readiness_resting_heart_rate: row.try_get("readiness_resting_heart_rate")?,
            readiness_sleep_balance: row.try_get("readiness_sleep_balance")?,
            readiness_sleep_regularity: row.try_get("readiness_sleep_regularity")?,
            temperature_deviation: row.try_get("temperature_deviation")?,
            activity_score: row.try_get("activity_score")?,
            activity_active_calories: row.try_get("activity_active_calories")?,
            activity_steps: row.try_get("activity_steps")?,
            activity_total_calories: row.try_get("activity_total_calories")?,
            activity_meet_daily_targets: row.try_get("activity_meet_daily_targets")?,
            activity_move_every_hour: row.try_get("activity_move_every_hour")?,
            activity_recovery_time: row.try_get("activity_recovery_time")?,
            activity_stay_active: row.try_get("activity_stay_active")?,
            activity_training_frequency: row.try_get("activity_training_frequency")?,
            activity_training_volume: row.try_get("activity_training_volume")?,
        }))
    }

    fn row_to_goal(row: &SqliteRow) -> AppResult<Option<HealthGoal>> {
        let goal_type_text: String = row.try_get("goal_type")?;
        let Ok(goal_type) = goal_type_text.parse::<GoalType>() else {
            warn!(goal_type = %goal_type_text, "Skipping health goal with unknown type");
            return Ok(None);
        };

        Ok(Some(HealthGoal {
            id: row.try_get("id")?,
            goal_type,
            target: row.try_get("target")?,
            active: row.try_get("active")?,
        }))
    }
}

#[async_trait]
impl HealthRepository for SqliteHealthRepository {
    async fn upsert_daily_sample(&self, sample: &DailyMetricSample) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT OR REPLACE INTO oura_daily (
                day, sleep_score, sleep_deep_sleep, sleep_efficiency, sleep_latency,
                sleep_rem_sleep, sleep_restfulness, sleep_timing, sleep_total_sleep,
                readiness_score, readiness_activity_balance, readiness_body_temperature,
                readiness_hrv_balance, readiness_previous_day_activity, readiness_previous_night,
                readiness_recovery_index, readiness_resting_heart_rate, readiness_sleep_balance,
                readiness_sleep_regularity, temperature_deviation, activity_score,
                activity_active_calories, activity_steps, activity_total_calories,
                activity_meet_daily_targets, activity_move_every_hour, activity_recovery_time,
                activity_stay_active, activity_training_frequency, activity_training_volume
            )
            VALUES (
                ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
                ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
                ?, ?, ?, ?, ?, ?, ?, ?, ?, ?
            )
            ",
        )
        .bind(format_day(sample.day))
        .bind(sample.sleep_score)
        .bind(sample.sleep_deep_sleep)
        .bind(sample.sleep_efficiency)
        .bind(sample.sleep_latency)
        .bind(sample.sleep_rem_sleep)
        .bind(sample.sleep_restfulness)
        .bind(sample.sleep_timing)
        .bind(sample.sleep_total_sleep)
        .bind(sample.readiness_score)
        .bind(sample.readiness_activity_balance)
        .bind(sample.readiness_body_temperature)
        .bind(sample.readiness_hrv_balance)
        .bind(sample.readiness_previous_day_activity)
        .bind(sample.readiness_previous_night)
        .bind(sample.readiness_recovery_index)
        .bind(sample.readiness_resting_heart_rate)
        .bind(sample.readiness_sleep_balance)
        .bind(sample.readiness_sleep_regularity)
        .bind(sample.temperature_deviation)
        .bind(sample.activity_score)
        .bind(sample.activity_active_calories)
        .bind(sample.activity_steps)
        .bind(sample.activity_total_calories)
        .bind(sample.activity_meet_daily_targets)
        .bind(sample.activity_move_every_hour)
        .bind(sample.activity_recovery_time)
        .bind(sample.activity_stay_active)
        .bind(sample.activity_training_frequency)
        .bind(sample.activity_training_volume)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to store daily sample: {e}")))?;

        Ok(())
    }

    async fn daily_samples(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<DailyMetricSample>> {
        let rows = sqlx::query(
            "SELECT * FROM oura_daily WHERE day >= ? AND day <= ? ORDER BY day ASC",
        )
        .bind(format_day(from))
        .bind(format_day(to))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to load daily samples: {e}")))?;

        let mut samples = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Some(sample) = Self::row_to_sample(row)? {
                samples.push(sample);
            }
        }
        Ok(samples)
    }

    async fn insert_workout(&self, workout: &Workout) -> AppResult<i64> {
        let result = sqlx::query("INSERT INTO workouts (date, type, notes) VALUES (?, ?, ?)")
            .bind(format_day(workout.date))
            .bind(&workout.workout_type)
            .bind(&workout.notes)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to log workout: {e}")))?;

        Ok(result.last_insert_rowid())
    }

    async fn workout_days(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<BTreeSet<NaiveDate>> {
        let days: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT date FROM workouts WHERE date >= ? AND date <= ?")
                .bind(format_day(from))
                .bind(format_day(to))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to load workout days: {e}")))?;

        Ok(days
            .iter()
            .filter_map(|text| {
                let day = parse_day(text);
                if day.is_none() {
                    warn!(date = %text, "Skipping workout with malformed date");
                }
                day
            })
            .collect())
    }

    async fn workout_count(&self, from: NaiveDate, to: NaiveDate) -> AppResult<u32> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM workouts WHERE date >= ? AND date <= ?")
                .bind(format_day(from))
                .bind(format_day(to))
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to count workouts: {e}")))?;

        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    async fn upsert_goal(&self, goal: &HealthGoal) -> AppResult<i64> {
        let row = sqlx::query(
            r"
            INSERT INTO health_goals (goal_type, target, active)
            VALUES (?, ?, ?)
            ON CONFLICT(goal_type) DO UPDATE SET target = excluded.target, active = excluded.active
            RETURNING id
            ",
        )
        .bind(goal.goal_type.as_str())
        .bind(goal.target)
        .bind(goal.active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to store goal: {e}")))?;

        Ok(row.try_get("id")?)
    }

    async fn active_goals(&self) -> AppResult<Vec<HealthGoal>> {
        let rows = sqlx::query(
            "SELECT id, goal_type, target, active FROM health_goals WHERE active = 1 ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to load goals: {e}")))?;

        let mut goals = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Some(goal) = Self::row_to_goal(row)? {
                goals.push(goal);
            }
        }
        Ok(goals)
    }
}
