// ABOUTME: SQLite connection management and schema migrations for health and people data
// ABOUTME: Owns the connection pool and hands out repository implementations sharing it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

//! # Database Management
//!
//! Calendar days are stored as `YYYY-MM-DD` text so range queries compare
//! lexicographically. Special dates are stored as `MM-DD`.

/// Repository traits and their `SQLite` implementations
pub mod repositories;

pub use repositories::{
    HealthRepository, PeopleRepository, SqliteHealthRepository, SqlitePeopleRepository,
};

use crate::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite, SqlitePool};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Database manager for health and relationship storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Connect and run migrations
    ///
    /// File databases are created on first use, along with their parent
    /// directory. In-memory databases use a single long-lived connection so
    /// every query sees the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let pool = if is_memory_url(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(database_url)
                .await?
        } else {
            ensure_parent_dir(database_url)?;
            // Ensure SQLite creates the database file if it doesn't exist
            let connection_options = if database_url.starts_with("sqlite:")
                && !database_url.contains('?')
            {
                format!("{database_url}?mode=rwc")
            } else {
                database_url.to_owned()
            };
            SqlitePool::connect(&connection_options).await?
        };

        let db = Self { pool };
        db.migrate().await?;

        info!(database_url, "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Health repository over this pool
    #[must_use]
    pub fn health(&self) -> SqliteHealthRepository {
        SqliteHealthRepository::new(self.pool.clone())
    }

    /// People repository over this pool
    #[must_use]
    pub fn people(&self) -> SqlitePeopleRepository {
        SqlitePeopleRepository::new(self.pool.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_health().await?;
        self.migrate_people().await?;
        debug!("Schema migrations applied");
        Ok(())
    }

    async fn migrate_health(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS oura_daily (
                day TEXT PRIMARY KEY,
                sleep_score INTEGER,
                sleep_deep_sleep INTEGER,
                sleep_efficiency INTEGER,
                sleep_latency INTEGER,
                sleep_rem_sleep INTEGER,
                sleep_restfulness INTEGER,
                sleep_timing INTEGER,
                sleep_total_sleep INTEGER,
                readiness_score INTEGER,
                readiness_activity_balance INTEGER,
                readiness_body_temperature INTEGER,
                readiness_hrv_balance INTEGER,
                readiness_previous_day_activity INTEGER,
                readiness_previous_night INTEGER,
                readiness_recovery_index INTEGER,
                readiness_resting_heart_rate INTEGER,
                readiness_sleep_balance INTEGER,
                readiness_sleep_regularity INTEGER,
                temperature_deviation REAL,
                activity_score INTEGER,
                activity_active_calories INTEGER,
                activity_steps INTEGER,
                activity_total_calories INTEGER,
                activity_meet_daily_targets INTEGER,
                activity_move_every_hour INTEGER,
                activity_recovery_time INTEGER,
                activity_stay_active INTEGER,
                activity_training_frequency INTEGER,
                activity_training_volume INTEGER
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                type TEXT NOT NULL DEFAULT '',
                notes TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS health_goals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                goal_type TEXT NOT NULL UNIQUE,
                target INTEGER NOT NULL,
                active INTEGER NOT NULL DEFAULT 1
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workouts_date ON workouts(date)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn migrate_people(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS people (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                nickname TEXT NOT NULL DEFAULT '',
                relationship TEXT NOT NULL DEFAULT 'friend',
                birthday TEXT,
                birthday_lunar INTEGER NOT NULL DEFAULT 0,
                contact_frequency TEXT NOT NULL DEFAULT 'none',
                current_streak INTEGER NOT NULL DEFAULT 0,
                longest_streak INTEGER NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS interactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                person_id INTEGER NOT NULL REFERENCES people(id) ON DELETE CASCADE,
                date TEXT NOT NULL,
                type TEXT NOT NULL DEFAULT 'message',
                notes TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS person_dates (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                person_id INTEGER NOT NULL REFERENCES people(id) ON DELETE CASCADE,
                date_type TEXT NOT NULL DEFAULT 'custom',
                label TEXT NOT NULL DEFAULT '',
                date TEXT NOT NULL,
                recurring INTEGER NOT NULL DEFAULT 1
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_interactions_person_date ON interactions(person_id, date)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_person_dates_person ON person_dates(person_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Create the directory holding a file database
fn ensure_parent_dir(database_url: &str) -> AppResult<()> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path = path.split('?').next().unwrap_or(path);

    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            }),
        _ => Ok(()),
    }
}
