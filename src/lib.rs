// ABOUTME: Main library entry point for the Homebase personal analytics backend
// ABOUTME: Wires configuration, logging, SQLite storage, and services around the analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

#![deny(unsafe_code)]

//! # Homebase
//!
//! Backend for a personal "life administration" app: Oura ring health
//! insights and a relationship tracker. The analytics live in
//! `homebase-intelligence`; this crate supplies the collaborators around it.
//!
//! ## Architecture
//!
//! - **Config**: Environment-driven database location and analysis windows
//! - **Logging**: Structured `tracing` output with env-filter control
//! - **Database**: `SQLite` schema and repository traits with `sqlx` implementations
//! - **Services**: Load a window from a repository, run the engine, persist streaks
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use homebase::config::environment::ServerConfig;
//! use homebase::database::Database;
//! use homebase::errors::AppResult;
//! use homebase::services::HealthInsightsService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let database = Database::new(&config.database.to_connection_string()).await?;
//!
//!     let service = HealthInsightsService::new(database.health(), config.analytics);
//!     let today = chrono::Local::now().date_naive();
//!     let insights = service.insights(today).await?;
//!     println!("{} days analyzed", insights.total_days);
//!
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// `SQLite` storage and repositories
pub mod database;

/// Production logging and structured output
pub mod logging;

/// Services combining repositories with the analytics engine
pub mod services;

/// Unified error handling shared with the core crate
pub mod errors {
    pub use homebase_core::errors::{AppError, AppResult, ErrorCode};
}

/// Domain models shared with the core crate
pub mod models {
    pub use homebase_core::models::{
        ContactFrequency, DailyMetricSample, GoalType, HealthGoal, Interaction, InteractionType,
        Person, RelationshipType, SpecialDate, SpecialDateType, Workout,
    };
}

/// The analytics engine
pub use homebase_intelligence as intelligence;
