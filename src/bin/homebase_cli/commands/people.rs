// ABOUTME: People commands for homebase-cli
// ABOUTME: Dashboard, suggestions, reminders, per-person health, and interaction logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use chrono::NaiveDate;
use homebase::{
    config::environment::ServerConfig,
    database::{Database, SqlitePeopleRepository},
    errors::{AppError, AppResult},
    models::{Interaction, InteractionType},
    services::RelationshipService,
};
use tracing::{info, warn};

use crate::helpers::display::{print_interaction_change, print_json, print_streak_refresh};

type Result<T> = AppResult<T>;

fn service(
    database: &Database,
    config: &ServerConfig,
) -> RelationshipService<SqlitePeopleRepository> {
    RelationshipService::new(database.people(), config.analytics)
}

/// People dashboard
pub async fn dashboard(database: &Database, config: &ServerConfig, today: NaiveDate) -> Result<()> {
    let dashboard = service(database, config).dashboard(today).await?;
    info!(
        total = dashboard.total_people,
        overdue = dashboard.overdue_count,
        "Dashboard computed"
    );
    print_json(&dashboard)
}

/// Contact suggestions
pub async fn suggestions(
    database: &Database,
    config: &ServerConfig,
    today: NaiveDate,
) -> Result<()> {
    print_json(&service(database, config).suggestions(today).await?)
}

/// Reconnect candidates
pub async fn reconnect(database: &Database, config: &ServerConfig, today: NaiveDate) -> Result<()> {
    print_json(&service(database, config).reconnect(today).await?)
}

/// Upcoming special dates
pub async fn upcoming(database: &Database, config: &ServerConfig, today: NaiveDate) -> Result<()> {
    print_json(&service(database, config).upcoming_dates(today).await?)
}

/// Recompute every streak
pub async fn refresh_streaks(
    database: &Database,
    config: &ServerConfig,
    today: NaiveDate,
) -> Result<()> {
    let refreshed = service(database, config).refresh_all_streaks(today).await?;
    print_streak_refresh(refreshed)
}

/// One person's health summary
pub async fn health(
    database: &Database,
    config: &ServerConfig,
    person_id: i64,
    today: NaiveDate,
) -> Result<()> {
    print_json(&service(database, config).person_health(person_id, today).await?)
}

/// Log an interaction, then print the refreshed person summary
pub async fn log_interaction(
    database: &Database,
    config: &ServerConfig,
    person_id: i64,
    date: NaiveDate,
    interaction_type: InteractionType,
    notes: String,
    today: NaiveDate,
) -> Result<()> {
    if date > today {
        return Err(AppError::invalid_input(format!(
            "interaction date {date} is after today ({today})"
        )));
    }

    let service = service(database, config);
    let interaction = Interaction {
        id: 0,
        person_id,
        date,
        interaction_type,
        notes,
    };
    let interaction_id = service.record_interaction(&interaction, today).await?;
    let summary = service.person_health(person_id, today).await?;

    print_interaction_change("logged", interaction_id, &summary)
}

/// Delete an interaction
pub async fn delete_interaction(
    database: &Database,
    config: &ServerConfig,
    interaction_id: i64,
    today: NaiveDate,
) -> Result<()> {
    let service = service(database, config);
    if !service.remove_interaction(interaction_id, today).await? {
        warn!(interaction_id, "Interaction not found");
        return Err(AppError::not_found(format!("Interaction {interaction_id}")));
    }

    print_interaction_change("deleted", interaction_id, &serde_json::Value::Null)
}
