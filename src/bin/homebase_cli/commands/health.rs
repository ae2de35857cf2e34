// ABOUTME: Health commands for homebase-cli
// ABOUTME: Runs the insights, sleep, goals, and weekly summary analyses and prints them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use chrono::NaiveDate;
use homebase::{
    config::environment::ServerConfig,
    database::{Database, SqliteHealthRepository},
    errors::AppResult,
    services::HealthInsightsService,
};
use tracing::info;

use crate::helpers::display::print_json;

type Result<T> = AppResult<T>;

fn service(
    database: &Database,
    config: &ServerConfig,
) -> HealthInsightsService<SqliteHealthRepository> {
    HealthInsightsService::new(database.health(), config.analytics)
}

/// Full insights report
pub async fn insights(database: &Database, config: &ServerConfig, today: NaiveDate) -> Result<()> {
    let report = service(database, config).insights(today).await?;
    info!(
        days = report.total_days,
        correlations = report.correlations.len(),
        "Insights computed"
    );
    print_json(&report)
}

/// Sleep analysis
pub async fn sleep(database: &Database, config: &ServerConfig, today: NaiveDate) -> Result<()> {
    print_json(&service(database, config).sleep_analysis(today).await?)
}

/// Goal progress overview
pub async fn goals(database: &Database, config: &ServerConfig, today: NaiveDate) -> Result<()> {
    print_json(&service(database, config).goals_overview(today).await?)
}

/// Weekly summary for the week containing `week_of`
pub async fn weekly(database: &Database, config: &ServerConfig, week_of: NaiveDate) -> Result<()> {
    print_json(&service(database, config).weekly_summary(week_of).await?)
}
