// ABOUTME: Homebase CLI - command-line access to the health and relationship analytics
// ABOUTME: Loads windows from SQLite, runs the engines, and prints results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors
//!
//! Usage:
//! ```bash
//! # Full health insights report for the configured window
//! homebase-cli health insights
//!
//! # Sleep analysis as of a fixed day
//! homebase-cli --today 2024-06-01 health sleep
//!
//! # Week in review for the week containing a date
//! homebase-cli health weekly --week-start 2024-05-27
//!
//! # Who to contact next
//! homebase-cli people suggestions
//!
//! # Log a call and refresh the streak
//! homebase-cli people log-interaction --person-id 3 --type call
//!
//! # Recompute every contact streak
//! homebase-cli people refresh-streaks
//! ```

mod commands;
mod helpers;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use homebase::{
    config::environment::{DatabaseUrl, ServerConfig},
    database::Database,
    errors::{AppError, AppResult},
    logging::LoggingConfig,
    models::InteractionType,
};
use homebase_core::dates::parse_day;
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "homebase-cli",
    about = "Homebase analytics CLI",
    long_about = "Health insights over Oura data and relationship scoring over your contacts, \
                  printed as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Evaluate as of this day (YYYY-MM-DD) instead of the local date
    #[arg(long, global = true, value_parser = parse_day_arg)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Health insights over Oura samples
    Health {
        #[command(subcommand)]
        action: HealthCommand,
    },

    /// Relationship tracker views and maintenance
    People {
        #[command(subcommand)]
        action: PeopleCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum HealthCommand {
    /// Correlations, weekday patterns, records, and streaks
    Insights,

    /// Sleep breakdown, debt, and timing
    Sleep,

    /// Progress on active goals
    Goals,

    /// Week in review against the week before
    Weekly {
        /// Any day of the week to summarize (defaults to the current week)
        #[arg(long, value_parser = parse_day_arg)]
        week_start: Option<NaiveDate>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PeopleCommand {
    /// Totals, overdue contacts, and upcoming birthdays
    Dashboard,

    /// Ranked list of who to contact next
    Suggestions,

    /// Loose connections not contacted in six months
    Reconnect,

    /// Recurring special dates coming up
    Upcoming,

    /// Recompute and store every contact streak
    RefreshStreaks,

    /// Health score and streaks for one person
    Health {
        /// Person ID
        id: i64,
    },

    /// Log an interaction and refresh the person's streak
    LogInteraction {
        /// Person ID
        #[arg(long)]
        person_id: i64,

        /// Day of the interaction (defaults to today)
        #[arg(long, value_parser = parse_day_arg)]
        date: Option<NaiveDate>,

        /// message, call, video, or in_person
        #[arg(long = "type", default_value = "message", value_parser = parse_interaction_type)]
        interaction_type: InteractionType,

        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Delete an interaction and refresh the person's streak
    DeleteInteraction {
        /// Interaction ID
        id: i64,
    },
}

fn parse_day_arg(value: &str) -> Result<NaiveDate> {
    parse_day(value)
        .ok_or_else(|| AppError::invalid_format(format!("expected YYYY-MM-DD, got '{value}'")))
}

fn parse_interaction_type(value: &str) -> Result<InteractionType> {
    value.parse().map_err(AppError::invalid_input)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    // Load configuration
    let mut config = ServerConfig::from_env()?;
    if let Some(url) = cli.database_url.as_deref() {
        config.database = DatabaseUrl::parse_url(url)?;
    }
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    info!("Connecting to database: {}", config.database);
    let database = Database::new(&config.database.to_connection_string()).await?;

    match cli.command {
        Command::Health { action } => match action {
            HealthCommand::Insights => {
                commands::health::insights(&database, &config, today).await?;
            }
            HealthCommand::Sleep => commands::health::sleep(&database, &config, today).await?,
            HealthCommand::Goals => commands::health::goals(&database, &config, today).await?,
            HealthCommand::Weekly { week_start } => {
                commands::health::weekly(&database, &config, week_start.unwrap_or(today)).await?;
            }
        },
        Command::People { action } => match action {
            PeopleCommand::Dashboard => {
                commands::people::dashboard(&database, &config, today).await?;
            }
            PeopleCommand::Suggestions => {
                commands::people::suggestions(&database, &config, today).await?;
            }
            PeopleCommand::Reconnect => {
                commands::people::reconnect(&database, &config, today).await?;
            }
            PeopleCommand::Upcoming => {
                commands::people::upcoming(&database, &config, today).await?;
            }
            PeopleCommand::RefreshStreaks => {
                commands::people::refresh_streaks(&database, &config, today).await?;
            }
            PeopleCommand::Health { id } => {
                commands::people::health(&database, &config, id, today).await?;
            }
            PeopleCommand::LogInteraction {
                person_id,
                date,
                interaction_type,
                notes,
            } => {
                commands::people::log_interaction(
                    &database,
                    &config,
                    person_id,
                    date.unwrap_or(today),
                    interaction_type,
                    notes,
                    today,
                )
                .await?;
            }
            PeopleCommand::DeleteInteraction { id } => {
                commands::people::delete_interaction(&database, &config, id, today).await?;
            }
        },
    }

    Ok(())
}
