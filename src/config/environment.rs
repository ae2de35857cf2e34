// ABOUTME: Environment configuration for the Homebase CLI and services
// ABOUTME: Parses database location, analysis window sizes, and log settings with range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

//! Environment-based configuration

use crate::errors::{AppError, AppResult};
use homebase_core::constants::{defaults, env_config, windows};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output, including omitted-result notices from the engine
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Long-running installation
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// File path
        path: PathBuf,
    },
    /// In-memory `SQLite` (tests and throwaway runs)
    Memory,
}

impl DatabaseUrl {
    /// Parse a `sqlite:` URL or a bare file path
    ///
    /// # Errors
    ///
    /// Returns a configuration error for empty input or non-`SQLite` schemes
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AppError::config_invalid("DATABASE_URL is empty"));
        }

        if let Some(path) = trimmed.strip_prefix("sqlite:") {
            let path = path.strip_prefix("//").unwrap_or(path);
            return Ok(if path == ":memory:" || path.is_empty() {
                Self::Memory
            } else {
                Self::SQLite {
                    path: PathBuf::from(path.split('?').next().unwrap_or(path)),
                }
            });
        }

        if trimmed.contains("://") {
            return Err(AppError::config_invalid(format!(
                "unsupported database URL '{trimmed}': only sqlite is supported"
            )));
        }

        Ok(Self::SQLite {
            path: PathBuf::from(trimmed),
        })
    }

    /// Convert to a `sqlx` connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(
                defaults::DATABASE_URL
                    .strip_prefix("sqlite:")
                    .unwrap_or(defaults::DATABASE_URL),
            ),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Sizes of the windows loaded for the analytics engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Days of samples behind the insights report
    pub insights_window_days: u32,
    /// Days of samples behind the sleep analysis
    pub sleep_window_days: u32,
    /// Horizon for upcoming birthdays and special dates
    pub birthday_horizon_days: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            insights_window_days: windows::DEFAULT_INSIGHTS_WINDOW_DAYS,
            sleep_window_days: windows::DEFAULT_SLEEP_WINDOW_DAYS,
            birthday_horizon_days: windows::DEFAULT_BIRTHDAY_HORIZON_DAYS,
        }
    }
}

impl AnalyticsConfig {
    /// Read window sizes from the environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a value is not a number or falls
    /// outside its accepted range
    pub fn from_env() -> AppResult<Self> {
        let window_range = windows::MIN_WINDOW_DAYS..=windows::MAX_WINDOW_DAYS;
        Ok(Self {
            insights_window_days: env_days(
                env_config::INSIGHTS_WINDOW_DAYS,
                windows::DEFAULT_INSIGHTS_WINDOW_DAYS,
                window_range.clone(),
            )?,
            sleep_window_days: env_days(
                env_config::SLEEP_WINDOW_DAYS,
                windows::DEFAULT_SLEEP_WINDOW_DAYS,
                window_range,
            )?,
            birthday_horizon_days: env_days(
                env_config::BIRTHDAY_HORIZON_DAYS,
                windows::DEFAULT_BIRTHDAY_HORIZON_DAYS,
                1..=windows::MAX_WINDOW_DAYS,
            )?,
        })
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Database location
    pub database: DatabaseUrl,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Analysis window sizes
    pub analytics: AnalyticsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unsupported database URL or an
    /// out-of-range window size
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let database = match env::var(env_config::DATABASE_URL) {
            Ok(url) => DatabaseUrl::parse_url(&url)?,
            Err(_) => DatabaseUrl::parse_url(defaults::DATABASE_URL)?,
        };

        let config = Self {
            database,
            log_level: LogLevel::from_str_or_default(
                &env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            ),
            environment: Environment::from_str_or_default(
                &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            ),
            analytics: AnalyticsConfig::from_env()?,
        };

        info!("{}", config.summary());
        Ok(config)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Homebase configuration: database={}, environment={}, log_level={}, \
             insights_window={}d, sleep_window={}d, birthday_horizon={}d",
            self.database,
            self.environment,
            self.log_level,
            self.analytics.insights_window_days,
            self.analytics.sleep_window_days,
            self.analytics.birthday_horizon_days,
        )
    }
}

/// Read a day count, falling back to `default` when unset
fn env_days(key: &str, default: u32, range: RangeInclusive<u32>) -> AppResult<u32> {
    let Ok(raw) = env::var(key) else {
        return Ok(default);
    };
    parse_days(key, &raw, range)
}

fn parse_days(key: &str, raw: &str, range: RangeInclusive<u32>) -> AppResult<u32> {
    let days: u32 = raw.trim().parse().map_err(|_| {
        AppError::config_invalid(format!(
            "{key} must be a whole number of days, got '{raw}'"
        ))
    })?;

    if range.contains(&days) {
        Ok(days)
    } else {
        Err(AppError::config_invalid(format!(
            "{key} must be between {} and {} days, got {days}",
            range.start(),
            range.end()
        )))
    }
}
