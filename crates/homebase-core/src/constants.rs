// ABOUTME: Application-wide constants for Homebase organized by domain
// ABOUTME: Service names, default lookback windows, and environment variable keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

/// Service names used in structured logging
pub mod service_names {
    /// The command-line front end
    pub const HOMEBASE_CLI: &str = "homebase-cli";
    /// Health analytics service
    pub const HEALTH: &str = "health";
    /// Relationship tracker service
    pub const PEOPLE: &str = "people";
}

/// Lookback window limits (days)
pub mod windows {
    /// Smallest window the analytics accept
    pub const MIN_WINDOW_DAYS: u32 = 7;
    /// Largest window the analytics accept
    pub const MAX_WINDOW_DAYS: u32 = 365;
    /// Default window for the insights report
    pub const DEFAULT_INSIGHTS_WINDOW_DAYS: u32 = 90;
    /// Default window for the sleep deep dive
    pub const DEFAULT_SLEEP_WINDOW_DAYS: u32 = 30;
    /// Default horizon for upcoming birthdays and special dates
    pub const DEFAULT_BIRTHDAY_HORIZON_DAYS: u32 = 30;
}

/// Default values for configuration
pub mod defaults {
    /// Database used when `DATABASE_URL` is unset
    pub const DATABASE_URL: &str = "sqlite:./data/homebase.db";
}

/// Environment variable names
pub mod env_config {
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Insights report window
    pub const INSIGHTS_WINDOW_DAYS: &str = "HOMEBASE_INSIGHTS_WINDOW_DAYS";
    /// Sleep analysis window
    pub const SLEEP_WINDOW_DAYS: &str = "HOMEBASE_SLEEP_WINDOW_DAYS";
    /// Birthday and special date horizon
    pub const BIRTHDAY_HORIZON_DAYS: &str = "HOMEBASE_BIRTHDAY_HORIZON_DAYS";
}
