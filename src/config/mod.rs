// ABOUTME: Configuration management module for the Homebase collaborators
// ABOUTME: Environment-driven settings for storage location, analysis windows, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

//! Configuration module
//!
//! All settings come from environment variables. The analytics thresholds are
//! compile-time constants in `homebase_intelligence::constants` and are not
//! configurable here; only the size of the windows handed to the engine is.

/// Environment-based configuration
pub mod environment;

pub use environment::{AnalyticsConfig, DatabaseUrl, Environment, LogLevel, ServerConfig};
