// ABOUTME: Service layer joining repositories with the analytics engine
// ABOUTME: Loads the configured windows, runs the engines, and persists recomputed streaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

//! Domain service layer
//!
//! Services own no state beyond a repository and the window configuration.
//! Every operation takes `today` explicitly so results are reproducible.

/// Health insights, sleep analysis, goals, and weekly summaries
pub mod health_insights;

/// Relationship dashboard, suggestions, and streak maintenance
pub mod relationships;

pub use health_insights::HealthInsightsService;
pub use relationships::RelationshipService;
