// ABOUTME: Health insights and relationship scoring analytics for Homebase
// ABOUTME: Pure, synchronous computations over in-memory daily samples and interaction histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

#![deny(unsafe_code)]

//! # Homebase Intelligence
//!
//! The analytics engine behind the health and people pages. Nothing here
//! performs I/O or keeps state between calls: callers load a window of data,
//! hand it over, and serialize whatever comes back.
//!
//! Insufficient data never produces an error. A correlation with too few
//! paired points is left out of the result, an empty window yields an empty
//! report, and missing metric values are excluded from every average.
//!
//! ## Modules
//!
//! - **statistics**: Pearson correlation, strength/direction bands, streak scans, null-aware means
//! - **health**: Correlations, weekday patterns, records, streaks, sleep debt, goals, weekly summaries
//! - **relationships**: Contact streaks, health score, overdue detection, birthdays, suggestions
//! - **constants**: The fixed thresholds all of the above share

/// Fixed thresholds grouped by concern
pub mod constants;

/// Health insights over daily Oura samples
pub mod health;

/// Relationship scoring over people and interactions
pub mod relationships;

/// Statistical primitives shared by both engines
pub mod statistics;

pub use health::HealthInsightsEngine;
pub use relationships::RelationshipScoringEngine;
