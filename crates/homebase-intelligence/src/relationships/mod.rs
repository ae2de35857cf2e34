// ABOUTME: Relationship scoring engine over people and their interaction histories
// ABOUTME: Contact streaks, 0-100 health score, overdue detection, birthdays, and contact priority
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

//! # Relationship Scoring Engine
//!
//! Operates on [`Person`] snapshots and [`Interaction`] lists loaded by the
//! caller. "Today" is always an explicit argument so results are deterministic.
//! A contact frequency of `none` switches off streak and health tracking for
//! that person.
//!
//! [`Person`]: homebase_core::models::Person
//! [`Interaction`]: homebase_core::models::Interaction

mod calendar;
mod contacts;
mod health_score;
mod streaks;

pub use calendar::{UpcomingBirthday, UpcomingDate};
pub use contacts::{OverduePerson, PeopleDashboard, PersonHealth, ReconnectCandidate, Suggestion};
pub use streaks::StreakUpdate;

/// Relationship analytics entry point
pub struct RelationshipScoringEngine;
