// ABOUTME: Core data models for the Homebase backend
// ABOUTME: Re-exports health metric and relationship tracker types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

//! # Data Models
//!
//! Plain data handed between the persistence layer and the analytics engine.
//! Models are read-only snapshots per request; nothing here performs I/O.
//!
//! - `DailyMetricSample`: one day of Oura sleep/readiness/activity metrics
//! - `Workout`, `HealthGoal`: inputs to workout correlation and goal tracking
//! - `Person`, `Interaction`, `SpecialDate`: relationship tracker records

mod health;
mod people;

pub use health::{DailyMetricSample, GoalType, HealthGoal, Workout};
pub use people::{
    ContactFrequency, Interaction, InteractionType, Person, RelationshipType, SpecialDate,
    SpecialDateType,
};
