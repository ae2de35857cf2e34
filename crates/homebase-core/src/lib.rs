// ABOUTME: Core types and constants for the Homebase life-administration backend
// ABOUTME: Foundation crate with error handling, domain models, dates, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

#![deny(unsafe_code)]

//! # Homebase Core
//!
//! Foundation crate providing shared types for the Homebase backend. The
//! analytics engine, the persistence layer, and the CLI all speak in these
//! types, so this crate is designed to change infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide defaults and limits
//! - **models**: Oura daily samples, workouts, goals, people, and interactions
//! - **dates**: Calendar helpers shared by every date-relative computation

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (daily metric samples, people, interactions, goals)
pub mod models;

/// Calendar arithmetic helpers (day differences, anniversaries, week starts)
pub mod dates;
