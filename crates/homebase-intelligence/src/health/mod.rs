// ABOUTME: Health insights engine over Oura daily samples
// ABOUTME: Correlations, weekday patterns, records, streaks, sleep debt, goals, and weekly summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

//! # Health Insights Engine
//!
//! Every operation takes an oldest-to-newest window of [`DailyMetricSample`]
//! values supplied by the caller and returns plain result structs. Missing
//! metrics are excluded from averages, and computations that lack enough data
//! are omitted from the output instead of failing.
//!
//! [`DailyMetricSample`]: homebase_core::models::DailyMetricSample

mod correlations;
mod goals;
mod records;
mod report;
mod sleep;
mod weekday;
mod weekly_summary;

pub use correlations::Correlation;
pub use goals::{GoalProgress, GoalsOverview};
pub use records::{PersonalRecord, RecordsAndStreaks, Streak, StreakType};
pub use report::HealthInsights;
pub use sleep::{DebtTrend, SleepAnalysis, SleepBreakdownPoint, SleepDebtData, SleepTimingPoint};
pub use weekday::{InsightKind, WeekdayInsight, WeekdayPattern, WeekdayPatterns};
pub use weekly_summary::{WeeklySummary, WeeklySummaryInput};

/// Health analytics entry point
///
/// Stateless: every method is a pure function of its arguments, so the
/// engine can be shared freely between concurrent requests.
pub struct HealthInsightsEngine;
