// ABOUTME: Health insights service loading Oura windows and workouts for the analytics engine
// ABOUTME: Produces the insights report, sleep analysis, goal overview, and weekly summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use crate::config::AnalyticsConfig;
use crate::database::HealthRepository;
use crate::errors::AppResult;
use chrono::{Days, NaiveDate};
use homebase_core::dates::week_start_monday;
use homebase_intelligence::health::{
    GoalsOverview, HealthInsights, SleepAnalysis, WeeklySummary, WeeklySummaryInput,
};
use homebase_intelligence::HealthInsightsEngine;
use tracing::{debug, instrument};

/// Health analytics over a repository
pub struct HealthInsightsService<R> {
    repository: R,
    analytics: AnalyticsConfig,
}

impl<R: HealthRepository> HealthInsightsService<R> {
    /// Create a service over `repository` using the configured window sizes
    #[must_use]
    pub const fn new(repository: R, analytics: AnalyticsConfig) -> Self {
        Self {
            repository,
            analytics,
        }
    }

    /// Full insights report for the window ending today
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    #[instrument(skip(self), fields(service = "health", operation = "insights"))]
    pub async fn insights(&self, today: NaiveDate) -> AppResult<HealthInsights> {
        let from = window_start(today, self.analytics.insights_window_days);
        let samples = self.repository.daily_samples(from, today).await?;
        let workout_days = self.repository.workout_days(from, today).await?;
        debug!(samples = samples.len(), workouts = workout_days.len(), "Window loaded");

        Ok(HealthInsightsEngine::analyze(&samples, &workout_days))
    }

    /// Sleep breakdown, debt, and timing for the sleep window ending today
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    #[instrument(skip(self), fields(service = "health", operation = "sleep_analysis"))]
    pub async fn sleep_analysis(&self, today: NaiveDate) -> AppResult<SleepAnalysis> {
        let from = window_start(today, self.analytics.sleep_window_days);
        let samples = self.repository.daily_samples(from, today).await?;

        Ok(HealthInsightsEngine::analyze_sleep(&samples))
    }

    /// Progress on every active goal as of today
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    #[instrument(skip(self), fields(service = "health", operation = "goals_overview"))]
    pub async fn goals_overview(&self, today: NaiveDate) -> AppResult<GoalsOverview> {
        let goals = self.repository.active_goals().await?;
        let from = window_start(today, self.analytics.insights_window_days);
        let samples = self.repository.daily_samples(from, today).await?;
        let workout_days = self.repository.workout_days(from, today).await?;

        Ok(HealthInsightsEngine::compute_goals_overview(
            &goals,
            &samples,
            &workout_days,
            today,
        ))
    }

    /// Summary of the Monday-start week containing `week_start`
    ///
    /// Goal progress and streaks are evaluated as of the last day of that week.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    #[instrument(skip(self), fields(service = "health", operation = "weekly_summary"))]
    pub async fn weekly_summary(&self, week_start: NaiveDate) -> AppResult<WeeklySummary> {
        let week_start = week_start_monday(week_start);
        let week_end = week_start.checked_add_days(Days::new(6)).unwrap_or(week_start);
        let previous_start = week_start.checked_sub_days(Days::new(7)).unwrap_or(week_start);
        let previous_end = week_start.checked_sub_days(Days::new(1)).unwrap_or(week_start);
        let history_start = window_start(week_end, self.analytics.insights_window_days);

        let history = self.repository.daily_samples(history_start, week_end).await?;
        let workout_days = self.repository.workout_days(history_start, week_end).await?;
        let workout_count = self.repository.workout_count(week_start, week_end).await?;
        let goals = self.repository.active_goals().await?;

        let in_range = |from: NaiveDate, to: NaiveDate| {
            history
                .iter()
                .filter(|s| s.day >= from && s.day <= to)
                .cloned()
                .collect::<Vec<_>>()
        };
        let week_samples = in_range(week_start, week_end);
        let previous_week_samples = in_range(previous_start, previous_end);

        let overview =
            HealthInsightsEngine::compute_goals_overview(&goals, &history, &workout_days, week_end);
        let streaks = HealthInsightsEngine::compute_records_and_streaks(&history).streaks;

        Ok(HealthInsightsEngine::compute_weekly_summary(
            &WeeklySummaryInput {
                week_start,
                week_samples: &week_samples,
                previous_week_samples: &previous_week_samples,
                workout_count,
                goals: &overview.goals,
                streaks: &streaks,
            },
        ))
    }
}

/// First day of a `days`-long window ending on `end`
fn window_start(end: NaiveDate, days: u32) -> NaiveDate {
    end.checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
        .unwrap_or(end)
}
