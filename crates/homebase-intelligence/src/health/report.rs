// ABOUTME: Full health insights report assembled from every analysis over one window
// ABOUTME: Correlations (including workouts), weekday patterns, records, streaks, and headline averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use super::{
    Correlation, HealthInsightsEngine, PersonalRecord, Streak, WeekdayInsight, WeekdayPattern,
};
use crate::statistics::MetricAccumulator;
use chrono::NaiveDate;
use homebase_core::models::DailyMetricSample;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Everything the insights page shows for a window
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HealthInsights {
    /// Metric correlations, workout effect last when available
    pub correlations: Vec<Correlation>,
    /// Averages per weekday, Sunday first
    pub weekday_patterns: Vec<WeekdayPattern>,
    /// Best/worst weekday claims
    pub weekday_insights: Vec<WeekdayInsight>,
    /// Personal records
    pub records: Vec<PersonalRecord>,
    /// Threshold streaks
    pub streaks: Vec<Streak>,
    /// Samples in the window
    pub total_days: usize,
    /// Mean sleep score, 0 without data
    pub avg_sleep: f64,
    /// Mean readiness score, 0 without data
    pub avg_readiness: f64,
    /// Mean activity score, 0 without data
    pub avg_activity: f64,
}

impl HealthInsightsEngine {
    /// Run every analysis over one oldest-to-newest window
    #[must_use]
    pub fn analyze(
        samples: &[DailyMetricSample],
        workout_days: &BTreeSet<NaiveDate>,
    ) -> HealthInsights {
        if samples.is_empty() {
            debug!("No samples in window, returning empty insights");
            return HealthInsights::default();
        }

        let mut correlations = Self::compute_correlations(samples);
        correlations.extend(Self::compute_workout_correlation(samples, workout_days));

        let weekday = Self::compute_weekday_patterns(samples);
        let records = Self::compute_records_and_streaks(samples);

        let mean = |value_of: fn(&DailyMetricSample) -> Option<i64>| {
            samples
                .iter()
                .map(value_of)
                .collect::<MetricAccumulator>()
                .mean_or_zero()
        };

        HealthInsights {
            correlations,
            weekday_patterns: weekday.patterns,
            weekday_insights: weekday.insights,
            records: records.records,
            streaks: records.streaks,
            total_days: samples.len(),
            avg_sleep: mean(|s| s.sleep_score),
            avg_readiness: mean(|s| s.readiness_score),
            avg_activity: mean(|s| s.activity_score),
        }
    }
}
