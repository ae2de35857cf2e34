// ABOUTME: Sleep debt accrual/recovery model and the sleep component breakdown
// ABOUTME: Walks total-sleep scores oldest to newest; debt decays on good nights but never goes negative
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors
#![allow(clippy::cast_precision_loss)] // Safe: scores are 0-100 and windows at most 365 days

use super::HealthInsightsEngine;
use crate::constants::sleep_debt::{
    COMPONENT_WINDOW, HIGH_DEBT, MODERATE_DEBT, POINTS_PER_DEBT_UNIT, SEVERE_DEBT, THRESHOLD,
    TREND_THRESHOLD, WEEKLY_WINDOW,
};
use crate::statistics::MetricAccumulator;
use chrono::NaiveDate;
use homebase_core::dates::{weekday_name, weekday_number};
use homebase_core::models::DailyMetricSample;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direction of the average nightly deficit across the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtTrend {
    /// Deficit grew by more than five points
    Increasing,
    /// Deficit shrank by more than five points
    Decreasing,
    /// Neither
    #[default]
    Stable,
}

/// Output of the sleep debt model
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SleepDebtData {
    /// Accumulated debt, never negative
    pub current_debt: f64,
    /// First half vs second half of the window
    pub debt_trend: DebtTrend,
    /// Consecutive below-threshold nights ending at the newest sample
    pub days_in_debt: u32,
    /// Most recent night at or above the threshold
    pub last_good_night: Option<NaiveDate>,
    /// Mean total-sleep score of the last seven scored nights
    pub weekly_avg_score: f64,
    /// Extra rest days suggested (0-3)
    pub recommended_rest: u32,
}

/// Sleep contributor scores for one night
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepBreakdownPoint {
    /// Night
    pub day: NaiveDate,
    /// Overall sleep score
    pub score: Option<i64>,
    /// Deep sleep contributor
    pub deep: Option<i64>,
    /// REM contributor
    pub rem: Option<i64>,
    /// Efficiency contributor
    pub efficiency: Option<i64>,
    /// Latency contributor
    pub latency: Option<i64>,
    /// Restfulness contributor
    pub restfulness: Option<i64>,
    /// Timing contributor
    pub timing: Option<i64>,
    /// Total sleep contributor
    pub total: Option<i64>,
}

impl From<&DailyMetricSample> for SleepBreakdownPoint {
    fn from(sample: &DailyMetricSample) -> Self {
        Self {
            day: sample.day,
            score: sample.sleep_score,
            deep: sample.sleep_deep_sleep,
            rem: sample.sleep_rem_sleep,
            efficiency: sample.sleep_efficiency,
            latency: sample.sleep_latency,
            restfulness: sample.sleep_restfulness,
            timing: sample.sleep_timing,
            total: sample.sleep_total_sleep,
        }
    }
}

/// Sleep timing contributor tagged with its weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepTimingPoint {
    /// Night
    pub day: NaiveDate,
    /// Timing contributor
    pub timing_score: i64,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: usize,
}

/// Full sleep view: nightly breakdown, debt model, and timing consistency
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SleepAnalysis {
    /// One point per sample, oldest first
    pub breakdown: Vec<SleepBreakdownPoint>,
    /// Debt model over the whole window
    pub debt: SleepDebtData,
    /// Nights with a timing score
    pub timing: Vec<SleepTimingPoint>,
    /// Component averages over the last 30 samples; components without data are absent
    pub averages: BTreeMap<String, f64>,
    /// Mean timing score keyed by weekday name
    pub weekday_timing_avg: BTreeMap<String, f64>,
}

type Component = (&'static str, fn(&DailyMetricSample) -> Option<i64>);

const COMPONENTS: [Component; 8] = [
    ("sleep_score", |s| s.sleep_score),
    ("deep_sleep", |s| s.sleep_deep_sleep),
    ("rem_sleep", |s| s.sleep_rem_sleep),
    ("efficiency", |s| s.sleep_efficiency),
    ("latency", |s| s.sleep_latency),
    ("restfulness", |s| s.sleep_restfulness),
    ("timing", |s| s.sleep_timing),
    ("total_sleep", |s| s.sleep_total_sleep),
];

impl HealthInsightsEngine {
    /// Run the sleep debt model over an oldest-to-newest window
    ///
    /// Nights without a total-sleep score are skipped. Each night below 75
    /// adds `(75 - score) / 10` of debt; each night at or above 75 repays
    /// `(score - 75) / 10`, floored at zero.
    #[must_use]
    pub fn compute_sleep_debt(samples: &[DailyMetricSample]) -> SleepDebtData {
        let scored: Vec<(NaiveDate, f64)> = samples
            .iter()
            .filter_map(|s| s.sleep_total_sleep.map(|v| (s.day, v as f64)))
            .collect();

        let mut data = SleepDebtData::default();
        for &(day, score) in &scored {
            if score < THRESHOLD {
                data.current_debt += (THRESHOLD - score) / POINTS_PER_DEBT_UNIT;
                data.days_in_debt += 1;
            } else {
                data.current_debt =
                    (data.current_debt - (score - THRESHOLD) / POINTS_PER_DEBT_UNIT).max(0.0);
                data.days_in_debt = 0;
                data.last_good_night = Some(day);
            }
        }

        let scores: Vec<f64> = scored.iter().map(|&(_, score)| score).collect();
        data.debt_trend = debt_trend(&scores);
        data.weekly_avg_score = mean(&scores[scores.len().saturating_sub(WEEKLY_WINDOW)..]);
        data.recommended_rest = recommended_rest(data.current_debt);
        data
    }

    /// Nightly breakdown, debt, timing points, and component averages
    #[must_use]
    pub fn analyze_sleep(samples: &[DailyMetricSample]) -> SleepAnalysis {
        let breakdown = samples.iter().map(SleepBreakdownPoint::from).collect();

        let timing: Vec<SleepTimingPoint> = samples
            .iter()
            .filter_map(|s| {
                s.sleep_timing.map(|timing_score| SleepTimingPoint {
                    day: s.day,
                    timing_score,
                    day_of_week: weekday_number(s.day),
                })
            })
            .collect();

        let recent = &samples[samples.len().saturating_sub(COMPONENT_WINDOW)..];
        let averages = COMPONENTS
            .iter()
            .filter_map(|&(name, value_of)| {
                let acc: MetricAccumulator = recent.iter().map(value_of).collect();
                acc.mean().map(|avg| (name.to_owned(), avg))
            })
            .collect();

        let mut by_weekday = [MetricAccumulator::new(); 7];
        for point in &timing {
            by_weekday[point.day_of_week].push_score(Some(point.timing_score));
        }
        let weekday_timing_avg = by_weekday
            .iter()
            .enumerate()
            .filter_map(|(number, acc)| {
                acc.mean()
                    .map(|avg| (weekday_name(number).to_owned(), avg))
            })
            .collect();

        SleepAnalysis {
            breakdown,
            debt: Self::compute_sleep_debt(samples),
            timing,
            averages,
            weekday_timing_avg,
        }
    }
}

fn debt_trend(scores: &[f64]) -> DebtTrend {
    if scores.len() < 2 {
        return DebtTrend::Stable;
    }
    let (first, second) = scores.split_at(scores.len() / 2);
    let change = average_deficit(second) - average_deficit(first);
    if change > TREND_THRESHOLD {
        DebtTrend::Increasing
    } else if change < -TREND_THRESHOLD {
        DebtTrend::Decreasing
    } else {
        DebtTrend::Stable
    }
}

fn average_deficit(scores: &[f64]) -> f64 {
    let deficits: Vec<f64> = scores.iter().map(|s| (THRESHOLD - s).max(0.0)).collect();
    mean(&deficits)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn recommended_rest(debt: f64) -> u32 {
    if debt > SEVERE_DEBT {
        3
    } else if debt > HIGH_DEBT {
        2
    } else if debt > MODERATE_DEBT {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn nights(totals: &[Option<i64>]) -> Vec<DailyMetricSample> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        totals
            .iter()
            .enumerate()
            .map(|(i, total)| {
                let mut sample = DailyMetricSample::new(start + Duration::days(i as i64));
                sample.sleep_total_sleep = *total;
                sample
            })
            .collect()
    }

    #[test]
    fn test_debt_accrues_then_recovers_to_zero_floor() {
        let samples = nights(&[Some(55), Some(65), Some(95), Some(100)]);

        let debt = HealthInsightsEngine::compute_sleep_debt(&samples);

        // +2.0 +1.0 -2.0 -2.5 -> floored at 0
        assert!(debt.current_debt.abs() < f64::EPSILON);
        assert_eq!(debt.days_in_debt, 0);
        assert_eq!(debt.last_good_night, Some(samples[3].day));
        assert_eq!(debt.recommended_rest, 0);
    }

    #[test]
    fn test_days_in_debt_counts_trailing_bad_nights_and_skips_missing() {
        let samples = nights(&[Some(80), Some(70), None, Some(60), Some(50)]);

        let debt = HealthInsightsEngine::compute_sleep_debt(&samples);

        assert_eq!(debt.days_in_debt, 3);
        assert!((debt.current_debt - 4.5).abs() < 1e-9);
        assert_eq!(debt.last_good_night, Some(samples[0].day));
        assert!((debt.weekly_avg_score - 65.0).abs() < 1e-9);
        assert_eq!(debt.debt_trend, DebtTrend::Increasing);
    }

    #[test]
    fn test_rest_recommendation_steps() {
        assert_eq!(recommended_rest(10.0), 0);
        assert_eq!(recommended_rest(10.5), 1);
        assert_eq!(recommended_rest(20.5), 2);
        assert_eq!(recommended_rest(30.5), 3);
    }

    #[test]
    fn test_component_averages_omit_missing_components() {
        let mut samples = nights(&[Some(70), Some(90)]);
        samples[0].sleep_timing = Some(60);

        let analysis = HealthInsightsEngine::analyze_sleep(&samples);

        assert_eq!(analysis.breakdown.len(), 2);
        assert_eq!(analysis.averages.get("total_sleep"), Some(&80.0));
        assert_eq!(analysis.averages.get("timing"), Some(&60.0));
        assert!(!analysis.averages.contains_key("deep_sleep"));
        assert_eq!(analysis.timing.len(), 1);
        // 2024-01-01 is a Monday
        assert_eq!(analysis.timing[0].day_of_week, 1);
        assert_eq!(analysis.weekday_timing_avg.get("Monday"), Some(&60.0));
    }
}
