// ABOUTME: Day-of-week pattern mining over daily Oura samples
// ABOUTME: Per-weekday averages plus best/worst sleep and readiness day claims
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use super::HealthInsightsEngine;
use crate::constants::weekday::MIN_SAMPLES_FOR_INSIGHT;
use crate::statistics::MetricAccumulator;
use homebase_core::dates::{weekday_name, weekday_number};
use homebase_core::models::DailyMetricSample;
use serde::{Deserialize, Serialize};

/// Averages for one day of the week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayPattern {
    /// English weekday name
    pub day_name: String,
    /// 0 = Sunday .. 6 = Saturday
    pub day_number: usize,
    /// Mean sleep score, absent when no samples had one
    pub avg_sleep: Option<f64>,
    /// Mean readiness score
    pub avg_readiness: Option<f64>,
    /// Mean activity score
    pub avg_activity: Option<f64>,
    /// Mean step count
    pub avg_steps: Option<f64>,
    /// Number of non-null sleep samples on this weekday
    pub sample_size: usize,
}

/// Whether a weekday claim is the high or the low point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Highest weekday average
    Best,
    /// Lowest weekday average
    Worst,
}

/// A best/worst day-of-week claim for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayInsight {
    /// Weekday the claim is about
    pub day_name: String,
    /// `sleep` or `readiness`
    pub metric: String,
    /// Best or worst
    #[serde(rename = "type")]
    pub kind: InsightKind,
    /// That weekday's average
    pub value: f64,
    /// Average across all days
    pub avg_all: f64,
    /// Human-readable claim
    pub insight: String,
}

/// All seven weekday patterns and the claims derived from them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekdayPatterns {
    /// Sunday first
    pub patterns: Vec<WeekdayPattern>,
    /// Up to four best/worst claims
    pub insights: Vec<WeekdayInsight>,
}

#[derive(Default, Clone, Copy)]
struct WeekdayBucket {
    sleep: MetricAccumulator,
    readiness: MetricAccumulator,
    activity: MetricAccumulator,
    steps: MetricAccumulator,
}

impl HealthInsightsEngine {
    /// Group samples by weekday (Sunday = 0) and derive best/worst day claims
    ///
    /// A weekday is eligible for a claim only with at least two sleep samples.
    /// When a single weekday is eligible it is reported as best but never also
    /// as worst.
    #[must_use]
    pub fn compute_weekday_patterns(samples: &[DailyMetricSample]) -> WeekdayPatterns {
        let mut buckets = [WeekdayBucket::default(); 7];
        let mut overall_sleep = MetricAccumulator::new();
        let mut overall_readiness = MetricAccumulator::new();

        for sample in samples {
            let bucket = &mut buckets[weekday_number(sample.day)];
            bucket.sleep.push_score(sample.sleep_score);
            bucket.readiness.push_score(sample.readiness_score);
            bucket.activity.push_score(sample.activity_score);
            bucket.steps.push_score(sample.activity_steps);
            overall_sleep.push_score(sample.sleep_score);
            overall_readiness.push_score(sample.readiness_score);
        }

        let patterns: Vec<WeekdayPattern> = buckets
            .iter()
            .enumerate()
            .map(|(number, bucket)| WeekdayPattern {
                day_name: weekday_name(number).to_owned(),
                day_number: number,
                avg_sleep: bucket.sleep.mean(),
                avg_readiness: bucket.readiness.mean(),
                avg_activity: bucket.activity.mean(),
                avg_steps: bucket.steps.mean(),
                sample_size: bucket.sleep.count(),
            })
            .collect();

        let mut insights = metric_insights(
            &patterns,
            "sleep",
            |p| p.avg_sleep,
            overall_sleep.mean_or_zero(),
        );
        insights.extend(metric_insights(
            &patterns,
            "readiness",
            |p| p.avg_readiness,
            overall_readiness.mean_or_zero(),
        ));

        WeekdayPatterns { patterns, insights }
    }
}

fn metric_insights(
    patterns: &[WeekdayPattern],
    metric: &str,
    value_of: fn(&WeekdayPattern) -> Option<f64>,
    avg_all: f64,
) -> Vec<WeekdayInsight> {
    let eligible: Vec<(&WeekdayPattern, f64)> = patterns
        .iter()
        .filter(|p| p.sample_size >= MIN_SAMPLES_FOR_INSIGHT)
        .filter_map(|p| value_of(p).map(|v| (p, v)))
        .collect();

    // Strict comparisons keep the earliest weekday on ties
    let best = eligible
        .iter()
        .copied()
        .reduce(|acc, cur| if cur.1 > acc.1 { cur } else { acc });
    let worst = eligible
        .iter()
        .copied()
        .reduce(|acc, cur| if cur.1 < acc.1 { cur } else { acc });

    let mut insights = Vec::with_capacity(2);
    if let Some((pattern, value)) = best {
        insights.push(weekday_insight(pattern, metric, InsightKind::Best, value, avg_all));
    }
    if let (Some((best_day, _)), Some((pattern, value))) = (best, worst) {
        if pattern.day_number != best_day.day_number {
            insights.push(weekday_insight(pattern, metric, InsightKind::Worst, value, avg_all));
        }
    }
    insights
}

fn weekday_insight(
    pattern: &WeekdayPattern,
    metric: &str,
    kind: InsightKind,
    value: f64,
    avg_all: f64,
) -> WeekdayInsight {
    let label = match kind {
        InsightKind::Best => "best",
        InsightKind::Worst => "worst",
    };
    WeekdayInsight {
        day_name: pattern.day_name.clone(),
        metric: metric.to_owned(),
        kind,
        value,
        avg_all,
        insight: format!(
            "{} is your {label} {metric} day ({value:.0} vs {avg_all:.0} average)",
            pattern.day_name
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    #[test]
    fn test_single_eligible_weekday_is_best_only() {
        // 2024-03-04 is a Monday; two Mondays with sleep, one Tuesday
        let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let samples = vec![
            DailyMetricSample::new(monday).with_scores(Some(80), None, None),
            DailyMetricSample::new(monday + Duration::days(1)).with_scores(Some(60), None, None),
            DailyMetricSample::new(monday + Duration::days(7)).with_scores(Some(90), None, None),
        ];

        let result = HealthInsightsEngine::compute_weekday_patterns(&samples);

        assert_eq!(result.patterns.len(), 7);
        assert_eq!(result.patterns[1].sample_size, 2);
        assert_eq!(result.patterns[1].avg_sleep, Some(85.0));
        assert_eq!(result.patterns[0].avg_sleep, None);
        assert_eq!(result.insights.len(), 1);
        assert_eq!(result.insights[0].day_name, "Monday");
        assert_eq!(result.insights[0].kind, InsightKind::Best);
        assert!((result.insights[0].avg_all - 230.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_best_and_worst_for_both_metrics() {
        let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let samples: Vec<DailyMetricSample> = (0..14)
            .map(|i| {
                let day = monday + Duration::days(i);
                let score = 60 + weekday_number(day) as i64 * 5;
                DailyMetricSample::new(day).with_scores(Some(score), Some(100 - score), None)
            })
            .collect();

        let result = HealthInsightsEngine::compute_weekday_patterns(&samples);

        let claims: Vec<(&str, &str, InsightKind)> = result
            .insights
            .iter()
            .map(|i| (i.metric.as_str(), i.day_name.as_str(), i.kind))
            .collect();
        assert_eq!(
            claims,
            vec![
                ("sleep", "Saturday", InsightKind::Best),
                ("sleep", "Sunday", InsightKind::Worst),
                ("readiness", "Sunday", InsightKind::Best),
                ("readiness", "Saturday", InsightKind::Worst),
            ]
        );
    }
}
