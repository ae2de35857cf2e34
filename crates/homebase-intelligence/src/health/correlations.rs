// ABOUTME: Lagged correlations between sleep, readiness, activity, steps, and workouts
// ABOUTME: Pairs nullable daily metrics and omits any correlation with too few paired points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use super::HealthInsightsEngine;
use crate::constants::correlation::{
    MIN_PAIRED_SAMPLES, MIN_WORKOUT_GROUP_SIZE, WORKOUT_CLEAR_EFFECT, WORKOUT_DIFFERENCE_SCALE,
    WORKOUT_SLIGHT_EFFECT,
};
use crate::statistics::{
    pearson_correlation, CorrelationDirection, CorrelationStrength, MetricAccumulator,
};
use chrono::NaiveDate;
use homebase_core::models::DailyMetricSample;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// A statistical relationship between two daily metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    /// Leading metric
    pub metric1: String,
    /// Following metric
    pub metric2: String,
    /// Pearson coefficient (-1 to 1), or scaled difference for workouts
    pub coefficient: f64,
    /// Magnitude band
    pub strength: CorrelationStrength,
    /// Sign
    pub direction: CorrelationDirection,
    /// Human-readable interpretation
    pub insight: String,
    /// Paired observations behind the coefficient
    pub sample_size: usize,
}

impl Correlation {
    fn from_coefficient(
        metric1: &str,
        metric2: &str,
        coefficient: f64,
        sample_size: usize,
        insight: String,
    ) -> Self {
        Self {
            metric1: metric1.to_owned(),
            metric2: metric2.to_owned(),
            coefficient,
            strength: CorrelationStrength::from_coefficient(coefficient),
            direction: CorrelationDirection::from_coefficient(coefficient),
            insight,
            sample_size,
        }
    }
}

/// How a correlation's two series line up
struct PairingSpec {
    metric1: &'static str,
    metric2: &'static str,
    /// Days between the leading and following sample
    lag: usize,
    lead: fn(&DailyMetricSample) -> Option<i64>,
    follow: fn(&DailyMetricSample) -> Option<i64>,
    insight: fn(f64) -> String,
}

const PAIRINGS: [PairingSpec; 3] = [
    PairingSpec {
        metric1: "sleep_score",
        metric2: "next_day_readiness",
        lag: 1,
        lead: |s| s.sleep_score,
        follow: |s| s.readiness_score,
        insight: sleep_readiness_insight,
    },
    PairingSpec {
        metric1: "activity_score",
        metric2: "same_night_sleep",
        lag: 1,
        lead: |s| s.activity_score,
        follow: |s| s.sleep_score,
        insight: activity_sleep_insight,
    },
    PairingSpec {
        metric1: "steps",
        metric2: "activity_score",
        lag: 0,
        lead: |s| s.activity_steps,
        follow: |s| s.activity_score,
        insight: steps_activity_insight,
    },
];

impl HealthInsightsEngine {
    /// Correlations between sleep, readiness, activity, and steps
    ///
    /// Produces at most three entries: sleep against next-day readiness,
    /// activity against that night's sleep, and same-day steps against the
    /// activity score. A pairing with fewer than seven valid points is left
    /// out rather than reported as zero.
    #[must_use]
    pub fn compute_correlations(samples: &[DailyMetricSample]) -> Vec<Correlation> {
        PAIRINGS
            .iter()
            .filter_map(|pairing| {
                let (lead, follow) =
                    paired_series(samples, pairing.lag, pairing.lead, pairing.follow);
                if lead.len() < MIN_PAIRED_SAMPLES {
                    debug!(
                        metric1 = pairing.metric1,
                        metric2 = pairing.metric2,
                        pairs = lead.len(),
                        "Skipping correlation with insufficient paired samples"
                    );
                    return None;
                }
                let r = pearson_correlation(&lead, &follow);
                Some(Correlation::from_coefficient(
                    pairing.metric1,
                    pairing.metric2,
                    r,
                    lead.len(),
                    (pairing.insight)(r),
                ))
            })
            .collect()
    }

    /// Effect of a workout on the following day's readiness
    ///
    /// Splits next-day readiness into "after a workout" and "after a rest
    /// day" groups, and reports the difference of their means divided by ten
    /// so it classifies like a correlation. Requires three observations in
    /// each group. Differences beyond ten points are clamped to `[-1, 1]`.
    #[must_use]
    pub fn compute_workout_correlation(
        samples: &[DailyMetricSample],
        workout_days: &BTreeSet<NaiveDate>,
    ) -> Option<Correlation> {
        let mut after_workout = MetricAccumulator::new();
        let mut after_rest = MetricAccumulator::new();

        for pair in samples.windows(2) {
            let next_readiness = pair[1].readiness_score;
            if workout_days.contains(&pair[0].day) {
                after_workout.push_score(next_readiness);
            } else {
                after_rest.push_score(next_readiness);
            }
        }

        if after_workout.count() < MIN_WORKOUT_GROUP_SIZE
            || after_rest.count() < MIN_WORKOUT_GROUP_SIZE
        {
            debug!(
                after_workout = after_workout.count(),
                after_rest = after_rest.count(),
                "Skipping workout correlation with insufficient samples"
            );
            return None;
        }

        let difference = after_workout.mean_or_zero() - after_rest.mean_or_zero();
        let coefficient = (difference / WORKOUT_DIFFERENCE_SCALE).clamp(-1.0, 1.0);

        Some(Correlation::from_coefficient(
            "workout",
            "next_day_readiness",
            coefficient,
            after_workout.count() + after_rest.count(),
            workout_insight(difference),
        ))
    }
}

/// Collect `(lead[i], follow[i + lag])` pairs where both values are present
fn paired_series(
    samples: &[DailyMetricSample],
    lag: usize,
    lead: fn(&DailyMetricSample) -> Option<i64>,
    follow: fn(&DailyMetricSample) -> Option<i64>,
) -> (Vec<f64>, Vec<f64>) {
    #[allow(clippy::cast_precision_loss)]
    samples
        .iter()
        .zip(samples.iter().skip(lag))
        .filter_map(|(a, b)| Some((lead(a)? as f64, follow(b)? as f64)))
        .unzip()
}

fn sleep_readiness_insight(r: f64) -> String {
    if r >= 0.4 {
        format!("Good sleep strongly predicts your next-day readiness (r={r:.2})")
    } else if r >= 0.2 {
        format!("Better sleep tends to lift your readiness the next day (r={r:.2})")
    } else if r <= -0.2 {
        format!(
            "Higher sleep scores are followed by lower readiness; \
             recovery is driven by something else (r={r:.2})"
        )
    } else {
        "Sleep and next-day readiness move mostly independently for you".to_owned()
    }
}

fn activity_sleep_insight(r: f64) -> String {
    if r >= 0.4 {
        format!("Active days are followed by noticeably better sleep (r={r:.2})")
    } else if r >= 0.2 {
        format!("More activity tends to improve that night's sleep (r={r:.2})")
    } else if r <= -0.4 {
        format!("Very active days are followed by worse sleep; try winding down earlier (r={r:.2})")
    } else if r <= -0.2 {
        format!("Higher activity slightly disrupts that night's sleep (r={r:.2})")
    } else {
        "Activity level has little effect on your sleep".to_owned()
    }
}

fn steps_activity_insight(r: f64) -> String {
    if r >= 0.7 {
        format!("Steps are the main driver of your activity score (r={r:.2})")
    } else if r >= 0.4 {
        format!("Steps contribute substantially to your activity score (r={r:.2})")
    } else {
        "Your activity score depends more on other movement than on steps".to_owned()
    }
}

fn workout_insight(difference: f64) -> String {
    if difference >= WORKOUT_CLEAR_EFFECT {
        format!("Your readiness is {difference:.0} points higher the day after a workout")
    } else if difference >= WORKOUT_SLIGHT_EFFECT {
        "Workouts give your next-day readiness a slight boost".to_owned()
    } else if difference <= -WORKOUT_CLEAR_EFFECT {
        format!(
            "Your readiness drops {:.0} points the day after a workout; plan recovery days",
            difference.abs()
        )
    } else if difference <= -WORKOUT_SLIGHT_EFFECT {
        "Workouts slightly lower your next-day readiness".to_owned()
    } else {
        "Workouts have little effect on your next-day readiness".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn window(sleep: &[Option<i64>], readiness: &[Option<i64>]) -> Vec<DailyMetricSample> {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        sleep
            .iter()
            .zip(readiness)
            .enumerate()
            .map(|(i, (s, r))| {
                DailyMetricSample::new(start + Duration::days(i as i64)).with_scores(*s, *r, None)
            })
            .collect()
    }

    #[test]
    fn test_lag_one_pairs_sleep_with_next_day_readiness() {
        // readiness[i + 1] == sleep[i], so the lagged correlation is perfect
        let sleep: Vec<Option<i64>> = [70, 80, 65, 90, 75, 85, 60, 95, 72]
            .iter()
            .map(|v| Some(*v))
            .collect();
        let mut readiness = vec![Some(50)];
        readiness.extend(sleep.iter().take(sleep.len() - 1).copied());

        let correlations = HealthInsightsEngine::compute_correlations(&window(&sleep, &readiness));

        assert_eq!(correlations.len(), 1);
        let c = &correlations[0];
        assert_eq!(c.metric1, "sleep_score");
        assert_eq!(c.sample_size, 8);
        assert!((c.coefficient - 1.0).abs() < 1e-9);
        assert_eq!(c.strength, CorrelationStrength::Strong);
        assert_eq!(c.direction, CorrelationDirection::Positive);
    }

    /// Workouts on even days; readiness is `after_workout` the day after one
    fn alternating_workouts(
        after_workout: i64,
        after_rest: i64,
    ) -> (Vec<DailyMetricSample>, BTreeSet<NaiveDate>) {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut workouts = BTreeSet::new();
        let mut samples = Vec::new();
        for i in 0..13_i64 {
            let day = start + Duration::days(i);
            if i % 2 == 0 {
                workouts.insert(day);
            }
            let readiness = if i > 0 && (i - 1) % 2 == 0 {
                after_workout
            } else {
                after_rest
            };
            samples.push(DailyMetricSample::new(day).with_scores(None, Some(readiness), None));
        }
        (samples, workouts)
    }

    #[test]
    fn test_workout_difference_scaled_into_coefficient() {
        let (samples, workouts) = alternating_workouts(85, 80);

        let c = HealthInsightsEngine::compute_workout_correlation(&samples, &workouts).unwrap();

        assert!((c.coefficient - 0.5).abs() < 1e-9);
        assert_eq!(c.strength, CorrelationStrength::Moderate);
        assert!(c.insight.contains("5 points higher"));
    }

    #[test]
    fn test_large_workout_difference_is_clamped() {
        let (samples, workouts) = alternating_workouts(60, 90);

        let c = HealthInsightsEngine::compute_workout_correlation(&samples, &workouts).unwrap();

        assert!((c.coefficient + 1.0).abs() < 1e-9);
        assert_eq!(c.strength, CorrelationStrength::Strong);
        assert_eq!(c.direction, CorrelationDirection::Negative);
    }
}
