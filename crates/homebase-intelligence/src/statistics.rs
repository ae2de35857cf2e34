// ABOUTME: Statistical primitives shared by the health and relationship engines
// ABOUTME: Pearson correlation, strength/direction classification, streaks, and null-aware means
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are bounded by a 365-day window

use crate::constants::correlation::{
    DIRECTION_THRESHOLD, MODERATE_THRESHOLD, STRONG_THRESHOLD, WEAK_THRESHOLD,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pearson correlation coefficient of two paired series
///
/// Returns exactly `0.0` when the series differ in length, have fewer than
/// two points, contain a non-finite value, or either series is constant.
/// That is a defined "no correlation" result, not a failure.
#[must_use]
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return 0.0;
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) || is_constant(x) || is_constant(y) {
        return 0.0;
    }

    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
    let sum_xx: f64 = x.iter().map(|a| a * a).sum();
    let sum_yy: f64 = y.iter().map(|b| b * b).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let variance_product = (n * sum_xx - sum_x * sum_x) * (n * sum_yy - sum_y * sum_y);

    // Near-constant input can round the variance to zero or below
    let r = numerator / variance_product.sqrt();
    if r.is_finite() {
        r.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Strength band of a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationStrength {
    /// |r| < 0.2
    None,
    /// 0.2 <= |r| < 0.4
    Weak,
    /// 0.4 <= |r| < 0.7
    Moderate,
    /// |r| >= 0.7
    Strong,
}

impl CorrelationStrength {
    /// Classify by the magnitude of `r`
    #[must_use]
    pub fn from_coefficient(r: f64) -> Self {
        let magnitude = r.abs();
        if magnitude >= STRONG_THRESHOLD {
            Self::Strong
        } else if magnitude >= MODERATE_THRESHOLD {
            Self::Moderate
        } else if magnitude >= WEAK_THRESHOLD {
            Self::Weak
        } else {
            Self::None
        }
    }
}

/// Sign of a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationDirection {
    /// r >= 0.1
    Positive,
    /// r <= -0.1
    Negative,
    /// Between the two
    Neutral,
}

impl CorrelationDirection {
    /// Classify by the sign of `r`
    #[must_use]
    pub fn from_coefficient(r: f64) -> Self {
        if r >= DIRECTION_THRESHOLD {
            Self::Positive
        } else if r <= -DIRECTION_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Result of scanning a window for consecutive qualifying days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakRun {
    /// Qualifying days counted back from the newest element
    pub current: u32,
    /// Longest run anywhere in the window
    pub best: u32,
    /// Last qualifying day anywhere in the window
    pub last_achieved: Option<NaiveDate>,
}

/// Scan an oldest-to-newest window for streaks of elements satisfying `qualifies`
///
/// `last_achieved` is overwritten on every qualifying element of the forward
/// scan, so it reports the last qualifying day in the whole window even when
/// the current streak is broken.
pub fn longest_and_current_streak<T>(
    samples: &[T],
    day_of: impl Fn(&T) -> NaiveDate,
    qualifies: impl Fn(&T) -> bool,
) -> StreakRun {
    let mut run = StreakRun::default();
    let mut running = 0_u32;

    for sample in samples {
        if qualifies(sample) {
            running += 1;
            run.best = run.best.max(running);
            run.last_achieved = Some(day_of(sample));
        } else {
            running = 0;
        }
    }

    run.current = samples
        .iter()
        .rev()
        .take_while(|sample| qualifies(sample))
        .fold(0, |count, _| count + 1);

    run
}

/// Running aggregate over optional samples
///
/// Absent values are skipped entirely: they never count toward the mean's
/// denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricAccumulator {
    sum: f64,
    count: usize,
    min: Option<f64>,
    max: Option<f64>,
}

impl MetricAccumulator {
    /// Empty accumulator
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sum: 0.0,
            count: 0,
            min: None,
            max: None,
        }
    }

    /// Add a value if present
    pub fn push(&mut self, value: Option<f64>) {
        let Some(value) = value else {
            return;
        };
        self.sum += value;
        self.count += 1;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    /// Add an integer score if present
    pub fn push_score(&mut self, value: Option<i64>) {
        self.push(value.map(|v| v as f64));
    }

    /// Number of present values
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Sum of present values
    #[must_use]
    pub const fn sum(&self) -> f64 {
        self.sum
    }

    /// Mean of present values, `None` when nothing was present
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    /// Mean of present values, `0.0` when nothing was present
    #[must_use]
    pub fn mean_or_zero(&self) -> f64 {
        self.mean().unwrap_or(0.0)
    }

    /// Smallest present value
    #[must_use]
    pub const fn min(&self) -> Option<f64> {
        self.min
    }

    /// Largest present value
    #[must_use]
    pub const fn max(&self) -> Option<f64> {
        self.max
    }
}

impl FromIterator<Option<i64>> for MetricAccumulator {
    fn from_iter<I: IntoIterator<Item = Option<i64>>>(iter: I) -> Self {
        let mut acc = Self::new();
        for value in iter {
            acc.push_score(value);
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_perfect_positive_and_negative_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let up = [2.0, 4.0, 6.0, 8.0, 10.0];
        let down = [10.0, 8.0, 6.0, 4.0, 2.0];
        assert!((pearson_correlation(&x, &up) - 1.0).abs() < 1e-12);
        assert!((pearson_correlation(&x, &down) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs_yield_zero() {
        assert!(pearson_correlation(&[1.0], &[2.0]).abs() < f64::EPSILON);
        assert!(pearson_correlation(&[1.0, 2.0], &[1.0]).abs() < f64::EPSILON);
        assert!(pearson_correlation(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).abs() < f64::EPSILON);
        assert!(pearson_correlation(&[], &[]).abs() < f64::EPSILON);
        assert!(pearson_correlation(&[0.1; 9], &[5.0, 1.0, 7.0, 2.0, 9.0, 3.0, 4.0, 8.0, 6.0])
            .abs()
            < f64::EPSILON);
    }

    #[test]
    fn test_strength_boundaries() {
        assert_eq!(
            CorrelationStrength::from_coefficient(0.199),
            CorrelationStrength::None
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(0.2),
            CorrelationStrength::Weak
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(0.399),
            CorrelationStrength::Weak
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(0.4),
            CorrelationStrength::Moderate
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(-0.699),
            CorrelationStrength::Moderate
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(-0.7),
            CorrelationStrength::Strong
        );
    }

    #[test]
    fn test_direction_boundaries() {
        assert_eq!(
            CorrelationDirection::from_coefficient(0.1),
            CorrelationDirection::Positive
        );
        assert_eq!(
            CorrelationDirection::from_coefficient(0.09),
            CorrelationDirection::Neutral
        );
        assert_eq!(
            CorrelationDirection::from_coefficient(-0.1),
            CorrelationDirection::Negative
        );
    }

    #[test]
    fn test_streak_last_achieved_is_last_qualifying_day_in_window() {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let days: Vec<(NaiveDate, bool)> = [true, true, true, false, true, false, false]
            .iter()
            .enumerate()
            .map(|(i, q)| (base + Duration::days(i64::try_from(i).unwrap()), *q))
            .collect();

        let run = longest_and_current_streak(&days, |d| d.0, |d| d.1);

        assert_eq!(run.current, 0);
        assert_eq!(run.best, 3);
        assert_eq!(run.last_achieved, Some(base + Duration::days(4)));
    }

    #[test]
    fn test_accumulator_excludes_missing_values() {
        let acc: MetricAccumulator = [Some(80), None, Some(60), None].into_iter().collect();
        assert_eq!(acc.count(), 2);
        assert_eq!(acc.mean(), Some(70.0));
        assert_eq!(acc.min(), Some(60.0));
        assert_eq!(acc.max(), Some(80.0));
        assert_eq!(MetricAccumulator::new().mean(), None);
    }
}
