// ABOUTME: Week-in-review summary comparing a Monday-start week with the one before it
// ABOUTME: Averages, best/worst days, week-over-week deltas, goal tally, and active streaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use super::{GoalProgress, HealthInsightsEngine, Streak};
use crate::constants::weekly_summary::NOTABLE_SWING;
use crate::statistics::MetricAccumulator;
use chrono::{Days, NaiveDate};
use homebase_core::dates::{weekday_name, weekday_number};
use homebase_core::models::DailyMetricSample;
use serde::{Deserialize, Serialize};

/// Everything the weekly summary is computed from
#[derive(Debug, Clone, Copy)]
pub struct WeeklySummaryInput<'a> {
    /// Monday the week starts on
    pub week_start: NaiveDate,
    /// Samples inside the week, oldest first
    pub week_samples: &'a [DailyMetricSample],
    /// Samples of the week before
    pub previous_week_samples: &'a [DailyMetricSample],
    /// Workouts logged during the week
    pub workout_count: u32,
    /// Goal progress snapshot at the end of the week
    pub goals: &'a [GoalProgress],
    /// Threshold streaks at the end of the week
    pub streaks: &'a [Streak],
}

/// Week in review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Monday
    pub week_start: NaiveDate,
    /// Sunday
    pub week_end: NaiveDate,
    /// Mean sleep score
    pub avg_sleep: Option<f64>,
    /// Mean readiness score
    pub avg_readiness: Option<f64>,
    /// Mean activity score
    pub avg_activity: Option<f64>,
    /// Mean daily steps
    pub avg_steps: Option<f64>,
    /// Steps across the week
    pub total_steps: i64,
    /// Change in mean sleep vs the previous week
    pub sleep_delta: Option<f64>,
    /// Change in mean readiness vs the previous week
    pub readiness_delta: Option<f64>,
    /// Change in mean activity vs the previous week
    pub activity_delta: Option<f64>,
    /// Goals met in the snapshot
    pub goals_met: u32,
    /// Goals in the snapshot
    pub goals_total: u32,
    /// Positive callouts
    pub highlights: Vec<String>,
    /// Negative callouts
    pub lowlights: Vec<String>,
    /// Weekday with the highest sleep score
    pub best_sleep_day: Option<String>,
    /// That day's sleep score
    pub best_sleep_score: Option<i64>,
    /// Weekday with the lowest sleep score
    pub worst_sleep_day: Option<String>,
    /// That day's sleep score
    pub worst_sleep_score: Option<i64>,
    /// Weekday with the highest readiness score
    pub best_readiness_day: Option<String>,
    /// That day's readiness score
    pub best_readiness_score: Option<i64>,
    /// Workouts logged
    pub workout_count: u32,
    /// Streaks still running at the end of the week
    pub active_streaks: Vec<Streak>,
}

impl HealthInsightsEngine {
    /// Summarize one week against the week before
    ///
    /// Deltas are reported only when both weeks have data for the metric. A
    /// swing of more than five points becomes a highlight or lowlight.
    #[must_use]
    pub fn compute_weekly_summary(input: &WeeklySummaryInput<'_>) -> WeeklySummary {
        let this_week = WeekAverages::of(input.week_samples);
        let last_week = WeekAverages::of(input.previous_week_samples);

        let sleep_delta = delta(this_week.sleep, last_week.sleep);
        let readiness_delta = delta(this_week.readiness, last_week.readiness);
        let activity_delta = delta(this_week.activity, last_week.activity);

        let mut highlights = Vec::new();
        let mut lowlights = Vec::new();
        for (label, change) in [
            ("Sleep", sleep_delta),
            ("Readiness", readiness_delta),
            ("Activity", activity_delta),
        ] {
            match change {
                Some(d) if d > NOTABLE_SWING => {
                    highlights.push(format!("{label} score up {d:.0} points from last week"));
                }
                Some(d) if d < -NOTABLE_SWING => {
                    lowlights.push(format!(
                        "{label} score down {:.0} points from last week",
                        d.abs()
                    ));
                }
                _ => {}
            }
        }

        let goals_total = u32::try_from(input.goals.len()).unwrap_or(u32::MAX);
        let goals_met =
            u32::try_from(input.goals.iter().filter(|g| g.met).count()).unwrap_or(u32::MAX);
        if goals_total > 0 && goals_met == goals_total {
            highlights.push("Every goal met".to_owned());
        }

        let active_streaks: Vec<Streak> = input
            .streaks
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect();
        for streak in &active_streaks {
            highlights.push(format!(
                "{} streak running for {} days",
                streak.streak_type, streak.current_streak
            ));
        }

        let best_sleep = extreme_day(input.week_samples, |s| s.sleep_score, true);
        let worst_sleep = extreme_day(input.week_samples, |s| s.sleep_score, false)
            .filter(|worst| best_sleep.as_ref().is_some_and(|best| best.0 != worst.0));
        let best_readiness = extreme_day(input.week_samples, |s| s.readiness_score, true);

        WeeklySummary {
            week_start: input.week_start,
            week_end: input.week_start + Days::new(6),
            avg_sleep: this_week.sleep,
            avg_readiness: this_week.readiness,
            avg_activity: this_week.activity,
            avg_steps: this_week.steps,
            total_steps: input.week_samples.iter().filter_map(|s| s.activity_steps).sum(),
            sleep_delta,
            readiness_delta,
            activity_delta,
            goals_met,
            goals_total,
            highlights,
            lowlights,
            best_sleep_day: best_sleep.as_ref().map(|(_, name, _)| name.clone()),
            best_sleep_score: best_sleep.as_ref().map(|(_, _, score)| *score),
            worst_sleep_day: worst_sleep.as_ref().map(|(_, name, _)| name.clone()),
            worst_sleep_score: worst_sleep.as_ref().map(|(_, _, score)| *score),
            best_readiness_day: best_readiness.as_ref().map(|(_, name, _)| name.clone()),
            best_readiness_score: best_readiness.as_ref().map(|(_, _, score)| *score),
            workout_count: input.workout_count,
            active_streaks,
        }
    }
}

struct WeekAverages {
    sleep: Option<f64>,
    readiness: Option<f64>,
    activity: Option<f64>,
    steps: Option<f64>,
}

impl WeekAverages {
    fn of(samples: &[DailyMetricSample]) -> Self {
        let mean_of = |value_of: fn(&DailyMetricSample) -> Option<i64>| {
            samples.iter().map(value_of).collect::<MetricAccumulator>().mean()
        };
        Self {
            sleep: mean_of(|s| s.sleep_score),
            readiness: mean_of(|s| s.readiness_score),
            activity: mean_of(|s| s.activity_score),
            steps: mean_of(|s| s.activity_steps),
        }
    }
}

fn delta(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    Some(current? - previous?)
}

/// Day holding the highest (or lowest) value, earliest day on ties
fn extreme_day(
    samples: &[DailyMetricSample],
    value_of: fn(&DailyMetricSample) -> Option<i64>,
    highest: bool,
) -> Option<(NaiveDate, String, i64)> {
    samples
        .iter()
        .filter_map(|s| value_of(s).map(|v| (s.day, v)))
        .reduce(|acc, cur| {
            let better = if highest { cur.1 > acc.1 } else { cur.1 < acc.1 };
            if better {
                cur
            } else {
                acc
            }
        })
        .map(|(day, value)| (day, weekday_name(weekday_number(day)).to_owned(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::StreakType;
    use chrono::Duration;

    fn week(start: NaiveDate, sleep: &[i64]) -> Vec<DailyMetricSample> {
        sleep
            .iter()
            .enumerate()
            .map(|(i, s)| {
                DailyMetricSample::new(start + Duration::days(i as i64))
                    .with_scores(Some(*s), Some(75), None)
                    .with_steps(8_000)
            })
            .collect()
    }

    #[test]
    fn test_summary_flags_swings_and_lists_active_streaks_only() {
        let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let this_week = week(monday, &[82, 90, 70, 84]);
        let previous = week(monday - Duration::days(7), &[70, 72, 74, 76]);
        let streaks = vec![
            Streak {
                streak_type: StreakType::Sleep80,
                current_streak: 1,
                best_streak: 2,
                last_achieved: Some(monday + Duration::days(3)),
                is_active: true,
            },
            Streak {
                streak_type: StreakType::Steps10k,
                current_streak: 0,
                best_streak: 0,
                last_achieved: None,
                is_active: false,
            },
        ];

        let summary = HealthInsightsEngine::compute_weekly_summary(&WeeklySummaryInput {
            week_start: monday,
            week_samples: &this_week,
            previous_week_samples: &previous,
            workout_count: 2,
            goals: &[],
            streaks: &streaks,
        });

        assert_eq!(summary.week_end, monday + Duration::days(6));
        assert_eq!(summary.avg_sleep, Some(81.5));
        assert_eq!(summary.sleep_delta, Some(8.5));
        assert_eq!(summary.readiness_delta, Some(0.0));
        assert_eq!(summary.activity_delta, None);
        assert_eq!(summary.total_steps, 32_000);
        assert!(summary.highlights[0].starts_with("Sleep score up"));
        assert!(summary.lowlights.is_empty());
        assert_eq!(summary.best_sleep_day.as_deref(), Some("Tuesday"));
        assert_eq!(summary.worst_sleep_day.as_deref(), Some("Wednesday"));
        assert_eq!(summary.worst_sleep_score, Some(70));
        assert_eq!(summary.active_streaks.len(), 1);
        assert_eq!(summary.active_streaks[0].streak_type, StreakType::Sleep80);
    }
}
