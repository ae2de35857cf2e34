// ABOUTME: Goal progress for daily score/step goals and weekly workout-frequency goals
// ABOUTME: Progress percentage, met flag, streaks, and the today/this-week overview tallies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors
#![allow(clippy::cast_precision_loss)] // Safe: goal targets and step counts fit f64 exactly

use super::HealthInsightsEngine;
use crate::statistics::longest_and_current_streak;
use chrono::{Datelike, Days, NaiveDate};
use homebase_core::dates::week_start_monday;
use homebase_core::models::{DailyMetricSample, GoalType, HealthGoal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Where a goal stands today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// The goal being tracked
    pub goal: HealthGoal,
    /// Today's value (workouts so far this week for workout goals)
    pub current_value: Option<i64>,
    /// Percentage of target reached, capped at 100
    pub progress: f64,
    /// Target reached
    pub met: bool,
    /// Consecutive days (weeks for workout goals) meeting the target
    pub current_streak: u32,
    /// Longest run in the window
    pub best_streak: u32,
    /// Days met this week, or workout days this week
    pub weekly_count: u32,
    /// Last day (week start for workout goals) the target was met
    pub last_achieved: Option<NaiveDate>,
}

/// Progress for every active goal plus today/this-week tallies
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GoalsOverview {
    /// One entry per active goal
    pub goals: Vec<GoalProgress>,
    /// Goals met today
    pub todays_met: u32,
    /// Active goals
    pub todays_total: u32,
    /// Goal-days met this week
    pub weekly_met: u32,
    /// Goal-days available so far this week
    pub weekly_total: u32,
}

impl HealthInsightsEngine {
    /// Progress of one goal as of `today`
    ///
    /// `history` is the oldest-to-newest window ending today. Daily goals
    /// read `today_value` and compute a day streak over `history`; workout
    /// frequency goals ignore `today_value` and count distinct workout days
    /// in the Monday-start week, with streaks counted in whole weeks.
    #[must_use]
    pub fn compute_goal_progress(
        goal: &HealthGoal,
        today_value: Option<i64>,
        history: &[DailyMetricSample],
        workout_days: &BTreeSet<NaiveDate>,
        today: NaiveDate,
    ) -> GoalProgress {
        if goal.goal_type == GoalType::WorkoutFrequency {
            return workout_goal_progress(goal, history, workout_days, today);
        }

        let goal_type = goal.goal_type;
        let target = goal.target;
        let run = longest_and_current_streak(
            history,
            |s| s.day,
            |s| goal_type.daily_value(s).is_some_and(|v| v >= target),
        );

        let week_start = week_start_monday(today);
        let weekly_count = history
            .iter()
            .filter(|s| s.day >= week_start && s.day <= today)
            .filter(|s| goal_type.daily_value(s).is_some_and(|v| v >= target))
            .count();

        let (progress, met) = today_value.map_or((0.0, false), |v| progress_of(v, target));

        GoalProgress {
            goal: goal.clone(),
            current_value: today_value,
            progress,
            met,
            current_streak: run.current,
            best_streak: run.best,
            weekly_count: u32::try_from(weekly_count).unwrap_or(u32::MAX),
            last_achieved: run.last_achieved,
        }
    }

    /// Progress for every active goal and the today/this-week tallies
    ///
    /// Each daily goal offers one opportunity per elapsed day of the current
    /// Monday-start week; each workout goal offers a single weekly one.
    #[must_use]
    pub fn compute_goals_overview(
        goals: &[HealthGoal],
        samples: &[DailyMetricSample],
        workout_days: &BTreeSet<NaiveDate>,
        today: NaiveDate,
    ) -> GoalsOverview {
        let todays_sample = samples.iter().find(|s| s.day == today);
        let elapsed_days = today.weekday().num_days_from_monday() + 1;

        let mut overview = GoalsOverview::default();
        for goal in goals.iter().filter(|g| g.active) {
            let today_value = todays_sample.and_then(|s| goal.goal_type.daily_value(s));
            let progress =
                Self::compute_goal_progress(goal, today_value, samples, workout_days, today);

            overview.todays_total += 1;
            overview.todays_met += u32::from(progress.met);
            if goal.goal_type == GoalType::WorkoutFrequency {
                overview.weekly_total += 1;
                overview.weekly_met += u32::from(progress.met);
            } else {
                overview.weekly_total += elapsed_days;
                overview.weekly_met += progress.weekly_count;
            }
            overview.goals.push(progress);
        }

        if overview.todays_total == 0 {
            debug!("No active goals to track");
        }
        overview
    }
}

/// Percentage reached (capped at 100) and whether the target is met
fn progress_of(value: i64, target: i64) -> (f64, bool) {
    if target <= 0 {
        return (100.0, true);
    }
    let percent = (value as f64 / target as f64 * 100.0).min(100.0);
    (percent, value >= target)
}

fn workout_goal_progress(
    goal: &HealthGoal,
    history: &[DailyMetricSample],
    workout_days: &BTreeSet<NaiveDate>,
    today: NaiveDate,
) -> GoalProgress {
    let this_week = week_start_monday(today);
    let weekly_count = workouts_in_week(workout_days, this_week, today);
    let (progress, met) = progress_of(i64::from(weekly_count), goal.target);

    // Completed weeks of the window, plus the current week once it is met
    let window_start = history
        .first()
        .map_or(this_week, |s| s.day)
        .min(workout_days.first().copied().unwrap_or(this_week));
    let mut weeks: Vec<(NaiveDate, bool)> = Vec::new();
    let mut week = week_start_monday(window_start);
    while week < this_week {
        let week_end = week + Days::new(6);
        let count = workouts_in_week(workout_days, week, week_end);
        weeks.push((week, i64::from(count) >= goal.target));
        week = week + Days::new(7);
    }
    if met {
        weeks.push((this_week, true));
    }
    let run = longest_and_current_streak(&weeks, |w| w.0, |w| w.1);

    GoalProgress {
        goal: goal.clone(),
        current_value: Some(i64::from(weekly_count)),
        progress,
        met,
        current_streak: run.current,
        best_streak: run.best,
        weekly_count,
        last_achieved: run.last_achieved,
    }
}

fn workouts_in_week(workout_days: &BTreeSet<NaiveDate>, start: NaiveDate, end: NaiveDate) -> u32 {
    let count = workout_days.range(start..=end).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn goal(goal_type: GoalType, target: i64) -> HealthGoal {
        HealthGoal {
            id: 1,
            goal_type,
            target,
            active: true,
        }
    }

    #[test]
    fn test_progress_is_capped_and_zero_target_is_met() {
        assert_eq!(progress_of(5_000, 10_000), (50.0, false));
        assert_eq!(progress_of(12_000, 10_000), (100.0, true));
        assert_eq!(progress_of(0, 0), (100.0, true));
    }

    #[test]
    fn test_step_goal_streak_and_weekly_count() {
        // Wednesday 2024-03-06; window starts the previous Saturday
        let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let steps = [12_000, 4_000, 11_000, 10_500, 10_000];
        let samples: Vec<DailyMetricSample> = steps
            .iter()
            .enumerate()
            .map(|(i, s)| {
                DailyMetricSample::new(today - Duration::days(4 - i as i64)).with_steps(*s)
            })
            .collect();

        let progress = HealthInsightsEngine::compute_goal_progress(
            &goal(GoalType::StepGoal, 10_000),
            Some(10_000),
            &samples,
            &BTreeSet::new(),
            today,
        );

        assert!(progress.met);
        assert_eq!(progress.current_streak, 3);
        assert_eq!(progress.best_streak, 3);
        assert_eq!(progress.weekly_count, 3);
        assert_eq!(progress.last_achieved, Some(today));
    }

    #[test]
    fn test_workout_goal_counts_distinct_days_this_week() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let workouts: BTreeSet<NaiveDate> = [
            monday - Duration::days(7),
            monday - Duration::days(6),
            monday,
            monday + Duration::days(2),
        ]
        .into_iter()
        .collect();

        let progress = HealthInsightsEngine::compute_goal_progress(
            &goal(GoalType::WorkoutFrequency, 2),
            None,
            &[],
            &workouts,
            today,
        );

        assert_eq!(progress.weekly_count, 2);
        assert_eq!(progress.current_value, Some(2));
        assert!(progress.met);
        assert_eq!(progress.current_streak, 2);
        assert_eq!(progress.last_achieved, Some(monday));
    }

    #[test]
    fn test_overview_tallies_daily_and_weekly_opportunities() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let samples = vec![
            DailyMetricSample::new(today - Duration::days(1)).with_scores(Some(85), None, None),
            DailyMetricSample::new(today).with_scores(Some(70), None, None),
        ];
        let goals = vec![
            goal(GoalType::SleepScore, 80),
            goal(GoalType::WorkoutFrequency, 3),
            HealthGoal {
                active: false,
                ..goal(GoalType::StepGoal, 10_000)
            },
        ];

        let overview =
            HealthInsightsEngine::compute_goals_overview(&goals, &samples, &BTreeSet::new(), today);

        assert_eq!(overview.goals.len(), 2);
        assert_eq!(overview.todays_total, 2);
        assert_eq!(overview.todays_met, 0);
        assert_eq!(overview.weekly_total, 3 + 1);
        assert_eq!(overview.weekly_met, 1);
    }
}
