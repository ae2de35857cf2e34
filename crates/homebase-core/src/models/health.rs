// ABOUTME: Health domain models for Oura daily metrics, workouts, and goals
// ABOUTME: Every score is optional because a day may lack any subset of wearable data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One calendar day of Oura metrics
///
/// All metrics are independently optional. Absence must never be averaged
/// as zero; aggregations track their own count of present values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyMetricSample {
    /// Calendar day the metrics belong to
    pub day: NaiveDate,

    // Sleep
    /// Overall sleep score (0-100)
    pub sleep_score: Option<i64>,
    /// Deep sleep contributor
    pub sleep_deep_sleep: Option<i64>,
    /// Sleep efficiency contributor
    pub sleep_efficiency: Option<i64>,
    /// Sleep latency contributor
    pub sleep_latency: Option<i64>,
    /// REM sleep contributor
    pub sleep_rem_sleep: Option<i64>,
    /// Restfulness contributor
    pub sleep_restfulness: Option<i64>,
    /// Sleep timing contributor
    pub sleep_timing: Option<i64>,
    /// Total sleep contributor (drives the sleep debt model)
    pub sleep_total_sleep: Option<i64>,

    // Readiness
    /// Overall readiness score (0-100)
    pub readiness_score: Option<i64>,
    /// Activity balance contributor
    pub readiness_activity_balance: Option<i64>,
    /// Body temperature contributor
    pub readiness_body_temperature: Option<i64>,
    /// HRV balance contributor
    pub readiness_hrv_balance: Option<i64>,
    /// Previous day activity contributor
    pub readiness_previous_day_activity: Option<i64>,
    /// Previous night contributor
    pub readiness_previous_night: Option<i64>,
    /// Recovery index contributor
    pub readiness_recovery_index: Option<i64>,
    /// Resting heart rate contributor
    pub readiness_resting_heart_rate: Option<i64>,
    /// Sleep balance contributor
    pub readiness_sleep_balance: Option<i64>,
    /// Sleep regularity contributor
    pub readiness_sleep_regularity: Option<i64>,
    /// Body temperature deviation from baseline (degrees Celsius)
    pub temperature_deviation: Option<f64>,

    // Activity
    /// Overall activity score (0-100)
    pub activity_score: Option<i64>,
    /// Active calories burned
    pub activity_active_calories: Option<i64>,
    /// Step count
    pub activity_steps: Option<i64>,
    /// Total calories burned
    pub activity_total_calories: Option<i64>,
    /// Meet daily targets contributor
    pub activity_meet_daily_targets: Option<i64>,
    /// Move every hour contributor
    pub activity_move_every_hour: Option<i64>,
    /// Recovery time contributor
    pub activity_recovery_time: Option<i64>,
    /// Stay active contributor
    pub activity_stay_active: Option<i64>,
    /// Training frequency contributor
    pub activity_training_frequency: Option<i64>,
    /// Training volume contributor
    pub activity_training_volume: Option<i64>,
}

impl DailyMetricSample {
    /// Create an empty sample for `day`
    #[must_use]
    pub fn new(day: NaiveDate) -> Self {
        Self {
            day,
            ..Self::default()
        }
    }

    /// Set the three headline scores
    #[must_use]
    pub const fn with_scores(
        mut self,
        sleep: Option<i64>,
        readiness: Option<i64>,
        activity: Option<i64>,
    ) -> Self {
        self.sleep_score = sleep;
        self.readiness_score = readiness;
        self.activity_score = activity;
        self
    }

    /// Set the step count
    #[must_use]
    pub const fn with_steps(mut self, steps: i64) -> Self {
        self.activity_steps = Some(steps);
        self
    }

    /// Set the total sleep contributor
    #[must_use]
    pub const fn with_total_sleep(mut self, total_sleep: i64) -> Self {
        self.sleep_total_sleep = Some(total_sleep);
        self
    }
}

/// A logged workout session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Database identifier
    pub id: i64,
    /// Day of the session
    pub date: NaiveDate,
    /// Free-form kind (strength, cardio, ...)
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Notes
    #[serde(default)]
    pub notes: String,
}

/// Kind of health goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Daily step target
    StepGoal,
    /// Daily sleep score target
    SleepScore,
    /// Daily readiness score target
    ReadinessScore,
    /// Workouts per Monday-start week
    WorkoutFrequency,
}

impl GoalType {
    /// Stable storage name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StepGoal => "step_goal",
            Self::SleepScore => "sleep_score",
            Self::ReadinessScore => "readiness_score",
            Self::WorkoutFrequency => "workout_frequency",
        }
    }

    /// Value of the metric this goal tracks on a given day
    ///
    /// Workout frequency is counted per week, not read from a daily sample.
    #[must_use]
    pub const fn daily_value(self, sample: &DailyMetricSample) -> Option<i64> {
        match self {
            Self::StepGoal => sample.activity_steps,
            Self::SleepScore => sample.sleep_score,
            Self::ReadinessScore => sample.readiness_score,
            Self::WorkoutFrequency => None,
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "step_goal" => Ok(Self::StepGoal),
            "sleep_score" => Ok(Self::SleepScore),
            "readiness_score" => Ok(Self::ReadinessScore),
            "workout_frequency" => Ok(Self::WorkoutFrequency),
            other => Err(format!("unknown goal type '{other}'")),
        }
    }
}

/// A configurable health target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthGoal {
    /// Database identifier
    pub id: i64,
    /// What the goal measures
    pub goal_type: GoalType,
    /// Target value (10000 steps, score 80, 3 workouts per week, ...)
    pub target: i64,
    /// Inactive goals are ignored by progress tracking
    pub active: bool,
}
