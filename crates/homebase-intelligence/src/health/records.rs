// ABOUTME: Personal records and threshold streaks over a daily sample window
// ABOUTME: Highest sleep/readiness/activity scores and the sleep_80, readiness_80, steps_10k streaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use super::HealthInsightsEngine;
use crate::constants::streaks::{
    READINESS_STREAK_THRESHOLD, SLEEP_STREAK_THRESHOLD, STEPS_STREAK_THRESHOLD,
};
use crate::statistics::{longest_and_current_streak, StreakRun};
use chrono::NaiveDate;
use homebase_core::models::DailyMetricSample;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A best-ever value in the window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Record tag (`highest_sleep`, `longest_sleep_streak`, ...)
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record value
    pub value: i64,
    /// Day the record was set, when it belongs to a single day
    pub date: Option<NaiveDate>,
    /// Human-readable description
    pub description: String,
}

/// Named daily threshold streaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreakType {
    /// Sleep score of 80 or more
    #[serde(rename = "sleep_80")]
    Sleep80,
    /// Readiness score of 80 or more
    #[serde(rename = "readiness_80")]
    Readiness80,
    /// 10,000 steps or more
    #[serde(rename = "steps_10k")]
    Steps10k,
}

impl StreakType {
    /// Tag used in reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sleep80 => "sleep_80",
            Self::Readiness80 => "readiness_80",
            Self::Steps10k => "steps_10k",
        }
    }

    /// Whether a day meets this streak's threshold; a missing value never does
    #[must_use]
    pub fn qualifies(self, sample: &DailyMetricSample) -> bool {
        match self {
            Self::Sleep80 => sample
                .sleep_score
                .is_some_and(|v| v >= SLEEP_STREAK_THRESHOLD),
            Self::Readiness80 => sample
                .readiness_score
                .is_some_and(|v| v >= READINESS_STREAK_THRESHOLD),
            Self::Steps10k => sample
                .activity_steps
                .is_some_and(|v| v >= STEPS_STREAK_THRESHOLD),
        }
    }
}

impl fmt::Display for StreakType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consecutive days meeting a threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Which threshold
    #[serde(rename = "type")]
    pub streak_type: StreakType,
    /// Qualifying days counted back from the newest sample
    pub current_streak: u32,
    /// Longest run in the window
    pub best_streak: u32,
    /// Last qualifying day anywhere in the window
    pub last_achieved: Option<NaiveDate>,
    /// `current_streak > 0`
    pub is_active: bool,
}

impl Streak {
    /// Build from a scanned run
    #[must_use]
    pub const fn from_run(streak_type: StreakType, run: StreakRun) -> Self {
        Self {
            streak_type,
            current_streak: run.current,
            best_streak: run.best,
            last_achieved: run.last_achieved,
            is_active: run.current > 0,
        }
    }
}

/// Records and streaks computed together from one window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsAndStreaks {
    /// Personal records found in the window
    pub records: Vec<PersonalRecord>,
    /// One entry per [`StreakType`]
    pub streaks: Vec<Streak>,
}

type ScoreRecord = (&'static str, &'static str, fn(&DailyMetricSample) -> Option<i64>);

const SCORE_RECORDS: [ScoreRecord; 3] = [
    ("highest_sleep", "sleep score", |s| s.sleep_score),
    ("highest_readiness", "readiness score", |s| s.readiness_score),
    ("highest_activity", "activity score", |s| s.activity_score),
];

const STREAK_TYPES: [StreakType; 3] = [
    StreakType::Sleep80,
    StreakType::Readiness80,
    StreakType::Steps10k,
];

impl HealthInsightsEngine {
    /// Personal records and the three threshold streaks
    ///
    /// The earliest day wins when a maximum is tied. A `longest_sleep_streak`
    /// record is added only when the best sleep streak is longer than one day.
    #[must_use]
    pub fn compute_records_and_streaks(samples: &[DailyMetricSample]) -> RecordsAndStreaks {
        let mut records: Vec<PersonalRecord> = SCORE_RECORDS
            .iter()
            .filter_map(|&(record_type, label, value_of)| {
                let record = highest(samples, value_of).map(|(value, day)| PersonalRecord {
                    record_type: record_type.to_owned(),
                    value,
                    date: Some(day),
                    description: format!("Highest {label}: {value}"),
                });
                if record.is_none() {
                    debug!(record_type, "No values available for personal record");
                }
                record
            })
            .collect();

        let streaks: Vec<Streak> = STREAK_TYPES
            .iter()
            .map(|&streak_type| {
                let run =
                    longest_and_current_streak(samples, |s| s.day, |s| streak_type.qualifies(s));
                Streak::from_run(streak_type, run)
            })
            .collect();

        if let Some(sleep) = streaks
            .iter()
            .find(|s| s.streak_type == StreakType::Sleep80)
            .filter(|s| s.best_streak > 1)
        {
            records.push(PersonalRecord {
                record_type: "longest_sleep_streak".to_owned(),
                value: i64::from(sleep.best_streak),
                date: None,
                description: format!(
                    "Longest run of {SLEEP_STREAK_THRESHOLD}+ sleep scores: {} days",
                    sleep.best_streak
                ),
            });
        }

        RecordsAndStreaks { records, streaks }
    }
}

fn highest(
    samples: &[DailyMetricSample],
    value_of: fn(&DailyMetricSample) -> Option<i64>,
) -> Option<(i64, NaiveDate)> {
    samples
        .iter()
        .filter_map(|s| value_of(s).map(|v| (v, s.day)))
        .reduce(|best, cur| if cur.0 > best.0 { cur } else { best })
}
