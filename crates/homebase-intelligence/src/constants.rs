// ABOUTME: Fixed thresholds for the health insights and relationship scoring engines
// ABOUTME: Grouped by concern; these values are part of the observable behavior, not tunables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

/// Correlation classification and sample requirements
pub mod correlation {
    /// Paired samples required before a correlation is reported
    pub const MIN_PAIRED_SAMPLES: usize = 7;
    /// |r| at or above this is at least weak
    pub const WEAK_THRESHOLD: f64 = 0.2;
    /// |r| at or above this is at least moderate
    pub const MODERATE_THRESHOLD: f64 = 0.4;
    /// |r| at or above this is strong
    pub const STRONG_THRESHOLD: f64 = 0.7;
    /// r at or beyond +/- this has a direction
    pub const DIRECTION_THRESHOLD: f64 = 0.1;
    /// Observations required in each workout / rest group
    pub const MIN_WORKOUT_GROUP_SIZE: usize = 3;
    /// Divisor turning a readiness difference into a correlation-like value
    pub const WORKOUT_DIFFERENCE_SCALE: f64 = 10.0;
    /// Readiness difference reported as a clear effect
    pub const WORKOUT_CLEAR_EFFECT: f64 = 3.0;
    /// Readiness difference reported as a slight effect
    pub const WORKOUT_SLIGHT_EFFECT: f64 = 2.0;
}

/// Weekday pattern mining
pub mod weekday {
    /// Samples a weekday needs before it can be called best or worst
    pub const MIN_SAMPLES_FOR_INSIGHT: usize = 2;
}

/// Personal records and daily streaks
pub mod streaks {
    /// Sleep score qualifying for the `sleep_80` streak
    pub const SLEEP_STREAK_THRESHOLD: i64 = 80;
    /// Readiness score qualifying for the `readiness_80` streak
    pub const READINESS_STREAK_THRESHOLD: i64 = 80;
    /// Step count qualifying for the `steps_10k` streak
    pub const STEPS_STREAK_THRESHOLD: i64 = 10_000;
}

/// Sleep debt model
pub mod sleep_debt {
    /// Total-sleep contributor score separating debt from recovery
    pub const THRESHOLD: f64 = 75.0;
    /// Score points per unit of debt
    pub const POINTS_PER_DEBT_UNIT: f64 = 10.0;
    /// Change in average deficit that counts as a trend
    pub const TREND_THRESHOLD: f64 = 5.0;
    /// Samples averaged for the weekly score
    pub const WEEKLY_WINDOW: usize = 7;
    /// Samples averaged for the component breakdown
    pub const COMPONENT_WINDOW: usize = 30;
    /// Debt above which three extra rest days are recommended
    pub const SEVERE_DEBT: f64 = 30.0;
    /// Debt above which two extra rest days are recommended
    pub const HIGH_DEBT: f64 = 20.0;
    /// Debt above which one extra rest day is recommended
    pub const MODERATE_DEBT: f64 = 10.0;
}

/// Weekly summary highlights
pub mod weekly_summary {
    /// Week-over-week score swing worth calling out
    pub const NOTABLE_SWING: f64 = 5.0;
}

/// Relationship health score components
pub mod relationship {
    /// Maximum points for contacting on schedule
    pub const FREQUENCY_MAX: u32 = 40;
    /// Maximum points for recent contact
    pub const RECENCY_MAX: u32 = 30;
    /// Maximum points for a mix of interaction types
    pub const VARIETY_MAX: u32 = 20;
    /// Maximum points for an active streak
    pub const STREAK_MAX: u32 = 10;
    /// Score ceiling
    pub const MAX_SCORE: u32 = 100;
    /// Trailing window for interaction variety
    pub const VARIETY_WINDOW_DAYS: i64 = 90;
    /// A streak is at risk within this many days of its deadline
    pub const STREAK_RISK_DAYS: i64 = 2;
    /// Priority weight per overdue day
    pub const OVERDUE_WEIGHT: i64 = 3;
    /// Priority bonus for a streak about to break
    pub const STREAK_RISK_BONUS: i64 = 20;
    /// Birthdays within this many days raise priority
    pub const BIRTHDAY_PRIORITY_DAYS: i64 = 7;
    /// Priority weight per day of birthday proximity
    pub const BIRTHDAY_WEIGHT: i64 = 4;
    /// Suggestions returned
    pub const MAX_SUGGESTIONS: usize = 10;
    /// Birth years at or below this mean the year is unknown
    pub const UNKNOWN_BIRTH_YEAR: i32 = 1900;
    /// Months without contact before someone is a reconnect candidate
    pub const RECONNECT_MONTHS: u32 = 6;
    /// Fixed offset of the lunar birthday approximation
    pub const LUNAR_OFFSET_DAYS: u64 = 30;
}
