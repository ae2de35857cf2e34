// ABOUTME: Contact-frequency streak computation from a person's interaction dates
// ABOUTME: Counts interactions each within one frequency interval of the previous, starting from today
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use super::RelationshipScoringEngine;
use chrono::NaiveDate;
use homebase_core::dates::days_between;
use homebase_core::models::Person;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// New streak values for the caller to persist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakUpdate {
    /// Streak ending at the most recent interaction
    pub current_streak: u32,
    /// `max(previous longest, current)`
    pub longest_streak: u32,
}

impl RelationshipScoringEngine {
    /// Recompute a person's contact streak
    ///
    /// Walks interaction dates newest to oldest starting from `today`. Each
    /// date within the frequency interval of the previously counted date
    /// extends the streak; the first larger gap ends it.
    ///
    /// Returns `None` only for frequency `none`. With no interactions the
    /// current streak is 0 and the longest is kept.
    #[must_use]
    pub fn update_streak(
        person: &Person,
        interaction_dates: &[NaiveDate],
        today: NaiveDate,
    ) -> Option<StreakUpdate> {
        let frequency_days = person.contact_frequency.days();
        if frequency_days == 0 {
            return None;
        }
        if interaction_dates.is_empty() {
            debug!(person_id = person.id, "No interactions, streak reset");
        }

        let mut dates = interaction_dates.to_vec();
        dates.sort_unstable_by(|a, b| b.cmp(a));

        let mut current = 0_u32;
        let mut last_counted = today;
        for date in dates {
            if days_between(date, last_counted) > frequency_days {
                break;
            }
            current += 1;
            last_counted = date;
        }

        Some(StreakUpdate {
            current_streak: current,
            longest_streak: person.longest_streak.max(current),
        })
    }
}
