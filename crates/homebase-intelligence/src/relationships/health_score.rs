// ABOUTME: Relationship health score (0-100) from schedule compliance, recency, variety, and streak
// ABOUTME: Four independently capped components summing to at most 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use super::RelationshipScoringEngine;
use crate::constants::relationship::{
    FREQUENCY_MAX, MAX_SCORE, RECENCY_MAX, STREAK_MAX, VARIETY_MAX, VARIETY_WINDOW_DAYS,
};
use chrono::NaiveDate;
use homebase_core::dates::days_between;
use homebase_core::models::{ContactFrequency, Interaction};
use std::collections::BTreeSet;

impl RelationshipScoringEngine {
    /// Score a relationship from 0 to 100
    ///
    /// A frequency of `none` carries no expectations and always scores 100.
    /// Without a last contact the frequency and recency components are 0.
    #[must_use]
    pub fn calculate_health_score(
        frequency: ContactFrequency,
        last_contact: Option<NaiveDate>,
        current_streak: u32,
        interaction_type_count: usize,
        today: NaiveDate,
    ) -> u32 {
        let frequency_days = frequency.days();
        if frequency_days == 0 {
            return MAX_SCORE;
        }

        let days_since = last_contact.map(|last| days_between(last, today));
        let score = days_since.map_or(0, |d| frequency_component(d, frequency_days))
            + days_since.map_or(0, recency_component)
            + variety_component(interaction_type_count)
            + streak_component(current_streak);

        score.min(MAX_SCORE)
    }

    /// Distinct interaction types in the trailing 90 days (today inclusive)
    #[must_use]
    pub fn distinct_interaction_types(interactions: &[Interaction], today: NaiveDate) -> usize {
        interactions
            .iter()
            .filter(|i| days_between(i.date, today) <= VARIETY_WINDOW_DAYS)
            .map(|i| i.interaction_type)
            .collect::<BTreeSet<_>>()
            .len()
    }
}

#[allow(clippy::cast_precision_loss)]
fn frequency_component(days_since: i64, frequency_days: i64) -> u32 {
    if days_since <= frequency_days {
        return FREQUENCY_MAX;
    }
    let overdue_fraction = (days_since - frequency_days) as f64 / frequency_days as f64;
    if overdue_fraction < 0.5 {
        30
    } else if overdue_fraction < 1.0 {
        20
    } else if overdue_fraction < 2.0 {
        10
    } else {
        0
    }
}

const fn recency_component(days_since: i64) -> u32 {
    match days_since {
        i64::MIN..=7 => RECENCY_MAX,
        8..=14 => 20,
        15..=30 => 10,
        _ => 0,
    }
}

const fn variety_component(type_count: usize) -> u32 {
    match type_count {
        0 => 0,
        1 => 10,
        2 => 15,
        _ => VARIETY_MAX,
    }
}

const fn streak_component(streak: u32) -> u32 {
    match streak {
        0 => 0,
        1..=2 => 5,
        3..=4 => 7,
        _ => STREAK_MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use homebase_core::models::InteractionType;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_monthly_contact_overdue_by_half_interval() {
        // 45 days since a monthly contact: overdue fraction 0.5
        assert_eq!(frequency_component(45, 30), 20);
        assert_eq!(frequency_component(44, 30), 30);
        assert_eq!(frequency_component(30, 30), 40);
        assert_eq!(frequency_component(90, 30), 0);
        assert_eq!(frequency_component(89, 30), 10);

        let score = RelationshipScoringEngine::calculate_health_score(
            ContactFrequency::Monthly,
            Some(today() - Duration::days(45)),
            0,
            0,
            today(),
        );
        assert_eq!(score, 20);
    }

    #[test]
    fn test_perfect_relationship_scores_one_hundred() {
        let score = RelationshipScoringEngine::calculate_health_score(
            ContactFrequency::Weekly,
            Some(today() - Duration::days(3)),
            5,
            3,
            today(),
        );
        assert_eq!(score, 100);
    }

    #[test]
    fn test_no_frequency_is_always_healthy() {
        let score = RelationshipScoringEngine::calculate_health_score(
            ContactFrequency::None,
            None,
            0,
            0,
            today(),
        );
        assert_eq!(score, 100);
    }

    #[test]
    fn test_variety_counts_only_trailing_ninety_days() {
        let interaction = |days_ago: i64, interaction_type| Interaction {
            id: days_ago,
            person_id: 1,
            date: today() - Duration::days(days_ago),
            interaction_type,
            notes: String::new(),
        };
        let interactions = vec![
            interaction(1, InteractionType::Call),
            interaction(20, InteractionType::Call),
            interaction(90, InteractionType::Video),
            interaction(91, InteractionType::InPerson),
        ];

        assert_eq!(
            RelationshipScoringEngine::distinct_interaction_types(&interactions, today()),
            2
        );
    }
}
