// ABOUTME: Who to contact next: overdue detection, priority suggestions, and reconnect candidates
// ABOUTME: Also per-person health summaries and the people dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use super::calendar::next_birthday;
use super::{RelationshipScoringEngine, UpcomingBirthday};
use crate::constants::relationship::{
    BIRTHDAY_PRIORITY_DAYS, BIRTHDAY_WEIGHT, MAX_SUGGESTIONS, OVERDUE_WEIGHT, RECONNECT_MONTHS,
    STREAK_RISK_BONUS, STREAK_RISK_DAYS,
};
use chrono::{Months, NaiveDate};
use homebase_core::dates::days_between;
use homebase_core::models::{ContactFrequency, Interaction, Person, RelationshipType};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A person past their contact interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverduePerson {
    /// Person identifier
    pub id: i64,
    /// Name
    pub name: String,
    /// Nickname
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nickname: String,
    /// Most recent interaction, absent when never contacted
    pub last_contact: Option<NaiveDate>,
    /// Days past the interval (`interval + 1` when never contacted)
    pub days_overdue: i64,
    /// Configured cadence
    pub frequency: ContactFrequency,
}

/// A ranked nudge to get in touch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Person identifier
    pub id: i64,
    /// Name
    pub name: String,
    /// Nickname
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nickname: String,
    /// Reasons joined with `"; "`
    pub reason: String,
    /// Higher is more urgent
    pub priority: i64,
}

/// Someone worth reconnecting with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconnectCandidate {
    /// Person identifier
    pub id: i64,
    /// Name
    pub name: String,
    /// Nickname
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nickname: String,
    /// Most recent interaction, absent when never contacted
    pub last_contact: Option<NaiveDate>,
    /// Whole 30-day months since last contact, absent when never contacted
    pub months_ago: Option<i64>,
}

/// Relationship health for one person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonHealth {
    /// Person identifier
    pub person_id: i64,
    /// Name
    pub name: String,
    /// Most recent interaction
    pub last_contact: Option<NaiveDate>,
    /// Days past the interval, only when contacted before and overdue
    pub days_overdue: Option<i64>,
    /// 0-100
    pub health_score: u32,
    /// Stored current streak
    pub current_streak: u32,
    /// Stored longest streak
    pub longest_streak: u32,
    /// Approximate Gregorian date of a lunar birthday this year
    pub birthday_gregorian: Option<NaiveDate>,
}

/// Summary for the people page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeopleDashboard {
    /// Everyone tracked
    pub total_people: usize,
    /// `overdue_contacts.len()`
    pub overdue_count: usize,
    /// Birthdays inside the horizon
    pub upcoming_birthdays: Vec<UpcomingBirthday>,
    /// Overdue people, never-contacted first then oldest contact first
    pub overdue_contacts: Vec<OverduePerson>,
}

impl RelationshipScoringEngine {
    /// People whose time since last contact exceeds their interval
    ///
    /// Someone never contacted counts as `interval + 1` days overdue.
    #[must_use]
    pub fn calculate_overdue(people: &[Person], today: NaiveDate) -> Vec<OverduePerson> {
        let mut overdue: Vec<OverduePerson> = people
            .iter()
            .filter_map(|person| {
                let frequency_days = person.contact_frequency.days();
                if frequency_days == 0 {
                    return None;
                }
                let days_overdue = match person.last_contact {
                    None => frequency_days + 1,
                    Some(last) => {
                        let days_since = days_between(last, today);
                        if days_since <= frequency_days {
                            return None;
                        }
                        days_since - frequency_days
                    }
                };
                Some(OverduePerson {
                    id: person.id,
                    name: person.name.clone(),
                    nickname: person.nickname.clone(),
                    last_contact: person.last_contact,
                    days_overdue,
                    frequency: person.contact_frequency,
                })
            })
            .collect();

        // None sorts before Some, so never-contacted people lead
        overdue.sort_by_key(|o| o.last_contact);
        overdue
    }

    /// Top ten people to contact, most urgent first
    ///
    /// Priority is three points per overdue day (three per interval day when
    /// never contacted), twenty when an active streak is within two days of
    /// breaking, and four per day of proximity for a birthday within a week.
    /// Ties keep alphabetical order.
    #[must_use]
    pub fn calculate_suggestions(people: &[Person], today: NaiveDate) -> Vec<Suggestion> {
        let mut candidates: Vec<&Person> = people.iter().collect();
        candidates.sort_by(|a, b| a.name.cmp(&b.name));

        let mut suggestions: Vec<Suggestion> = candidates
            .into_iter()
            .filter_map(|person| suggestion_for(person, today))
            .collect();

        suggestions.sort_by_key(|s| Reverse(s.priority));
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }

    /// Loosely kept contacts not reached in six months
    ///
    /// Considers people with frequency `none` or relationship `acquaintance`.
    #[must_use]
    pub fn calculate_reconnect(people: &[Person], today: NaiveDate) -> Vec<ReconnectCandidate> {
        let cutoff = today
            .checked_sub_months(Months::new(RECONNECT_MONTHS))
            .unwrap_or(NaiveDate::MIN);

        let mut candidates: Vec<ReconnectCandidate> = people
            .iter()
            .filter(|p| {
                p.contact_frequency == ContactFrequency::None
                    || p.relationship == RelationshipType::Acquaintance
            })
            .filter(|p| p.last_contact.is_none_or(|last| last < cutoff))
            .map(|person| ReconnectCandidate {
                id: person.id,
                name: person.name.clone(),
                nickname: person.nickname.clone(),
                last_contact: person.last_contact,
                months_ago: person
                    .last_contact
                    .map(|last| days_between(last, today) / 30),
            })
            .collect();

        candidates.sort_by_key(|c| c.last_contact);
        candidates
    }

    /// Health summary for one person from their interaction history
    ///
    /// The last contact is the newest interaction date, falling back to the
    /// person's stored value when no interactions are supplied.
    #[must_use]
    pub fn summarize_person(
        person: &Person,
        interactions: &[Interaction],
        today: NaiveDate,
    ) -> PersonHealth {
        let last_contact = interactions
            .iter()
            .map(|i| i.date)
            .max()
            .or(person.last_contact);
        let frequency_days = person.contact_frequency.days();

        let days_overdue = last_contact
            .filter(|_| frequency_days > 0)
            .map(|last| days_between(last, today) - frequency_days)
            .filter(|overdue| *overdue > 0);

        let health_score = Self::calculate_health_score(
            person.contact_frequency,
            last_contact,
            person.current_streak,
            Self::distinct_interaction_types(interactions, today),
            today,
        );

        PersonHealth {
            person_id: person.id,
            name: person.name.clone(),
            last_contact,
            days_overdue,
            health_score,
            current_streak: person.current_streak,
            longest_streak: person.longest_streak,
            birthday_gregorian: person
                .birthday
                .filter(|_| person.birthday_lunar)
                .and_then(|b| Self::lunar_to_gregorian(b, today)),
        }
    }

    /// Totals, overdue contacts, and upcoming birthdays
    #[must_use]
    pub fn build_dashboard(
        people: &[Person],
        today: NaiveDate,
        birthday_horizon_days: i64,
    ) -> PeopleDashboard {
        let overdue_contacts = Self::calculate_overdue(people, today);
        PeopleDashboard {
            total_people: people.len(),
            overdue_count: overdue_contacts.len(),
            upcoming_birthdays: Self::calculate_birthdays(people, today, birthday_horizon_days),
            overdue_contacts,
        }
    }
}

fn suggestion_for(person: &Person, today: NaiveDate) -> Option<Suggestion> {
    let frequency_days = person.contact_frequency.days();
    if frequency_days == 0 {
        return None;
    }

    let mut priority = 0_i64;
    let mut reasons: Vec<String> = Vec::new();

    let days_since = person.last_contact.map(|last| days_between(last, today));
    match days_since {
        None => {
            priority += frequency_days * OVERDUE_WEIGHT;
            reasons.push("Never contacted".to_owned());
        }
        Some(days) if days > frequency_days => {
            let overdue = days - frequency_days;
            priority += overdue * OVERDUE_WEIGHT;
            reasons.push(format!("Overdue by {overdue} days"));
        }
        Some(_) => {}
    }

    if person.current_streak > 0 {
        if let Some(days) = days_since {
            if days >= frequency_days - STREAK_RISK_DAYS && days <= frequency_days {
                priority += STREAK_RISK_BONUS;
                reasons.push("🔥 Streak at risk".to_owned());
            }
        }
    }

    // Lunar birthdays use the stored month/day here, as the suggestion list always has
    if let Some(next) = person.birthday.and_then(|b| next_birthday(b, today)) {
        let days_until = days_between(today, next);
        if days_until <= BIRTHDAY_PRIORITY_DAYS {
            priority += (BIRTHDAY_PRIORITY_DAYS - days_until) * BIRTHDAY_WEIGHT;
            reasons.push(if days_until == 0 {
                "🎂 Birthday today!".to_owned()
            } else {
                format!("🎂 Birthday in {days_until} days")
            });
        }
    }

    (priority > 0).then(|| Suggestion {
        id: person.id,
        name: person.name.clone(),
        nickname: person.nickname.clone(),
        reason: reasons.join("; "),
        priority,
    })
}
