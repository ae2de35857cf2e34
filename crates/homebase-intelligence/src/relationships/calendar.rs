// ABOUTME: Upcoming birthdays and recurring special dates within a day horizon
// ABOUTME: Rolls past occurrences to next year; includes the fixed-offset lunar birthday approximation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use super::RelationshipScoringEngine;
use crate::constants::relationship::{LUNAR_OFFSET_DAYS, UNKNOWN_BIRTH_YEAR};
use chrono::{Datelike, Days, NaiveDate};
use homebase_core::dates::{days_between, month_day_in_year, next_anniversary};
use homebase_core::models::{Person, SpecialDate, SpecialDateType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A birthday falling inside the horizon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    /// Person identifier
    pub id: i64,
    /// Person name
    pub name: String,
    /// Nickname
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nickname: String,
    /// Stored birthday
    pub birthday: NaiveDate,
    /// Next occurrence, today inclusive
    pub next_occurrence: NaiveDate,
    /// Days from today to the next occurrence
    pub days_until: i64,
    /// Age being turned, absent when the birth year is unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turning_age: Option<i32>,
}

/// A recurring special date falling inside the horizon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingDate {
    /// Person the date belongs to
    pub person_id: i64,
    /// That person's name
    pub person_name: String,
    /// Kind of date
    pub date_type: SpecialDateType,
    /// Label ("Wedding anniversary", ...)
    pub label: String,
    /// Stored `MM-DD`
    pub date: String,
    /// Days from today to the next occurrence
    pub days_until: i64,
}

impl RelationshipScoringEngine {
    /// Non-lunar birthdays occurring within `horizon_days` of today, soonest first
    #[must_use]
    pub fn calculate_birthdays(
        people: &[Person],
        today: NaiveDate,
        horizon_days: i64,
    ) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = people
            .iter()
            .filter(|p| !p.birthday_lunar)
            .filter_map(|person| {
                let birthday = person.birthday?;
                let next = next_birthday(birthday, today)?;
                let days_until = days_between(today, next);
                (days_until <= horizon_days).then(|| UpcomingBirthday {
                    id: person.id,
                    name: person.name.clone(),
                    nickname: person.nickname.clone(),
                    birthday,
                    next_occurrence: next,
                    days_until,
                    turning_age: (birthday.year() > UNKNOWN_BIRTH_YEAR)
                        .then(|| next.year() - birthday.year()),
                })
            })
            .collect();

        upcoming.sort_by_key(|b| b.days_until);
        upcoming
    }

    /// Recurring `MM-DD` special dates occurring within `horizon_days`, soonest first
    ///
    /// Non-recurring dates and malformed `MM-DD` strings are skipped.
    #[must_use]
    pub fn calculate_upcoming_dates(
        special_dates: &[SpecialDate],
        today: NaiveDate,
        horizon_days: i64,
    ) -> Vec<UpcomingDate> {
        let mut upcoming: Vec<UpcomingDate> = special_dates
            .iter()
            .filter(|d| d.recurring)
            .filter_map(|special| {
                let Some((month, day)) = parse_month_day(&special.date) else {
                    debug!(
                        id = special.id,
                        date = %special.date,
                        "Skipping malformed special date"
                    );
                    return None;
                };
                let next = next_anniversary(month, day, today)?;
                let days_until = days_between(today, next);
                (days_until <= horizon_days).then(|| UpcomingDate {
                    person_id: special.person_id,
                    person_name: special.person_name.clone(),
                    date_type: special.date_type,
                    label: special.label.clone(),
                    date: special.date.clone(),
                    days_until,
                })
            })
            .collect();

        upcoming.sort_by_key(|d| d.days_until);
        upcoming
    }

    /// Rough Gregorian date for a lunar birthday in today's year
    ///
    /// Not a calendar conversion: takes the stored month and day in the current
    /// year and adds a fixed 30 days.
    #[must_use]
    pub fn lunar_to_gregorian(lunar_birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
        month_day_in_year(today.year(), lunar_birthday.month(), lunar_birthday.day())?
            .checked_add_days(Days::new(LUNAR_OFFSET_DAYS))
    }
}

/// Next occurrence of a birthday, today inclusive
pub(super) fn next_birthday(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    next_anniversary(birthday.month(), birthday.day(), today)
}

/// Parse `MM-DD` into a month and day that exist in some year
fn parse_month_day(text: &str) -> Option<(u32, u32)> {
    let (month, day) = text.trim().split_once('-')?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    // 2000 is a leap year, so Feb 29 validates
    NaiveDate::from_ymd_opt(2000, month, day).map(|_| (month, day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use homebase_core::models::ContactFrequency;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn with_birthday(id: i64, birthday: NaiveDate) -> Person {
        let mut person = Person::new(id, format!("P{id}"), ContactFrequency::Monthly);
        person.birthday = Some(birthday);
        person
    }

    #[test]
    fn test_birthday_within_horizon_reports_turning_age() {
        let people = vec![with_birthday(1, day(1990, 6, 15))];

        let upcoming = RelationshipScoringEngine::calculate_birthdays(&people, day(2024, 6, 1), 30);

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].days_until, 14);
        assert_eq!(upcoming[0].turning_age, Some(34));
    }

    #[test]
    fn test_passed_birthday_rolls_to_next_year_and_unknown_year_has_no_age() {
        let people = vec![
            with_birthday(1, day(1900, 1, 3)),
            with_birthday(2, day(1985, 12, 31)),
        ];

        let upcoming =
            RelationshipScoringEngine::calculate_birthdays(&people, day(2024, 12, 20), 30);

        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].id, 2);
        assert_eq!(upcoming[0].days_until, 11);
        assert_eq!(upcoming[1].next_occurrence, day(2025, 1, 3));
        assert_eq!(upcoming[1].turning_age, None);
    }

    #[test]
    fn test_lunar_birthdays_are_excluded() {
        let mut person = with_birthday(1, day(1990, 6, 2));
        person.birthday_lunar = true;

        assert!(
            RelationshipScoringEngine::calculate_birthdays(&[person], day(2024, 6, 1), 30)
                .is_empty()
        );
    }

    #[test]
    fn test_upcoming_dates_skip_malformed_and_non_recurring() {
        let special = |id: i64, date: &str, recurring: bool| SpecialDate {
            id,
            person_id: 1,
            person_name: "Ada".to_owned(),
            date_type: SpecialDateType::Anniversary,
            label: "Wedding".to_owned(),
            date: date.to_owned(),
            recurring,
        };
        let dates = vec![
            special(1, "06-20", true),
            special(2, "13-01", true),
            special(3, "06-10", false),
            special(4, "junk", true),
            special(5, "06-05", true),
        ];

        let upcoming =
            RelationshipScoringEngine::calculate_upcoming_dates(&dates, day(2024, 6, 1), 30);

        let days: Vec<i64> = upcoming.iter().map(|d| d.days_until).collect();
        assert_eq!(days, vec![4, 19]);
    }

    #[test]
    fn test_lunar_approximation_adds_thirty_days_in_current_year() {
        assert_eq!(
            RelationshipScoringEngine::lunar_to_gregorian(day(1960, 8, 15), day(2024, 3, 1)),
            Some(day(2024, 9, 14))
        );
    }
}
