// ABOUTME: Relationship tracker models for people, interactions, and special dates
// ABOUTME: Contact frequencies map to fixed day counts used by streak and overdue logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often to stay in touch with someone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactFrequency {
    /// Every 7 days
    Weekly,
    /// Every 30 days
    Monthly,
    /// Every 90 days
    Quarterly,
    /// Every 365 days
    Yearly,
    /// No expectation; disables streak and health tracking
    #[default]
    None,
}

impl ContactFrequency {
    /// Fixed interval in days (0 for `None`)
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::Weekly => 7,
            Self::Monthly => 30,
            Self::Quarterly => 90,
            Self::Yearly => 365,
            Self::None => 0,
        }
    }

    /// Stable storage name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
            Self::None => "none",
        }
    }
}

impl fmt::Display for ContactFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            "none" | "" => Ok(Self::None),
            other => Err(format!("unknown contact frequency '{other}'")),
        }
    }
}

/// Kind of relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipType {
    /// Friend
    #[default]
    Friend,
    /// Family member
    Family,
    /// Colleague
    Colleague,
    /// Acquaintance (candidate for reconnection)
    Acquaintance,
}

impl RelationshipType {
    /// Stable storage name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Friend => "friend",
            Self::Family => "family",
            Self::Colleague => "colleague",
            Self::Acquaintance => "acquaintance",
        }
    }
}

impl FromStr for RelationshipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "friend" => Ok(Self::Friend),
            "family" => Ok(Self::Family),
            "colleague" => Ok(Self::Colleague),
            "acquaintance" => Ok(Self::Acquaintance),
            other => Err(format!("unknown relationship '{other}'")),
        }
    }
}

/// How an interaction happened
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    /// Text or chat message
    #[default]
    Message,
    /// Phone call
    Call,
    /// Video call
    Video,
    /// Met in person
    InPerson,
}

impl InteractionType {
    /// Stable storage name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Call => "call",
            Self::Video => "video",
            Self::InPerson => "in_person",
        }
    }
}

impl FromStr for InteractionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "message" => Ok(Self::Message),
            "call" => Ok(Self::Call),
            "video" => Ok(Self::Video),
            "in_person" => Ok(Self::InPerson),
            other => Err(format!("unknown interaction type '{other}'")),
        }
    }
}

/// A contact in the relationship tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Database identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Optional nickname
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nickname: String,
    /// Kind of relationship
    #[serde(default)]
    pub relationship: RelationshipType,
    /// Birthday; a year of 1900 or earlier means the year is unknown
    pub birthday: Option<NaiveDate>,
    /// Whether `birthday` is a lunar calendar date
    #[serde(default)]
    pub birthday_lunar: bool,
    /// Desired contact cadence
    #[serde(default)]
    pub contact_frequency: ContactFrequency,
    /// Current on-schedule contact streak
    #[serde(default)]
    pub current_streak: u32,
    /// Longest streak ever recorded
    #[serde(default)]
    pub longest_streak: u32,
    /// Date of the most recent interaction, maintained by the repository
    pub last_contact: Option<NaiveDate>,
}

impl Person {
    /// Create a person with the given cadence and no history
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, contact_frequency: ContactFrequency) -> Self {
        Self {
            id,
            name: name.into(),
            nickname: String::new(),
            relationship: RelationshipType::default(),
            birthday: None,
            birthday_lunar: false,
            contact_frequency,
            current_streak: 0,
            longest_streak: 0,
            last_contact: None,
        }
    }
}

/// A logged interaction with a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// Database identifier
    pub id: i64,
    /// Who the interaction was with
    pub person_id: i64,
    /// Day it happened
    pub date: NaiveDate,
    /// How it happened
    #[serde(rename = "type")]
    pub interaction_type: InteractionType,
    /// Notes
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

/// Kind of recurring special date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialDateType {
    /// Wedding or relationship anniversary
    Anniversary,
    /// A child's birthday
    ChildBirthday,
    /// Memorial day
    Memorial,
    /// Anything else
    #[default]
    Custom,
}

impl SpecialDateType {
    /// Stable storage name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anniversary => "anniversary",
            Self::ChildBirthday => "child_birthday",
            Self::Memorial => "memorial",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for SpecialDateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anniversary" => Ok(Self::Anniversary),
            "child_birthday" => Ok(Self::ChildBirthday),
            "memorial" => Ok(Self::Memorial),
            "custom" => Ok(Self::Custom),
            other => Err(format!("unknown special date type '{other}'")),
        }
    }
}

/// A recurring date worth remembering for a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDate {
    /// Database identifier
    pub id: i64,
    /// Person the date belongs to
    pub person_id: i64,
    /// Name of that person, joined in by the repository
    pub person_name: String,
    /// Kind of date
    pub date_type: SpecialDateType,
    /// Label shown to the user
    pub label: String,
    /// Month and day as `MM-DD`
    pub date: String,
    /// Whether the date repeats every year
    pub recurring: bool,
}
