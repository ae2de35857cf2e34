// ABOUTME: SQLite implementation of PeopleRepository
// ABOUTME: Maps people, interactions, and person_dates rows; derives last contact from interactions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use super::PeopleRepository;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use homebase_core::dates::{format_day, parse_day};
use homebase_core::models::{
    ContactFrequency, Interaction, InteractionType, Person, RelationshipType, SpecialDate,
    SpecialDateType,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::warn;

const PERSON_SELECT: &str = r"
    SELECT id, name, nickname, relationship, birthday, birthday_lunar,
           contact_frequency, current_streak, longest_streak
    FROM people
";

/// `SQLite`-backed relationship storage
#[derive(Clone)]
pub struct SqlitePeopleRepository {
    pool: SqlitePool,
}

impl SqlitePeopleRepository {
    /// Create a repository over an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_person(row: &SqliteRow, last_contact: Option<NaiveDate>) -> AppResult<Person> {
        let id: i64 = row.try_get("id")?;
        let birthday_text: Option<String> = row.try_get("birthday")?;
        let current_streak: i64 = row.try_get("current_streak")?;
        let longest_streak: i64 = row.try_get("longest_streak")?;

        Ok(Person {
            id,
            name: row.try_get("name")?,
            nickname: row.try_get("nickname")?,
            relationship: parse_or_default::<RelationshipType>(
                id,
                "relationship",
                &row.try_get::<String, _>("relationship")?,
            ),
            birthday: optional_day(id, "birthday", birthday_text.as_deref()),
            birthday_lunar: row.try_get("birthday_lunar")?,
            contact_frequency: parse_or_default::<ContactFrequency>(
                id,
                "contact_frequency",
                &row.try_get::<String, _>("contact_frequency")?,
            ),
            current_streak: u32::try_from(current_streak).unwrap_or_default(),
            longest_streak: u32::try_from(longest_streak).unwrap_or_default(),
            last_contact,
        })
    }

    fn row_to_interaction(row: &SqliteRow) -> AppResult<Option<Interaction>> {
        let id: i64 = row.try_get("id")?;
        let date_text: String = row.try_get("date")?;
        let Some(date) = parse_day(&date_text) else {
            warn!(
                interaction_id = id,
                date = %date_text,
                "Skipping interaction with malformed date"
            );
            return Ok(None);
        };

        Ok(Some(Interaction {
            id,
            person_id: row.try_get("person_id")?,
            date,
            interaction_type: parse_or_default::<InteractionType>(
                id,
                "type",
                &row.try_get::<String, _>("type")?,
            ),
            notes: row.try_get("notes")?,
        }))
    }

    /// Latest well-formed interaction day per person; malformed dates are skipped
    async fn last_contacts(&self) -> AppResult<HashMap<i64, NaiveDate>> {
        let rows = sqlx::query("SELECT person_id, date FROM interactions")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to load interactions: {e}")))?;

        let mut latest: HashMap<i64, NaiveDate> = HashMap::new();
        for row in &rows {
            let person_id: i64 = row.try_get("person_id")?;
            let date_text: String = row.try_get("date")?;
            let Some(date) = parse_day(&date_text) else {
                warn!(person_id, date = %date_text, "Ignoring malformed interaction date");
                continue;
            };
            latest
                .entry(person_id)
                .and_modify(|seen| *seen = (*seen).max(date))
                .or_insert(date);
        }
        Ok(latest)
    }

    fn row_to_special_date(row: &SqliteRow) -> AppResult<SpecialDate> {
        let id: i64 = row.try_get("id")?;
        Ok(SpecialDate {
            id,
            person_id: row.try_get("person_id")?,
            person_name: row.try_get("person_name")?,
            date_type: parse_or_default::<SpecialDateType>(
                id,
                "date_type",
                &row.try_get::<String, _>("date_type")?,
            ),
            label: row.try_get("label")?,
            date: row.try_get("date")?,
            recurring: row.try_get("recurring")?,
        })
    }
}

/// Parse a stored enum, keeping the row with the default on unknown text
fn parse_or_default<T>(row_id: i64, column: &str, text: &str) -> T
where
    T: FromStr + Default,
{
    text.parse().unwrap_or_else(|_| {
        warn!(row_id, column, value = %text, "Unknown stored value, using default");
        T::default()
    })
}

/// Parse an optional stored day, dropping malformed text
fn optional_day(row_id: i64, column: &str, text: Option<&str>) -> Option<NaiveDate> {
    let text = text.filter(|t| !t.trim().is_empty())?;
    let day = parse_day(text);
    if day.is_none() {
        warn!(row_id, column, value = %text, "Ignoring malformed stored date");
    }
    day
}

#[async_trait]
impl PeopleRepository for SqlitePeopleRepository {
    async fn insert_person(&self, person: &Person) -> AppResult<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO people (
                name, nickname, relationship, birthday, birthday_lunar,
                contact_frequency, current_streak, longest_streak
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&person.name)
        .bind(&person.nickname)
        .bind(person.relationship.as_str())
        .bind(person.birthday.map(format_day))
        .bind(person.birthday_lunar)
        .bind(person.contact_frequency.as_str())
        .bind(i64::from(person.current_streak))
        .bind(i64::from(person.longest_streak))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to add person: {e}")))?;

        Ok(result.last_insert_rowid())
    }

    async fn get_person(&self, person_id: i64) -> AppResult<Person> {
        let query = format!("{PERSON_SELECT} WHERE id = ?");
        let row = sqlx::query(&query)
            .bind(person_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to load person: {e}")))?
            .ok_or_else(|| AppError::not_found(format!("Person {person_id}")))?;

        let last_contact = self
            .interactions_for(person_id)
            .await?
            .iter()
            .map(|interaction| interaction.date)
            .max();
        Self::row_to_person(&row, last_contact)
    }

    async fn list_people(&self) -> AppResult<Vec<Person>> {
        let query = format!("{PERSON_SELECT} ORDER BY name COLLATE NOCASE, id");
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list people: {e}")))?;

        let last_contacts = self.last_contacts().await?;
        rows.iter()
            .map(|row| {
                let id: i64 = row.try_get("id")?;
                Self::row_to_person(row, last_contacts.get(&id).copied())
            })
            .collect()
    }

    async fn insert_interaction(&self, interaction: &Interaction) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO interactions (person_id, date, type, notes) VALUES (?, ?, ?, ?)",
        )
        .bind(interaction.person_id)
        .bind(format_day(interaction.date))
        .bind(interaction.interaction_type.as_str())
        .bind(&interaction.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to log interaction: {e}")))?;

        Ok(result.last_insert_rowid())
    }

    async fn delete_interaction(&self, interaction_id: i64) -> AppResult<Option<i64>> {
        let person_id: Option<i64> =
            sqlx::query_scalar("DELETE FROM interactions WHERE id = ? RETURNING person_id")
                .bind(interaction_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to delete interaction: {e}")))?;

        Ok(person_id)
    }

    async fn interactions_for(&self, person_id: i64) -> AppResult<Vec<Interaction>> {
        let rows = sqlx::query(
            r"
            SELECT id, person_id, date, type, notes
            FROM interactions
            WHERE person_id = ?
            ORDER BY date DESC, id DESC
            ",
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to load interactions: {e}")))?;

        let mut interactions = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Some(interaction) = Self::row_to_interaction(row)? {
                interactions.push(interaction);
            }
        }
        Ok(interactions)
    }

    async fn save_streak(&self, person_id: i64, current: u32, longest: u32) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE people SET current_streak = ?, longest_streak = ? WHERE id = ?")
                .bind(i64::from(current))
                .bind(i64::from(longest))
                .bind(person_id)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to save streak: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Person {person_id}")));
        }
        Ok(())
    }

    async fn insert_special_date(&self, special_date: &SpecialDate) -> AppResult<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO person_dates (person_id, date_type, label, date, recurring)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(special_date.person_id)
        .bind(special_date.date_type.as_str())
        .bind(&special_date.label)
        .bind(&special_date.date)
        .bind(special_date.recurring)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to add special date: {e}")))?;

        Ok(result.last_insert_rowid())
    }

    async fn recurring_special_dates(&self) -> AppResult<Vec<SpecialDate>> {
        let rows = sqlx::query(
            r"
            SELECT d.id, d.person_id, p.name AS person_name, d.date_type, d.label, d.date, d.recurring
            FROM person_dates d
            JOIN people p ON p.id = d.person_id
            WHERE d.recurring = 1
            ORDER BY d.date, d.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to load special dates: {e}")))?;

        rows.iter().map(Self::row_to_special_date).collect()
    }
}
