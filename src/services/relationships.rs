// ABOUTME: Relationship service keeping contact streaks current and serving people views
// ABOUTME: Refreshes streaks on every interaction change; builds dashboard, suggestions, and reminders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use crate::config::AnalyticsConfig;
use crate::database::PeopleRepository;
use crate::errors::AppResult;
use chrono::NaiveDate;
use homebase_core::models::Interaction;
use homebase_intelligence::relationships::{
    PeopleDashboard, PersonHealth, ReconnectCandidate, StreakUpdate, Suggestion, UpcomingDate,
};
use homebase_intelligence::RelationshipScoringEngine;
use tracing::{debug, info, instrument};

/// Relationship tracking over a repository
pub struct RelationshipService<R> {
    repository: R,
    analytics: AnalyticsConfig,
}

impl<R: PeopleRepository> RelationshipService<R> {
    /// Create a service over `repository`
    #[must_use]
    pub const fn new(repository: R, analytics: AnalyticsConfig) -> Self {
        Self {
            repository,
            analytics,
        }
    }

    fn horizon_days(&self) -> i64 {
        i64::from(self.analytics.birthday_horizon_days)
    }

    /// Log an interaction and refresh that person's streak
    ///
    /// # Errors
    ///
    /// Returns an error if the person does not exist or the repository fails
    #[instrument(
        skip(self, interaction),
        fields(service = "people", person_id = interaction.person_id)
    )]
    pub async fn record_interaction(
        &self,
        interaction: &Interaction,
        today: NaiveDate,
    ) -> AppResult<i64> {
        let id = self.repository.insert_interaction(interaction).await?;
        self.refresh_streak(interaction.person_id, today).await?;
        Ok(id)
    }

    /// Delete an interaction and refresh its person's streak
    ///
    /// Returns `false` when the interaction did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    #[instrument(skip(self), fields(service = "people"))]
    pub async fn remove_interaction(
        &self,
        interaction_id: i64,
        today: NaiveDate,
    ) -> AppResult<bool> {
        let Some(person_id) = self.repository.delete_interaction(interaction_id).await? else {
            debug!(interaction_id, "No interaction to delete");
            return Ok(false);
        };
        self.refresh_streak(person_id, today).await?;
        Ok(true)
    }

    /// Recompute and persist one person's streak
    ///
    /// Returns the stored values, or `None` for people without a contact cadence.
    ///
    /// # Errors
    ///
    /// Returns an error if the person does not exist or the repository fails
    pub async fn refresh_streak(
        &self,
        person_id: i64,
        today: NaiveDate,
    ) -> AppResult<Option<StreakUpdate>> {
        let person = self.repository.get_person(person_id).await?;
        let dates: Vec<NaiveDate> = self
            .repository
            .interactions_for(person_id)
            .await?
            .iter()
            .map(|i| i.date)
            .collect();

        let update = RelationshipScoringEngine::update_streak(&person, &dates, today);
        if let Some(update) = update {
            self.repository
                .save_streak(person_id, update.current_streak, update.longest_streak)
                .await?;
        }
        Ok(update)
    }

    /// Recompute every person's streak, returning how many were saved
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    #[instrument(skip(self), fields(service = "people", operation = "refresh_all_streaks"))]
    pub async fn refresh_all_streaks(&self, today: NaiveDate) -> AppResult<usize> {
        let people = self.repository.list_people().await?;
        let mut refreshed = 0;
        for person in &people {
            if self.refresh_streak(person.id, today).await?.is_some() {
                refreshed += 1;
            }
        }
        info!(total = people.len(), refreshed, "Streaks refreshed");
        Ok(refreshed)
    }

    /// Health summary for one person
    ///
    /// # Errors
    ///
    /// Returns an error if the person does not exist or the repository fails
    #[instrument(skip(self), fields(service = "people", operation = "person_health"))]
    pub async fn person_health(
        &self,
        person_id: i64,
        today: NaiveDate,
    ) -> AppResult<PersonHealth> {
        let person = self.repository.get_person(person_id).await?;
        let interactions = self.repository.interactions_for(person_id).await?;
        Ok(RelationshipScoringEngine::summarize_person(
            &person,
            &interactions,
            today,
        ))
    }

    /// Totals, overdue contacts, and upcoming birthdays
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    #[instrument(skip(self), fields(service = "people", operation = "dashboard"))]
    pub async fn dashboard(&self, today: NaiveDate) -> AppResult<PeopleDashboard> {
        let people = self.repository.list_people().await?;
        Ok(RelationshipScoringEngine::build_dashboard(
            &people,
            today,
            self.horizon_days(),
        ))
    }

    /// Ranked list of who to contact next
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    #[instrument(skip(self), fields(service = "people", operation = "suggestions"))]
    pub async fn suggestions(&self, today: NaiveDate) -> AppResult<Vec<Suggestion>> {
        let people = self.repository.list_people().await?;
        Ok(RelationshipScoringEngine::calculate_suggestions(&people, today))
    }

    /// Loose connections worth rekindling
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    #[instrument(skip(self), fields(service = "people", operation = "reconnect"))]
    pub async fn reconnect(&self, today: NaiveDate) -> AppResult<Vec<ReconnectCandidate>> {
        let people = self.repository.list_people().await?;
        Ok(RelationshipScoringEngine::calculate_reconnect(&people, today))
    }

    /// Recurring special dates inside the horizon
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    #[instrument(skip(self), fields(service = "people", operation = "upcoming_dates"))]
    pub async fn upcoming_dates(&self, today: NaiveDate) -> AppResult<Vec<UpcomingDate>> {
        let special_dates = self.repository.recurring_special_dates().await?;
        Ok(RelationshipScoringEngine::calculate_upcoming_dates(
            &special_dates,
            today,
            self.horizon_days(),
        ))
    }
}
