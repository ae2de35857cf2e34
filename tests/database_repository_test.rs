// ABOUTME: Integration tests for SQLite storage and the services built on it
// ABOUTME: Covers schema setup, row mapping, streak persistence, and windowed health queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, NaiveDate};
use common::{create_test_database, day, days_ago, init_test_logging, sample, today};
use homebase::config::AnalyticsConfig;
use homebase::database::{Database, HealthRepository, PeopleRepository};
use homebase::errors::ErrorCode;
use homebase::intelligence::health::StreakType;
use homebase::models::{
    ContactFrequency, GoalType, HealthGoal, Interaction, InteractionType, Person, SpecialDate,
    SpecialDateType, Workout,
};
use homebase::services::{HealthInsightsService, RelationshipService};

fn interaction(person_id: i64, days: i64, interaction_type: InteractionType) -> Interaction {
    Interaction {
        id: 0,
        person_id,
        date: days_ago(days),
        interaction_type,
        notes: String::new(),
    }
}

fn workout(on: NaiveDate) -> Workout {
    Workout {
        id: 0,
        date: on,
        workout_type: "run".to_owned(),
        notes: String::new(),
    }
}

#[tokio::test]
async fn test_file_database_creates_parent_directory() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("homebase.db");

    let database = Database::new(&format!("sqlite:{}", path.display()))
        .await
        .unwrap();
    database.migrate().await.unwrap();

    assert!(path.exists());
}

#[tokio::test]
async fn test_people_are_listed_by_name_with_derived_last_contact() {
    let database = create_test_database().await.unwrap();
    let people = database.people();

    let zed = people
        .insert_person(&Person::new(0, "zed", ContactFrequency::Weekly))
        .await
        .unwrap();
    let mut ada = Person::new(0, "Ada", ContactFrequency::Monthly);
    ada.birthday = Some(day(1990, 6, 15));
    ada.nickname = "A".to_owned();
    let ada = people.insert_person(&ada).await.unwrap();

    people
        .insert_interaction(&interaction(ada, 10, InteractionType::Call))
        .await
        .unwrap();
    people
        .insert_interaction(&interaction(ada, 3, InteractionType::Message))
        .await
        .unwrap();

    let listed = people.list_people().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, ada);
    assert_eq!(listed[0].last_contact, Some(days_ago(3)));
    assert_eq!(listed[0].birthday, Some(day(1990, 6, 15)));
    assert_eq!(listed[0].nickname, "A");
    assert_eq!(listed[1].id, zed);
    assert_eq!(listed[1].last_contact, None);

    let history = people.interactions_for(ada).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].date, days_ago(3), "newest first");
}

#[tokio::test]
async fn test_logging_and_deleting_interactions_refreshes_streak() {
    let database = create_test_database().await.unwrap();
    let service = RelationshipService::new(database.people(), AnalyticsConfig::default());
    let ada = database
        .people()
        .insert_person(&Person::new(0, "Ada", ContactFrequency::Weekly))
        .await
        .unwrap();

    service
        .record_interaction(&interaction(ada, 8, InteractionType::Call), today())
        .await
        .unwrap();
    let stored = database.people().get_person(ada).await.unwrap();
    assert_eq!(stored.current_streak, 0, "eight days is past a weekly interval");

    let recent = service
        .record_interaction(&interaction(ada, 2, InteractionType::Video), today())
        .await
        .unwrap();
    let stored = database.people().get_person(ada).await.unwrap();
    assert_eq!(stored.current_streak, 2);
    assert_eq!(stored.longest_streak, 2);

    assert!(service.remove_interaction(recent, today()).await.unwrap());
    let stored = database.people().get_person(ada).await.unwrap();
    assert_eq!(stored.current_streak, 0);
    assert_eq!(stored.longest_streak, 2);

    assert!(!service.remove_interaction(9_999, today()).await.unwrap());
}

#[tokio::test]
async fn test_refresh_all_streaks_skips_people_without_cadence() {
    let database = create_test_database().await.unwrap();
    let people = database.people();
    let ada = people
        .insert_person(&Person::new(0, "Ada", ContactFrequency::Weekly))
        .await
        .unwrap();
    let bo = people
        .insert_person(&Person::new(0, "Bo", ContactFrequency::None))
        .await
        .unwrap();
    people
        .insert_person(&Person::new(0, "Cy", ContactFrequency::Monthly))
        .await
        .unwrap();
    people
        .insert_interaction(&interaction(ada, 1, InteractionType::Call))
        .await
        .unwrap();
    people
        .insert_interaction(&interaction(bo, 1, InteractionType::Call))
        .await
        .unwrap();

    let service = RelationshipService::new(people, AnalyticsConfig::default());
    let refreshed = service.refresh_all_streaks(today()).await.unwrap();

    assert_eq!(refreshed, 2, "Ada and Cy have a cadence; Bo does not");
    let health = service.person_health(ada, today()).await.unwrap();
    assert_eq!(health.current_streak, 1);
}

#[tokio::test]
async fn test_malformed_interaction_date_does_not_hide_last_contact() {
    let database = create_test_database().await.unwrap();
    let people = database.people();
    let ada = people
        .insert_person(&Person::new(0, "Ada", ContactFrequency::Weekly))
        .await
        .unwrap();
    people
        .insert_interaction(&interaction(ada, 1, InteractionType::Call))
        .await
        .unwrap();
    sqlx::query("INSERT INTO interactions (person_id, date, type, notes) VALUES (?, ?, ?, ?)")
        .bind(ada)
        .bind("yesterday")
        .bind("call")
        .bind("")
        .execute(database.pool())
        .await
        .unwrap();

    assert_eq!(people.interactions_for(ada).await.unwrap().len(), 1);

    let listed = people.list_people().await.unwrap();
    assert_eq!(listed[0].last_contact, Some(days_ago(1)));
    let loaded = people.get_person(ada).await.unwrap();
    assert_eq!(loaded.last_contact, Some(days_ago(1)));

    let service = RelationshipService::new(people, AnalyticsConfig::default());
    let dashboard = service.dashboard(today()).await.unwrap();
    assert_eq!(dashboard.overdue_count, 0);
    assert!(dashboard.overdue_contacts.is_empty());
}

#[tokio::test]
async fn test_deleting_last_interaction_resets_streak() {
    let database = create_test_database().await.unwrap();
    let service = RelationshipService::new(database.people(), AnalyticsConfig::default());
    let ada = database
        .people()
        .insert_person(&Person::new(0, "Ada", ContactFrequency::Weekly))
        .await
        .unwrap();

    let only = service
        .record_interaction(&interaction(ada, 2, InteractionType::Call), today())
        .await
        .unwrap();
    assert_eq!(
        database.people().get_person(ada).await.unwrap().current_streak,
        1
    );

    assert!(service.remove_interaction(only, today()).await.unwrap());

    let stored = database.people().get_person(ada).await.unwrap();
    assert_eq!(stored.current_streak, 0);
    assert_eq!(stored.longest_streak, 1);
    assert_eq!(stored.last_contact, None);

    let health = service.person_health(ada, today()).await.unwrap();
    assert_eq!(health.current_streak, 0);
    assert_eq!(health.health_score, 0);
}

#[tokio::test]
async fn test_unknown_person_is_not_found() {
    let database = create_test_database().await.unwrap();
    let service = RelationshipService::new(database.people(), AnalyticsConfig::default());

    let error = service.person_health(42, today()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);

    let error = database.people().save_streak(42, 1, 1).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_upcoming_special_dates_use_configured_horizon() {
    let database = create_test_database().await.unwrap();
    let people = database.people();
    let ada = people
        .insert_person(&Person::new(0, "Ada", ContactFrequency::Monthly))
        .await
        .unwrap();
    for (label, date, recurring) in [
        ("Anniversary", "06-10", true),
        ("Graduation", "06-05", false),
        ("Memorial", "07-20", true),
    ] {
        people
            .insert_special_date(&SpecialDate {
                id: 0,
                person_id: ada,
                person_name: String::new(),
                date_type: SpecialDateType::Anniversary,
                label: label.to_owned(),
                date: date.to_owned(),
                recurring,
            })
            .await
            .unwrap();
    }

    let narrow = AnalyticsConfig {
        birthday_horizon_days: 14,
        ..AnalyticsConfig::default()
    };
    let upcoming = RelationshipService::new(people.clone(), narrow)
        .upcoming_dates(today())
        .await
        .unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].person_name, "Ada");
    assert_eq!(upcoming[0].days_until, 9);

    let wide = AnalyticsConfig {
        birthday_horizon_days: 60,
        ..AnalyticsConfig::default()
    };
    let upcoming = RelationshipService::new(people, wide)
        .upcoming_dates(today())
        .await
        .unwrap();
    assert_eq!(upcoming.len(), 2);
}

#[tokio::test]
async fn test_daily_samples_upsert_and_window_bounds() {
    let database = create_test_database().await.unwrap();
    let health = database.health();

    health
        .upsert_daily_sample(&sample(days_ago(1), Some(60), None, None, None))
        .await
        .unwrap();
    health
        .upsert_daily_sample(&sample(days_ago(1), Some(88), Some(77), None, Some(12_000)))
        .await
        .unwrap();
    health
        .upsert_daily_sample(&sample(days_ago(40), Some(70), None, None, None))
        .await
        .unwrap();

    let window = health.daily_samples(days_ago(29), today()).await.unwrap();
    assert_eq!(window.len(), 1);
    assert_eq!(window[0].sleep_score, Some(88));
    assert_eq!(window[0].readiness_score, Some(77));
    assert_eq!(window[0].activity_steps, Some(12_000));
    assert_eq!(window[0].activity_score, None);

    let service = HealthInsightsService::new(health, AnalyticsConfig::default());
    let insights = service.insights(today()).await.unwrap();
    assert_eq!(insights.total_days, 2);
}

#[tokio::test]
async fn test_workouts_and_goals_round_trip() {
    let database = create_test_database().await.unwrap();
    let health = database.health();

    health.insert_workout(&workout(days_ago(1))).await.unwrap();
    health.insert_workout(&workout(days_ago(1))).await.unwrap();
    health.insert_workout(&workout(days_ago(3))).await.unwrap();

    let days = health.workout_days(days_ago(7), today()).await.unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(health.workout_count(days_ago(7), today()).await.unwrap(), 3);
    assert_eq!(health.workout_count(days_ago(2), today()).await.unwrap(), 2);

    let steps = HealthGoal {
        id: 0,
        goal_type: GoalType::StepGoal,
        target: 8_000,
        active: true,
    };
    let first = health.upsert_goal(&steps).await.unwrap();
    let second = health
        .upsert_goal(&HealthGoal {
            target: 10_000,
            ..steps.clone()
        })
        .await
        .unwrap();
    assert_eq!(first, second, "one goal per type");
    health
        .upsert_goal(&HealthGoal {
            id: 0,
            goal_type: GoalType::SleepScore,
            target: 80,
            active: false,
        })
        .await
        .unwrap();

    let goals = health.active_goals().await.unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].goal_type, GoalType::StepGoal);
    assert_eq!(goals[0].target, 10_000);
}

#[tokio::test]
async fn test_weekly_summary_compares_with_previous_week() {
    let database = create_test_database().await.unwrap();
    let health = database.health();

    // Two full Monday-start weeks: May 20-26 at 70, May 27 - June 2 at 85
    let week_start = day(2024, 5, 27);
    for offset in 0..14_i64 {
        let on = day(2024, 5, 20) + Duration::days(offset);
        let score = if on < week_start { 70 } else { 85 };
        health
            .upsert_daily_sample(&sample(on, Some(score), Some(score), None, Some(9_000)))
            .await
            .unwrap();
    }
    health.insert_workout(&workout(day(2024, 5, 28))).await.unwrap();
    health.insert_workout(&workout(day(2024, 5, 28))).await.unwrap();
    health
        .upsert_goal(&HealthGoal {
            id: 0,
            goal_type: GoalType::SleepScore,
            target: 80,
            active: true,
        })
        .await
        .unwrap();

    let service = HealthInsightsService::new(health, AnalyticsConfig::default());
    let summary = service.weekly_summary(day(2024, 5, 29)).await.unwrap();

    assert_eq!(summary.week_start, week_start);
    assert_eq!(summary.week_end, day(2024, 6, 2));
    assert!((summary.avg_sleep.unwrap() - 85.0).abs() < 1e-9);
    assert!((summary.sleep_delta.unwrap() - 15.0).abs() < 1e-9);
    assert!((summary.readiness_delta.unwrap() - 15.0).abs() < 1e-9);
    assert_eq!(summary.activity_delta, None);
    assert_eq!(summary.total_steps, 63_000);
    assert_eq!(summary.workout_count, 2);
    assert_eq!((summary.goals_met, summary.goals_total), (1, 1));
    assert!(summary.highlights.iter().any(|h| h == "Every goal met"));
    assert!(summary
        .active_streaks
        .iter()
        .any(|s| s.streak_type == StreakType::Sleep80 && s.current_streak == 7));
    assert!(summary.lowlights.is_empty());
}
