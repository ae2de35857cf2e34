// ABOUTME: Criterion benchmarks for the health insights and relationship scoring engines
// ABOUTME: Measures full-year insight reports, sleep analysis, and ranking over large contact lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

//! Criterion benchmarks for the analytics engines.
//!
//! Windows are generated deterministically so runs are comparable.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use homebase::intelligence::{HealthInsightsEngine, RelationshipScoringEngine};
use homebase::models::{
    ContactFrequency, DailyMetricSample, Interaction, InteractionType, Person, RelationshipType,
};
use std::collections::BTreeSet;

const WINDOW_SIZES: [usize; 3] = [30, 90, 365];
const CONTACT_COUNTS: [usize; 3] = [50, 200, 500];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default()
}

/// Oldest-to-newest window with every tenth night missing
#[allow(clippy::cast_possible_wrap)]
fn generate_samples(count: usize) -> Vec<DailyMetricSample> {
    (0..count)
        .map(|index| {
            let mut sample =
                DailyMetricSample::new(today() - Duration::days((count - index) as i64));
            let i = index as i64;
            if index % 10 != 0 {
                sample.sleep_score = Some(60 + (i * 7) % 35);
                sample.sleep_total_sleep = Some(55 + (i * 11) % 40);
                sample.sleep_timing = Some(50 + (i * 13) % 45);
            }
            sample.readiness_score = Some(55 + (i * 5) % 40);
            sample.activity_score = Some(50 + (i * 3) % 45);
            sample.activity_steps = Some(4_000 + (i * 997) % 9_000);
            sample
        })
        .collect()
}

fn generate_workout_days(samples: &[DailyMetricSample]) -> BTreeSet<NaiveDate> {
    samples.iter().step_by(3).map(|s| s.day).collect()
}

#[allow(clippy::cast_possible_wrap)]
fn generate_people(count: usize) -> Vec<Person> {
    const FREQUENCIES: [ContactFrequency; 5] = [
        ContactFrequency::Weekly,
        ContactFrequency::Monthly,
        ContactFrequency::Quarterly,
        ContactFrequency::Yearly,
        ContactFrequency::None,
    ];

    (0..count)
        .map(|index| {
            let i = index as i64;
            let mut person = Person::new(i, format!("Contact {index:04}"), FREQUENCIES[index % 5]);
            person.last_contact =
                (index % 7 != 0).then(|| today() - Duration::days((i * 13) % 400));
            person.birthday = NaiveDate::from_ymd_opt(1980 + (index % 30) as i32, 1, 1)
                .map(|b| b + Duration::days((i * 37) % 365));
            person.current_streak = (index % 6) as u32;
            if index % 4 == 0 {
                person.relationship = RelationshipType::Acquaintance;
            }
            person
        })
        .collect()
}

#[allow(clippy::cast_possible_wrap)]
fn generate_interactions(count: usize) -> Vec<Interaction> {
    const TYPES: [InteractionType; 4] = [
        InteractionType::Message,
        InteractionType::Call,
        InteractionType::Video,
        InteractionType::InPerson,
    ];

    (0..count)
        .map(|index| Interaction {
            id: index as i64,
            person_id: 1,
            date: today() - Duration::days((index as i64 * 5) % 365),
            interaction_type: TYPES[index % 4],
            notes: String::new(),
        })
        .collect()
}

fn bench_health_insights(c: &mut Criterion) {
    let mut group = c.benchmark_group("health_insights");

    for &days in &WINDOW_SIZES {
        let samples = generate_samples(days);
        let workout_days = generate_workout_days(&samples);

        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::new("analyze", days), &samples, |b, samples| {
            b.iter(|| HealthInsightsEngine::analyze(black_box(samples), black_box(&workout_days)));
        });
        group.bench_with_input(
            BenchmarkId::new("analyze_sleep", days),
            &samples,
            |b, samples| {
                b.iter(|| HealthInsightsEngine::analyze_sleep(black_box(samples)));
            },
        );
    }

    group.finish();
}

fn bench_relationship_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("relationship_scoring");

    for &count in &CONTACT_COUNTS {
        let people = generate_people(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("suggestions", count),
            &people,
            |b, people| {
                b.iter(|| {
                    RelationshipScoringEngine::calculate_suggestions(black_box(people), today())
                });
            },
        );
        group.bench_with_input(BenchmarkId::new("dashboard", count), &people, |b, people| {
            b.iter(|| RelationshipScoringEngine::build_dashboard(black_box(people), today(), 30));
        });
    }

    group.finish();
}

fn bench_person_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("person_summary");
    let mut person = Person::new(1, "Ada", ContactFrequency::Weekly);
    person.longest_streak = 12;

    for &count in &[10_usize, 100, 1_000] {
        let interactions = generate_interactions(count);
        let dates: Vec<NaiveDate> = interactions.iter().map(|i| i.date).collect();

        group.bench_with_input(
            BenchmarkId::new("summarize_person", count),
            &interactions,
            |b, interactions| {
                b.iter(|| {
                    RelationshipScoringEngine::summarize_person(
                        black_box(&person),
                        black_box(interactions),
                        today(),
                    )
                });
            },
        );
        group.bench_with_input(BenchmarkId::new("update_streak", count), &dates, |b, dates| {
            b.iter(|| {
                RelationshipScoringEngine::update_streak(
                    black_box(&person),
                    black_box(dates),
                    today(),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_health_insights,
    bench_relationship_scoring,
    bench_person_summary,
);
criterion_main!(benches);
