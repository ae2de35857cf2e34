// ABOUTME: Calendar helpers shared by the health and relationship analytics
// ABOUTME: Day differences, yearly anniversaries, Monday week starts, and lenient parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors

use chrono::{Datelike, Days, NaiveDate};

/// Storage format for calendar days
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse a stored `YYYY-MM-DD` day, returning `None` for malformed text
#[must_use]
pub fn parse_day(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DAY_FORMAT).ok()
}

/// Format a day as `YYYY-MM-DD`
#[must_use]
pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Whole days from `earlier` to `later` (negative when `earlier` is after `later`)
#[must_use]
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

/// The given month/day in `year`
///
/// February 29th in a non-leap year lands on March 1st, matching how
/// calendar normalization rolls an out-of-range day forward.
#[must_use]
pub fn month_day_in_year(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        if month == 2 && day == 29 {
            NaiveDate::from_ymd_opt(year, 3, 1)
        } else {
            None
        }
    })
}

/// Next occurrence (today inclusive) of a yearly month/day
#[must_use]
pub fn next_anniversary(month: u32, day: u32, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = month_day_in_year(today.year(), month, day)?;
    if this_year < today {
        month_day_in_year(today.year() + 1, month, day)
    } else {
        Some(this_year)
    }
}

/// Monday starting the week that contains `day`
#[must_use]
pub fn week_start_monday(day: NaiveDate) -> NaiveDate {
    let offset = u64::from(day.weekday().num_days_from_monday());
    day.checked_sub_days(Days::new(offset)).unwrap_or(day)
}

/// Weekday number with Sunday as 0 and Saturday as 6
#[must_use]
pub fn weekday_number(day: NaiveDate) -> usize {
    day.weekday().num_days_from_sunday() as usize
}

/// English name for a Sunday-based weekday number
#[must_use]
pub const fn weekday_name(number: usize) -> &'static str {
    match number {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        _ => "Saturday",
    }
}
