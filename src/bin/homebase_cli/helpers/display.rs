// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors
// ABOUTME: Output formatting helpers for homebase-cli
// ABOUTME: Prints engine results as pretty JSON on stdout

use homebase::errors::AppResult;
use serde::Serialize;
use serde_json::json;

/// Print any result as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the outcome of a bulk streak refresh
pub fn print_streak_refresh(refreshed: usize) -> AppResult<()> {
    print_json(&json!({ "refreshed": refreshed }))
}

/// Print the outcome of logging or deleting an interaction
pub fn print_interaction_change<S: Serialize>(
    action: &str,
    interaction_id: i64,
    person: &S,
) -> AppResult<()> {
    print_json(&json!({
        "action": action,
        "interaction_id": interaction_id,
        "person": person,
    }))
}
