// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors
// ABOUTME: Re-exports command modules for homebase-cli
// ABOUTME: Provides access to health and people commands

pub mod health;
pub mod people;
