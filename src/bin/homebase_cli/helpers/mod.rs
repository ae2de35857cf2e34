// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Homebase Contributors
// ABOUTME: Re-exports helper modules for homebase-cli
// ABOUTME: Provides access to output formatting utilities

pub mod display;
