// ABOUTME: Command modules for heirloom-cli
// ABOUTME: Provides list generation, line parsing, and recipe scaling commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

pub mod list;
pub mod parse;
pub mod scale;
