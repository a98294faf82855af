// ABOUTME: `parse` command - shows how ingredient lines are understood
// ABOUTME: Prints parsed quantity, unit, and name for each line as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

use heirloom_core::errors::AppResult;
use heirloom_shopping::shopping::parse_many;

pub fn run(lines: &[String]) -> AppResult<()> {
    let parsed = parse_many(lines);
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}
