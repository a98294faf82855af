// ABOUTME: Integration tests for environment-driven shopping configuration
// ABOUTME: Tests defaults, variable parsing, invalid values, and option seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use heirloom_core::constants::env_config;
use heirloom_core::errors::{AppError, ErrorCode};
use heirloom_shopping::config::{ConfigError, ShoppingConfig};
use heirloom_shopping::shopping::{ShoppingListOptions, UnitSystem};
use serial_test::serial;

fn clear_env() {
    env::remove_var(env_config::UNIT_SYSTEM);
    env::remove_var(env_config::EXCLUDE_PANTRY);
    env::remove_var(env_config::GROUP_BY_CATEGORY);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = ShoppingConfig::from_env().unwrap();
    assert_eq!(config, ShoppingConfig::default());
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    clear_env();
    env::set_var(env_config::UNIT_SYSTEM, "Metric");
    env::set_var(env_config::EXCLUDE_PANTRY, "yes");
    env::set_var(env_config::GROUP_BY_CATEGORY, "off");

    let config = ShoppingConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.unit_system, Some(UnitSystem::Metric));
    assert!(config.exclude_pantry);
    assert!(!config.group_by_category);

    let options = ShoppingListOptions::from_config(&config);
    assert!(options.exclude_pantry);
    assert!(!options.group_by_category);
    assert_eq!(options.display_system, Some(UnitSystem::Metric));
}

#[test]
#[serial]
fn test_blank_variables_are_unset() {
    clear_env();
    env::set_var(env_config::UNIT_SYSTEM, "  ");
    let config = ShoppingConfig::from_env().unwrap();
    clear_env();
    assert_eq!(config.unit_system, None);
}

#[test]
#[serial]
fn test_invalid_values_are_parse_errors() {
    clear_env();
    env::set_var(env_config::UNIT_SYSTEM, "cubits");
    let error = ShoppingConfig::from_env().unwrap_err();
    clear_env();
    assert!(matches!(error, ConfigError::Parse(_)));
    assert!(error.to_string().contains(env_config::UNIT_SYSTEM));

    env::set_var(env_config::EXCLUDE_PANTRY, "sometimes");
    let error = ShoppingConfig::from_env().unwrap_err();
    clear_env();
    let app_error: AppError = error.into();
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
}
