// ABOUTME: Environment-only configuration for shopping-list generation defaults
// ABOUTME: Reads HEIRLOOM_* variables once, validates them, and exposes a process-wide instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

//! Shopping configuration
//!
//! There is no configuration file. Defaults come from
//! `heirloom_core::constants::list_defaults` and can be overridden with the
//! `HEIRLOOM_UNIT_SYSTEM`, `HEIRLOOM_EXCLUDE_PANTRY` and
//! `HEIRLOOM_GROUP_BY_CATEGORY` environment variables.

use std::env;
use std::sync::OnceLock;

use heirloom_core::constants::{env_config, list_defaults};
use heirloom_core::errors::AppError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::shopping::units::UnitSystem;

/// Global configuration singleton
static SHOPPING_CONFIG: OnceLock<ShoppingConfig> = OnceLock::new();

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable is set but not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

/// Defaults applied when generating shopping lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingConfig {
    /// Display system for volumes and weights; `None` keeps each item's own
    pub unit_system: Option<UnitSystem>,
    /// Drop pantry staples from generated lists
    pub exclude_pantry: bool,
    /// Order lists by grocery category
    pub group_by_category: bool,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            unit_system: None,
            exclude_pantry: list_defaults::EXCLUDE_PANTRY,
            group_by_category: list_defaults::GROUP_BY_CATEGORY,
        }
    }
}

impl ShoppingConfig {
    /// Get the global configuration instance
    ///
    /// Loaded from the environment on first use. Invalid values are logged and
    /// replaced by defaults.
    pub fn global() -> &'static Self {
        SHOPPING_CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                warn!("Failed to load shopping config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = env_value(env_config::UNIT_SYSTEM)? {
            config.unit_system = Some(UnitSystem::parse(&value).ok_or_else(|| {
                ConfigError::Parse(format!(
                    "Invalid {}: {value} (expected imperial or metric)",
                    env_config::UNIT_SYSTEM
                ))
            })?);
        }
        if let Some(value) = env_value(env_config::EXCLUDE_PANTRY)? {
            config.exclude_pantry = parse_bool(env_config::EXCLUDE_PANTRY, &value)?;
        }
        if let Some(value) = env_value(env_config::GROUP_BY_CATEGORY)? {
            config.group_by_category = parse_bool(env_config::GROUP_BY_CATEGORY, &value)?;
        }

        Ok(config)
    }
}

/// Read a variable, treating unset and blank as absent
fn env_value(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Parse a boolean flag (`true/false`, `1/0`, `yes/no`, `on/off`)
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Parse(format!("Invalid {key}: {value}"))),
    }
}
