// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversion factors, environment variable names, and list defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

//! Constants grouped by domain.

/// Unit conversion and measurement constants
pub mod units;

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the command-line front end
    pub const HEIRLOOM_CLI: &str = "heirloom-cli";
    /// Library target used in `EnvFilter` directives
    pub const HEIRLOOM_SHOPPING: &str = "heirloom_shopping";
}

/// Environment variables read by the configuration layer
pub mod env_config {
    /// Preferred display unit system (`imperial` or `metric`)
    pub const UNIT_SYSTEM: &str = "HEIRLOOM_UNIT_SYSTEM";
    /// Drop pantry staples from generated lists (`true`/`false`)
    pub const EXCLUDE_PANTRY: &str = "HEIRLOOM_EXCLUDE_PANTRY";
    /// Group generated lists by grocery category (`true`/`false`)
    pub const GROUP_BY_CATEGORY: &str = "HEIRLOOM_GROUP_BY_CATEGORY";
    /// Log level override
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (`json`, `pretty`, `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Shopping list behaviour defaults
pub mod list_defaults {
    /// Lists are grouped by category unless configured otherwise
    pub const GROUP_BY_CATEGORY: bool = true;
    /// Pantry staples stay on the list unless configured otherwise
    pub const EXCLUDE_PANTRY: bool = false;
    /// Decimal places kept on consolidated quantities
    pub const QUANTITY_DECIMALS: i32 = 2;
    /// Tolerance used when comparing converted quantities against 1
    pub const DISPLAY_EPSILON: f64 = 1e-6;
}
