// ABOUTME: Main library entry point for the Heirloom shopping-list engine
// ABOUTME: Turns recipe ingredient lines into a consolidated, categorized shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

#![deny(unsafe_code)]

//! # Heirloom Shopping
//!
//! Consolidates the ingredient lines of several recipes into one shopping list:
//! quantities of the same ingredient are summed across recipes and unit
//! spellings, each item is filed under a grocery category, and the recipes that
//! asked for it are recorded.
//!
//! ## Modules
//!
//! - **shopping**: the parse, aggregate, classify, and build pipeline
//! - **config**: environment-driven defaults for list generation
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use heirloom_core::models::Recipe;
//! use heirloom_shopping::shopping::{generate_shopping_list, ShoppingListOptions};
//!
//! let recipes = vec![
//!     Recipe::new("cookies", "Cookies", 24, ["2 cups sugar", "1 tsp salt"]),
//!     Recipe::new("cake", "Cake", 8, ["1 cup sugar"]),
//! ];
//! let list = generate_shopping_list(&recipes, &ShoppingListOptions::default());
//! assert_eq!(list.items.len(), 2);
//! ```

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Shopping-list pipeline
pub mod shopping;
