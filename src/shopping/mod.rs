// ABOUTME: Recipe-to-shopping-list pipeline: units, quantities, parsing, consolidation, and output
// ABOUTME: Pure functions composed by the builder, plus a stateful manager for pantry-aware sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

//! # Shopping list pipeline
//!
//! Ingredient lines flow through four stages:
//!
//! 1. [`parser`] turns free text into a quantity, a canonical unit and a name
//!    (with [`quantity`] and [`units`] doing the number and unit work);
//! 2. [`aggregator`] merges lines naming the same ingredient across recipes;
//! 3. [`categories`] assigns a grocery section;
//! 4. [`builder`] filters and orders the result into a [`ShoppingList`].
//!
//! Nothing in the pipeline fails: unparseable lines are kept as name-only items.

/// Consolidation of parsed lines across recipes
pub mod aggregator;
/// List generation options and output model
pub mod builder;
/// Grocery category keywords and ordering
pub mod categories;
/// Plain-text rendering
pub mod format;
/// Recipe and pantry session state
pub mod manager;
/// Ingredient line parsing
pub mod parser;
/// Numeric quantity parsing and formatting
pub mod quantity;
/// Canonical units, synonyms, and conversion
pub mod units;

pub use aggregator::{
    aggregate, aggregate_with, canonical_name, normalize_name, AggregateOptions,
    ConsolidatedItem, ConsolidationWarning, IngredientContribution, WarningKind,
};
pub use builder::{generate_shopping_list, ListSummary, ShoppingList, ShoppingListOptions};
pub use categories::{classify, Category};
pub use format::{export_as_text, format_item};
pub use manager::{PantryItem, ShoppingListManager};
pub use parser::{parse, parse_many, ParsedIngredient};
pub use quantity::{format_quantity, parse_quantity, Precision, Quantity};
pub use units::{best_display_unit, convert, parse_unit, CanonicalUnit, UnitKind, UnitSystem};
