// ABOUTME: Shopping-list builder orchestrating parse, aggregate, classify, filter, and sort
// ABOUTME: Produces a fresh ShoppingList on every call; never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use heirloom_core::models::{Recipe, RecipeSummary};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use super::aggregator::{aggregate_with, AggregateOptions, ConsolidatedItem, ConsolidationWarning};
use super::categories::Category;
use super::units::UnitSystem;
use crate::config::ShoppingConfig;

/// Options for list generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListOptions {
    /// Leave pantry staples (salt, oils, ...) off the list
    pub exclude_pantry: bool,
    /// Order items by category then name; otherwise first-appearance order
    pub group_by_category: bool,
    /// Unit system for volumes and weights; `None` keeps each item's own
    pub display_system: Option<UnitSystem>,
    /// Target servings per recipe id
    pub servings: HashMap<String, u32>,
    /// Merge alternate ingredient names ("scallions", "green onions") into one item
    pub merge_synonyms: bool,
}

impl Default for ShoppingListOptions {
    fn default() -> Self {
        Self {
            exclude_pantry: false,
            group_by_category: true,
            display_system: None,
            servings: HashMap::new(),
            merge_synonyms: false,
        }
    }
}

impl ShoppingListOptions {
    /// Options seeded from environment configuration
    #[must_use]
    pub fn from_config(config: &ShoppingConfig) -> Self {
        Self {
            exclude_pantry: config.exclude_pantry,
            group_by_category: config.group_by_category,
            display_system: config.unit_system,
            servings: HashMap::new(),
            merge_synonyms: false,
        }
    }

    /// Scale recipe `recipe_id` to `servings`
    #[must_use]
    pub fn with_servings(mut self, recipe_id: impl Into<String>, servings: u32) -> Self {
        self.servings.insert(recipe_id.into(), servings);
        self
    }

    fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            display_system: self.display_system,
            servings: self.servings.clone(),
            merge_synonyms: self.merge_synonyms,
        }
    }
}

/// Counts shown under a list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    /// Items on the list
    pub total_items: usize,
    /// Recipes the list was built from
    pub total_recipes: usize,
    /// Items reduced by pantry stock
    pub pantry_items_used: usize,
}

/// A generated shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    /// Identifier of this generation
    pub id: Uuid,
    /// When the list was generated
    pub generated_at: DateTime<Utc>,
    /// Items in display order
    pub items: Vec<ConsolidatedItem>,
    /// Recipes the list was built from
    pub recipes: Vec<Recipe>,
    /// Ingredients that could not be fully consolidated
    #[serde(default)]
    pub warnings: Vec<ConsolidationWarning>,
    /// Item and recipe counts
    pub summary: ListSummary,
}

impl ShoppingList {
    /// Whether the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in one category, in list order
    pub fn items_in(&self, category: Category) -> impl Iterator<Item = &ConsolidatedItem> {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Categories present on the list, in order of first appearance
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category) {
                categories.push(item.category);
            }
        }
        categories
    }

    /// Summaries of the contributing recipes
    #[must_use]
    pub fn recipe_summaries(&self) -> Vec<RecipeSummary> {
        self.recipes.iter().map(Recipe::summary).collect()
    }

    /// Recompute item counts after items were added or removed
    pub fn refresh_summary(&mut self) {
        self.summary.total_items = self.items.len();
        self.summary.total_recipes = self.recipes.len();
    }
}

/// Build a shopping list from recipes
///
/// Runs parse, aggregate, and classify, then drops pantry staples when asked and
/// orders the items. Grouped lists follow `Category::ORDER` and then display
/// name; split items of the same name keep their relative order.
#[instrument(
    skip_all,
    fields(
        recipes = recipes.len(),
        exclude_pantry = options.exclude_pantry,
        group_by_category = options.group_by_category,
    )
)]
#[must_use]
pub fn generate_shopping_list(recipes: &[Recipe], options: &ShoppingListOptions) -> ShoppingList {
    let aggregation = aggregate_with(recipes, &options.aggregate_options());
    let mut items = aggregation.items;
    let mut warnings = aggregation.warnings;

    if options.exclude_pantry {
        items.retain(|item| !item.category.is_pantry_staple());
        warnings.retain(|w| items.iter().any(|item| item.display_name == w.display_name));
    }

    if options.group_by_category {
        items.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.display_name.cmp(&b.display_name))
        });
    }

    let summary = ListSummary {
        total_items: items.len(),
        total_recipes: recipes.len(),
        pantry_items_used: 0,
    };

    info!(
        items = summary.total_items,
        warnings = warnings.len(),
        "generated shopping list"
    );

    ShoppingList {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        items,
        recipes: recipes.to_vec(),
        warnings,
        summary,
    }
}
