// ABOUTME: Stateful shopping-list session holding recipes and pantry stock
// ABOUTME: Supports recipe CRUD, recipe scaling, pantry tracking, and pantry-aware list generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

use heirloom_core::constants::list_defaults;
use heirloom_core::errors::{AppError, AppResult};
use heirloom_core::models::Recipe;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aggregator::{canonical_name, normalize_name};
use super::builder::{generate_shopping_list, ShoppingList, ShoppingListOptions};
use super::parser::parse;
use super::quantity::format_quantity;
use super::units::{convert, round_quantity, CanonicalUnit};

/// Stock already on hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    /// Ingredient name as entered (cleaned, lowercase)
    pub name: String,
    /// Amount on hand
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: CanonicalUnit,
}

impl PantryItem {
    fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Recipes and pantry stock for one shopping session
///
/// Recipe order is insertion order; replacing a recipe keeps its position.
#[derive(Debug, Clone, Default)]
pub struct ShoppingListManager {
    recipes: Vec<Recipe>,
    pantry: Vec<PantryItem>,
}

fn pantry_name(name: &str) -> String {
    parse(name).display_name
}

fn rewrite_line(line: &str, factor: f64) -> String {
    let parsed = parse(line);
    let Some(quantity) = parsed.quantity else {
        return line.to_owned();
    };

    let mut parts = Vec::with_capacity(4);
    if parsed.approximate {
        parts.push("about".to_owned());
    }
    parts.push(format_quantity(quantity * factor));
    if let Some(unit) = parsed.unit.filter(|u| *u != CanonicalUnit::Count) {
        parts.push(unit.abbreviation().to_owned());
    }
    parts.push(parsed.display_name);
    parts.join(" ")
}

impl ShoppingListManager {
    /// Create an empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Recipes
    // ========================================================================

    /// Add a recipe, replacing any recipe with the same id in place
    pub fn add_recipe(&mut self, recipe: Recipe) {
        if let Some(existing) = self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            *existing = recipe;
        } else {
            self.recipes.push(recipe);
        }
    }

    /// Remove a recipe, returning it if it was present
    pub fn remove_recipe(&mut self, recipe_id: &str) -> Option<Recipe> {
        let position = self.recipes.iter().position(|r| r.id == recipe_id)?;
        Some(self.recipes.remove(position))
    }

    /// Replace the recipe stored under `recipe_id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no recipe has that id
    pub fn update_recipe(&mut self, recipe_id: &str, recipe: Recipe) -> AppResult<()> {
        let existing = self
            .recipes
            .iter_mut()
            .find(|r| r.id == recipe_id)
            .ok_or_else(|| {
                AppError::not_found(format!("Recipe {recipe_id}")).with_resource_id(recipe_id)
            })?;
        *existing = recipe;
        Ok(())
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn recipe(&self, recipe_id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == recipe_id)
    }

    /// All recipes in insertion order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Remove every recipe
    pub fn clear_recipes(&mut self) {
        self.recipes.clear();
    }

    /// Copy of a recipe rewritten for `target_servings`
    ///
    /// Lines with a quantity are rebuilt as "quantity unit name"; other lines are
    /// kept as written. The stored recipe is not changed.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the recipe does not exist and
    /// `InvalidInput` if either serving count is zero
    pub fn scale_recipe(&self, recipe_id: &str, target_servings: u32) -> AppResult<Recipe> {
        let recipe = self.recipe(recipe_id).ok_or_else(|| {
            AppError::not_found(format!("Recipe {recipe_id}")).with_resource_id(recipe_id)
        })?;

        let factor = recipe.scale_factor(target_servings).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Cannot scale recipe {recipe_id} from {} to {target_servings} servings",
                recipe.servings
            ))
            .with_resource_id(recipe_id)
        })?;

        debug!(recipe_id, factor, "scaling recipe");

        Ok(Recipe {
            servings: target_servings,
            ingredient_lines: recipe
                .ingredient_lines
                .iter()
                .map(|line| rewrite_line(line, factor))
                .collect(),
            ..recipe.clone()
        })
    }

    // ========================================================================
    // Pantry
    // ========================================================================

    /// Record stock on hand; adds to an existing entry with the same unit
    pub fn add_pantry_item(&mut self, name: &str, quantity: f64, unit: CanonicalUnit) {
        let name = pantry_name(name);
        let key = normalize_name(&name);

        match self.pantry.iter_mut().find(|p| p.key() == key) {
            Some(existing) if existing.unit == unit => existing.quantity += quantity,
            Some(existing) => {
                *existing = PantryItem {
                    name,
                    quantity,
                    unit,
                };
            }
            None => self.pantry.push(PantryItem {
                name,
                quantity,
                unit,
            }),
        }
    }

    /// Remove a pantry entry, returning it if it was present
    pub fn remove_pantry_item(&mut self, name: &str) -> Option<PantryItem> {
        let key = normalize_name(&pantry_name(name));
        let position = self.pantry.iter().position(|p| p.key() == key)?;
        Some(self.pantry.remove(position))
    }

    /// Set the amount on hand for an existing pantry entry
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the pantry has no such item
    pub fn update_pantry_item(&mut self, name: &str, quantity: f64) -> AppResult<()> {
        let key = normalize_name(&pantry_name(name));
        let item = self
            .pantry
            .iter_mut()
            .find(|p| p.key() == key)
            .ok_or_else(|| {
                AppError::not_found(format!("Pantry item {name}")).with_resource_id(name)
            })?;
        item.quantity = quantity;
        Ok(())
    }

    /// Pantry entries in insertion order
    #[must_use]
    pub fn pantry_items(&self) -> &[PantryItem] {
        &self.pantry
    }

    /// Remove every pantry entry
    pub fn clear_pantry(&mut self) {
        self.pantry.clear();
    }

    // ========================================================================
    // Generation
    // ========================================================================

    /// Build a list from the stored recipes, net of pantry stock
    ///
    /// Pantry stock is subtracted from items with the same normalized name and a
    /// convertible unit. Items whose remaining need reaches zero are dropped.
    /// With `merge_synonyms`, alternate names match too.
    #[must_use]
    pub fn generate(&self, options: &ShoppingListOptions) -> ShoppingList {
        let mut list = generate_shopping_list(&self.recipes, options);
        let mut pantry_items_used = 0;
        let match_key = |name: &str| {
            if options.merge_synonyms {
                canonical_name(name)
            } else {
                normalize_name(name)
            }
        };

        for item in &mut list.items {
            let Some(needed) = item.quantity else {
                continue;
            };
            let key = match_key(&item.display_name);
            let Some(have) = self
                .pantry
                .iter()
                .filter(|p| match_key(&p.name) == key)
                .find_map(|p| convert(p.quantity, p.unit, item.unit))
            else {
                continue;
            };
            if have <= 0.0 {
                continue;
            }

            item.in_pantry = Some(round_quantity(have));
            item.quantity = Some(round_quantity((needed - have).max(0.0)));
            pantry_items_used += 1;
        }

        list.items.retain(|item| {
            item.in_pantry.is_none()
                || item
                    .quantity
                    .is_some_and(|remaining| remaining > list_defaults::DISPLAY_EPSILON)
        });
        list.summary.pantry_items_used = pantry_items_used;
        list.refresh_summary();
        list
    }
}
