// ABOUTME: `scale` command - prints one recipe rewritten for a new serving count
// ABOUTME: Loads the recipe file into a session manager and scales a copy of the recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

use std::path::Path;

use heirloom_core::errors::AppResult;
use heirloom_shopping::shopping::ShoppingListManager;

use crate::helpers::recipes::load_recipes;

pub fn run(file: &Path, id: &str, servings: u32) -> AppResult<()> {
    let recipes = load_recipes(file)?;
    let mut manager = ShoppingListManager::new();
    for recipe in recipes {
        manager.add_recipe(recipe);
    }
    let scaled = manager.scale_recipe(id, servings)?;

    println!("{} ({} servings)", scaled.name, scaled.servings);
    for line in &scaled.ingredient_lines {
        println!("- {line}");
    }
    Ok(())
}
