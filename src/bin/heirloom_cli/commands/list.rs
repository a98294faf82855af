// ABOUTME: `list` command - builds and prints a shopping list from a recipe file
// ABOUTME: Merges CLI flags over environment configuration and renders text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

use std::path::PathBuf;

use heirloom_core::errors::AppResult;
use heirloom_shopping::config::ShoppingConfig;
use heirloom_shopping::shopping::{
    export_as_text, generate_shopping_list, ShoppingListOptions, UnitSystem,
};
use tracing::info;

use crate::helpers::recipes::{load_recipes, parse_servings};

pub struct ListArgs {
    pub file: PathBuf,
    pub exclude_pantry: bool,
    pub flat: bool,
    pub merge_synonyms: bool,
    pub system: Option<UnitSystem>,
    pub json: bool,
    pub servings: Vec<String>,
}

pub fn run(args: &ListArgs) -> AppResult<()> {
    let recipes = load_recipes(&args.file)?;

    let mut options = ShoppingListOptions::from_config(ShoppingConfig::global());
    options.exclude_pantry |= args.exclude_pantry;
    if args.flat {
        options.group_by_category = false;
    }
    options.merge_synonyms = args.merge_synonyms;
    if args.system.is_some() {
        options.display_system = args.system;
    }
    options.servings = parse_servings(&args.servings)?;

    let list = generate_shopping_list(&recipes, &options);
    info!(list_id = %list.id, items = list.items.len(), "shopping list ready");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        println!("{}", export_as_text(&list));
    }
    Ok(())
}
