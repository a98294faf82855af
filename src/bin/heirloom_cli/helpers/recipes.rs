// ABOUTME: Recipe file loading and servings-argument parsing for heirloom-cli
// ABOUTME: Accepts JSON or YAML, either a bare list of recipes or a { recipes: [...] } document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use heirloom_core::errors::{AppError, AppResult};
use heirloom_core::models::Recipe;
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeFile {
    List(Vec<Recipe>),
    Document { recipes: Vec<Recipe> },
}

impl RecipeFile {
    fn into_recipes(self) -> Vec<Recipe> {
        match self {
            Self::List(recipes) | Self::Document { recipes } => recipes,
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// Parse recipe file contents; `yaml` selects the YAML decoder
pub fn parse_recipes(contents: &str, yaml: bool) -> AppResult<Vec<Recipe>> {
    let file: RecipeFile = if yaml {
        serde_yaml::from_str(contents)?
    } else {
        serde_json::from_str(contents)?
    };
    Ok(file.into_recipes())
}

/// Load recipes from a JSON or YAML file, chosen by extension
pub fn load_recipes(path: &Path) -> AppResult<Vec<Recipe>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    let recipes = parse_recipes(&contents, is_yaml(path))?;
    debug!(path = %path.display(), recipes = recipes.len(), "loaded recipe file");
    Ok(recipes)
}

/// Parse repeated `id=N` servings arguments
pub fn parse_servings(args: &[String]) -> AppResult<HashMap<String, u32>> {
    let mut servings = HashMap::with_capacity(args.len());
    for arg in args {
        let (id, count) = arg
            .split_once('=')
            .ok_or_else(|| AppError::invalid_input(format!("Expected ID=N, got '{arg}'")))?;
        let count: u32 = count.trim().parse().map_err(|_| {
            AppError::invalid_input(format!("Invalid servings count in '{arg}'"))
        })?;
        if count == 0 {
            return Err(AppError::out_of_range(format!(
                "Servings must be at least 1 in '{arg}'"
            )));
        }
        servings.insert(id.trim().to_owned(), count);
    }
    Ok(servings)
}
