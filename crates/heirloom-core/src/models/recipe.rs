// ABOUTME: Recipe input records consumed read-only by the shopping-list pipeline
// ABOUTME: Defines Recipe (free-text ingredient lines) and a compact RecipeSummary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

use serde::{Deserialize, Serialize};

/// A recipe as supplied by the caller (demo UI, scraper, or a recipe file)
///
/// Ingredient lines are kept as written; parsing happens inside the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier, used for servings overrides and manager lookups
    pub id: String,
    /// Display name recorded as provenance on consolidated items
    pub name: String,
    /// Number of servings the ingredient quantities are written for
    #[serde(default = "default_servings")]
    pub servings: u32,
    /// Raw ingredient lines ("1 1/2 lbs ground beef")
    #[serde(alias = "ingredientLines", alias = "ingredients")]
    pub ingredient_lines: Vec<String>,
    /// Where the recipe came from, if known
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "sourceUrl")]
    pub source_url: Option<String>,
}

const fn default_servings() -> u32 {
    1
}

impl Recipe {
    /// Create a recipe from its identifier, name, servings, and ingredient lines
    pub fn new<I, S>(
        id: impl Into<String>,
        name: impl Into<String>,
        servings: u32,
        ingredient_lines: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            servings,
            ingredient_lines: ingredient_lines.into_iter().map(Into::into).collect(),
            source_url: None,
        }
    }

    /// Attach the URL the recipe was imported from
    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// Multiplier that rescales this recipe to `target_servings`
    ///
    /// Returns `None` when either side is zero, since the ratio is meaningless.
    #[must_use]
    pub fn scale_factor(&self, target_servings: u32) -> Option<f64> {
        if self.servings == 0 || target_servings == 0 {
            return None;
        }
        Some(f64::from(target_servings) / f64::from(self.servings))
    }

    /// Compact summary for list headers
    #[must_use]
    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            servings: self.servings,
            ingredient_count: self.ingredient_lines.len(),
        }
    }
}

/// Compact description of a recipe that contributed to a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Recipe identifier
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Servings the recipe is written for
    pub servings: u32,
    /// Number of ingredient lines
    pub ingredient_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_factor() {
        let recipe = Recipe::new("chili", "Weeknight Chili", 4, ["1 lb ground beef"]);
        assert_eq!(recipe.scale_factor(8), Some(2.0));
        assert_eq!(recipe.scale_factor(2), Some(0.5));
        assert_eq!(recipe.scale_factor(0), None);

        let unscaled = Recipe::new("x", "No servings", 0, Vec::<String>::new());
        assert_eq!(unscaled.scale_factor(4), None);
    }

    #[test]
    fn test_deserialize_accepts_camel_case_lines() {
        let json = r#"{
            "id": "pancakes",
            "name": "Buttermilk Pancakes",
            "ingredientLines": ["2 cups flour", "2 eggs"]
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.servings, 1);
        assert_eq!(recipe.ingredient_lines.len(), 2);
        assert!(recipe.source_url.is_none());
    }

    #[test]
    fn test_summary_counts_lines() {
        let recipe = Recipe::new("a", "A", 2, ["2 cups sugar", "1 tsp salt"])
            .with_source_url("https://example.com/a");
        let summary = recipe.summary();
        assert_eq!(summary.ingredient_count, 2);
        assert_eq!(summary.servings, 2);
    }
}
