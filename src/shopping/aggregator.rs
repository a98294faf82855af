// ABOUTME: Consolidates parsed ingredient lines across recipes into shopping-list items
// ABOUTME: Groups by normalized name, sums per unit kind, and records per-line provenance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

use std::collections::HashMap;
use std::sync::LazyLock;

use heirloom_core::models::Recipe;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::categories::{classify, Category};
use super::parser::parse;
use super::units::{best_display_unit, round_quantity, CanonicalUnit, UnitKind, UnitSystem};

/// Knobs for consolidation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Unit system to display volumes and weights in; `None` keeps each item's own
    pub display_system: Option<UnitSystem>,
    /// Target servings per recipe id
    pub servings: HashMap<String, u32>,
    /// Group regional and alternate names under one ingredient ("scallions" with "green onions")
    pub merge_synonyms: bool,
}

/// One ingredient line that fed a consolidated item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientContribution {
    /// Id of the recipe the line came from
    pub recipe_id: String,
    /// The line as written in the recipe
    pub original_text: String,
    /// Parsed amount after servings scaling
    pub quantity: Option<f64>,
    /// Parsed unit
    pub unit: Option<CanonicalUnit>,
}

/// One line of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedItem {
    /// Ingredient name as first written (lowercase)
    pub display_name: String,
    /// Total amount in `unit`; `None` when no contributing line had a quantity
    pub quantity: Option<f64>,
    /// Unit the total is expressed in
    pub unit: CanonicalUnit,
    /// Grocery section
    pub category: Category,
    /// Names of contributing recipes, in the order recipes were supplied
    pub recipes: Vec<String>,
    /// At least one contribution was a range, estimate, or informal amount
    #[serde(default)]
    pub approximate: bool,
    /// Amount already in the pantry, in `unit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_pantry: Option<f64>,
    /// Lines that fed this item, in supply order
    #[serde(default)]
    pub contributions: Vec<IngredientContribution>,
    /// Why this item could not be merged with others of the same name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_reason: Option<String>,
}

impl ConsolidatedItem {
    /// What the item's quantity measures
    #[must_use]
    pub const fn kind(&self) -> UnitKind {
        self.unit.kind()
    }

    /// Whether the item was split off from an ingredient with incompatible units
    #[must_use]
    pub const fn has_conflict(&self) -> bool {
        self.conflict_reason.is_some()
    }
}

/// Kind of consolidation warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// One ingredient appeared with incompatible unit kinds and was split
    UnitMismatch,
}

/// Something a shopper should double-check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidationWarning {
    /// What went wrong
    pub kind: WarningKind,
    /// Human-readable explanation
    pub message: String,
    /// Ingredient the warning is about
    pub display_name: String,
}

/// Items plus warnings produced by one consolidation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Consolidated items in first-appearance order
    pub items: Vec<ConsolidatedItem>,
    /// Groups that had to be split
    pub warnings: Vec<ConsolidationWarning>,
}

/// Fold case, whitespace, and simple plurals so "Onions" and "onion" group together
///
/// Only one trailing `s` is stripped, and only from words longer than three
/// characters that do not end in `ss`. Irregular plurals ("tomatoes") stay apart.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let folded = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let last_word_len = folded
        .rsplit(' ')
        .next()
        .map_or(0, |word| word.chars().count());

    if last_word_len > 3 && folded.ends_with('s') && !folded.ends_with("ss") {
        folded[..folded.len() - 1].to_owned()
    } else {
        folded
    }
}

/// Alternate name to canonical name, both in `normalize_name` form
static INGREDIENT_SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    for (canonical, synonyms) in [
        ("green onion", &["scallion", "spring onion"][..]),
        ("cilantro", &["coriander leave", "fresh coriander", "chinese parsley"][..]),
        ("chickpea", &["garbanzo bean", "garbanzo"][..]),
        ("eggplant", &["aubergine"][..]),
        ("zucchini", &["courgette"][..]),
        ("arugula", &["rocket"][..]),
        ("bell pepper", &["capsicum", "sweet pepper"][..]),
        ("powdered sugar", &["confectioners sugar", "confectioners' sugar", "icing sugar"][..]),
        ("heavy cream", &["heavy whipping cream", "double cream", "whipping cream"][..]),
        ("baking soda", &["bicarbonate of soda", "bicarb soda", "sodium bicarbonate"][..]),
        ("cornstarch", &["cornflour", "corn starch"][..]),
        ("all-purpose flour", &["all purpose flour", "plain flour", "ap flour"][..]),
        ("ground beef", &["minced beef", "beef mince"][..]),
        ("shrimp", &["prawn"][..]),
    ] {
        for synonym in synonyms {
            m.insert(*synonym, canonical);
        }
    }

    m
});

/// Canonical grouping key for `name`, folding known alternate names
#[must_use]
pub fn canonical_name(name: &str) -> String {
    let normalized = normalize_name(name);
    INGREDIENT_SYNONYMS
        .get(normalized.as_str())
        .map_or(normalized, |canonical| (*canonical).to_owned())
}

struct Contribution {
    recipe: String,
    line: IngredientContribution,
    approximate: bool,
}

impl Contribution {
    const fn quantity(&self) -> Option<f64> {
        self.line.quantity
    }

    fn kind(&self) -> UnitKind {
        self.line.unit.map_or(UnitKind::Count, |u| u.kind())
    }
}

struct Group {
    display_name: String,
    contributions: Vec<Contribution>,
}

struct Bucket {
    kind: UnitKind,
    first_unit: CanonicalUnit,
    total: f64,
    recipes: Vec<String>,
    contributions: Vec<IngredientContribution>,
    approximate: bool,
}

impl Bucket {
    fn add(&mut self, contribution: &Contribution) {
        if !self.recipes.iter().any(|r| *r == contribution.recipe) {
            self.recipes.push(contribution.recipe.clone());
        }
        self.contributions.push(contribution.line.clone());
        self.approximate |= contribution.approximate && contribution.quantity().is_some();
    }
}

fn scale_factor(recipe: &Recipe, options: &AggregateOptions) -> f64 {
    let Some(&target) = options.servings.get(&recipe.id) else {
        return 1.0;
    };
    recipe.scale_factor(target).unwrap_or_else(|| {
        warn!(
            recipe_id = %recipe.id,
            servings = recipe.servings,
            target_servings = target,
            "cannot scale recipe with zero servings, using quantities as written"
        );
        1.0
    })
}

fn collect_groups(recipes: &[Recipe], options: &AggregateOptions) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for recipe in recipes {
        let factor = scale_factor(recipe, options);
        for line in &recipe.ingredient_lines {
            let parsed = parse(line);
            let key = if options.merge_synonyms {
                canonical_name(&parsed.display_name)
            } else {
                normalize_name(&parsed.display_name)
            };
            let slot = *index.entry(key).or_insert_with(|| {
                groups.push(Group {
                    display_name: parsed.display_name.clone(),
                    contributions: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].contributions.push(Contribution {
                recipe: recipe.name.clone(),
                line: IngredientContribution {
                    recipe_id: recipe.id.clone(),
                    original_text: parsed.original_text,
                    quantity: parsed.quantity.map(|q| q * factor),
                    unit: parsed.unit,
                },
                approximate: parsed.approximate,
            });
        }
    }

    groups
}

fn bucket_group(group: &Group) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Vec::new();

    for contribution in &group.contributions {
        let Some(quantity) = contribution.quantity() else {
            continue;
        };
        let kind = contribution.kind();
        let unit = contribution.line.unit.unwrap_or(CanonicalUnit::Count);
        let base = quantity * unit.base_factor();

        if let Some(bucket) = buckets.iter_mut().find(|b| b.kind == kind) {
            bucket.total += base;
        } else {
            buckets.push(Bucket {
                kind,
                first_unit: unit,
                total: base,
                recipes: Vec::new(),
                contributions: Vec::new(),
                approximate: false,
            });
        }
    }

    // Second pass in supply order so provenance stays ordered
    for contribution in &group.contributions {
        let target = if contribution.quantity().is_some() {
            let kind = contribution.kind();
            buckets.iter_mut().find(|b| b.kind == kind)
        } else {
            buckets.first_mut()
        };
        if let Some(bucket) = target {
            bucket.add(contribution);
        }
    }

    buckets
}

fn display_quantity(bucket: &Bucket, system: Option<UnitSystem>) -> (f64, CanonicalUnit) {
    let base_unit = match bucket.kind {
        UnitKind::Volume => CanonicalUnit::Milliliter,
        UnitKind::Weight => CanonicalUnit::Gram,
        UnitKind::Count => return (round_quantity(bucket.total), CanonicalUnit::Count),
    };
    let system = system.unwrap_or_else(|| bucket.first_unit.system());
    best_display_unit(bucket.total, base_unit, Some(system))
}

fn unquantified_item(group: &Group, category: Category) -> ConsolidatedItem {
    let mut recipes: Vec<String> = Vec::new();
    for contribution in &group.contributions {
        if !recipes.contains(&contribution.recipe) {
            recipes.push(contribution.recipe.clone());
        }
    }
    ConsolidatedItem {
        display_name: group.display_name.clone(),
        quantity: None,
        unit: CanonicalUnit::Count,
        category,
        recipes,
        approximate: group.contributions.iter().any(|c| c.approximate),
        in_pantry: None,
        contributions: group.contributions.iter().map(|c| c.line.clone()).collect(),
        conflict_reason: None,
    }
}

fn mismatch_kinds(buckets: &[Bucket]) -> String {
    buckets
        .iter()
        .map(|b| match b.kind {
            UnitKind::Volume => "volume",
            UnitKind::Weight => "weight",
            UnitKind::Count => "count",
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn mismatch_warning(group: &Group, kinds: &str) -> ConsolidationWarning {
    debug!(ingredient = %group.display_name, kinds = %kinds, "split ingredient by unit kind");
    ConsolidationWarning {
        kind: WarningKind::UnitMismatch,
        message: format!(
            "\"{}\" is measured in incompatible units ({kinds}); listed separately",
            group.display_name
        ),
        display_name: group.display_name.clone(),
    }
}

/// Consolidate recipes with explicit options
///
/// Quantities for the same ingredient are summed per unit kind. Volume and
/// weight never merge with each other or with counts; a split group produces a
/// `UnitMismatch` warning. Lines without a quantity join the group's first
/// item, or become a quantity-less item when nothing in the group was measured.
#[must_use]
pub fn aggregate_with(recipes: &[Recipe], options: &AggregateOptions) -> Aggregation {
    let mut aggregation = Aggregation::default();

    for group in collect_groups(recipes, options) {
        let category = classify(&group.display_name);
        let buckets = bucket_group(&group);

        if buckets.is_empty() {
            aggregation.items.push(unquantified_item(&group, category));
            continue;
        }
        let conflict_reason = (buckets.len() > 1).then(|| {
            let kinds = mismatch_kinds(&buckets);
            aggregation.warnings.push(mismatch_warning(&group, &kinds));
            format!("Cannot combine different unit types: {kinds}")
        });

        for bucket in buckets {
            let (quantity, unit) = display_quantity(&bucket, options.display_system);
            aggregation.items.push(ConsolidatedItem {
                display_name: group.display_name.clone(),
                quantity: Some(quantity),
                unit,
                category,
                recipes: bucket.recipes,
                approximate: bucket.approximate,
                in_pantry: None,
                contributions: bucket.contributions,
                conflict_reason: conflict_reason.clone(),
            });
        }
    }

    aggregation
}

/// Consolidate recipes with default options
#[must_use]
pub fn aggregate(recipes: &[Recipe]) -> Vec<ConsolidatedItem> {
    aggregate_with(recipes, &AggregateOptions::default()).items
}
