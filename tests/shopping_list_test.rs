// ABOUTME: Integration tests for shopping-list generation and text export
// ABOUTME: Tests options, ordering, pantry exclusion, summaries, serialization, and rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use heirloom_core::models::Recipe;
use heirloom_shopping::shopping::{
    export_as_text, generate_shopping_list, CanonicalUnit, Category, ShoppingList,
    ShoppingListOptions, UnitSystem,
};

fn cookies_and_cake() -> Vec<Recipe> {
    vec![
        Recipe::new("a", "Cookies", 4, ["2 cups sugar", "1 tsp salt", "2 eggs"]),
        Recipe::new("b", "Cake", 4, ["1 cup sugar", "3 eggs", "1 lemon"]),
    ]
}

// ============================================================================
// Generation
// ============================================================================

#[test]
fn test_sugar_and_salt_example() {
    let recipes = vec![
        Recipe::new("a", "A", 4, ["2 cups sugar", "1 tsp salt"]),
        Recipe::new("b", "B", 4, ["1 cup sugar"]),
    ];

    let list = generate_shopping_list(&recipes, &ShoppingListOptions::default());
    let sugar = list.items.iter().find(|i| i.display_name == "sugar").unwrap();
    assert_eq!(sugar.quantity, Some(3.0));
    assert_eq!(sugar.unit, CanonicalUnit::Cup);
    assert_eq!(sugar.recipes, vec!["A", "B"]);

    let salt = list.items.iter().find(|i| i.display_name == "salt").unwrap();
    assert_eq!(salt.quantity, Some(1.0));
    assert_eq!(salt.category, Category::Pantry);

    let options = ShoppingListOptions {
        exclude_pantry: true,
        ..ShoppingListOptions::default()
    };
    let list = generate_shopping_list(&recipes, &options);
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].display_name, "sugar");
}

#[test]
fn test_exclude_pantry_never_keeps_staples() {
    let recipes = vec![Recipe::new(
        "r",
        "R",
        2,
        ["1 tbsp olive oil", "salt and pepper to taste", "2 tbsp soy sauce", "1 onion"],
    )];
    let options = ShoppingListOptions {
        exclude_pantry: true,
        ..ShoppingListOptions::default()
    };
    let list = generate_shopping_list(&recipes, &options);
    assert!(list.items.iter().all(|i| !i.category.is_pantry_staple()));
    assert_eq!(list.items.len(), 1);
}

#[test]
fn test_grouping_changes_order_not_items() {
    let recipes = cookies_and_cake();
    let grouped = generate_shopping_list(&recipes, &ShoppingListOptions::default());
    let flat = generate_shopping_list(
        &recipes,
        &ShoppingListOptions {
            group_by_category: false,
            ..ShoppingListOptions::default()
        },
    );

    let mut grouped_names: Vec<&str> = grouped.items.iter().map(|i| i.display_name.as_str()).collect();
    let flat_names: Vec<&str> = flat.items.iter().map(|i| i.display_name.as_str()).collect();
    assert_eq!(flat_names, vec!["sugar", "salt", "eggs", "lemon"]);

    assert_eq!(grouped.categories(), vec![
        Category::Produce,
        Category::Dairy,
        Category::Pantry,
        Category::Baking,
    ]);
    grouped_names.sort_unstable();
    let mut sorted_flat = flat_names.clone();
    sorted_flat.sort_unstable();
    assert_eq!(grouped_names, sorted_flat);
}

#[test]
fn test_summary_and_provenance() {
    let list = generate_shopping_list(&cookies_and_cake(), &ShoppingListOptions::default());
    assert_eq!(list.summary.total_items, 4);
    assert_eq!(list.summary.total_recipes, 2);
    assert_eq!(list.summary.pantry_items_used, 0);

    let eggs = list.items_in(Category::Dairy).next().unwrap();
    assert_eq!(eggs.quantity, Some(5.0));
    assert_eq!(eggs.recipes, vec!["Cookies", "Cake"]);

    let summaries = list.recipe_summaries();
    assert_eq!(summaries[0].ingredient_count, 3);
}

#[test]
fn test_servings_and_metric_display() {
    let recipes = vec![Recipe::new("soup", "Soup", 2, ["1 cup broth", "1 lb carrots"])];
    let options = ShoppingListOptions {
        display_system: Some(UnitSystem::Metric),
        ..ShoppingListOptions::default()
    }
    .with_servings("soup", 4);

    let list = generate_shopping_list(&recipes, &options);
    let broth = list.items.iter().find(|i| i.display_name == "broth").unwrap();
    assert_eq!(broth.unit, CanonicalUnit::Milliliter);
    assert_eq!(broth.quantity, Some(473.18));

    let carrots = list.items.iter().find(|i| i.display_name == "carrots").unwrap();
    assert_eq!(carrots.unit, CanonicalUnit::Gram);
    assert_eq!(carrots.quantity, Some(907.18));
}

#[test]
fn test_empty_input_gives_empty_list() {
    let list = generate_shopping_list(&[], &ShoppingListOptions::default());
    assert!(list.is_empty());
    assert_eq!(list.summary.total_recipes, 0);
}

#[test]
fn test_list_serializes_round_trip() {
    let list = generate_shopping_list(&cookies_and_cake(), &ShoppingListOptions::default());
    let json = serde_json::to_string(&list).unwrap();
    assert!(json.contains("\"display_name\":\"sugar\""));
    let back: ShoppingList = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);
}

// ============================================================================
// Text Export
// ============================================================================

#[test]
fn test_export_as_text() {
    let list = generate_shopping_list(&cookies_and_cake(), &ShoppingListOptions::default());
    let text = export_as_text(&list);

    assert!(text.starts_with("Shopping List - "));
    assert!(text.contains("Recipes: Cookies, Cake"));
    assert!(text.contains("## PRODUCE\n[ ] 1 lemon"));
    assert!(text.contains("## DAIRY & EGGS\n[ ] 5 eggs"));
    assert!(text.contains("## BAKING\n[ ] 3 cup sugar"));
    assert!(text.ends_with("Total: 4 items from 2 recipes"));
    assert!(!text.contains("Pantry items used"));
}

#[test]
fn test_export_lists_warnings() {
    let recipes = vec![
        Recipe::new("a", "A", 1, ["2 cups flour"]),
        Recipe::new("b", "B", 1, ["500 g flour"]),
    ];
    let list = generate_shopping_list(&recipes, &ShoppingListOptions::default());
    let text = export_as_text(&list);
    assert!(text.contains("[ ] 2 cup flour"));
    assert!(text.contains("[ ] 500 g flour"));
    assert!(text.contains("Note: \"flour\" is measured in incompatible units"));
}
