// ABOUTME: Plain-text rendering of shopping-list items and whole lists
// ABOUTME: Checkbox lines grouped under category headings with pantry notes and totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

use std::fmt::Write;

use super::aggregator::ConsolidatedItem;
use super::builder::ShoppingList;
use super::quantity::format_quantity;
use super::units::UnitKind;

fn amount(quantity: f64, item: &ConsolidatedItem) -> String {
    let number = format_quantity(quantity);
    if item.kind() == UnitKind::Count {
        number
    } else {
        format!("{number} {}", item.unit)
    }
}

/// Render one item ("3 cup sugar", "~2 cloves garlic", "salt")
#[must_use]
pub fn format_item(item: &ConsolidatedItem) -> String {
    match item.quantity {
        Some(quantity) => {
            let prefix = if item.approximate { "~" } else { "" };
            format!("{prefix}{} {}", amount(quantity, item), item.display_name)
        }
        None => item.display_name.clone(),
    }
}

/// Render a list as checkbox text
///
/// Items are grouped under `## LABEL` headings in the order categories first
/// appear in the list. Items partly covered by the pantry note what is already
/// on hand.
#[must_use]
pub fn export_as_text(list: &ShoppingList) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Shopping List - {}",
        list.generated_at.format("%Y-%m-%d")
    );
    let names: Vec<&str> = list.recipes.iter().map(|r| r.name.as_str()).collect();
    let _ = writeln!(out, "Recipes: {}", names.join(", "));
    out.push('\n');

    for category in list.categories() {
        let _ = writeln!(out, "## {}", category.label().to_uppercase());
        for item in list.items_in(category) {
            let pantry = item
                .in_pantry
                .filter(|have| *have > 0.0)
                .map(|have| format!(" (have {})", amount(have, item)))
                .unwrap_or_default();
            let _ = writeln!(out, "[ ] {}{pantry}", format_item(item));
        }
        out.push('\n');
    }

    for warning in &list.warnings {
        let _ = writeln!(out, "Note: {}", warning.message);
    }
    if !list.warnings.is_empty() {
        out.push('\n');
    }

    let _ = write!(
        out,
        "Total: {} items from {} recipes",
        list.summary.total_items, list.summary.total_recipes
    );
    if list.summary.pantry_items_used > 0 {
        let _ = write!(
            out,
            "\nPantry items used: {}",
            list.summary.pantry_items_used
        );
    }

    out
}
