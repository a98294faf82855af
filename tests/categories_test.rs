// ABOUTME: Integration tests for grocery category classification
// ABOUTME: Tests keyword matching, plural tolerance, longest-match precedence, and ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use heirloom_shopping::shopping::categories::{classify, Category};

#[test]
fn test_each_category_has_a_keyword() {
    for (name, category) in [
        ("carrots", Category::Produce),
        ("chicken thighs", Category::Meat),
        ("whole milk", Category::Dairy),
        ("kosher salt", Category::Pantry),
        ("baking powder", Category::Baking),
        ("smoked paprika", Category::Spices),
        ("frozen peas", Category::Frozen),
        ("tofu", Category::Other),
    ] {
        assert_eq!(classify(name), category, "{name}");
    }
}

#[test]
fn test_matching_is_whole_word() {
    // "ham" must not match inside "graham"
    assert_eq!(classify("graham crackers"), Category::Other);
    // "oil" must not match inside "boiled"
    assert_eq!(classify("boiled peanuts"), Category::Other);
}

#[test]
fn test_plural_forms_match() {
    assert_eq!(classify("tomatoes"), Category::Produce);
    assert_eq!(classify("lemons"), Category::Produce);
    assert_eq!(classify("shrimps"), Category::Meat);
}

#[test]
fn test_classification_is_case_insensitive() {
    assert_eq!(classify("Olive Oil"), Category::Pantry);
    assert_eq!(classify("SALT"), Category::Pantry);
}

#[test]
fn test_salt_and_pepper_is_a_pantry_staple() {
    assert_eq!(classify("salt and pepper"), Category::Pantry);
    assert!(classify("salt and pepper").is_pantry_staple());
    assert!(!classify("butter").is_pantry_staple());
}

#[test]
fn test_display_order_matches_ord() {
    let mut sorted = Category::ORDER.to_vec();
    sorted.sort();
    assert_eq!(sorted, Category::ORDER.to_vec());
    assert_eq!(Category::ORDER.first(), Some(&Category::Produce));
    assert_eq!(Category::ORDER.last(), Some(&Category::Other));
}

#[test]
fn test_labels() {
    assert_eq!(Category::Dairy.label(), "Dairy & Eggs");
    assert_eq!(Category::Meat.as_str(), "meat");
    assert_eq!(Category::Frozen.to_string(), "frozen");
    assert!(!Category::Spices.aisle_hint().is_empty());
}
