// ABOUTME: Integration tests for unit normalization
// ABOUTME: Tests synonym lookup, conversion between units, and display-unit selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use heirloom_shopping::shopping::units::{
    best_display_unit, convert, extract_unit, parse_unit, CanonicalUnit, UnitKind, UnitSystem,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// ============================================================================
// Synonym Lookup
// ============================================================================

#[test]
fn test_every_unit_is_reachable_by_name() {
    for (text, unit) in [
        ("milliliters", CanonicalUnit::Milliliter),
        ("litre", CanonicalUnit::Liter),
        ("tsp.", CanonicalUnit::Teaspoon),
        ("Tablespoons", CanonicalUnit::Tablespoon),
        ("cup", CanonicalUnit::Cup),
        ("fluid ounces", CanonicalUnit::FluidOunce),
        ("grams", CanonicalUnit::Gram),
        ("kilo", CanonicalUnit::Kilogram),
        ("oz", CanonicalUnit::Ounce),
        ("pounds", CanonicalUnit::Pound),
        ("pieces", CanonicalUnit::Count),
    ] {
        assert_eq!(parse_unit(text), Some(unit), "{text}");
    }
}

#[test]
fn test_unknown_units() {
    assert_eq!(parse_unit("pinch"), None);
    assert_eq!(parse_unit("bunch"), None);
    assert_eq!(parse_unit("cloves"), None);
}

#[test]
fn test_extract_two_word_unit_first() {
    let (unit, rest) = extract_unit("fl oz cream").unwrap();
    assert_eq!(unit, CanonicalUnit::FluidOunce);
    assert_eq!(rest, "cream");

    let (unit, rest) = extract_unit("oz cream cheese").unwrap();
    assert_eq!(unit, CanonicalUnit::Ounce);
    assert_eq!(rest, "cream cheese");

    let (unit, rest) = extract_unit("cups of flour").unwrap();
    assert_eq!(unit, CanonicalUnit::Cup);
    assert_eq!(rest, "flour");

    assert!(extract_unit("onions").is_none());
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn test_convert_within_kind() {
    let ml = convert(1.0, CanonicalUnit::Cup, CanonicalUnit::Milliliter).unwrap();
    assert!(close(ml, 236.588_24));
    let tbsp = convert(3.0, CanonicalUnit::Teaspoon, CanonicalUnit::Tablespoon).unwrap();
    assert!((tbsp - 1.0).abs() < 1e-3);
    assert!(close(convert(2.0, CanonicalUnit::Kilogram, CanonicalUnit::Gram).unwrap(), 2000.0));
    assert!(close(convert(4.0, CanonicalUnit::Count, CanonicalUnit::Count).unwrap(), 4.0));
}

#[test]
fn test_convert_refuses_across_kinds() {
    assert_eq!(convert(1.0, CanonicalUnit::Cup, CanonicalUnit::Gram), None);
    assert_eq!(convert(1.0, CanonicalUnit::Pound, CanonicalUnit::Count), None);
    assert_eq!(convert(1.0, CanonicalUnit::Count, CanonicalUnit::Milliliter), None);
}

#[test]
fn test_conversion_round_trips_for_every_unit_pair() {
    for from in CanonicalUnit::ALL {
        for to in CanonicalUnit::ALL {
            for quantity in [0.001, 1.0, 3.7, 12_345.0] {
                let converted = convert(quantity, from, to);
                if from.kind() != to.kind() {
                    assert_eq!(converted, None, "{from:?} -> {to:?}");
                    continue;
                }
                let back = convert(converted.unwrap(), to, from).unwrap();
                assert!(
                    (back - quantity).abs() <= quantity * 1e-9,
                    "{quantity} {from:?} -> {to:?} -> {back}"
                );
            }
        }
    }
}

#[test]
fn test_unit_kinds_and_systems() {
    assert_eq!(CanonicalUnit::FluidOunce.kind(), UnitKind::Volume);
    assert_eq!(CanonicalUnit::Ounce.kind(), UnitKind::Weight);
    assert_eq!(CanonicalUnit::Liter.system(), UnitSystem::Metric);
    assert_eq!(CanonicalUnit::Count.system(), UnitSystem::Universal);
}

// ============================================================================
// Display Units
// ============================================================================

#[test]
fn test_display_prefers_largest_unit_at_least_one() {
    assert_eq!(
        best_display_unit(32.0, CanonicalUnit::Tablespoon, None),
        (2.0, CanonicalUnit::Cup)
    );
    assert_eq!(
        best_display_unit(1500.0, CanonicalUnit::Gram, None),
        (1.5, CanonicalUnit::Kilogram)
    );
    assert_eq!(
        best_display_unit(0.5, CanonicalUnit::Teaspoon, None),
        (0.5, CanonicalUnit::Teaspoon)
    );
}

#[test]
fn test_display_in_requested_system() {
    assert_eq!(
        best_display_unit(500.0, CanonicalUnit::Milliliter, Some(UnitSystem::Imperial)),
        (2.11, CanonicalUnit::Cup)
    );
    assert_eq!(
        best_display_unit(1.0, CanonicalUnit::Cup, Some(UnitSystem::Metric)),
        (236.59, CanonicalUnit::Milliliter)
    );
    assert_eq!(
        best_display_unit(6.0, CanonicalUnit::Count, Some(UnitSystem::Metric)),
        (6.0, CanonicalUnit::Count)
    );
}

#[test]
fn test_fluid_ounce_is_never_a_display_unit() {
    for ml in [10.0, 30.0, 60.0, 200.0, 5000.0] {
        let (_, unit) =
            best_display_unit(ml, CanonicalUnit::Milliliter, Some(UnitSystem::Imperial));
        assert_ne!(unit, CanonicalUnit::FluidOunce);
    }
}

#[test]
fn test_unit_system_parsing() {
    assert_eq!(UnitSystem::parse("US"), Some(UnitSystem::Imperial));
    assert_eq!(UnitSystem::parse("metric"), Some(UnitSystem::Metric));
    assert_eq!(UnitSystem::parse("universal"), None);
    assert_eq!(UnitSystem::from_str_or_default("klingon"), UnitSystem::Imperial);
}
