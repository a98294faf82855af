// ABOUTME: Unit normalization for recipe ingredients (synonym lookup, conversion, display choice)
// ABOUTME: Volume converts through milliliters, weight through grams; count never converts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::LazyLock;

use heirloom_core::constants::list_defaults::{DISPLAY_EPSILON, QUANTITY_DECIMALS};
use heirloom_core::constants::units::{
    GRAMS_PER_GRAM, GRAMS_PER_KG, GRAMS_PER_LB, GRAMS_PER_OZ, ML_PER_CUP, ML_PER_FL_OZ,
    ML_PER_LITER, ML_PER_ML, ML_PER_TBSP, ML_PER_TSP,
};
use serde::{Deserialize, Serialize};

/// What a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Liquid or dry volume, base unit milliliters
    Volume,
    /// Mass, base unit grams
    Weight,
    /// Whole items ("3 eggs")
    Count,
}

/// Measurement system a unit belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// US customary units (cups, ounces, pounds)
    #[default]
    Imperial,
    /// Metric units (milliliters, grams)
    Metric,
    /// System-independent (counts)
    Universal,
}

impl UnitSystem {
    /// Parse a display-system preference
    ///
    /// Accepts `imperial`, `us`, and `metric` (case-insensitive). `Universal`
    /// describes counts and is not a valid preference.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "imperial" | "us" => Some(Self::Imperial),
            "metric" => Some(Self::Metric),
            _ => None,
        }
    }

    /// Parse a display-system preference, falling back to imperial
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    /// Lowercase name as used in configuration
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Imperial => "imperial",
            Self::Metric => "metric",
            Self::Universal => "universal",
        }
    }
}

impl Display for UnitSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Normalized measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalUnit {
    /// Milliliters (metric volume, base)
    Milliliter,
    /// Liters
    Liter,
    /// US teaspoons
    Teaspoon,
    /// US tablespoons (3 tsp)
    Tablespoon,
    /// US cups (16 tbsp)
    Cup,
    /// US fluid ounces (2 tbsp)
    FluidOunce,
    /// Grams (metric weight, base)
    Gram,
    /// Kilograms
    Kilogram,
    /// Avoirdupois ounces
    Ounce,
    /// Pounds
    Pound,
    /// Whole items
    Count,
}

impl CanonicalUnit {
    /// Every unit, volume first then weight then count
    pub const ALL: [Self; 11] = [
        Self::Milliliter,
        Self::Liter,
        Self::Teaspoon,
        Self::Tablespoon,
        Self::Cup,
        Self::FluidOunce,
        Self::Gram,
        Self::Kilogram,
        Self::Ounce,
        Self::Pound,
        Self::Count,
    ];

    /// What this unit measures
    #[must_use]
    pub const fn kind(&self) -> UnitKind {
        match self {
            Self::Milliliter
            | Self::Liter
            | Self::Teaspoon
            | Self::Tablespoon
            | Self::Cup
            | Self::FluidOunce => UnitKind::Volume,
            Self::Gram | Self::Kilogram | Self::Ounce | Self::Pound => UnitKind::Weight,
            Self::Count => UnitKind::Count,
        }
    }

    /// Measurement system of this unit
    #[must_use]
    pub const fn system(&self) -> UnitSystem {
        match self {
            Self::Milliliter | Self::Liter | Self::Gram | Self::Kilogram => UnitSystem::Metric,
            Self::Teaspoon
            | Self::Tablespoon
            | Self::Cup
            | Self::FluidOunce
            | Self::Ounce
            | Self::Pound => UnitSystem::Imperial,
            Self::Count => UnitSystem::Universal,
        }
    }

    /// Multiplier to the base unit of this kind (ml, g, or 1 for counts)
    #[must_use]
    pub const fn base_factor(&self) -> f64 {
        match self {
            Self::Milliliter => ML_PER_ML,
            Self::Liter => ML_PER_LITER,
            Self::Teaspoon => ML_PER_TSP,
            Self::Tablespoon => ML_PER_TBSP,
            Self::Cup => ML_PER_CUP,
            Self::FluidOunce => ML_PER_FL_OZ,
            Self::Gram => GRAMS_PER_GRAM,
            Self::Kilogram => GRAMS_PER_KG,
            Self::Ounce => GRAMS_PER_OZ,
            Self::Pound => GRAMS_PER_LB,
            Self::Count => 1.0,
        }
    }

    /// Get the abbreviation for display (empty for counts)
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Milliliter => "ml",
            Self::Liter => "L",
            Self::Teaspoon => "tsp",
            Self::Tablespoon => "tbsp",
            Self::Cup => "cup",
            Self::FluidOunce => "fl oz",
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Ounce => "oz",
            Self::Pound => "lb",
            Self::Count => "",
        }
    }

    /// Whether quantities in `self` and `other` can be converted into each other
    #[must_use]
    pub fn is_compatible(&self, other: Self) -> bool {
        self.kind() == other.kind()
    }
}

impl Display for CanonicalUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.abbreviation())
    }
}

/// Single-letter abbreviations, matched case-sensitively (T is tablespoon, t is teaspoon)
static SINGLE_LETTER_UNITS: LazyLock<HashMap<&'static str, CanonicalUnit>> =
    LazyLock::new(|| {
        HashMap::from([
            ("T", CanonicalUnit::Tablespoon),
            ("t", CanonicalUnit::Teaspoon),
            ("c", CanonicalUnit::Cup),
            ("C", CanonicalUnit::Cup),
            ("l", CanonicalUnit::Liter),
            ("L", CanonicalUnit::Liter),
            ("g", CanonicalUnit::Gram),
            ("G", CanonicalUnit::Gram),
        ])
    });

/// Unit synonyms, lowercase with periods removed
static UNIT_SYNONYMS: LazyLock<HashMap<&'static str, CanonicalUnit>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // === Volume ===
    for word in [
        "ml", "mls", "milliliter", "milliliters", "millilitre", "millilitres",
    ] {
        m.insert(word, CanonicalUnit::Milliliter);
    }
    for word in ["liter", "liters", "litre", "litres", "ltr", "lt"] {
        m.insert(word, CanonicalUnit::Liter);
    }
    for word in ["tsp", "tsps", "tspn", "teaspoon", "teaspoons"] {
        m.insert(word, CanonicalUnit::Teaspoon);
    }
    for word in [
        "tbsp",
        "tbsps",
        "tbs",
        "tbl",
        "tbls",
        "tblsp",
        "tablespoon",
        "tablespoons",
    ] {
        m.insert(word, CanonicalUnit::Tablespoon);
    }
    for word in ["cup", "cups"] {
        m.insert(word, CanonicalUnit::Cup);
    }
    for word in [
        "fl oz",
        "fl-oz",
        "floz",
        "fluid ounce",
        "fluid ounces",
        "fl ounce",
        "fl ounces",
    ] {
        m.insert(word, CanonicalUnit::FluidOunce);
    }

    // === Weight ===
    for word in ["gr", "gram", "grams", "gramme", "grammes"] {
        m.insert(word, CanonicalUnit::Gram);
    }
    for word in ["kg", "kgs", "kilogram", "kilograms", "kilo", "kilos"] {
        m.insert(word, CanonicalUnit::Kilogram);
    }
    for word in ["oz", "ozs", "ounce", "ounces"] {
        m.insert(word, CanonicalUnit::Ounce);
    }
    for word in ["lb", "lbs", "pound", "pounds"] {
        m.insert(word, CanonicalUnit::Pound);
    }

    // === Count ===
    for word in ["each", "ea", "piece", "pieces", "pc", "pcs", "whole"] {
        m.insert(word, CanonicalUnit::Count);
    }

    m
});

/// Resolve a free-text unit token to its canonical unit
///
/// Matching is case-insensitive except for single letters. A trailing period is
/// ignored (`"tbsp."`). Unknown tokens return `None`; callers treat the
/// ingredient as unit-less.
#[must_use]
pub fn parse_unit(text: &str) -> Option<CanonicalUnit> {
    let trimmed = text.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.chars().count() == 1 {
        return SINGLE_LETTER_UNITS.get(trimmed).copied();
    }

    let normalized = trimmed
        .to_lowercase()
        .replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    UNIT_SYNONYMS.get(normalized.as_str()).copied()
}

/// Split a leading unit off `text`
///
/// Two-word units ("fl oz", "fluid ounces") are tried before one-word units. A
/// connecting "of" after the unit is dropped, so `"cups of flour"` yields
/// `(Cup, "flour")`.
#[must_use]
pub fn extract_unit(text: &str) -> Option<(CanonicalUnit, String)> {
    let words: Vec<&str> = text.split_whitespace().collect();

    for word_count in (1..=words.len().min(2)).rev() {
        let candidate = words[..word_count].join(" ");
        let Some(unit) = parse_unit(&candidate) else {
            continue;
        };

        let mut rest = &words[word_count..];
        if rest.first().is_some_and(|w| w.eq_ignore_ascii_case("of")) {
            rest = &rest[1..];
        }
        return Some((unit, rest.join(" ")));
    }

    None
}

/// Convert `quantity` between two units of the same kind
///
/// Returns `None` when the kinds differ. Ingredient density is unknown, so
/// volume and weight never convert into each other.
#[must_use]
pub fn convert(quantity: f64, from: CanonicalUnit, to: CanonicalUnit) -> Option<f64> {
    if from == to {
        return Some(quantity);
    }
    if !from.is_compatible(to) {
        return None;
    }
    Some(quantity * from.base_factor() / to.base_factor())
}

/// Round a quantity to the number of decimals kept on shopping-list items
#[must_use]
pub fn round_quantity(value: f64) -> f64 {
    let scale = 10_f64.powi(QUANTITY_DECIMALS);
    (value * scale).round() / scale
}

/// Choose the unit that reads best for `quantity` expressed in `unit`
///
/// Candidates are the units of the same kind in `system` (or in the unit's own
/// system when `None`). The largest candidate that keeps the quantity at or
/// above 1 wins ("2 cup" rather than "32 tbsp"); when none does, the smallest
/// candidate is used. Fluid ounces are never picked. Counts pass through.
#[must_use]
pub fn best_display_unit(
    quantity: f64,
    unit: CanonicalUnit,
    system: Option<UnitSystem>,
) -> (f64, CanonicalUnit) {
    if unit.kind() == UnitKind::Count {
        return (round_quantity(quantity), unit);
    }

    let target = match system {
        Some(UnitSystem::Universal) | None => unit.system(),
        Some(requested) => requested,
    };

    let mut candidates: Vec<CanonicalUnit> = CanonicalUnit::ALL
        .into_iter()
        .filter(|c| {
            c.kind() == unit.kind() && c.system() == target && *c != CanonicalUnit::FluidOunce
        })
        .collect();
    candidates.sort_by(|a, b| b.base_factor().total_cmp(&a.base_factor()));

    let base = quantity * unit.base_factor();
    for candidate in &candidates {
        let converted = base / candidate.base_factor();
        if converted >= 1.0 - DISPLAY_EPSILON {
            return (round_quantity(converted), *candidate);
        }
    }

    candidates.last().map_or((round_quantity(quantity), unit), |smallest| {
        (round_quantity(base / smallest.base_factor()), *smallest)
    })
}
