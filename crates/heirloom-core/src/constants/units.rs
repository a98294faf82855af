// ABOUTME: Conversion factors from recipe units to their base unit
// ABOUTME: Volume factors are milliliters, weight factors are grams (US customary values)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

/// Milliliters per milliliter
pub const ML_PER_ML: f64 = 1.0;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Milliliters per US teaspoon
pub const ML_PER_TSP: f64 = 4.928_92;
/// Milliliters per US tablespoon (3 tsp)
pub const ML_PER_TBSP: f64 = 14.786_76;
/// Milliliters per US fluid ounce (2 tbsp)
pub const ML_PER_FL_OZ: f64 = 29.573_53;
/// Milliliters per US cup (8 fl oz)
pub const ML_PER_CUP: f64 = 236.588_24;

/// Grams per gram
pub const GRAMS_PER_GRAM: f64 = 1.0;
/// Grams per kilogram
pub const GRAMS_PER_KG: f64 = 1000.0;
/// Grams per avoirdupois ounce
pub const GRAMS_PER_OZ: f64 = 28.349_523;
/// Grams per pound (16 oz)
pub const GRAMS_PER_LB: f64 = 453.592_37;
