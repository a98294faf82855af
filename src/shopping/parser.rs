// ABOUTME: Ingredient-line parser splitting free text into quantity, unit, and display name
// ABOUTME: Fail-open: unparseable lines are kept whole so nothing drops off the shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::quantity::parse_quantity;
use super::units::{extract_unit, CanonicalUnit};

/// One ingredient line after parsing
///
/// `quantity` and `unit` are absent for lines like "salt to taste". Preparation
/// notes are not kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Leading amount, if one was written
    pub quantity: Option<f64>,
    /// Recognized unit following the amount
    pub unit: Option<CanonicalUnit>,
    /// Lowercase ingredient name without preparation notes
    pub display_name: String,
    /// The line exactly as supplied
    pub original_text: String,
    /// Range, estimate, "or more", or informal amount ("a pinch")
    #[serde(default)]
    pub approximate: bool,
}

impl ParsedIngredient {
    /// Fail-open result: the whole line becomes the name
    #[must_use]
    pub fn unparsed(line: &str) -> Self {
        Self {
            quantity: None,
            unit: None,
            display_name: line.trim().to_owned(),
            original_text: line.to_owned(),
            approximate: false,
        }
    }

    /// Whether a numeric amount was found
    #[must_use]
    pub const fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }
}

/// Words describing preparation or size; dropped from names
const PREPARATION_WORDS: &[&str] = &[
    "chopped",
    "diced",
    "minced",
    "sliced",
    "grated",
    "shredded",
    "melted",
    "softened",
    "sifted",
    "peeled",
    "cubed",
    "halved",
    "quartered",
    "beaten",
    "crushed",
    "drained",
    "rinsed",
    "packed",
    "large",
    "medium",
    "small",
    "finely",
    "roughly",
    "coarsely",
    "thinly",
    "freshly",
];

static CONTAINER_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 1 (14.5 oz) can, 2 (8 ounce) packages
    Regex::new(
        r"(?i)\b(\d+)\s*\(\s*(\d+(?:\.\d+)?)\s*(oz|ounces?|lbs?|pounds?|g|grams?|kg|ml)\s*\)\s*(?:cans?|jars?|packages?|containers?|box(?:es)?|bags?|bottles?)\b",
    )
    .ok()
});

static PACKAGE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: one 8-ounce package, a 16 oz jar
    Regex::new(
        r"(?i)(?:\b(?:one|an?)\s+)?\b(\d+(?:\.\d+)?)\s*-?\s*(ounces?|oz|pounds?|lbs?|grams?|g|kg)\s*-?\s*(?:packages?|containers?|box(?:es)?|jars?|cans?|bags?)\b",
    )
    .ok()
});

static PARENTHETICAL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)?").ok());

static INFORMAL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: a pinch of, 2 dashes, a handful of, few sprigs
    Regex::new(
        r"(?i)^(?:(?:a|an|one|a few|a couple|few|several|\d+(?:[./]\d+)?)\s+)?(?:pinch(?:es)?|dash(?:es)?|splash(?:es)?|handfuls?|sprigs?)\b\s*(?:of\s+)?",
    )
    .ok()
});

static TRAILING_PHRASE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: to taste, or as needed, for garnish (and anything after)
    Regex::new(
        r"(?i)\s*\b(?:(?:or|and)\s+)?(?:to taste|as needed|for serving|for garnish|optional)\b.*$",
    )
    .ok()
});

fn replace_all(pattern: &LazyLock<Option<Regex>>, text: &str, replacement: &str) -> String {
    pattern.as_ref().map_or_else(
        || text.to_owned(),
        |re| re.replace_all(text, replacement).into_owned(),
    )
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// "2 (14.5 oz) cans" becomes "29 oz"
fn container_total(caps: &Captures<'_>) -> String {
    let count: f64 = caps[1].parse().unwrap_or(1.0);
    let size: f64 = caps[2].parse().unwrap_or(0.0);
    format!("{} {}", count * size, &caps[3])
}

/// Normalize container sizes, drop notes, and report whether an informal amount was used
fn preprocess(line: &str) -> (String, bool) {
    let mut text = CONTAINER_PATTERN.as_ref().map_or_else(
        || line.to_owned(),
        |re| re.replace_all(line, container_total).into_owned(),
    );
    text = replace_all(&PACKAGE_PATTERN, &text, "$1 $2");
    text = replace_all(&PARENTHETICAL_PATTERN, &text, " ");

    if let Some((before_comma, _)) = text.split_once(',') {
        text = before_comma.to_owned();
    }

    text = replace_all(&TRAILING_PHRASE_PATTERN, &text, "");
    text = collapse_whitespace(&text);

    let informal = INFORMAL_PATTERN
        .as_ref()
        .and_then(|re| re.find(&text))
        .filter(|m| !m.as_str().is_empty())
        .map(|m| m.end());

    match informal {
        Some(end) => (text[end..].trim().to_owned(), true),
        None => (text, false),
    }
}

fn clean_name(text: &str) -> String {
    let name = text
        .split_whitespace()
        .filter(|word| {
            let bare = word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
            !PREPARATION_WORDS.contains(&bare.as_str())
        })
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let name = name.strip_prefix("of ").unwrap_or(&name);
    name.trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | ';' | ':' | '-'))
        .to_owned()
}

/// Parse one ingredient line
///
/// Never fails. When no name survives cleanup the whole trimmed line is used as
/// the name with no quantity or unit.
#[must_use]
pub fn parse(line: &str) -> ParsedIngredient {
    if line.trim().is_empty() {
        return ParsedIngredient::unparsed(line);
    }

    let (text, informal) = preprocess(line);

    let (quantity, rest) = if informal {
        (None, text)
    } else {
        parse_quantity(&text)
    };

    let (unit, rest) = match quantity.as_ref().and_then(|_| extract_unit(&rest)) {
        Some((unit, remainder)) => (Some(unit), remainder),
        None => (None, rest),
    };

    let display_name = clean_name(&rest);
    if display_name.is_empty() {
        debug!(line = %line, "ingredient line kept unparsed");
        return ParsedIngredient::unparsed(line);
    }

    ParsedIngredient {
        quantity: quantity.map(|q| q.value),
        unit,
        display_name,
        original_text: line.to_owned(),
        approximate: informal || quantity.is_some_and(|q| q.is_approximate()),
    }
}

/// Parse every line in order
#[must_use]
pub fn parse_many<S: AsRef<str>>(lines: &[S]) -> Vec<ParsedIngredient> {
    lines.iter().map(|line| parse(line.as_ref())).collect()
}
