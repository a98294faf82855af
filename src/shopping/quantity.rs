// ABOUTME: Leading-quantity parser for ingredient lines (fractions, ranges, spelled numbers)
// ABOUTME: Returns the parsed quantity plus the unparsed remainder; also formats quantities for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::units::round_quantity;

/// How precisely a quantity was written
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Precision {
    /// A single literal amount ("2", "1 1/2")
    Exact,
    /// A range ("2-3"); the quantity value is the midpoint
    Range {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },
    /// An estimate ("about 2", "a few", "2+")
    Approximate,
}

/// Numeric amount parsed from the start of an ingredient line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Amount used for arithmetic
    pub value: f64,
    /// How the amount was written
    pub precision: Precision,
}

impl Quantity {
    /// Exact quantity
    #[must_use]
    pub const fn exact(value: f64) -> Self {
        Self {
            value,
            precision: Precision::Exact,
        }
    }

    /// Approximate quantity
    #[must_use]
    pub const fn approximate(value: f64) -> Self {
        Self {
            value,
            precision: Precision::Approximate,
        }
    }

    /// Range quantity valued at its midpoint
    #[must_use]
    pub fn range(low: f64, high: f64) -> Self {
        Self {
            value: (low + high) / 2.0,
            precision: Precision::Range { low, high },
        }
    }

    /// Whether the amount is an estimate rather than a literal value
    #[must_use]
    pub const fn is_approximate(&self) -> bool {
        !matches!(self.precision, Precision::Exact)
    }
}

const UNICODE_FRACTIONS: [(char, f64); 15] = [
    ('½', 0.5),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('¼', 0.25),
    ('¾', 0.75),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
    ('⅕', 0.2),
    ('⅖', 0.4),
    ('⅗', 0.6),
    ('⅘', 0.8),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
];

/// (value, approximate)
const SPELLED_NUMBERS: [(&str, f64, bool); 20] = [
    ("a", 1.0, false),
    ("an", 1.0, false),
    ("one", 1.0, false),
    ("two", 2.0, false),
    ("three", 3.0, false),
    ("four", 4.0, false),
    ("five", 5.0, false),
    ("six", 6.0, false),
    ("seven", 7.0, false),
    ("eight", 8.0, false),
    ("nine", 9.0, false),
    ("ten", 10.0, false),
    ("eleven", 11.0, false),
    ("twelve", 12.0, false),
    ("dozen", 12.0, false),
    ("couple", 2.0, false),
    ("half", 0.5, false),
    ("quarter", 0.25, false),
    ("few", 3.0, true),
    ("several", 5.0, true),
];

/// Display fractions, checked after rounding to two decimals
const COMMON_FRACTIONS: [(f64, &str); 9] = [
    (0.125, "1/8"),
    (0.25, "1/4"),
    (1.0 / 3.0, "1/3"),
    (0.375, "3/8"),
    (0.5, "1/2"),
    (0.625, "5/8"),
    (2.0 / 3.0, "2/3"),
    (0.75, "3/4"),
    (0.875, "7/8"),
];

const FRACTION_TOLERANCE: f64 = 0.01;

static APPROXIMATE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: about 2, approx. 3, roughly 1/2, ~4
    Regex::new(r"(?i)^(?:(?:about|approximately|approx\.?|roughly|around|circa)\s+|~\s*)(.+)$")
        .ok()
});

static OR_MORE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 1+, 2.5+
    Regex::new(r"^(\d+(?:\.\d+)?)\+\s*(.*)$").ok()
});

static HYPHEN_MIXED_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 1-1/2, 2-3/4
    Regex::new(r"^(\d+)-(\d+)/(\d+)\s*(.*)$").ok()
});

static RANGE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 2-3, 2 – 3, 2 to 3, 2 or 3
    Regex::new(r"(?i)^(\d+(?:\.\d+)?)(?:\s*[-–]\s*|\s+(?:to|or)\s+)(\d+(?:\.\d+)?)\s*(.*)$").ok()
});

static MIXED_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 1 1/2, 2 3/4, 1½, 1 ½
    Regex::new(r"^(\d+)(?:\s+(\d+)/(\d+)|\s*([½⅓⅔¼¾⅛⅜⅝⅞⅕⅖⅗⅘⅙⅚]))\s*(.*)$").ok()
});

static UNICODE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([½⅓⅔¼¾⅛⅜⅝⅞⅕⅖⅗⅘⅙⅚])\s*(.*)$").ok());

static FRACTION_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)\s*(.*)$").ok());

static DECIMAL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d*\.\d+|\d+)\s*(.*)$").ok());

fn captures<'t>(pattern: &LazyLock<Option<Regex>>, text: &'t str) -> Option<Captures<'t>> {
    pattern.as_ref()?.captures(text)
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

fn number(caps: &Captures<'_>, index: usize) -> Option<f64> {
    group(caps, index).parse().ok()
}

fn unicode_fraction(symbol: &str) -> Option<f64> {
    let mut chars = symbol.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    UNICODE_FRACTIONS
        .iter()
        .find(|(c, _)| *c == first)
        .map(|(_, value)| *value)
}

fn fraction(numerator: f64, denominator: f64) -> Option<f64> {
    (denominator.abs() > f64::EPSILON).then(|| numerator / denominator)
}

type Parsed = Option<(Quantity, String)>;

fn try_approximate(text: &str) -> Parsed {
    let caps = captures(&APPROXIMATE_PATTERN, text)?;
    let (inner, remainder) = parse_quantity(group(&caps, 1));
    let inner = inner?;
    Some((Quantity::approximate(inner.value), remainder))
}

fn try_or_more(text: &str) -> Parsed {
    let caps = captures(&OR_MORE_PATTERN, text)?;
    let value = number(&caps, 1)?;
    Some((Quantity::approximate(value), group(&caps, 2).to_owned()))
}

fn try_hyphen_mixed(text: &str) -> Parsed {
    let caps = captures(&HYPHEN_MIXED_PATTERN, text)?;
    let whole = number(&caps, 1)?;
    let part = fraction(number(&caps, 2)?, number(&caps, 3)?)?;
    Some((Quantity::exact(whole + part), group(&caps, 4).to_owned()))
}

fn try_range(text: &str) -> Parsed {
    let caps = captures(&RANGE_PATTERN, text)?;
    let low = number(&caps, 1)?;
    let high = number(&caps, 2)?;
    Some((Quantity::range(low, high), group(&caps, 3).to_owned()))
}

fn try_mixed(text: &str) -> Parsed {
    let caps = captures(&MIXED_PATTERN, text)?;
    let whole = number(&caps, 1)?;
    let part = if caps.get(4).is_some() {
        unicode_fraction(group(&caps, 4))?
    } else {
        fraction(number(&caps, 2)?, number(&caps, 3)?)?
    };
    Some((Quantity::exact(whole + part), group(&caps, 5).to_owned()))
}

fn try_unicode(text: &str) -> Parsed {
    let caps = captures(&UNICODE_PATTERN, text)?;
    let value = unicode_fraction(group(&caps, 1))?;
    Some((Quantity::exact(value), group(&caps, 2).to_owned()))
}

/// `Err(())` means a fraction was written but its denominator is zero
fn try_fraction(text: &str) -> Result<Parsed, ()> {
    let Some(caps) = captures(&FRACTION_PATTERN, text) else {
        return Ok(None);
    };
    let (Some(numerator), Some(denominator)) = (number(&caps, 1), number(&caps, 2)) else {
        return Ok(None);
    };
    let value = fraction(numerator, denominator).ok_or(())?;
    Ok(Some((Quantity::exact(value), group(&caps, 3).to_owned())))
}

fn try_decimal(text: &str) -> Parsed {
    let caps = captures(&DECIMAL_PATTERN, text)?;
    let value = number(&caps, 1)?;
    Some((Quantity::exact(value), group(&caps, 2).to_owned()))
}

fn spelled(word: &str) -> Option<(f64, bool)> {
    let word = word.to_lowercase();
    SPELLED_NUMBERS
        .iter()
        .find(|(w, _, _)| *w == word)
        .map(|(_, value, approximate)| (*value, *approximate))
}

fn drop_leading_of(words: &[&str]) -> String {
    match words.split_first() {
        Some((first, rest)) if first.eq_ignore_ascii_case("of") => rest.join(" "),
        _ => words.join(" "),
    }
}

/// A number word needs something after it, and "and" after it means the words
/// are a name ("half and half")
fn names_an_amount(rest: &[&str]) -> bool {
    rest.first()
        .is_some_and(|word| !word.eq_ignore_ascii_case("and") && *word != "&")
}

fn spelled_quantity(value: f64, approximate: bool, rest: &[&str]) -> Parsed {
    if !names_an_amount(rest) {
        return None;
    }
    let quantity = if approximate {
        Quantity::approximate(value)
    } else {
        Quantity::exact(value)
    };
    Some((quantity, drop_leading_of(rest)))
}

fn try_spelled(text: &str) -> Parsed {
    let words: Vec<&str> = text.split_whitespace().collect();
    let lower: Vec<String> = words.iter().take(4).map(|w| w.to_lowercase()).collect();
    let first = lower.first()?;

    if first == "one" {
        if lower.len() == 4 && lower[1..] == ["and", "a", "half"] {
            return Some((Quantity::exact(1.5), drop_leading_of(&words[4..])));
        }
        if lower.len() >= 3 && lower[1..3] == ["and", "half"] {
            return Some((Quantity::exact(1.5), drop_leading_of(&words[3..])));
        }
    }

    // "a couple", "a few", "a dozen"
    if matches!(first.as_str(), "a" | "an") {
        if let Some((value, approximate)) = words.get(1).and_then(|w| spelled(w)) {
            return spelled_quantity(value, approximate, &words[2..]);
        }
    }

    let (value, approximate) = spelled(first)?;
    spelled_quantity(value, approximate, &words[1..])
}

/// Parse a quantity from the start of `text`
///
/// Strategies are tried in order and the first match wins: approximate prefix,
/// "or more" suffix, hyphenated mixed number ("1-1/2"), range, mixed number, unicode fraction, text fraction,
/// decimal, spelled number. When nothing matches (or a fraction has a zero
/// denominator) the quantity is `None` and the remainder is the trimmed input.
#[must_use]
pub fn parse_quantity(text: &str) -> (Option<Quantity>, String) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (None, String::new());
    }

    let found = try_approximate(trimmed)
        .or_else(|| try_or_more(trimmed))
        .or_else(|| try_hyphen_mixed(trimmed))
        .or_else(|| try_range(trimmed))
        .or_else(|| try_mixed(trimmed))
        .or_else(|| try_unicode(trimmed));

    let found = match found {
        Some(found) => Some(found),
        None => match try_fraction(trimmed) {
            Err(()) => return (None, trimmed.to_owned()),
            Ok(fraction) => fraction
                .or_else(|| try_decimal(trimmed))
                .or_else(|| try_spelled(trimmed)),
        },
    };

    match found {
        Some((quantity, remainder)) => (Some(quantity), remainder.trim().to_owned()),
        None => (None, trimmed.to_owned()),
    }
}

/// Render a quantity for a shopping list
///
/// Values close to a common fraction use it (`1 1/2`, `3/4`); anything else
/// keeps up to two decimals with trailing zeros removed.
#[must_use]
pub fn format_quantity(value: f64) -> String {
    let rounded = round_quantity(value);
    let whole = rounded.trunc();
    let part = rounded - whole;

    if part < FRACTION_TOLERANCE {
        return format!("{whole:.0}");
    }
    if 1.0 - part < FRACTION_TOLERANCE {
        return format!("{:.0}", whole + 1.0);
    }

    if let Some((_, label)) = COMMON_FRACTIONS
        .iter()
        .find(|(fraction, _)| (part - fraction).abs() < FRACTION_TOLERANCE)
    {
        return if whole < 1.0 {
            (*label).to_owned()
        } else {
            format!("{whole:.0} {label}")
        };
    }

    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(text: &str) -> f64 {
        parse_quantity(text).0.map(|q| q.value).unwrap()
    }

    #[test]
    fn test_parse_numbers() {
        assert!((value_of("2 cups flour") - 2.0).abs() < f64::EPSILON);
        assert!((value_of("1.5 cups") - 1.5).abs() < f64::EPSILON);
        assert!((value_of(".5 tsp") - 0.5).abs() < f64::EPSILON);
        assert!((value_of("3/4 cup") - 0.75).abs() < f64::EPSILON);
        assert!((value_of("1 1/2 cups sugar") - 1.5).abs() < f64::EPSILON);
        assert!((value_of("1½ cups") - 1.5).abs() < f64::EPSILON);
        assert!((value_of("¼ tsp") - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_remainder() {
        let (quantity, remainder) = parse_quantity("1 1/2 cups sugar");
        assert_eq!(quantity.map(|q| q.precision), Some(Precision::Exact));
        assert_eq!(remainder, "cups sugar");

        let (_, remainder) = parse_quantity("2cups milk");
        assert_eq!(remainder, "cups milk");
    }

    #[test]
    fn test_ranges_use_midpoint() {
        let (quantity, remainder) = parse_quantity("2-3 cloves garlic");
        let quantity = quantity.unwrap();
        assert!((quantity.value - 2.5).abs() < f64::EPSILON);
        assert_eq!(quantity.precision, Precision::Range { low: 2.0, high: 3.0 });
        assert!(quantity.is_approximate());
        assert_eq!(remainder, "cloves garlic");

        assert!((value_of("1 to 2 tbsp oil") - 1.5).abs() < f64::EPSILON);
        assert!((value_of("2 or 3 eggs") - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_approximate_forms() {
        let (quantity, remainder) = parse_quantity("about 2 cups broth");
        let quantity = quantity.unwrap();
        assert_eq!(quantity.precision, Precision::Approximate);
        assert!((quantity.value - 2.0).abs() < f64::EPSILON);
        assert_eq!(remainder, "cups broth");

        assert_eq!(
            parse_quantity("~3 apples").0.map(|q| q.precision),
            Some(Precision::Approximate)
        );
        assert_eq!(
            parse_quantity("2+ tbsp butter").0.map(|q| q.precision),
            Some(Precision::Approximate)
        );
    }

    #[test]
    fn test_spelled_numbers() {
        assert!((value_of("two eggs") - 2.0).abs() < f64::EPSILON);
        assert!((value_of("a dozen eggs") - 12.0).abs() < f64::EPSILON);
        assert!((value_of("one and a half cups milk") - 1.5).abs() < f64::EPSILON);

        let (quantity, remainder) = parse_quantity("a couple of carrots");
        assert!((quantity.unwrap().value - 2.0).abs() < f64::EPSILON);
        assert_eq!(remainder, "carrots");

        let (quantity, _) = parse_quantity("a few sprigs thyme");
        assert!(quantity.unwrap().is_approximate());

        assert!((value_of("one and half cups milk") - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_number_words_inside_names() {
        let (quantity, remainder) = parse_quantity("half and half");
        assert!(quantity.is_none());
        assert_eq!(remainder, "half and half");

        let (quantity, remainder) = parse_quantity("one and halfway mark");
        assert!(quantity.is_none());
        assert_eq!(remainder, "one and halfway mark");

        assert!(parse_quantity("a").0.is_none());
        assert!((value_of("half lemon") - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hyphenated_mixed_number() {
        let (quantity, remainder) = parse_quantity("1-1/2 cups flour");
        let quantity = quantity.unwrap();
        assert!((quantity.value - 1.5).abs() < f64::EPSILON);
        assert_eq!(quantity.precision, Precision::Exact);
        assert_eq!(remainder, "cups flour");

        assert!((value_of("2-3 cups flour") - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_quantity() {
        let (quantity, remainder) = parse_quantity("  salt to taste ");
        assert!(quantity.is_none());
        assert_eq!(remainder, "salt to taste");

        let (quantity, remainder) = parse_quantity("1/0 cup water");
        assert!(quantity.is_none());
        assert_eq!(remainder, "1/0 cup water");

        assert!(parse_quantity("").0.is_none());
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(1.5), "1 1/2");
        assert_eq!(format_quantity(0.75), "3/4");
        assert_eq!(format_quantity(1.0 / 3.0), "1/3");
        assert_eq!(format_quantity(236.59), "236.59");
        assert_eq!(format_quantity(0.1), "0.1");
        assert_eq!(format_quantity(1.999), "2");
    }
}
