// ABOUTME: Grocery-aisle classifier for consolidated ingredient names
// ABOUTME: Whole-word keyword table where the longest matching keyword decides the category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Heirloom Contributors

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Grocery store section an ingredient is bought in
///
/// Declaration order is the display order of a grouped list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Fresh fruit, vegetables, and herbs
    Produce,
    /// Meat, poultry, and seafood
    Meat,
    /// Milk, cheese, butter, and eggs
    Dairy,
    /// Shelf-stable staples (salt, oils, grains, canned goods)
    Pantry,
    /// Flour, sugar, leaveners, and chocolate
    Baking,
    /// Dried spices and seasonings
    Spices,
    /// Freezer aisle
    Frozen,
    /// Anything the keyword table does not know
    Other,
}

impl Category {
    /// Display order for grouped shopping lists
    pub const ORDER: [Self; 8] = [
        Self::Produce,
        Self::Meat,
        Self::Dairy,
        Self::Pantry,
        Self::Baking,
        Self::Spices,
        Self::Frozen,
        Self::Other,
    ];

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Produce => "produce",
            Self::Meat => "meat",
            Self::Dairy => "dairy",
            Self::Pantry => "pantry",
            Self::Baking => "baking",
            Self::Spices => "spices",
            Self::Frozen => "frozen",
            Self::Other => "other",
        }
    }

    /// Section heading shown to shoppers
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::Meat => "Meat & Seafood",
            Self::Dairy => "Dairy & Eggs",
            Self::Pantry => "Pantry",
            Self::Baking => "Baking",
            Self::Spices => "Spices & Seasonings",
            Self::Frozen => "Frozen",
            Self::Other => "Other",
        }
    }

    /// Where to look in a typical store
    #[must_use]
    pub const fn aisle_hint(&self) -> &'static str {
        match self {
            Self::Produce => "Fresh produce section",
            Self::Meat => "Butcher counter and seafood case",
            Self::Dairy => "Refrigerated dairy case",
            Self::Pantry => "Center aisles: oils, grains, canned goods",
            Self::Baking => "Baking aisle",
            Self::Spices => "Spice rack",
            Self::Frozen => "Freezer aisle",
            Self::Other => "Ask at the service desk",
        }
    }

    /// Pantry staples are what `exclude_pantry` filters out
    #[must_use]
    pub const fn is_pantry_staple(&self) -> bool {
        matches!(self, Self::Pantry)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Keyword to category table
///
/// Multi-word keywords beat their single-word parts ("peanut butter" is pantry,
/// "butter" is dairy) because the longest match wins.
static CATEGORY_KEYWORDS: LazyLock<HashMap<&'static str, Category>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // === Produce ===
    for keyword in [
        "onion", "green onion", "scallion", "shallot", "leek", "garlic", "tomato", "potato",
        "sweet potato", "carrot", "celery", "lettuce", "spinach", "kale", "arugula", "cabbage",
        "broccoli", "cauliflower", "zucchini", "squash", "eggplant", "cucumber", "pepper",
        "bell pepper", "jalapeno", "jalapeño", "mushroom", "avocado", "corn", "green bean",
        "asparagus", "beet", "radish", "lemon", "lime", "orange", "apple", "banana", "pear",
        "peach", "mango", "pineapple", "grape", "berry", "berries", "strawberry",
        "strawberries", "blueberry", "blueberries", "raspberry", "raspberries", "ginger",
        "cilantro", "parsley", "basil", "mint", "thyme", "rosemary", "sage", "dill", "chive",
    ] {
        m.insert(keyword, Category::Produce);
    }

    // === Meat & Seafood ===
    for keyword in [
        "chicken", "chicken breast", "chicken thigh", "beef", "steak", "pork", "bacon", "ham",
        "sausage", "chorizo", "prosciutto", "turkey", "lamb", "veal", "duck", "salmon", "tuna",
        "cod", "tilapia", "fish", "shrimp", "prawn", "crab", "scallop", "anchovy", "anchovies",
    ] {
        m.insert(keyword, Category::Meat);
    }

    // === Dairy & Eggs ===
    for keyword in [
        "milk", "buttermilk", "butter", "cream", "heavy cream", "whipping cream", "sour cream",
        "half and half", "cheese", "cream cheese", "cheddar", "mozzarella", "parmesan",
        "ricotta", "feta", "yogurt", "egg", "ghee",
    ] {
        m.insert(keyword, Category::Dairy);
    }

    // === Pantry ===
    for keyword in [
        "salt", "kosher salt", "sea salt", "salt and pepper", "oil", "olive oil", "vegetable oil", "canola oil",
        "sesame oil", "coconut oil", "olive", "vinegar", "soy sauce", "fish sauce",
        "worcestershire sauce", "hot sauce", "broth", "stock", "chicken broth", "chicken stock",
        "beef broth", "vegetable broth", "tomato paste", "tomato sauce", "rice", "pasta",
        "spaghetti", "noodle", "quinoa", "oats", "lentil", "chickpea", "black bean", "kidney bean",
        "honey", "maple syrup", "peanut butter", "mustard", "ketchup", "mayonnaise",
        "breadcrumbs", "bread crumbs", "coconut milk",
    ] {
        m.insert(keyword, Category::Pantry);
    }

    // === Baking ===
    for keyword in [
        "flour", "all-purpose flour", "bread flour", "sugar", "brown sugar", "powdered sugar",
        "baking soda", "baking powder", "yeast", "vanilla", "vanilla extract", "cocoa",
        "cocoa powder", "chocolate", "chocolate chip", "cornstarch", "molasses",
    ] {
        m.insert(keyword, Category::Baking);
    }

    // === Spices & Seasonings ===
    for keyword in [
        "black pepper", "white pepper", "peppercorn", "cumin", "paprika", "smoked paprika",
        "oregano", "cinnamon", "nutmeg", "chili powder", "cayenne", "cayenne pepper",
        "turmeric", "garlic powder", "onion powder", "bay leaf", "bay leaves",
        "red pepper flakes", "italian seasoning", "curry powder", "coriander", "allspice",
        "clove",
    ] {
        m.insert(keyword, Category::Spices);
    }

    // === Frozen ===
    for keyword in ["frozen", "ice cream", "ice"] {
        m.insert(keyword, Category::Frozen);
    }

    m
});

fn tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// A name token matches a keyword word as written or with a plural suffix
fn token_matches(token: &str, word: &str) -> bool {
    token == word
        || token
            .strip_prefix(word)
            .is_some_and(|suffix| suffix == "s" || suffix == "es")
}

fn contains_keyword(name_tokens: &[String], keyword: &str) -> bool {
    let keyword_tokens = tokens(keyword);
    if keyword_tokens.is_empty() || keyword_tokens.len() > name_tokens.len() {
        return false;
    }
    name_tokens.windows(keyword_tokens.len()).any(|window| {
        window
            .iter()
            .zip(&keyword_tokens)
            .all(|(token, word)| token_matches(token, word))
    })
}

/// Assign a grocery category to an ingredient name
///
/// Pure and deterministic. Equal-length keyword matches are broken by keyword
/// text so the answer never depends on table iteration order.
#[must_use]
pub fn classify(name: &str) -> Category {
    let name_tokens = tokens(name);
    if name_tokens.is_empty() {
        return Category::Other;
    }

    CATEGORY_KEYWORDS
        .iter()
        .filter(|(keyword, _)| contains_keyword(&name_tokens, keyword))
        .max_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| b.cmp(a)))
        .map_or(Category::Other, |(_, category)| *category)
}
