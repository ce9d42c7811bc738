//! Payload types for the recipe API
//!
//! Only the fields the UI renders are modelled; everything else in the
//! responses is ignored by serde.

use serde::Deserialize;

/// One ingredient-name completion from the autocomplete endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IngredientSuggestion {
    pub name: String,
}

/// An ingredient line of a recipe summary
///
/// The API has shipped the display text under both `originalString` and the
/// newer `original`, sometimes side by side.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsedIngredient {
    #[serde(default)]
    pub original_string: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
}

impl UsedIngredient {
    pub fn description(&self) -> &str {
        self.original_string
            .as_deref()
            .or(self.original.as_deref())
            .unwrap_or_default()
    }
}

/// A recipe returned by the find-by-ingredients endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub used_ingredients: Vec<UsedIngredient>,
}

/// The part of the recipe information payload shown on expansion
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RecipeDetail {
    #[serde(default)]
    pub instructions: Option<String>,
}

impl RecipeDetail {
    /// Instruction text, treating an empty or blank string as absent
    pub fn instructions(&self) -> Option<&str> {
        self.instructions
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
