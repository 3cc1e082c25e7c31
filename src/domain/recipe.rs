//! Recipe domain model.
//!
//! A [`Recipe`] is one immutable record of the bundled cocktail catalog. Records
//! are addressed by [`RecipeId`], which is stable for the lifetime of the
//! process and is the only thing navigation state keeps when it refers to a
//! recipe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of ingredients shown in a listing card before eliding the rest.
const PREVIEW_INGREDIENTS: usize = 3;

/// Separator used when joining ingredient and pairing lists for display.
pub const LIST_SEPARATOR: &str = " • ";

/// Stable identifier of a recipe inside the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Wraps a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A cocktail recipe.
///
/// `ingredients` and `food_pairings` keep their bundled order, which is also
/// their display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub alcohol_type: String,
    pub glass: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub food_pairings: Vec<String>,
    #[serde(default)]
    pub instructions: String,
}

impl Recipe {
    /// Returns the short ingredient summary shown on listing cards.
    ///
    /// The first three ingredients are joined with `" • "`; a trailing `"..."`
    /// marks that more exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use emerald_shaker::domain::{Recipe, RecipeId};
    ///
    /// let recipe = Recipe {
    ///     id: RecipeId::new("1"),
    ///     name: "Margarita".into(),
    ///     alcohol_type: "Tequila".into(),
    ///     glass: "Coupe".into(),
    ///     ingredients: vec!["Tequila".into(), "Lime".into(), "Triple sec".into(), "Salt".into()],
    ///     food_pairings: vec![],
    ///     instructions: String::new(),
    /// };
    /// assert_eq!(recipe.ingredients_preview(), "Tequila • Lime • Triple sec...");
    /// ```
    #[must_use]
    pub fn ingredients_preview(&self) -> String {
        let shown: Vec<&str> = self
            .ingredients
            .iter()
            .take(PREVIEW_INGREDIENTS)
            .map(String::as_str)
            .collect();
        let mut preview = shown.join(LIST_SEPARATOR);
        if self.ingredients.len() > PREVIEW_INGREDIENTS {
            preview.push_str("...");
        }
        preview
    }

    /// Returns all food pairings joined for a single display line.
    #[must_use]
    pub fn pairings_line(&self) -> String {
        self.food_pairings.join(LIST_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(ingredients: &[&str]) -> Recipe {
        Recipe {
            id: RecipeId::new("42"),
            name: "Daiquiri".to_string(),
            alcohol_type: "Rum".to_string(),
            glass: "Coupe".to_string(),
            ingredients: ingredients.iter().map(ToString::to_string).collect(),
            food_pairings: vec!["Ceviche".to_string(), "Fish tacos".to_string()],
            instructions: "Shake and strain.".to_string(),
        }
    }

    #[test]
    fn preview_without_ellipsis_when_three_or_fewer() {
        let r = recipe(&["White rum", "Lime juice", "Simple syrup"]);
        assert_eq!(r.ingredients_preview(), "White rum • Lime juice • Simple syrup");
    }

    #[test]
    fn preview_of_empty_ingredient_list_is_empty() {
        assert_eq!(recipe(&[]).ingredients_preview(), "");
    }

    #[test]
    fn pairings_are_joined_in_order() {
        assert_eq!(recipe(&[]).pairings_line(), "Ceviche • Fish tacos");
    }

    #[test]
    fn recipe_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&RecipeId::new("7")).unwrap();
        assert_eq!(json, "\"7\"");
    }
}
