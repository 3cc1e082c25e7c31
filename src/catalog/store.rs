//! Read-only recipe catalog.
//!
//! The catalog is built once at plugin load from the JSON bundled into the
//! binary and is never mutated afterwards. Consumers share it through an
//! `Arc` and only ever read from it.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "recipes": [
//!     {
//!       "id": "1",
//!       "name": "Margarita",
//!       "alcohol_type": "Tequila",
//!       "glass": "Coupe",
//!       "ingredients": ["2 oz Blanco tequila", "1 oz Lime juice"],
//!       "food_pairings": ["Fish tacos"],
//!       "instructions": "Shake with ice and strain."
//!     }
//!   ]
//! }
//! ```

use crate::domain::error::{Result, ShakerError};
use crate::domain::{Recipe, RecipeId};
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};

/// Catalog data compiled into the plugin.
const BUNDLED_CATALOG: &str = include_str!("../../assets/cocktails.json");

/// Top-level container of the catalog JSON.
#[derive(Debug, Deserialize)]
struct CatalogData {
    /// Format version, reserved for future migrations.
    #[allow(dead_code)]
    version: u32,

    #[serde(default)]
    recipes: Vec<Recipe>,
}

/// Immutable, ordered collection of recipes.
///
/// Enumeration order is the order of the source data.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    index: HashMap<RecipeId, usize>,
    alcohol_types: Vec<String>,
}

impl Catalog {
    /// Builds a catalog from recipes in display order.
    ///
    /// # Errors
    ///
    /// Returns [`ShakerError::Catalog`] if an identifier is empty or appears
    /// more than once.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_from_recipes", count = recipes.len()).entered();

        let mut index = HashMap::with_capacity(recipes.len());
        for (position, recipe) in recipes.iter().enumerate() {
            if recipe.id.as_str().trim().is_empty() {
                return Err(ShakerError::Catalog(format!(
                    "recipe at position {position} has an empty id"
                )));
            }
            if index.insert(recipe.id.clone(), position).is_some() {
                return Err(ShakerError::Catalog(format!(
                    "duplicate recipe id: {}",
                    recipe.id
                )));
            }
        }

        let alcohol_types = recipes
            .iter()
            .map(|r| r.alcohol_type.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();

        tracing::debug!(
            recipe_count = recipes.len(),
            alcohol_type_count = alcohol_types.len(),
            "catalog built"
        );

        Ok(Self {
            recipes,
            index,
            alcohol_types,
        })
    }

    /// Parses a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`ShakerError::Catalog`] for malformed JSON or invalid records.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(json)
            .map_err(|e| ShakerError::Catalog(format!("failed to parse catalog JSON: {e}")))?;
        Self::from_recipes(data.recipes)
    }

    /// Loads the catalog bundled with the plugin.
    ///
    /// # Errors
    ///
    /// Fails only if the bundled data is corrupt, which the test suite rules
    /// out for shipped builds.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// All recipes in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Distinct alcohol types, sorted lexicographically.
    #[must_use]
    pub fn distinct_alcohol_types(&self) -> &[String] {
        &self.alcohol_types
    }

    /// Looks a recipe up by identifier.
    #[must_use]
    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.index.get(id).and_then(|&i| self.recipes.get(i))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, name: &str, alcohol_type: &str) -> Recipe {
        Recipe {
            id: RecipeId::new(id),
            name: name.to_string(),
            alcohol_type: alcohol_type.to_string(),
            glass: "Rocks".to_string(),
            ingredients: vec![],
            food_pairings: vec![],
            instructions: String::new(),
        }
    }

    #[test]
    fn bundled_catalog_parses_and_has_unique_ids() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.len() >= 30);
        for recipe in catalog.all() {
            assert_eq!(catalog.get(&recipe.id), Some(recipe));
            assert!(!recipe.ingredients.is_empty(), "{} has no ingredients", recipe.name);
        }
    }

    #[test]
    fn enumeration_keeps_source_order() {
        let catalog = Catalog::from_recipes(vec![
            recipe("b", "Negroni", "Gin"),
            recipe("a", "Americano", "Vermouth"),
        ])
        .unwrap();
        let names: Vec<&str> = catalog.all().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Negroni", "Americano"]);
    }

    #[test]
    fn alcohol_types_are_sorted_and_deduplicated() {
        let catalog = Catalog::from_recipes(vec![
            recipe("1", "Mojito", "Rum"),
            recipe("2", "Gimlet", "Gin"),
            recipe("3", "Daiquiri", "Rum"),
        ])
        .unwrap();
        assert_eq!(catalog.distinct_alcohol_types(), ["Gin", "Rum"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::from_recipes(vec![
            recipe("1", "Mojito", "Rum"),
            recipe("1", "Gimlet", "Gin"),
        ])
        .unwrap_err();
        assert!(matches!(err, ShakerError::Catalog(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn empty_ids_are_rejected() {
        let err = Catalog::from_recipes(vec![recipe("  ", "Mojito", "Rum")]).unwrap_err();
        assert!(matches!(err, ShakerError::Catalog(_)));
    }

    #[test]
    fn malformed_json_is_a_catalog_error() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(ShakerError::Catalog(_))
        ));
    }

    #[test]
    fn unknown_id_lookup_is_none() {
        let catalog = Catalog::from_recipes(vec![recipe("1", "Mojito", "Rum")]).unwrap();
        assert!(catalog.get(&RecipeId::new("2")).is_none());
    }
}
