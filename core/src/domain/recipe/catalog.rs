use std::{collections::HashSet, sync::Arc};

use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::Recipe};

/// Immutable, shared recipe corpus.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Arc<[Recipe]>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(recipes.len());

        for recipe in &recipes {
            if recipe.id.trim().is_empty() {
                return Err(CoreError::InvalidCatalog(
                    "recipe identifier must not be empty".to_string(),
                ));
            }
            if !seen.insert(recipe.id.as_str()) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate recipe identifier: {}",
                    recipe.id
                )));
            }
            if recipe.name.trim().is_empty() {
                return Err(CoreError::InvalidCatalog(format!(
                    "recipe {} has an empty name",
                    recipe.id
                )));
            }
            for (label, value) in [
                ("protein", recipe.protein),
                ("carbs", recipe.carbs),
                ("fats", recipe.fats),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(CoreError::InvalidCatalog(format!(
                        "recipe {} has invalid {}: {}",
                        recipe.id, label, value
                    )));
                }
            }
        }

        Ok(Self {
            recipes: recipes.into(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidCatalog(format!("failed to parse recipes: {}", e)))?;

        Self::new(recipes)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, recipe_id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == recipe_id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
