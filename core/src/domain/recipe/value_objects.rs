use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::Recipe;

pub const DEFAULT_CRITERIA_TOP_K: usize = 10;
pub const DEFAULT_RETRIEVAL_TOP_K: usize = 5;
pub const DEFAULT_SIMILAR_TOP_K: usize = 5;

/// Inclusive calorie bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalorieRange {
    pub min: u32,
    pub max: u32,
}

impl Default for CalorieRange {
    fn default() -> Self {
        Self { min: 0, max: 1000 }
    }
}

impl CalorieRange {
    pub fn contains(&self, calories: u32) -> bool {
        calories >= self.min && calories <= self.max
    }
}

/// Structured query for the criteria filter.
///
/// `vegetarian: None` and an empty `allergies` list disable their predicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RecipeCriteria {
    pub vegetarian: Option<bool>,
    pub allergies: Vec<String>,
    pub calorie_range: CalorieRange,
    pub protein_min: f64,
    pub cuisines: Vec<String>,
    pub top_k: usize,
}

impl Default for RecipeCriteria {
    fn default() -> Self {
        Self {
            vegetarian: None,
            allergies: Vec::new(),
            calorie_range: CalorieRange::default(),
            protein_min: 0.0,
            cuisines: Vec::new(),
            top_k: DEFAULT_CRITERIA_TOP_K,
        }
    }
}

/// Pre-filters applied before similarity ranking.
///
/// An empty `cuisine` or a zero `max_calories` counts as unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RetrievalOptions {
    pub top_k: usize,
    pub vegetarian: Option<bool>,
    pub cuisine: Option<String>,
    pub max_calories: Option<u32>,
}

impl Default for RetrievalOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_RETRIEVAL_TOP_K,
            vegetarian: None,
            cuisine: None,
            max_calories: None,
        }
    }
}

impl RetrievalOptions {
    pub fn admits(&self, recipe: &Recipe) -> bool {
        if let Some(vegetarian) = self.vegetarian {
            if recipe.vegetarian != vegetarian {
                return false;
            }
        }
        if let Some(cuisine) = self.cuisine.as_deref().filter(|c| !c.is_empty()) {
            if recipe.cuisine != cuisine {
                return false;
            }
        }
        if let Some(max_calories) = self.max_calories.filter(|m| *m > 0) {
            if recipe.calories > max_calories {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub similarity: f32,
}
