use ferrisfit_core::domain::recipe::value_objects::{
    CalorieRange, DEFAULT_CRITERIA_TOP_K, DEFAULT_RETRIEVAL_TOP_K, RecipeCriteria,
    RetrievalOptions,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

fn default_criteria_top_k() -> usize {
    DEFAULT_CRITERIA_TOP_K
}

fn default_retrieval_top_k() -> usize {
    DEFAULT_RETRIEVAL_TOP_K
}

fn validate_calorie_range(range: &CalorieRange) -> Result<(), ValidationError> {
    if range.min > range.max {
        return Err(ValidationError::new("calorie_range")
            .with_message("calorie_range.min must not exceed calorie_range.max".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SearchRecipesValidator {
    pub vegetarian: Option<bool>,

    #[serde(default)]
    pub allergies: Vec<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_calorie_range"))]
    pub calorie_range: CalorieRange,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "protein_min must not be negative"))]
    pub protein_min: f64,

    #[serde(default)]
    pub cuisines: Vec<String>,

    #[serde(default = "default_criteria_top_k")]
    #[validate(range(min = 1, max = 100, message = "top_k must be between 1 and 100"))]
    pub top_k: usize,
}

impl From<SearchRecipesValidator> for RecipeCriteria {
    fn from(payload: SearchRecipesValidator) -> Self {
        Self {
            vegetarian: payload.vegetarian,
            allergies: payload.allergies,
            calorie_range: payload.calorie_range,
            protein_min: payload.protein_min,
            cuisines: payload.cuisines,
            top_k: payload.top_k,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RetrieveRecipesValidator {
    #[validate(length(min = 1, message = "query is required"))]
    pub query: String,

    #[serde(default = "default_retrieval_top_k")]
    #[validate(range(min = 1, max = 100, message = "top_k must be between 1 and 100"))]
    pub top_k: usize,

    pub vegetarian: Option<bool>,

    pub cuisine: Option<String>,

    pub max_calories: Option<u32>,
}

impl RetrieveRecipesValidator {
    pub fn options(&self) -> RetrievalOptions {
        RetrievalOptions {
            top_k: self.top_k,
            vegetarian: self.vegetarian,
            cuisine: self.cuisine.clone(),
            max_calories: self.max_calories,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SimilarRecipesQuery {
    /// Number of neighbours, 5 by default.
    pub top_k: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_defaults() {
        let body: SearchRecipesValidator = serde_json::from_str("{}").unwrap();
        assert!(body.validate().is_ok());

        let criteria = RecipeCriteria::from(body);
        assert_eq!(criteria.top_k, 10);
        assert_eq!(criteria.calorie_range, CalorieRange { min: 0, max: 1000 });
        assert_eq!(criteria.vegetarian, None);
    }

    #[test]
    fn test_search_rejects_inverted_range() {
        let body: SearchRecipesValidator =
            serde_json::from_str(r#"{"calorie_range": {"min": 500, "max": 100}}"#).unwrap();
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_retrieve_requires_query() {
        let body: RetrieveRecipesValidator = serde_json::from_str(r#"{"query": ""}"#).unwrap();
        assert!(body.validate().is_err());

        let body: RetrieveRecipesValidator =
            serde_json::from_str(r#"{"query": "spicy lentils", "max_calories": 400}"#).unwrap();
        assert!(body.validate().is_ok());
        assert_eq!(body.options().top_k, 5);
        assert_eq!(body.options().max_calories, Some(400));
    }
}
