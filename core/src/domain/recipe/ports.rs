use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{RecipeCriteria, RetrievalOptions, ScoredRecipe},
    },
    vector_index::entities::IndexStatus,
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Structured filtering, in catalog order.
    fn search_recipes(
        &self,
        criteria: RecipeCriteria,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// Semantic retrieval by free-text query.
    fn retrieve_relevant_recipes(
        &self,
        query: String,
        options: RetrievalOptions,
    ) -> impl Future<Output = Result<Vec<ScoredRecipe>, CoreError>> + Send;

    fn get_recipe(&self, recipe_id: String)
    -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_similar_recipes(
        &self,
        recipe_id: String,
        top_k: usize,
    ) -> impl Future<Output = Result<Vec<ScoredRecipe>, CoreError>> + Send;

    fn index_status(&self) -> impl Future<Output = IndexStatus> + Send;
}
