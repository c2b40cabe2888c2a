use axum::extract::{Path, Query, State};
use ferrisfit_core::domain::recipe::{
    ports::RecipeService,
    value_objects::{DEFAULT_SIMILAR_TOP_K, ScoredRecipe},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::recipe::validators::SimilarRecipesQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSimilarRecipesResponse {
    pub data: Vec<ScoredRecipe>,
}

#[utoipa::path(
    get,
    path = "/{recipe_id}/similar",
    tag = "recipe",
    summary = "Get similar recipes",
    description = "Ranks the other recipes by similarity to the given one.",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
        SimilarRecipesQuery
    ),
    responses(
        (status = 200, body = GetSimilarRecipesResponse)
    ),
)]
pub async fn get_similar_recipes(
    Path(recipe_id): Path<String>,
    Query(query): Query<SimilarRecipesQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetSimilarRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .get_similar_recipes(recipe_id, query.top_k.unwrap_or(DEFAULT_SIMILAR_TOP_K))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSimilarRecipesResponse { data: recipes }))
}
