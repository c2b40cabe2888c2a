use axum::extract::State;
use ferrisfit_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::RecipeCriteria,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::recipe::validators::SearchRecipesValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    post,
    path = "/search",
    tag = "recipe",
    summary = "Search recipes by criteria",
    description = "Filters the recipe catalog by dietary flag, allergens, calories, protein and cuisine. Results keep catalog order.",
    responses(
        (status = 200, body = SearchRecipesResponse)
    ),
    request_body = SearchRecipesValidator
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SearchRecipesValidator>,
) -> Result<Response<SearchRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .search_recipes(RecipeCriteria::from(payload))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchRecipesResponse { data: recipes }))
}
