use axum::extract::State;
use ferrisfit_core::domain::recipe::{ports::RecipeService, value_objects::ScoredRecipe};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::recipe::validators::RetrieveRecipesValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RetrieveRecipesResponse {
    pub data: Vec<ScoredRecipe>,
}

#[utoipa::path(
    post,
    path = "/retrieve",
    tag = "recipe",
    summary = "Retrieve relevant recipes",
    description = "Ranks recipes by embedding similarity to a free-text query, after optional vegetarian, cuisine and calorie pre-filters.",
    responses(
        (status = 200, body = RetrieveRecipesResponse),
        (status = 503, body = ApiErrorResponse, description = "Query could not be embedded in the index's space"),
    ),
    request_body = RetrieveRecipesValidator
)]
pub async fn retrieve_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RetrieveRecipesValidator>,
) -> Result<Response<RetrieveRecipesResponse>, ApiError> {
    let options = payload.options();
    let recipes = state
        .service
        .retrieve_relevant_recipes(payload.query, options)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RetrieveRecipesResponse { data: recipes }))
}
