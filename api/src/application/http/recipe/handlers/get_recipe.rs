use axum::extract::{Path, State};
use ferrisfit_core::domain::recipe::{entities::Recipe, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    params(
        ("recipe_id" = String, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = GetRecipeResponse)
    ),
)]
pub async fn get_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .get_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeResponse { data: recipe }))
}
