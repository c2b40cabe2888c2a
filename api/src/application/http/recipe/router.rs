use super::handlers::get_recipe::{__path_get_recipe, get_recipe};
use super::handlers::get_similar_recipes::{__path_get_similar_recipes, get_similar_recipes};
use super::handlers::retrieve_recipes::{__path_retrieve_recipes, retrieve_recipes};
use super::handlers::search_recipes::{__path_search_recipes, search_recipes};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_recipes, retrieve_recipes, get_recipe, get_similar_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/recipes/search", root_path), post(search_recipes))
        .route(&format!("{}/recipes/retrieve", root_path), post(retrieve_recipes))
        .route(&format!("{}/recipes/{{recipe_id}}", root_path), get(get_recipe))
        .route(
            &format!("{}/recipes/{{recipe_id}}/similar", root_path),
            get(get_similar_recipes),
        )
}
