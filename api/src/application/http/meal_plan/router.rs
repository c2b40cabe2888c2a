use super::handlers::delete_meal_plan::{__path_delete_meal_plan, delete_meal_plan};
use super::handlers::generate_meal_plan::{__path_generate_meal_plan, generate_meal_plan};
use super::handlers::get_meal_plan_history::{__path_get_meal_plan_history, get_meal_plan_history};
use super::handlers::update_meal_plan_notes::{
    __path_update_meal_plan_notes, update_meal_plan_notes,
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    generate_meal_plan,
    get_meal_plan_history,
    update_meal_plan_notes,
    delete_meal_plan
))]
pub struct MealPlanApiDoc;

pub fn meal_plan_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/meal-plans", root_path), post(generate_meal_plan))
        .route(
            &format!("{}/users/{{email}}/meal-plans", root_path),
            get(get_meal_plan_history),
        )
        .route(
            &format!("{}/users/{{email}}/meal-plans/{{plan_id}}/notes", root_path),
            put(update_meal_plan_notes),
        )
        .route(
            &format!("{}/users/{{email}}/meal-plans/{{plan_id}}", root_path),
            delete(delete_meal_plan),
        )
}
