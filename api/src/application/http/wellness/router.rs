use super::handlers::analyze_stress::{__path_analyze_stress, analyze_stress};
use super::handlers::generate_habit_plan::{__path_generate_habit_plan, generate_habit_plan};
use super::handlers::generate_mood_plan::{__path_generate_mood_plan, generate_mood_plan};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_habit_plan, generate_mood_plan, analyze_stress))]
pub struct WellnessApiDoc;

pub fn wellness_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/habit-plans", root_path), post(generate_habit_plan))
        .route(&format!("{}/mood-plans", root_path), post(generate_mood_plan))
        .route(&format!("{}/stress-analysis", root_path), post(analyze_stress))
}
