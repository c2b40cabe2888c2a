use axum::extract::State;
use ferrisfit_core::domain::wellness::{
    entities::HabitPlan, ports::WellnessService, value_objects::HabitPlanInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::wellness::validators::HabitPlanValidator;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateHabitPlanResponse {
    pub data: HabitPlan,
}

#[utoipa::path(
    post,
    path = "/habit-plans",
    tag = "wellness",
    summary = "Generate habit plan",
    description = "Builds a daily routine schedule around the wake and sleep times, habits and goal.",
    responses(
        (status = 200, body = GenerateHabitPlanResponse),
        (status = 502, body = ApiErrorResponse, description = "Model output malformed or upstream failure"),
    ),
    request_body = HabitPlanValidator
)]
pub async fn generate_habit_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<HabitPlanValidator>,
) -> Result<Response<GenerateHabitPlanResponse>, ApiError> {
    let result = state
        .service
        .generate_habit_plan(HabitPlanInput::from(payload))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateHabitPlanResponse { data: result }))
}
