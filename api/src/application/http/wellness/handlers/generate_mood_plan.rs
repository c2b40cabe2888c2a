use axum::extract::State;
use ferrisfit_core::domain::wellness::{
    entities::MoodPlan, ports::WellnessService, value_objects::MoodPlanInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::wellness::validators::MoodPlanValidator;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateMoodPlanResponse {
    pub data: MoodPlan,
}

#[utoipa::path(
    post,
    path = "/mood-plans",
    tag = "wellness",
    summary = "Generate mood plan",
    description = "Adjusts the day's plan to the reported mood, sleep, energy and workload.",
    responses(
        (status = 200, body = GenerateMoodPlanResponse),
        (status = 502, body = ApiErrorResponse, description = "Model output malformed or upstream failure"),
    ),
    request_body = MoodPlanValidator
)]
pub async fn generate_mood_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<MoodPlanValidator>,
) -> Result<Response<GenerateMoodPlanResponse>, ApiError> {
    let result = state
        .service
        .generate_mood_plan(MoodPlanInput::from(payload))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateMoodPlanResponse { data: result }))
}
