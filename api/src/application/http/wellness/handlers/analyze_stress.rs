use axum::extract::State;
use ferrisfit_core::domain::wellness::{
    entities::StressAnalysis, ports::WellnessService, value_objects::StressAnalysisInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::wellness::validators::StressAnalysisValidator;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeStressResponse {
    pub data: StressAnalysis,
}

#[utoipa::path(
    post,
    path = "/stress-analysis",
    tag = "wellness",
    summary = "Analyze stress",
    description = "Scores burnout risk from 0 to 100 and classifies the stress level.",
    responses(
        (status = 200, body = AnalyzeStressResponse),
        (status = 502, body = ApiErrorResponse, description = "Model output malformed or upstream failure"),
    ),
    request_body = StressAnalysisValidator
)]
pub async fn analyze_stress(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<StressAnalysisValidator>,
) -> Result<Response<AnalyzeStressResponse>, ApiError> {
    let result = state
        .service
        .analyze_stress(StressAnalysisInput::from(payload))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeStressResponse { data: result }))
}
