use axum::extract::{Path, State};
use ferrisfit_core::domain::meal_plan::{
    entities::MealPlanRecord, ports::MealPlanService, value_objects::UpdateMealPlanNotesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::meal_plan::validators::UpdateMealPlanNotesValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateMealPlanNotesResponse {
    pub data: MealPlanRecord,
}

#[utoipa::path(
    put,
    path = "/users/{email}/meal-plans/{plan_id}/notes",
    tag = "meal-plan",
    summary = "Update meal plan notes",
    params(
        ("email" = String, Path, description = "User email"),
        ("plan_id" = Uuid, Path, description = "Meal plan ID"),
    ),
    responses(
        (status = 200, body = UpdateMealPlanNotesResponse)
    ),
    request_body = UpdateMealPlanNotesValidator
)]
pub async fn update_meal_plan_notes(
    Path((email, plan_id)): Path<(String, Uuid)>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateMealPlanNotesValidator>,
) -> Result<Response<UpdateMealPlanNotesResponse>, ApiError> {
    let record = state
        .service
        .update_meal_plan_notes(UpdateMealPlanNotesInput {
            email,
            doc_id: plan_id,
            notes: payload.notes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateMealPlanNotesResponse { data: record }))
}
