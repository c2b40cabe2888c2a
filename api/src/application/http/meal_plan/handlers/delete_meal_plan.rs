use axum::extract::{Path, State};
use ferrisfit_core::domain::meal_plan::{ports::MealPlanService, value_objects::DeleteMealPlanInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteMealPlanResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/users/{email}/meal-plans/{plan_id}",
    tag = "meal-plan",
    summary = "Delete meal plan",
    params(
        ("email" = String, Path, description = "User email"),
        ("plan_id" = Uuid, Path, description = "Meal plan ID"),
    ),
    responses(
        (status = 200, body = DeleteMealPlanResponse)
    ),
)]
pub async fn delete_meal_plan(
    Path((email, plan_id)): Path<(String, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<DeleteMealPlanResponse>, ApiError> {
    state
        .service
        .delete_meal_plan(DeleteMealPlanInput {
            email,
            doc_id: plan_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteMealPlanResponse {
        message: "Meal plan deleted successfully".to_string(),
    }))
}
