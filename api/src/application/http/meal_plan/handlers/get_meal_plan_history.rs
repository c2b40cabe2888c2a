use axum::extract::{Path, Query, State};
use ferrisfit_core::domain::meal_plan::{
    entities::MealPlanRecord,
    ports::MealPlanService,
    value_objects::{DEFAULT_HISTORY_DAYS, GetMealPlanHistoryInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::meal_plan::validators::MealPlanHistoryQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMealPlanHistoryResponse {
    pub data: Vec<MealPlanRecord>,
}

#[utoipa::path(
    get,
    path = "/users/{email}/meal-plans",
    tag = "meal-plan",
    summary = "Get meal plan history",
    description = "Lists the saved meal plans of a user from the last N days, newest first.",
    params(
        ("email" = String, Path, description = "User email"),
        MealPlanHistoryQuery
    ),
    responses(
        (status = 200, body = GetMealPlanHistoryResponse)
    ),
)]
pub async fn get_meal_plan_history(
    Path(email): Path<String>,
    Query(query): Query<MealPlanHistoryQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetMealPlanHistoryResponse>, ApiError> {
    let history = state
        .service
        .get_meal_plan_history(GetMealPlanHistoryInput {
            email,
            days: query.days.unwrap_or(DEFAULT_HISTORY_DAYS),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMealPlanHistoryResponse { data: history }))
}
