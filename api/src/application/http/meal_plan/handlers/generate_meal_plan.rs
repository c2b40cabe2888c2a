use axum::extract::State;
use ferrisfit_core::domain::meal_plan::{
    entities::{GeneratedMealPlan, SaveOutcome},
    ports::MealPlanService,
    value_objects::SaveMealPlanInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::meal_plan::validators::GenerateMealPlanValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateMealPlanResponse {
    pub data: GeneratedMealPlan,
    /// Absent when saving was not requested.
    pub save: Option<SaveOutcome>,
}

#[utoipa::path(
    post,
    path = "/meal-plans",
    tag = "meal-plan",
    summary = "Generate meal plan",
    description = "Generates a one-day meal plan from the profile using retrieved recipes, validates it against the dietary constraints and optionally saves it to the user's history.",
    responses(
        (status = 200, body = GenerateMealPlanResponse),
        (status = 422, body = ApiErrorResponse, description = "Generated plan violates a dietary constraint"),
        (status = 502, body = ApiErrorResponse, description = "Model output malformed or upstream failure"),
    ),
    request_body = GenerateMealPlanValidator
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateMealPlanValidator>,
) -> Result<Response<GenerateMealPlanResponse>, ApiError> {
    let profile = payload.profile();
    let generated = state
        .service
        .generate_meal_plan(profile.clone())
        .await
        .map_err(ApiError::from)?;

    let save = if payload.save {
        Some(
            state
                .service
                .save_meal_plan(
                    generated.clone(),
                    SaveMealPlanInput {
                        email: payload.email,
                        profile,
                        notes: payload.notes,
                    },
                )
                .await,
        )
    } else {
        None
    };

    Ok(Response::OK(GenerateMealPlanResponse {
        data: generated,
        save,
    }))
}
