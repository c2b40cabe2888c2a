use axum::extract::State;
use ferrisfit_core::domain::{recipe::ports::RecipeService, vector_index::entities::IndexStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub index: IndexStatus,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Health check",
    description = "Reports the vector index size and its pinned embedding strategy.",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Response<HealthResponse> {
    let index = state.service.index_status().await;
    let status = if index.ready { "ok" } else { "starting" };

    Response::OK(HealthResponse {
        status: status.to_string(),
        index,
    })
}
