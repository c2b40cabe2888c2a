use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::IntoResponse,
};
use ferrisfit_core::domain::common::entities::app_errors::{CoreError, ViolationKind};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Constraint violation: {kind} \"{matched}\" found in \"{item}\"")]
    ConstraintViolation {
        kind: ViolationKind,
        item: String,
        matched: String,
    },

    #[error("{0}")]
    MalformedLlmResponse(String),

    #[error("{0}")]
    UpstreamFailure(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<ViolationDetail>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ViolationDetail {
    pub kind: ViolationKind,
    pub item: String,
    pub matched: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ConstraintViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedLlmResponse(_) => StatusCode::BAD_GATEWAY,
            ApiError::UpstreamFailure(_) => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::ConstraintViolation { .. } => "CONSTRAINT_VIOLATION",
            ApiError::MalformedLlmResponse(_) => "MALFORMED_LLM_RESPONSE",
            ApiError::UpstreamFailure(_) | ApiError::ServiceUnavailable(_) => "UPSTREAM_FAILURE",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::RecipeNotFound(_) => ApiError::NotFound(error.to_string()),
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::ExternalServiceError(message) => ApiError::UpstreamFailure(message),
            CoreError::MalformedResponse(message) => ApiError::MalformedLlmResponse(message),
            CoreError::ConstraintViolation {
                kind,
                item,
                matched,
            } => ApiError::ConstraintViolation {
                kind,
                item,
                matched,
            },
            CoreError::EmbeddingUnavailable(message) => ApiError::ServiceUnavailable(message),
            CoreError::InvalidCatalog(_) | CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let violation = match &self {
            ApiError::ConstraintViolation {
                kind,
                item,
                matched,
            } => Some(ViolationDetail {
                kind: *kind,
                item: item.clone(),
                matched: matched.clone(),
            }),
            _ => None,
        };

        let body = ApiErrorResponse {
            code: self.code().to_string(),
            status: status.as_u16(),
            message: self.to_string(),
            violation,
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that also runs `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string().replace('\n', ", ")))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_of(error: ApiError) -> (StatusCode, ApiErrorResponse) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_constraint_violation_response() {
        let error = ApiError::from(CoreError::ConstraintViolation {
            kind: ViolationKind::Allergen,
            item: "Peanut Butter Toast".to_string(),
            matched: "peanut".to_string(),
        });

        let (status, body) = body_of(error).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "CONSTRAINT_VIOLATION");
        assert_eq!(
            body.violation,
            Some(ViolationDetail {
                kind: ViolationKind::Allergen,
                item: "Peanut Butter Toast".to_string(),
                matched: "peanut".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_model_and_infrastructure_failures_are_distinct() {
        let (status, body) =
            body_of(CoreError::MalformedResponse("no JSON object".to_string()).into()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.code, "MALFORMED_LLM_RESPONSE");

        let (status, body) =
            body_of(CoreError::ExternalServiceError("HTTP 503".to_string()).into()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.code, "UPSTREAM_FAILURE");

        let (status, body) = body_of(CoreError::InternalServerError.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "INTERNAL_SERVER_ERROR");
        assert!(body.violation.is_none());
    }

    #[tokio::test]
    async fn test_not_found_variants() {
        let (status, body) = body_of(CoreError::RecipeNotFound("r99".to_string()).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Recipe not found: r99");

        let (status, _) = body_of(CoreError::NotFound.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_embedding_unavailable_is_service_unavailable() {
        let (status, body) =
            body_of(CoreError::EmbeddingUnavailable("query fell back".to_string()).into()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.code, "UPSTREAM_FAILURE");
    }
}
