use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Which dietary rule a generated item broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    NonVegetarian,
    Allergen,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::NonVegetarian => write!(f, "non-vegetarian keyword"),
            ViolationKind::Allergen => write!(f, "allergen"),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Invalid recipe catalog: {0}")]
    InvalidCatalog(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Malformed LLM response: {0}")]
    MalformedResponse(String),

    #[error("Constraint violation: {kind} \"{matched}\" found in \"{item}\"")]
    ConstraintViolation {
        kind: ViolationKind,
        item: String,
        matched: String,
    },

    #[error("Embedding unavailable: {0}")]
    EmbeddingUnavailable(String),

    #[error("Internal server error")]
    InternalServerError,
}
