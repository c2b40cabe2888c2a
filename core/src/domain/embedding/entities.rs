use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of embedding one text, tagged with the path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddingOutcome {
    External { vector: Vec<f32>, model: String },
    LocalFallback { vector: Vec<f32> },
}

impl EmbeddingOutcome {
    pub fn vector(&self) -> &[f32] {
        match self {
            EmbeddingOutcome::External { vector, .. } => vector,
            EmbeddingOutcome::LocalFallback { vector } => vector,
        }
    }

    pub fn into_vector(self) -> Vec<f32> {
        match self {
            EmbeddingOutcome::External { vector, .. } => vector,
            EmbeddingOutcome::LocalFallback { vector } => vector,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, EmbeddingOutcome::LocalFallback { .. })
    }
}

/// Embedding space an index was built in. Vectors from different strategies
/// are never compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmbeddingStrategy {
    External { model: String, dimensions: usize },
    LocalHash,
}
