use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{embedding::entities::EmbeddingStrategy, recipe::entities::Recipe};

/// One embedded catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingRecord {
    pub recipe: Recipe,
    pub vector: Vec<f32>,
    pub source_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IndexStatus {
    pub ready: bool,
    pub records: usize,
    pub strategy: Option<EmbeddingStrategy>,
}
