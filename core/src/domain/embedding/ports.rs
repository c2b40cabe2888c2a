use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Client for an external text embedding endpoint.
#[cfg_attr(test, mockall::automock)]
pub trait EmbeddingClient: Send + Sync {
    fn embed(&self, text: String) -> impl Future<Output = Result<Vec<f32>, CoreError>> + Send;

    fn model_name(&self) -> String;
}
