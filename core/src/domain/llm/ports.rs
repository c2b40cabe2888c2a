use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, llm::value_objects::CompletionRequest,
};

/// LLM Client trait for calling chat completion models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Returns the raw text of the first completion choice.
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
