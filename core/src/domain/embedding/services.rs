use tracing::warn;

use crate::domain::embedding::{
    entities::EmbeddingOutcome, fallback::hash_embedding, ports::EmbeddingClient,
};

/// Embeds text through the external client, degrading to local hashing.
///
/// Never fails: any client error (or an empty vector) yields
/// [`EmbeddingOutcome::LocalFallback`].
#[derive(Debug, Clone)]
pub struct EmbeddingProvider<EC> {
    client: Option<EC>,
}

impl<EC> EmbeddingProvider<EC>
where
    EC: EmbeddingClient,
{
    pub fn new(client: EC) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Provider that never calls out and always hashes locally.
    pub fn local_only() -> Self {
        Self { client: None }
    }

    pub fn has_external_client(&self) -> bool {
        self.client.is_some()
    }

    pub async fn embed(&self, text: &str) -> EmbeddingOutcome {
        let Some(client) = &self.client else {
            return self.embed_locally(text);
        };

        match client.embed(text.to_string()).await {
            Ok(vector) if !vector.is_empty() => EmbeddingOutcome::External {
                vector,
                model: client.model_name(),
            },
            Ok(_) => {
                warn!("Embedding endpoint returned an empty vector, using local hashing");
                self.embed_locally(text)
            }
            Err(e) => {
                warn!("Embedding request failed, using local hashing: {}", e);
                self.embed_locally(text)
            }
        }
    }

    pub fn embed_locally(&self, text: &str) -> EmbeddingOutcome {
        EmbeddingOutcome::LocalFallback {
            vector: hash_embedding(text),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::domain::common::entities::app_errors::CoreError;

    /// Embedding client that answers from a fixed closure and counts calls.
    #[derive(Clone)]
    pub struct FakeEmbeddingClient {
        pub calls: Arc<AtomicUsize>,
        pub respond: Arc<dyn Fn(&str) -> Result<Vec<f32>, CoreError> + Send + Sync>,
    }

    impl FakeEmbeddingClient {
        pub fn new(
            respond: impl Fn(&str) -> Result<Vec<f32>, CoreError> + Send + Sync + 'static,
        ) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                respond: Arc::new(respond),
            }
        }

        pub fn failing() -> Self {
            Self::new(|_| Err(CoreError::ExternalServiceError("unreachable".to_string())))
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl EmbeddingClient for FakeEmbeddingClient {
        async fn embed(&self, text: String) -> Result<Vec<f32>, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.respond)(&text)
        }

        fn model_name(&self) -> String {
            "fake-embedding".to_string()
        }
    }

    #[tokio::test]
    async fn test_external_success_is_tagged() {
        let provider = EmbeddingProvider::new(FakeEmbeddingClient::new(|_| Ok(vec![0.5, 0.5])));
        let outcome = provider.embed("hello").await;
        assert_eq!(
            outcome,
            EmbeddingOutcome::External {
                vector: vec![0.5, 0.5],
                model: "fake-embedding".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_failure_degrades_to_hashing() {
        let provider = EmbeddingProvider::new(FakeEmbeddingClient::failing());
        let outcome = provider.embed("hello world").await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.vector(), hash_embedding("hello world").as_slice());
    }

    #[tokio::test]
    async fn test_empty_vector_degrades_to_hashing() {
        let provider = EmbeddingProvider::new(FakeEmbeddingClient::new(|_| Ok(Vec::new())));
        assert!(provider.embed("hello").await.is_fallback());
    }

    #[tokio::test]
    async fn test_local_only_never_calls_out() {
        let provider = EmbeddingProvider::<FakeEmbeddingClient>::local_only();
        assert!(!provider.has_external_client());
        assert!(provider.embed("hello").await.is_fallback());
    }
}
