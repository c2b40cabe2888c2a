use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{EmbeddingConfig, entities::app_errors::CoreError},
    embedding::ports::EmbeddingClient,
};

/// Client for an OpenAI-compatible `/embeddings` endpoint.
#[derive(Debug, Clone)]
pub struct OpenAIEmbeddingClient {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
    client: Client,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a str,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl OpenAIEmbeddingClient {
    pub fn new(api_key: String, base_url: String, model: String, timeout: Duration) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            timeout,
            client: Client::new(),
        }
    }

    /// `None` when no API key is configured.
    pub fn from_config(config: &EmbeddingConfig) -> Option<Self> {
        let api_key = config.api_key.clone().filter(|key| !key.trim().is_empty())?;

        Some(Self::new(
            api_key,
            config.base_url.clone(),
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
        ))
    }
}

impl EmbeddingClient for OpenAIEmbeddingClient {
    async fn embed(&self, text: String) -> Result<Vec<f32>, CoreError> {
        let response = self
            .client
            .post(format!("{}/embeddings", self.base_url))
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&EmbeddingRequest {
                input: &text,
                model: &self.model,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Embedding request failed: {}", e);
                CoreError::ExternalServiceError(format!("embedding request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Embedding API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "embedding API returned {}",
                status
            )));
        }

        let body: EmbeddingResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse embedding response: {}", e);
            CoreError::ExternalServiceError(format!("invalid embedding response: {}", e))
        })?;

        body.data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| CoreError::ExternalServiceError("empty embedding response".to_string()))
    }

    fn model_name(&self) -> String {
        self.model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> EmbeddingConfig {
        EmbeddingConfig {
            base_url: "https://api.openai.com/v1/".to_string(),
            api_key: api_key.map(str::to_string),
            model: "text-embedding-3-small".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_from_config_requires_key() {
        assert!(OpenAIEmbeddingClient::from_config(&config(None)).is_none());
        assert!(OpenAIEmbeddingClient::from_config(&config(Some("  "))).is_none());

        let client = OpenAIEmbeddingClient::from_config(&config(Some("sk-test"))).unwrap();
        assert_eq!(client.base_url, "https://api.openai.com/v1");
        assert_eq!(client.model_name(), "text-embedding-3-small");
    }

    #[test]
    fn test_response_shape() {
        let body: EmbeddingResponse =
            serde_json::from_str(r#"{"data": [{"embedding": [0.1, 0.2], "index": 0}]}"#).unwrap();
        assert_eq!(body.data[0].embedding, vec![0.1, 0.2]);
    }
}
