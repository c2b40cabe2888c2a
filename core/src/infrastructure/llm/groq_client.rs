use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    llm::{
        ports::LLMClient,
        value_objects::{ChatMessage, CompletionRequest},
    },
};

/// Client for an OpenAI-compatible chat completions endpoint (Groq by default).
#[derive(Debug, Clone)]
pub struct GroqLLMClient {
    api_key: String,
    base_url: String,
    model_name: String,
    timeout: Duration,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GroqLLMClient {
    pub fn new(api_key: String, base_url: String, model_name: String, timeout: Duration) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_name,
            timeout,
            client: Client::new(),
        }
    }

    pub fn from_config(config: &LLMConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn body<'a>(&'a self, request: &'a CompletionRequest) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model_name,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

impl LLMClient for GroqLLMClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CoreError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&self.body(&request))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Completion request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Completion API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse completion response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        // An empty answer is left to JSON extraction to reject.
        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn client() -> GroqLLMClient {
        GroqLLMClient::new(
            "key".to_string(),
            "https://api.groq.com/openai/v1/".to_string(),
            "llama-3.1-8b-instant".to_string(),
            Duration::from_secs(30),
        )
    }

    #[test]
    fn test_request_body_serialization() {
        let client = client();
        let request = CompletionRequest::new("system", "prompt")
            .with_temperature(1.0)
            .with_max_tokens(1500);

        let body = serde_json::to_value(client.body(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "llama-3.1-8b-instant",
                "messages": [
                    {"role": "system", "content": "system"},
                    {"role": "user", "content": "prompt"}
                ],
                "temperature": 1.0,
                "max_tokens": 1500
            })
        );
    }

    #[test]
    fn test_optional_sampling_fields_are_omitted() {
        let client = client();
        let request = CompletionRequest::new("system", "prompt");

        let body = serde_json::to_value(client.body(&request)).unwrap();
        assert!(body.get("temperature").is_none());
        assert!(body.get("max_tokens").is_none());
        assert_eq!(client.base_url, "https://api.groq.com/openai/v1");
    }

    #[test]
    fn test_response_shape() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": "{}"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.choices[0].message.content.as_deref(), Some("{}"));
    }
}
