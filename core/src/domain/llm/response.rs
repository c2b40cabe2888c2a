use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```json").expect("valid fence pattern"));

/// Pulls the outermost JSON object out of free-form model output.
///
/// Code fences are stripped, then the text between the first `{` and the
/// last `}` is parsed.
pub fn extract_json(raw: &str) -> Result<serde_json::Value, CoreError> {
    let text = JSON_FENCE.replace_all(raw, "").replace("```", "");
    let text = text.trim();

    let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
        error!("No JSON object found in LLM response");
        return Err(CoreError::MalformedResponse(
            "no JSON object found in response".to_string(),
        ));
    };

    if end < start {
        return Err(CoreError::MalformedResponse(
            "no JSON object found in response".to_string(),
        ));
    }

    serde_json::from_str(&text[start..=end]).map_err(|e| {
        error!("Failed to parse LLM response: {}", e);
        CoreError::MalformedResponse(format!("invalid JSON: {}", e))
    })
}

/// [`extract_json`] followed by a typed decode.
pub fn decode_json<T>(raw: &str) -> Result<T, CoreError>
where
    T: DeserializeOwned,
{
    let value = extract_json(raw)?;

    serde_json::from_value(value).map_err(|e| {
        error!("LLM response does not match the expected shape: {}", e);
        CoreError::MalformedResponse(format!("unexpected shape: {}", e))
    })
}
