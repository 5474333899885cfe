//! Hosted inference client module
//!
//! Encapsulates all summarization engine calls. Each `EngineMode` maps to one
//! model and one payload field; nothing else about the modes is assumed here.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{info, warn};

use super::prompt_builder::BriefPayload;
use crate::core::config::AppConfig;
use crate::core::models::EngineMode;
use crate::errors::BriefError;

const SUMMARY_MAX_NEW_TOKENS: u32 = 150;
const GENERATION_MAX_NEW_TOKENS: u32 = 400;
const GENERATION_TEMPERATURE: f32 = 0.2;

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Anything that can turn an assembled payload into brief text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// # Errors
    ///
    /// Returns `BriefError::EngineUnavailable` when the engine cannot be
    /// reached or returns no usable text.
    async fn summarize(&self, payload: &BriefPayload, mode: EngineMode)
    -> Result<String, BriefError>;
}

/// Client for the Hugging Face Inference API.
pub struct InferenceClient {
    api_token: Option<String>,
    base_url: String,
    summarizer_model: String,
    generator_model: String,
    timeout: Duration,
}

impl InferenceClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_token: config.hf_token.clone(),
            base_url: config.inference_base_url.trim_end_matches('/').to_string(),
            summarizer_model: config.summarizer_model.clone(),
            generator_model: config.generator_model.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// Model id, request body and response field for a mode.
    fn request_for(&self, payload: &BriefPayload, mode: EngineMode) -> (&str, Value, &'static str) {
        match mode {
            EngineMode::SummarizationOnly => (
                self.summarizer_model.as_str(),
                json!({
                    "inputs": payload.sections,
                    "parameters": { "max_new_tokens": SUMMARY_MAX_NEW_TOKENS }
                }),
                "summary_text",
            ),
            EngineMode::Fast => (
                self.generator_model.as_str(),
                json!({
                    "inputs": payload.prompt,
                    "parameters": {
                        "max_new_tokens": GENERATION_MAX_NEW_TOKENS,
                        "temperature": GENERATION_TEMPERATURE
                    }
                }),
                "generated_text",
            ),
        }
    }
}

#[async_trait]
impl Summarizer for InferenceClient {
    #[tracing::instrument(level = "info", skip(self, payload, mode), fields(mode = %mode))]
    async fn summarize(
        &self,
        payload: &BriefPayload,
        mode: EngineMode,
    ) -> Result<String, BriefError> {
        let Some(token) = self.api_token.as_deref() else {
            return Err(BriefError::EngineUnavailable(
                "No inference API token configured (set HF_TOKEN)".to_string(),
            ));
        };

        let (model_id, request_body, field) = self.request_for(payload, mode);

        #[cfg(feature = "debug-logs")]
        info!("Using inference request body:\n{}", request_body);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %model_id,
            estimated_input_tokens = estimate_tokens(request_body["inputs"].as_str().unwrap_or_default()),
            "Calling inference API"
        );

        let client = Client::builder().timeout(self.timeout).build()?;

        let response = client
            .post(format!("{}/{}", self.base_url, model_id))
            .bearer_auth(token)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            warn!(status = status.as_u16(), "Inference API returned an error status");
            return Err(BriefError::EngineUnavailable(format!(
                "Inference API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            BriefError::EngineUnavailable(format!("Failed to parse inference response: {e}"))
        })?;

        extract_text(&response_json, field)
    }
}

/// Pulls `field` out of `[{field: ..}]` or `{field: ..}`.
///
/// # Errors
///
/// Returns `BriefError::EngineUnavailable` if the field is missing or blank.
pub fn extract_text(response_json: &Value, field: &str) -> Result<String, BriefError> {
    let item = match response_json {
        Value::Array(items) => items.first(),
        other => Some(other),
    };

    let text = item
        .and_then(|v| v.get(field))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty());

    if let Some(text) = text {
        return Ok(text.to_string());
    }

    let reason = response_json
        .get("error")
        .and_then(Value::as_str)
        .map_or_else(|| format!("No {field} in response"), |e| format!("Engine error: {e}"));

    Err(BriefError::EngineUnavailable(reason))
}
