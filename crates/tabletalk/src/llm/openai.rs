//! OpenAI GPT API provider implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use super::message::ChatMessage;
use super::provider::{ChatConfig, ChatProvider};
use crate::error::{Result, TabletalkError};

/// OpenAI API endpoint.
const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI GPT provider.
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    api_url: String,
    config: ChatConfig,
}

impl OpenAIProvider {
    /// Create a provider with an explicit API key.
    pub fn new(api_key: impl Into<String>, config: ChatConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TabletalkError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            api_url: API_URL.to_string(),
            config,
        })
    }

    /// Create from the `OPENAI_API_KEY` environment variable.
    ///
    /// The key is read once at construction and stored on the provider.
    pub fn from_env(config: ChatConfig) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            TabletalkError::Config("OPENAI_API_KEY environment variable not set".to_string())
        })?;
        Self::new(api_key, config)
    }

    /// Point the provider at a different endpoint (gateways, tests).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| TabletalkError::Config(format!("Invalid API key: {}", e)))?,
        );
        Ok(headers)
    }
}

#[async_trait]
impl ChatProvider for OpenAIProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        model_override: Option<&str>,
    ) -> Result<String> {
        let model = model_override.unwrap_or(&self.config.model);
        let body = json!({
            "model": model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "messages": messages,
        });

        debug!(model, message_count = messages.len(), "sending chat completion request");
        let started = Instant::now();

        let response = self
            .client
            .post(&self.api_url)
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| TabletalkError::provider("openai", format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!(%status, "chat completion request rejected");

            if status == StatusCode::UNAUTHORIZED {
                return Err(TabletalkError::Config(
                    "OpenAI rejected the API key. Check OPENAI_API_KEY".to_string(),
                ));
            }
            return Err(TabletalkError::provider(
                "openai",
                format!("API error ({}): {}", status, error_text),
            ));
        }

        let api_response: OpenAIResponse = response.json().await.map_err(|e| {
            TabletalkError::provider("openai", format!("failed to parse API response: {}", e))
        })?;

        info!(
            model,
            latency_ms = started.elapsed().as_millis() as u64,
            "chat completion succeeded"
        );

        api_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| TabletalkError::provider("openai", "no choices in response"))
    }

    fn config(&self) -> &ChatConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "openai"
    }
}

/// OpenAI API response structure.
#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}
