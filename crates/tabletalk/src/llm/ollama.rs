//! Ollama local LLM provider implementation.
//!
//! Ollama allows running LLMs locally without API keys.
//! Install from: https://ollama.ai

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use super::message::ChatMessage;
use super::provider::{ChatConfig, ChatProvider};
use crate::error::{Result, TabletalkError};

/// Default Ollama host.
const DEFAULT_HOST: &str = "http://localhost:11434";

/// Ollama local LLM provider.
pub struct OllamaProvider {
    client: Client,
    api_url: String,
    config: ChatConfig,
}

impl OllamaProvider {
    /// Create a provider talking to `OLLAMA_HOST`, or localhost if unset.
    ///
    /// Make sure the configured model has been pulled, e.g.
    /// `ollama pull llama3.2`.
    pub fn new(config: ChatConfig) -> Result<Self> {
        let host = std::env::var("OLLAMA_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        Self::with_host(host, config)
    }

    /// Create a provider with an explicit host.
    pub fn with_host(host: impl Into<String>, config: ChatConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TabletalkError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let api_url = format!("{}/api/chat", host.into().trim_end_matches('/'));

        Ok(Self {
            client,
            api_url,
            config,
        })
    }
}

#[async_trait]
impl ChatProvider for OllamaProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        model_override: Option<&str>,
    ) -> Result<String> {
        let model = model_override.unwrap_or(&self.config.model);
        let body = json!({
            "model": model,
            "stream": false,
            "options": {
                "temperature": self.config.temperature,
                "num_predict": self.config.max_tokens,
            },
            "messages": messages,
        });

        debug!(model, message_count = messages.len(), "sending chat request to ollama");
        let started = Instant::now();

        let response = self
            .client
            .post(&self.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    TabletalkError::Config(
                        "Failed to connect to Ollama. Is it running? Start with: ollama serve"
                            .to_string(),
                    )
                } else {
                    TabletalkError::provider("ollama", format!("request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            // Check for model not found error
            if error_text.contains("not found") {
                return Err(TabletalkError::Config(format!(
                    "Model '{}' not found. Pull it with: ollama pull {}",
                    model, model
                )));
            }

            return Err(TabletalkError::provider(
                "ollama",
                format!("API error ({}): {}", status, error_text),
            ));
        }

        let api_response: OllamaResponse = response.json().await.map_err(|e| {
            TabletalkError::provider("ollama", format!("failed to parse response: {}", e))
        })?;

        info!(
            model,
            latency_ms = started.elapsed().as_millis() as u64,
            "chat completion succeeded"
        );

        Ok(api_response.message.content)
    }

    fn config(&self) -> &ChatConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

/// Ollama API response structure.
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: OllamaMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: String,
}
