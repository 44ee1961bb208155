//! Chat provider trait and configuration.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::message::ChatMessage;
use super::mock::MockProvider;
use super::ollama::OllamaProvider;
use super::openai::OpenAIProvider;
use crate::error::{Result, TabletalkError};

/// Configuration for chat providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Model to use (e.g., "gpt-4").
    pub model: String,

    /// Maximum tokens in the reply.
    pub max_tokens: usize,

    /// Temperature for generation (0.0-1.0).
    pub temperature: f64,

    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            max_tokens: 1024,
            temperature: 0.2,
            timeout_secs: 60,
        }
    }
}

/// Trait for chat-completion providers.
///
/// Implementations must be thread-safe (Send + Sync) so one instance
/// can serve concurrent requests.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Submit an ordered message list and return the reply text.
    ///
    /// `model_override` replaces the configured model for this call
    /// only; the provider's own configuration is never mutated.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        model_override: Option<&str>,
    ) -> Result<String>;

    /// Get the configuration for this provider.
    fn config(&self) -> &ChatConfig;

    /// Get the name of this provider (for logging/debugging).
    fn name(&self) -> &str;
}

/// The model used when the caller names a provider but no model.
pub fn default_model(provider: &str) -> &'static str {
    match provider {
        "ollama" => "llama3.2",
        _ => "gpt-4",
    }
}

/// Build a provider by name: "openai", "ollama", or "mock".
///
/// Credentials are resolved here, once, and stored on the provider;
/// nothing re-reads the environment per request.
pub fn build_provider(name: &str, config: ChatConfig) -> Result<Arc<dyn ChatProvider>> {
    match name {
        "openai" => Ok(Arc::new(OpenAIProvider::from_env(config)?)),
        "ollama" => Ok(Arc::new(OllamaProvider::new(config)?)),
        "mock" => Ok(Arc::new(MockProvider::new(config))),
        other => Err(TabletalkError::Config(format!(
            "Unknown provider '{}'. Expected one of: openai, ollama, mock",
            other
        ))),
    }
}
