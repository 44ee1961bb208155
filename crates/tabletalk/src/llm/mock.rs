//! Mock chat provider for testing and offline runs.

use async_trait::async_trait;

use super::message::ChatMessage;
use super::provider::{ChatConfig, ChatProvider};
use crate::error::{Result, TabletalkError};

/// How the mock responds.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return this reply.
    Canned(String),
    /// Echo the content of the last message it was given.
    EchoLast,
    /// Fail with a provider error carrying this message.
    Fail(String),
}

/// Chat provider that returns predictable responses.
pub struct MockProvider {
    config: ChatConfig,
    behavior: MockBehavior,
}

impl MockProvider {
    /// Create a mock that answers every question the same way.
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            behavior: MockBehavior::Canned(
                "This is a mock reply. Configure a real provider for live answers.".to_string(),
            ),
        }
    }

    /// Create with explicit behavior.
    pub fn with_behavior(config: ChatConfig, behavior: MockBehavior) -> Self {
        Self { config, behavior }
    }

    /// A mock that always replies with `reply`.
    pub fn canned(reply: impl Into<String>) -> Self {
        Self::with_behavior(ChatConfig::default(), MockBehavior::Canned(reply.into()))
    }

    /// A mock that echoes the final message back, useful for asserting
    /// what actually reached the provider.
    pub fn echoing() -> Self {
        Self::with_behavior(ChatConfig::default(), MockBehavior::EchoLast)
    }

    /// A mock that always fails.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_behavior(ChatConfig::default(), MockBehavior::Fail(message.into()))
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(ChatConfig::default())
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _model_override: Option<&str>,
    ) -> Result<String> {
        match &self.behavior {
            MockBehavior::Canned(reply) => Ok(reply.clone()),
            MockBehavior::EchoLast => Ok(messages
                .last()
                .map(|m| m.content.clone())
                .unwrap_or_default()),
            MockBehavior::Fail(message) => Err(TabletalkError::provider("mock", message.clone())),
        }
    }

    fn config(&self) -> &ChatConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}
