//! Chat-completion providers and prompt assembly.
//!
//! # Supported Providers
//!
//! - **OpenAI** - GPT models via API (requires `OPENAI_API_KEY`)
//! - **Ollama** - Local models, no API key needed (requires Ollama installed)
//! - **Mock** - Deterministic replies for tests and offline runs

mod message;
mod mock;
mod ollama;
mod openai;
mod prompt;
mod provider;

pub use message::{ChatMessage, Role};
pub use mock::{MockBehavior, MockProvider};
pub use ollama::OllamaProvider;
pub use openai::OpenAIProvider;
pub use prompt::{assemble, ReplyLanguage};
pub use provider::{build_provider, default_model, ChatConfig, ChatProvider};
