//! The question-answering pipeline.
//!
//! One call ties the pieces together: normalize the uploaded records,
//! summarize them, assemble the prompt, and ask the provider. Only the
//! provider call can fail; how that failure is surfaced is the
//! caller's decision.

use serde::Deserialize;
use tracing::debug;

use crate::input::{Dataset, Record};
use crate::llm::{assemble, ChatMessage, ChatProvider, ReplyLanguage};
use crate::summary::{summarize, SummaryOptions};
use crate::error::Result;

/// A question about an uploaded dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The natural-language question.
    pub question: String,

    /// The uploaded records.
    #[serde(default)]
    pub data: Vec<Record>,

    /// Prior conversation turns, oldest first.
    #[serde(default)]
    pub history: Vec<ChatMessage>,

    /// Optional reply-language hint ("ar", "en").
    #[serde(default)]
    pub language: Option<String>,

    /// Optional per-request model override.
    #[serde(default)]
    pub model: Option<String>,
}

/// Answer a question about a dataset.
pub async fn answer(
    provider: &dyn ChatProvider,
    options: &SummaryOptions,
    request: &ChatRequest,
) -> Result<String> {
    let dataset = Dataset::from_records(&request.data);
    let summary = summarize(&dataset, options);
    let language = ReplyLanguage::from_hint(request.language.as_deref());
    let messages = assemble(language, &summary.context, &request.history, &request.question);

    debug!(
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        history = request.history.len(),
        language = ?language,
        "assembled prompt"
    );

    let reply = provider
        .complete(&messages, request.model.as_deref())
        .await?;
    Ok(reply.trim().to_string())
}
