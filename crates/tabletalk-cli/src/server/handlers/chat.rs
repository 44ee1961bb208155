//! Chat handler: answer a question about uploaded records.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;

use tabletalk::{answer, ChatRequest};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Response to a chat request.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    /// Model answer, or an error description prefixed with "Error: ".
    pub reply: String,
}

/// POST /api/chat - answer a question about the uploaded records.
///
/// Provider failures still return 200; the failure text arrives in
/// `reply`, prefixed with "Error: ". Only a blank question is rejected
/// with an error status.
pub async fn ask_question(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    if request.question.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Question must not be empty".to_string(),
        ));
    }

    let reply = match answer(state.provider.as_ref(), &state.options, &request).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "chat request failed");
            format!("Error: {e}")
        }
    };

    Ok(Json(ChatReply { reply }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use tabletalk::{MockProvider, SummaryOptions};

    use super::*;

    fn state_with(provider: MockProvider) -> AppState {
        AppState::new(Arc::new(provider), SummaryOptions::default())
    }

    fn request(body: serde_json::Value) -> ChatRequest {
        serde_json::from_value(body).unwrap()
    }

    #[tokio::test]
    async fn test_reply_comes_from_provider() {
        let state = state_with(MockProvider::canned("There are 3 rows."));
        let req = request(json!({
            "question": "How many rows?",
            "data": [{"a": "1"}, {"a": "2"}, {"a": "3"}],
        }));

        let Json(reply) = ask_question(State(state), Json(req)).await.unwrap();
        assert_eq!(reply.reply, "There are 3 rows.");
    }

    #[tokio::test]
    async fn test_blank_question_rejected() {
        let state = state_with(MockProvider::canned("unused"));
        let req = request(json!({"question": "   "}));

        let result = ask_question(State(state), Json(req)).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_provider_failure_becomes_error_reply() {
        let state = state_with(MockProvider::failing("rate limited"));
        let req = request(json!({"question": "hello"}));

        let Json(reply) = ask_question(State(state), Json(req)).await.unwrap();
        assert!(reply.reply.starts_with("Error: "));
        assert!(reply.reply.contains("rate limited"));
    }

    #[tokio::test]
    async fn test_dataset_context_reaches_provider() {
        let state = state_with(MockProvider::echoing());
        let req = request(json!({
            "question": "what columns?",
            "data": [{"city": "Oslo", "sales": "10"}],
        }));

        let Json(reply) = ask_question(State(state), Json(req)).await.unwrap();
        assert!(reply.reply.contains("Columns: city, sales"));
        assert!(reply.reply.ends_with("what columns?"));
    }
}
