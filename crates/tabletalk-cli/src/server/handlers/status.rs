//! Status handler.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::state::AppState;

/// Service health and configuration snapshot.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub provider: String,
    pub model: String,
    pub preview_limit: usize,
    pub version: String,
}

/// GET /api/status - report the running configuration.
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        provider: state.provider.name().to_string(),
        model: state.provider.config().model.clone(),
        preview_limit: state.options.preview_limit,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tabletalk::{ChatConfig, MockProvider, SummaryOptions};

    use super::*;

    #[tokio::test]
    async fn test_status_reflects_configuration() {
        let config = ChatConfig {
            model: "llama3.2".to_string(),
            ..Default::default()
        };
        let state = AppState::new(
            Arc::new(MockProvider::new(config)),
            SummaryOptions {
                preview_limit: 7,
                ..Default::default()
            },
        );

        let Json(status) = get_status(State(state)).await;

        assert_eq!(status.status, "ok");
        assert_eq!(status.provider, "mock");
        assert_eq!(status.model, "llama3.2");
        assert_eq!(status.preview_limit, 7);
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
    }
}
