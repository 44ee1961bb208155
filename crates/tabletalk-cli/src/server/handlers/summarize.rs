//! Summarize handler: deterministic dataset profile.

use axum::{extract::State, Json};
use serde::Deserialize;

use tabletalk::{summarize, Dataset, DatasetSummary, Record, SummaryDepth, SummaryOptions};

use crate::server::state::AppState;

/// Request to profile uploaded records.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    /// Uploaded rows as JSON records.
    #[serde(default)]
    pub data: Vec<Record>,

    /// Statistics depth override.
    #[serde(default)]
    pub depth: Option<SummaryDepth>,

    /// Preview row limit override.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// POST /api/summarize - profile records without asking a question.
///
/// Malformed cells and empty uploads degrade inside the summary; this
/// endpoint never rejects a well-formed request body.
pub async fn summarize_dataset(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Json<DatasetSummary> {
    let options = SummaryOptions {
        preview_limit: request.limit.unwrap_or(state.options.preview_limit),
        depth: request.depth.unwrap_or(state.options.depth),
    };

    let dataset = Dataset::from_records(&request.data);
    Json(summarize(&dataset, &options))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use tabletalk::{ColumnStats, MockProvider};

    use super::*;

    fn test_state() -> AppState {
        AppState::new(
            Arc::new(MockProvider::canned("unused")),
            SummaryOptions::default(),
        )
    }

    fn request(body: serde_json::Value) -> SummarizeRequest {
        serde_json::from_value(body).unwrap()
    }

    #[tokio::test]
    async fn test_summarize_records() {
        let req = request(json!({
            "data": [
                {"a": "1", "b": "x"},
                {"a": "2", "b": "y"},
                {"a": "3", "b": "z"},
            ],
        }));

        let Json(summary) = summarize_dataset(State(test_state()), Json(req)).await;

        assert_eq!(summary.columns, vec!["a", "b"]);
        assert_eq!(summary.numeric_columns, vec!["a"]);
        assert_eq!(summary.row_count, 3);
        assert!(summary.context.contains("a: count=3, sum=6, mean=2, min=1, max=3"));
    }

    #[tokio::test]
    async fn test_depth_override() {
        let req = request(json!({
            "data": [{"t": "x"}, {"t": "x"}, {"t": "y"}],
            "depth": "describe",
        }));

        let Json(summary) = summarize_dataset(State(test_state()), Json(req)).await;

        assert_eq!(
            summary.statistics["t"],
            ColumnStats::Text {
                count: 3,
                unique: 2,
                top: Some("x".to_string()),
                freq: 2,
            }
        );
    }

    #[tokio::test]
    async fn test_limit_override() {
        let req = request(json!({
            "data": [{"a": "1"}, {"a": "2"}, {"a": "3"}],
            "limit": 1,
        }));

        let Json(summary) = summarize_dataset(State(test_state()), Json(req)).await;

        assert_eq!(summary.preview.len(), 1);
        assert!(summary.context.contains("Preview (first 1 of 3 rows):"));
    }

    #[tokio::test]
    async fn test_empty_upload_is_not_an_error() {
        let req = request(json!({}));

        let Json(summary) = summarize_dataset(State(test_state()), Json(req)).await;

        assert_eq!(summary.row_count, 0);
        assert_eq!(summary.context, "No data was provided with this question.");
    }
}
