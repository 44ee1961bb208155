//! Tabletalk: ask an LLM questions about small tabular datasets.
//!
//! The reproducible core is deterministic dataset summarization: a
//! dataset becomes a bounded textual context (columns, preview rows,
//! per-column statistics, a chart suggestion), which is assembled with
//! the conversation history and the question into an ordered message
//! list for a chat-completion provider.
//!
//! # Example
//!
//! ```
//! use tabletalk::{summarize, Dataset, SummaryOptions};
//!
//! let dataset = Dataset::new(
//!     vec!["a".to_string(), "b".to_string()],
//!     vec![
//!         vec!["1".to_string(), "x".to_string()],
//!         vec!["2".to_string(), "y".to_string()],
//!     ],
//! );
//!
//! let summary = summarize(&dataset, &SummaryOptions::default());
//! assert_eq!(summary.numeric_columns, vec!["a"]);
//! assert!(summary.context.contains("Columns: a, b"));
//! ```

pub mod chat;
pub mod error;
pub mod input;
pub mod llm;
pub mod summary;

pub use chat::{answer, ChatRequest};
pub use error::{Result, TabletalkError};
pub use input::{Dataset, Reader, ReaderConfig, Record, SourceInfo};
pub use llm::{
    assemble, build_provider, default_model, ChatConfig, ChatMessage, ChatProvider, MockBehavior,
    MockProvider, OllamaProvider, OpenAIProvider, ReplyLanguage, Role,
};
pub use summary::{
    chart_hint, classify, compute_statistics, render_context, summarize, ChartHint, ChartKind,
    Classification, ColumnKind, ColumnStats, DatasetSummary, SummaryDepth, SummaryOptions,
    DEFAULT_PREVIEW_LIMIT,
};
