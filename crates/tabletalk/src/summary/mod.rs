//! Deterministic dataset summarization for prompt construction.

mod chart;
mod classify;
mod context;
mod stats;

pub use chart::{chart_hint, ChartHint, ChartKind};
pub use classify::{classify, parse_numeric, Classification, ColumnKind};
pub use context::{
    render_context, summarize, DatasetSummary, SummaryOptions, DEFAULT_PREVIEW_LIMIT,
};
pub use stats::{compute_statistics, ColumnStats, SummaryDepth};
