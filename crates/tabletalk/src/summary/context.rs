//! Dataset summary and context rendering.
//!
//! `summarize` ties classification, statistics, and the chart hint
//! together; `render_context` turns the result into the stable text
//! block that rides along with every question to the model.

use std::fmt::Write;

use indexmap::IndexMap;
use serde::Serialize;

use super::chart::{chart_hint, ChartHint, ChartKind};
use super::classify::{classify, Classification};
use super::stats::{compute_statistics, ColumnStats, SummaryDepth};
use crate::input::Dataset;

/// Default number of preview rows included in the context.
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// Knobs for dataset summarization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Maximum rows shown verbatim in the context.
    pub preview_limit: usize,
    /// Statistics depth.
    pub depth: SummaryDepth,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            depth: SummaryDepth::Aggregate,
        }
    }
}

/// Everything derived from one dataset for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    /// Column names, upload order.
    pub columns: Vec<String>,
    /// Names of columns classified as numeric.
    pub numeric_columns: Vec<String>,
    /// Total rows in the dataset.
    pub row_count: usize,
    /// The first rows, bounded by the preview limit.
    pub preview: Vec<Vec<String>>,
    /// Per-column statistics, column order.
    pub statistics: IndexMap<String, ColumnStats>,
    /// Optional chart suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_hint: Option<ChartHint>,
    /// The rendered context text.
    pub context: String,
}

/// Summarize a dataset.
///
/// Pure and total: malformed cells degrade their own column's numbers,
/// an empty dataset degrades to a "no data" context, and the same
/// input always produces the same output.
pub fn summarize(dataset: &Dataset, options: &SummaryOptions) -> DatasetSummary {
    let classification = classify(dataset);
    let statistics = compute_statistics(dataset, &classification, options.depth);
    let chart = chart_hint(dataset, &classification);
    let context = render_context(dataset, &classification, &statistics, chart.as_ref(), options);

    DatasetSummary {
        columns: classification.columns.clone(),
        numeric_columns: classification
            .numeric_columns()
            .map(String::from)
            .collect(),
        row_count: dataset.row_count(),
        preview: dataset.preview(options.preview_limit).to_vec(),
        statistics,
        chart_hint: chart,
        context,
    }
}

/// Render the context text for a summarized dataset.
pub fn render_context(
    dataset: &Dataset,
    classification: &Classification,
    statistics: &IndexMap<String, ColumnStats>,
    chart: Option<&ChartHint>,
    options: &SummaryOptions,
) -> String {
    if dataset.is_empty() {
        return "No data was provided with this question.".to_string();
    }

    let mut out = String::new();
    out.push_str("Here's a preview of your data:\n");

    let _ = writeln!(out, "Columns: {}", classification.columns.join(", "));

    let preview = dataset.preview(options.preview_limit);
    let _ = writeln!(
        out,
        "Preview (first {} of {} rows):",
        preview.len(),
        dataset.row_count()
    );
    for row in preview {
        let cells: Vec<String> = classification
            .columns
            .iter()
            .zip(row.iter())
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        let _ = writeln!(out, "  {}", cells.join(", "));
    }

    if !statistics.is_empty() {
        out.push_str("Summary stats:\n");
        for (name, stats) in statistics {
            let _ = writeln!(out, "  {}: {}", name, render_stats(stats));
        }
    }

    if let Some(hint) = chart {
        let _ = writeln!(out, "Suggested chart: {}", render_chart(hint));
    }

    // Drop the trailing newline so the question can follow cleanly.
    out.truncate(out.trim_end().len());
    out
}

fn render_stats(stats: &ColumnStats) -> String {
    match stats {
        ColumnStats::Aggregates {
            count,
            sum,
            mean,
            min,
            max,
        } => format!(
            "count={}, sum={}, mean={}, min={}, max={}",
            count,
            fmt_num(*sum),
            fmt_num(*mean),
            fmt_num(*min),
            fmt_num(*max)
        ),
        ColumnStats::Numeric {
            count,
            mean,
            std,
            min,
            q1,
            median,
            q3,
            max,
        } => format!(
            "count={}, mean={}, std={}, min={}, q1={}, median={}, q3={}, max={}",
            count,
            fmt_num(*mean),
            fmt_num(*std),
            fmt_num(*min),
            fmt_num(*q1),
            fmt_num(*median),
            fmt_num(*q3),
            fmt_num(*max)
        ),
        ColumnStats::Text {
            count,
            unique,
            top,
            freq,
        } => match top {
            Some(top) => format!("count={count}, unique={unique}, top={top}, freq={freq}"),
            None => format!("count={count}, unique={unique}"),
        },
        ColumnStats::NoData => "sum=no data, mean=no data, min=no data, max=no data".to_string(),
    }
}

fn render_chart(hint: &ChartHint) -> String {
    match (hint.kind, &hint.x, &hint.y) {
        (ChartKind::Pie, Some(x), _) => format!("pie (values={x})"),
        (ChartKind::Bar, Some(x), Some(y)) => format!("bar (x={x}, y={y})"),
        (ChartKind::Line, Some(x), Some(y)) => format!("line (x={x}, y={y})"),
        (ChartKind::Line, None, Some(y)) => format!("line (y={y})"),
        // Remaining shapes are never built by chart_hint.
        (kind, _, _) => format!("{kind:?}").to_lowercase(),
    }
}

/// Format a statistic with at most four decimal places, trimming
/// trailing zeros so whole numbers render bare.
fn fmt_num(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.4}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(columns: Vec<&str>, rows: Vec<Vec<&str>>) -> Dataset {
        Dataset::new(
            columns.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        )
    }

    fn abc_dataset() -> Dataset {
        dataset(
            vec!["a", "b"],
            vec![vec!["1", "x"], vec!["2", "y"], vec!["3", "z"]],
        )
    }

    #[test]
    fn test_summary_shape() {
        let data = abc_dataset();
        let summary = summarize(&data, &SummaryOptions::default());

        assert_eq!(summary.columns, vec!["a", "b"]);
        assert_eq!(summary.numeric_columns, vec!["a"]);
        assert_eq!(summary.row_count, 3);
        assert_eq!(summary.preview.len(), 3);
        assert!(summary.statistics.contains_key("a"));
        assert!(!summary.statistics.contains_key("b"));
        assert!(summary.chart_hint.is_some());
    }

    #[test]
    fn test_context_content() {
        let data = abc_dataset();
        let summary = summarize(&data, &SummaryOptions::default());

        assert!(summary.context.starts_with("Here's a preview of your data:"));
        assert!(summary.context.contains("Columns: a, b"));
        assert!(summary.context.contains("Preview (first 3 of 3 rows):"));
        assert!(summary.context.contains("a=1, b=x"));
        assert!(summary
            .context
            .contains("a: count=3, sum=6, mean=2, min=1, max=3"));
        assert!(summary.context.contains("Suggested chart: bar (x=b, y=a)"));
    }

    #[test]
    fn test_preview_limit_respected() {
        let data = abc_dataset();
        let summary = summarize(
            &data,
            &SummaryOptions {
                preview_limit: 2,
                ..Default::default()
            },
        );

        assert_eq!(summary.preview.len(), 2);
        assert!(summary.context.contains("Preview (first 2 of 3 rows):"));
        assert!(!summary.context.contains("a=3"));
    }

    #[test]
    fn test_empty_dataset_context() {
        let summary = summarize(&Dataset::empty(), &SummaryOptions::default());

        assert_eq!(summary.context, "No data was provided with this question.");
        assert!(summary.columns.is_empty());
        assert!(summary.statistics.is_empty());
        assert_eq!(summary.chart_hint, None);
    }

    #[test]
    fn test_render_is_deterministic() {
        let data = dataset(
            vec!["n", "t"],
            vec![vec!["1.25", "x"], vec!["7", "y"], vec!["-3", "x"]],
        );
        let options = SummaryOptions {
            preview_limit: 2,
            depth: SummaryDepth::Describe,
        };

        let first = summarize(&data, &options);
        let second = summarize(&data, &options);
        assert_eq!(first.context, second.context);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(2.0), "2");
        assert_eq!(fmt_num(-3.0), "-3");
        assert_eq!(fmt_num(31.2), "31.2");
        assert_eq!(fmt_num(2.123456), "2.1235");
        assert_eq!(fmt_num(0.5), "0.5");
    }
}
