//! Chart-type suggestion.
//!
//! A small deterministic hint the frontend can use to pre-select a
//! chart. Nothing here renders anything.

use serde::Serialize;

use super::classify::{Classification, ColumnKind};
use crate::input::Dataset;

/// Suggested chart family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// A chart suggestion: which kind, and which columns to put on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartHint {
    pub kind: ChartKind,
    /// Label/category axis. Absent for a line over the row index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    /// Value axis. Absent for pie charts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
}

/// Suggest a chart for a classified dataset.
///
/// With a numeric column present, the first numeric column becomes the
/// value axis; the label axis prefers a date-like column (drawn as a
/// line) over a plain text column (drawn as bars). Numeric-only data
/// gets a line over the row index. Data without numeric columns gets a
/// pie over the first column's value frequencies.
pub fn chart_hint(dataset: &Dataset, classification: &Classification) -> Option<ChartHint> {
    if dataset.is_empty() {
        return None;
    }

    if let Some(y) = classification.numeric_columns().next() {
        let date_x = classification.date_columns().next();
        let x = date_x.or_else(|| {
            classification
                .columns
                .iter()
                .zip(classification.kinds.iter())
                .find(|(_, kind)| !kind.is_numeric())
                .map(|(name, _)| name.as_str())
        });

        let kind = match x {
            Some(col) if classification.kind(col) == Some(ColumnKind::Date) => ChartKind::Line,
            Some(_) => ChartKind::Bar,
            None => ChartKind::Line,
        };

        return Some(ChartHint {
            kind,
            x: x.map(String::from),
            y: Some(y.to_string()),
        });
    }

    classification.columns.first().map(|first| ChartHint {
        kind: ChartKind::Pie,
        x: Some(first.clone()),
        y: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::classify::classify;

    fn dataset(columns: Vec<&str>, rows: Vec<Vec<&str>>) -> Dataset {
        Dataset::new(
            columns.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        )
    }

    fn hint(data: &Dataset) -> Option<ChartHint> {
        chart_hint(data, &classify(data))
    }

    #[test]
    fn test_text_and_numeric_suggests_bar() {
        let data = dataset(
            vec!["city", "sales"],
            vec![vec!["NYC", "10"], vec!["LA", "20"]],
        );
        assert_eq!(
            hint(&data),
            Some(ChartHint {
                kind: ChartKind::Bar,
                x: Some("city".to_string()),
                y: Some("sales".to_string()),
            })
        );
    }

    #[test]
    fn test_numeric_only_suggests_line() {
        let data = dataset(vec!["a", "b"], vec![vec!["1", "4"], vec!["2", "5"]]);
        assert_eq!(
            hint(&data),
            Some(ChartHint {
                kind: ChartKind::Line,
                x: None,
                y: Some("a".to_string()),
            })
        );
    }

    #[test]
    fn test_date_axis_suggests_line() {
        let data = dataset(
            vec!["day", "visits"],
            vec![vec!["2024-01-01", "7"], vec!["2024-01-02", "9"]],
        );
        assert_eq!(
            hint(&data),
            Some(ChartHint {
                kind: ChartKind::Line,
                x: Some("day".to_string()),
                y: Some("visits".to_string()),
            })
        );
    }

    #[test]
    fn test_non_numeric_only_suggests_pie() {
        let data = dataset(vec!["color"], vec![vec!["red"], vec!["blue"]]);
        assert_eq!(
            hint(&data),
            Some(ChartHint {
                kind: ChartKind::Pie,
                x: Some("color".to_string()),
                y: None,
            })
        );
    }

    #[test]
    fn test_empty_dataset_has_no_hint() {
        let data = Dataset::empty();
        assert_eq!(hint(&data), None);
    }
}
