//! Dataset representation and record ingestion.

use indexmap::IndexMap;
use serde_json::Value;

/// A single uploaded record: column name mapped to a raw cell value.
///
/// Key order is the order the columns appeared in the request body.
pub type Record = IndexMap<String, Value>;

/// An uploaded tabular dataset.
///
/// Cells are normalized to text at ingestion; all downstream analysis
/// (classification, statistics, rendering) works on these strings.
/// Row order is exactly the upload order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Column names, first-seen order.
    pub columns: Vec<String>,
    /// Row data as strings (row-major order). Missing cells are empty.
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Create a dataset from pre-normalized columns and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// An empty dataset.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Build a dataset from uploaded JSON records.
    ///
    /// The column list is the union of keys across all records, in
    /// first-seen order. A key absent from a record, or mapped to
    /// JSON null, becomes an empty cell.
    pub fn from_records(records: &[Record]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in records {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|col| record.get(col).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `min(k, row_count)` rows, in original order.
    pub fn preview(&self, k: usize) -> &[Vec<String>] {
        &self.rows[..k.min(self.rows.len())]
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(|s| s.as_str()).unwrap_or(""))
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Check if a cell represents a missing value.
    pub fn is_missing(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("na")
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
            || trimmed.eq_ignore_ascii_case("nil")
            || trimmed == "."
            || trimmed == "-"
    }
}

/// Render a JSON cell value as text.
///
/// Strings pass through verbatim; null becomes an empty (missing) cell;
/// nested structures get their compact JSON form.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
