//! Column classification.
//!
//! Each column is classified independently by majority vote over its
//! non-missing values, so one malformed column never changes how its
//! neighbors are treated.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::Dataset;

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap(),  // ISO date
        Regex::new(r"^\d{2}/\d{2}/\d{4}").unwrap(),  // US date
        Regex::new(r"^\d{2}-\d{2}-\d{4}").unwrap(),  // European date
        Regex::new(r"^\d{4}/\d{2}/\d{2}").unwrap(),  // Alt ISO
    ]
});

/// What kind of values a column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// A strict majority of non-missing values parse as numbers.
    Numeric,
    /// A strict majority of non-missing values look like calendar dates.
    Date,
    /// Everything else, including empty and all-missing columns.
    Text,
}

impl ColumnKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }
}

/// Per-column classification of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Column names, in dataset order.
    pub columns: Vec<String>,
    /// Kind of each column, parallel to `columns`.
    pub kinds: Vec<ColumnKind>,
}

impl Classification {
    /// Look up a column's kind by name.
    pub fn kind(&self, column: &str) -> Option<ColumnKind> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.kinds.get(index).copied()
    }

    /// Whether the named column is numeric.
    pub fn is_numeric(&self, column: &str) -> bool {
        self.kind(column).is_some_and(|k| k.is_numeric())
    }

    /// Numeric column names, in dataset order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &str> {
        self.of_kind(|k| k.is_numeric())
    }

    /// Non-numeric column names (text and dates), in dataset order.
    pub fn non_numeric_columns(&self) -> impl Iterator<Item = &str> {
        self.of_kind(|k| !k.is_numeric())
    }

    /// Date-like column names, in dataset order.
    pub fn date_columns(&self) -> impl Iterator<Item = &str> {
        self.of_kind(|k| k == ColumnKind::Date)
    }

    fn of_kind(&self, pred: impl Fn(ColumnKind) -> bool) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .zip(self.kinds.iter())
            .filter(move |(_, kind)| pred(**kind))
            .map(|(name, _)| name.as_str())
    }
}

/// Classify every column of a dataset.
pub fn classify(dataset: &Dataset) -> Classification {
    let kinds = (0..dataset.column_count())
        .map(|index| classify_column(dataset.column_values(index)))
        .collect();

    Classification {
        columns: dataset.columns.clone(),
        kinds,
    }
}

fn classify_column<'a>(values: impl Iterator<Item = &'a str>) -> ColumnKind {
    let mut non_missing = 0usize;
    let mut numeric = 0usize;
    let mut dates = 0usize;

    for value in values {
        if Dataset::is_missing(value) {
            continue;
        }
        non_missing += 1;
        if parse_numeric(value).is_some() {
            numeric += 1;
        } else if looks_like_date(value) {
            dates += 1;
        }
    }

    if non_missing == 0 {
        ColumnKind::Text
    } else if numeric * 2 > non_missing {
        ColumnKind::Numeric
    } else if dates * 2 > non_missing {
        ColumnKind::Date
    } else {
        ColumnKind::Text
    }
}

/// Parse a cell as a number.
///
/// Accepts whatever `f64` parsing accepts, minus non-finite values:
/// a cell of "inf" or "nan" is noise in tabular data, not a number.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let parsed: f64 = value.trim().parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

fn looks_like_date(value: &str) -> bool {
    DATE_PATTERNS.iter().any(|pattern| pattern.is_match(value.trim()))
}
