//! Column statistics.
//!
//! Numeric columns are folded through a single-pass accumulator:
//! Welford's algorithm for mean/variance, running sum/min/max, and a
//! reservoir sample for quartiles so memory stays O(1) in row count.
//! The reservoir uses a fixed seed, which keeps summaries reproducible
//! for the same input.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::classify::{parse_numeric, Classification};
use crate::input::Dataset;

/// Reservoir size for quartile estimation. Datasets at or below this
/// many parseable values per column get exact quartiles.
const RESERVOIR_CAPACITY: usize = 1000;

const RESERVOIR_SEED: u64 = 0x5eed_7ab1e;

/// How much statistical detail to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryDepth {
    /// Sum, mean, min, max for numeric columns only.
    #[default]
    Aggregate,
    /// Full profile for every column.
    Describe,
}

/// Statistics for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnStats {
    /// Minimal aggregates over a numeric column's parseable values.
    Aggregates {
        count: usize,
        sum: f64,
        mean: f64,
        min: f64,
        max: f64,
    },
    /// Full profile of a numeric column.
    Numeric {
        count: usize,
        mean: f64,
        std: f64,
        min: f64,
        q1: f64,
        median: f64,
        q3: f64,
        max: f64,
    },
    /// Profile of a non-numeric column: cardinality and modal value.
    Text {
        count: usize,
        unique: usize,
        top: Option<String>,
        freq: usize,
    },
    /// A column treated as numeric that has no parseable values.
    NoData,
}

/// Compute statistics for a classified dataset.
///
/// At [`SummaryDepth::Aggregate`] only numeric columns appear; at
/// [`SummaryDepth::Describe`] every column gets an entry. Missing and
/// unparseable cells are excluded from numeric aggregates, never
/// treated as zero.
pub fn compute_statistics(
    dataset: &Dataset,
    classification: &Classification,
    depth: SummaryDepth,
) -> IndexMap<String, ColumnStats> {
    let mut statistics = IndexMap::new();

    for (index, name) in classification.columns.iter().enumerate() {
        let numeric = classification
            .kinds
            .get(index)
            .is_some_and(|k| k.is_numeric());

        match depth {
            SummaryDepth::Aggregate => {
                if numeric {
                    statistics.insert(name.clone(), aggregate_column(dataset, index));
                }
            }
            SummaryDepth::Describe => {
                let stats = if numeric {
                    describe_numeric_column(dataset, index)
                } else {
                    describe_text_column(dataset, index)
                };
                statistics.insert(name.clone(), stats);
            }
        }
    }

    statistics
}

fn fold_numeric(dataset: &Dataset, index: usize) -> NumericAccumulator {
    let mut acc = NumericAccumulator::new(RESERVOIR_CAPACITY);
    for value in dataset.column_values(index) {
        if let Some(parsed) = parse_numeric(value) {
            acc.add(parsed);
        }
    }
    acc
}

fn aggregate_column(dataset: &Dataset, index: usize) -> ColumnStats {
    let acc = fold_numeric(dataset, index);
    if acc.count == 0 {
        return ColumnStats::NoData;
    }

    ColumnStats::Aggregates {
        count: acc.count,
        sum: acc.sum,
        mean: acc.mean,
        min: acc.min,
        max: acc.max,
    }
}

fn describe_numeric_column(dataset: &Dataset, index: usize) -> ColumnStats {
    let mut acc = fold_numeric(dataset, index);
    if acc.count == 0 {
        return ColumnStats::NoData;
    }

    ColumnStats::Numeric {
        count: acc.count,
        mean: acc.mean,
        std: acc.std(),
        min: acc.min,
        q1: acc.percentile(25.0),
        median: acc.percentile(50.0),
        q3: acc.percentile(75.0),
        max: acc.max,
    }
}

fn describe_text_column(dataset: &Dataset, index: usize) -> ColumnStats {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    let mut count = 0usize;

    for value in dataset.column_values(index) {
        if Dataset::is_missing(value) {
            continue;
        }
        count += 1;
        *counts.entry(value).or_insert(0) += 1;
    }

    // Modal value; ties go to the first occurrence in row order.
    let mut top: Option<(&str, usize)> = None;
    for (value, &n) in &counts {
        if top.is_none_or(|(_, best)| n > best) {
            top = Some((value, n));
        }
    }

    ColumnStats::Text {
        count,
        unique: counts.len(),
        top: top.map(|(value, _)| value.to_string()),
        freq: top.map_or(0, |(_, n)| n),
    }
}

/// Single-pass accumulator for numeric aggregates.
#[derive(Debug, Clone)]
struct NumericAccumulator {
    count: usize,
    sum: f64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
    reservoir: Vec<f64>,
    reservoir_capacity: usize,
    rng: fastrand::Rng,
}

impl NumericAccumulator {
    fn new(reservoir_capacity: usize) -> Self {
        Self {
            count: 0,
            sum: 0.0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            reservoir: Vec::with_capacity(reservoir_capacity),
            reservoir_capacity,
            rng: fastrand::Rng::with_seed(RESERVOIR_SEED),
        }
    }

    /// Add a value using Welford's online algorithm.
    fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }

        if self.reservoir.len() < self.reservoir_capacity {
            self.reservoir.push(value);
        } else {
            // Random replacement with decreasing probability
            let j = self.rng.usize(0..self.count);
            if j < self.reservoir_capacity {
                self.reservoir[j] = value;
            }
        }
    }

    /// Sample variance.
    fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    fn std(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Approximate percentile from the reservoir sample.
    fn percentile(&mut self, p: f64) -> f64 {
        if self.reservoir.is_empty() {
            return 0.0;
        }

        self.reservoir
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let idx = ((p / 100.0) * (self.reservoir.len() - 1) as f64).round() as usize;
        self.reservoir[idx.min(self.reservoir.len() - 1)]
    }
}
