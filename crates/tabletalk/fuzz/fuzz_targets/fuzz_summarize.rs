//! Fuzz target for dataset summarization.
//!
//! This fuzzer tests that summarization:
//! 1. Never panics on arbitrary cell content
//! 2. Handles ragged rows and pathological column names
//! 3. Keeps the preview within its bound at every depth

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tabletalk::{summarize, Dataset, SummaryDepth, SummaryOptions};

#[derive(Arbitrary, Debug)]
struct FuzzTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    preview_limit: u8,
}

fuzz_target!(|table: FuzzTable| {
    // Keep tables small so individual runs stay fast
    if table.columns.len() > 32 || table.rows.len() > 256 {
        return;
    }

    let dataset = Dataset::new(table.columns, table.rows);

    for depth in [SummaryDepth::Aggregate, SummaryDepth::Describe] {
        let options = SummaryOptions {
            preview_limit: table.preview_limit as usize,
            depth,
        };
        let summary = summarize(&dataset, &options);
        assert!(summary.preview.len() <= options.preview_limit);
        assert!(summary.preview.len() <= summary.row_count);
    }
});
