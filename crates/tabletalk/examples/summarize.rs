//! Example: Summarize a tabular data file with Tabletalk.
//!
//! Usage:
//!   cargo run --example summarize -- <file_path>
//!
//! Example:
//!   cargo run --example summarize -- test_data/sales.csv

use std::env;
use std::path::Path;

use tabletalk::{summarize, Reader, SummaryDepth, SummaryOptions};

fn main() -> tabletalk::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example summarize -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example summarize -- test_data/sales.csv");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Tabletalk Summary: {}", file_path);
    println!("{}", separator);
    println!();

    let (dataset, source) = Reader::new().read_file(path)?;

    println!("## Source Metadata");
    println!("  File: {}", source.file);
    println!("  Format: {}", source.format);
    println!("  Rows: {}", source.row_count);
    println!("  Columns: {}", source.column_count);
    println!();

    let options = SummaryOptions {
        depth: SummaryDepth::Describe,
        ..Default::default()
    };
    let summary = summarize(&dataset, &options);

    println!("## Columns ({} total)", summary.columns.len());
    for name in &summary.columns {
        let marker = if summary.numeric_columns.contains(name) {
            "numeric"
        } else {
            "text"
        };
        println!("  {:20} {}", name, marker);
    }
    println!();

    println!("## Context");
    println!("{}", summary.context);
    println!();

    println!("{}", separator);

    Ok(())
}
