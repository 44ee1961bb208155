//! Summarize command - profile a data file and print the result.

use std::path::PathBuf;

use colored::Colorize;
use tabletalk::{summarize, Reader, SummaryOptions};

use crate::cli::DepthChoice;

pub fn run(
    file: PathBuf,
    depth: DepthChoice,
    limit: usize,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let (dataset, source) = Reader::new().read_file(&file)?;

    if verbose && !json_output {
        println!(
            "{} {} ({} rows, {} columns, {})",
            "Loaded".cyan().bold(),
            source.file.white(),
            source.row_count,
            source.column_count,
            source.format
        );
        println!();
    }

    let options = SummaryOptions {
        preview_limit: limit,
        depth: depth.into(),
    };
    let summary = summarize(&dataset, &options);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} {}",
            "Summary for".cyan().bold(),
            source.file.white().bold()
        );
        println!();

        println!("{}", "Columns:".yellow().bold());
        for name in &summary.columns {
            let kind = if summary.numeric_columns.contains(name) {
                "numeric".green()
            } else {
                "text".blue()
            };
            println!("  {:20} {}", name, kind);
        }
        println!();

        println!("{}", "Context:".yellow().bold());
        println!("{}", summary.context);
    }

    Ok(())
}
