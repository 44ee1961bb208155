//! Ask command - one-shot question about a data file.

use std::path::PathBuf;

use colored::Colorize;
use tabletalk::{
    assemble, build_provider, default_model, summarize, ChatConfig, Reader, ReplyLanguage,
    SummaryOptions,
};

use crate::cli::ProviderChoice;

pub fn run(
    file: PathBuf,
    question: String,
    language: Option<String>,
    provider: ProviderChoice,
    model: Option<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }
    if question.trim().is_empty() {
        return Err("Question must not be empty".into());
    }

    let (dataset, source) = Reader::new().read_file(&file)?;

    if verbose {
        println!(
            "{} {} ({} rows, {} columns)",
            "Loaded".cyan().bold(),
            source.file.white(),
            source.row_count,
            source.column_count
        );
        println!();
    }

    let config = ChatConfig {
        model: model.unwrap_or_else(|| default_model(provider.as_str()).to_string()),
        ..Default::default()
    };
    let chat_provider = build_provider(provider.as_str(), config)?;

    let summary = summarize(&dataset, &SummaryOptions::default());
    let reply_language = ReplyLanguage::from_hint(language.as_deref());
    let messages = assemble(reply_language, &summary.context, &[], &question);

    let runtime = tokio::runtime::Runtime::new()?;
    let reply = runtime.block_on(chat_provider.complete(&messages, None))?;

    println!("{}", reply.trim());

    Ok(())
}
