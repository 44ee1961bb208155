//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tabletalk::SummaryDepth;

/// Tabletalk: ask an LLM questions about tabular data
#[derive(Parser)]
#[command(name = "tabletalk")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for the API server
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Chat provider used to answer questions
        #[arg(long, default_value = "openai")]
        provider: ProviderChoice,

        /// Model to use (provider-specific, e.g. "gpt-4", "llama3.2")
        #[arg(long)]
        model: Option<String>,

        /// Statistics depth for dataset summaries
        #[arg(long, default_value = "aggregate")]
        depth: DepthChoice,

        /// Maximum preview rows included in the model context
        #[arg(long, default_value = "5")]
        preview_limit: usize,
    },

    /// Summarize a data file without asking a question
    Summarize {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Statistics depth
        #[arg(short, long, default_value = "aggregate")]
        depth: DepthChoice,

        /// Maximum preview rows
        #[arg(short, long, default_value = "5")]
        limit: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask a one-shot question about a data file
    Ask {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// The question to ask
        #[arg(value_name = "QUESTION")]
        question: String,

        /// Reply language hint ("ar" or "en"; default mirrors the question)
        #[arg(short, long)]
        language: Option<String>,

        /// Chat provider to answer with
        #[arg(long, default_value = "openai")]
        provider: ProviderChoice,

        /// Model to use (provider-specific)
        #[arg(long)]
        model: Option<String>,
    },
}

/// Chat provider choice.
#[derive(Clone, Debug, Default)]
pub enum ProviderChoice {
    /// OpenAI chat API (requires OPENAI_API_KEY)
    #[default]
    OpenAI,
    /// Ollama local models (requires Ollama running)
    Ollama,
    /// Mock provider for testing
    Mock,
}

impl ProviderChoice {
    /// Provider name as the library factory expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderChoice::OpenAI => "openai",
            ProviderChoice::Ollama => "ollama",
            ProviderChoice::Mock => "mock",
        }
    }
}

impl std::str::FromStr for ProviderChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" | "gpt" => Ok(ProviderChoice::OpenAI),
            "ollama" | "local" => Ok(ProviderChoice::Ollama),
            "mock" | "test" => Ok(ProviderChoice::Mock),
            _ => Err(format!(
                "Unknown provider: {}. Use: openai, ollama, or mock.",
                s
            )),
        }
    }
}

impl std::fmt::Display for ProviderChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Statistics depth choice.
#[derive(Clone, Debug, Default)]
pub enum DepthChoice {
    /// Sum, mean, min, max for numeric columns
    #[default]
    Aggregate,
    /// Full profile of every column
    Describe,
}

impl From<DepthChoice> for SummaryDepth {
    fn from(choice: DepthChoice) -> Self {
        match choice {
            DepthChoice::Aggregate => SummaryDepth::Aggregate,
            DepthChoice::Describe => SummaryDepth::Describe,
        }
    }
}

impl std::str::FromStr for DepthChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aggregate" | "agg" => Ok(DepthChoice::Aggregate),
            "describe" | "full" => Ok(DepthChoice::Describe),
            _ => Err(format!("Unknown depth: {}. Use aggregate or describe.", s)),
        }
    }
}

impl std::fmt::Display for DepthChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepthChoice::Aggregate => write!(f, "aggregate"),
            DepthChoice::Describe => write!(f, "describe"),
        }
    }
}
