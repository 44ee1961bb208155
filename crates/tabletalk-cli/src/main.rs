//! Tabletalk CLI - ask questions about tabular data.

mod cli;
mod commands;
mod server;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            provider,
            model,
            depth,
            preview_limit,
        } => commands::serve::run(host, port, provider, model, depth, preview_limit, cli.verbose),

        Commands::Summarize {
            file,
            depth,
            limit,
            json,
        } => commands::summarize::run(file, depth, limit, json, cli.verbose),

        Commands::Ask {
            file,
            question,
            language,
            provider,
            model,
        } => commands::ask::run(file, question, language, provider, model, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "tabletalk=debug,tabletalk_cli=debug"
    } else {
        "tabletalk=info,tabletalk_cli=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
