//! Serve command - run the HTTP API server.

use colored::Colorize;
use tabletalk::{build_provider, default_model, ChatConfig, SummaryOptions};

use crate::cli::{DepthChoice, ProviderChoice};
use crate::server::{app, state::AppState};

pub fn run(
    host: String,
    port: u16,
    provider: ProviderChoice,
    model: Option<String>,
    depth: DepthChoice,
    preview_limit: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Resolve credentials and model once, at startup.
    let config = ChatConfig {
        model: model.unwrap_or_else(|| default_model(provider.as_str()).to_string()),
        ..Default::default()
    };
    let chat_provider = build_provider(provider.as_str(), config)?;

    let options = SummaryOptions {
        preview_limit,
        depth: depth.clone().into(),
    };
    let state = AppState::new(chat_provider, options);

    let url = format!("http://{}:{}", host, port);
    println!();
    println!(
        "{} {}",
        "Starting Tabletalk server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Provider: {}", state.provider.name());
    println!("  Model: {}", state.provider.config().model);
    if verbose {
        println!("  Depth: {}", depth);
        println!("  Preview limit: {}", preview_limit);
    }
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    ctrlc::set_handler(|| {
        println!();
        println!("{}", "Shutting down...".yellow());
        std::process::exit(0);
    })?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        if let Err(e) = app::run_server(state, &host, port).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}
