//! ridehail - book a ride from your terminal
//!
//! Run without arguments to launch the TUI, or use subcommands for CLI mode.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ridehail::cli::commands::{Cli, Commands};
use ridehail::cli::{book, config, rides};
use ridehail::core::config::Config;
use ridehail::error::Result;
use ridehail::tui::App;

#[tokio::main]
async fn main() {
    // Initialize logging; stderr keeps stdout clean for CLI output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        // No subcommand - launch TUI mode
        None => run_tui(&load_config(config_path)?).await,

        Some(Commands::Rides(args)) => rides::handle_rides(args),
        Some(Commands::Book(args)) => book::handle_book(args, &load_config(config_path)?).await,
        Some(Commands::Config(args)) => config::handle_config(args.command, config_path),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Run the TUI application
async fn run_tui(config: &Config) -> Result<()> {
    let mut app = App::new(config);
    app.run().await
}
