//! CLI command definitions using clap
//!
//! Defines the command structure for the `ridehail` CLI tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ridehail - book a ride from your terminal
///
/// Run without arguments to launch the TUI mode.
#[derive(Parser, Debug)]
#[command(name = "ridehail", version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, env = "RIDEHAIL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available ride options
    Rides(RidesArgs),

    /// Book a ride without the TUI and wait for the driver
    Book(BookArgs),

    /// Inspect configuration
    Config(ConfigArgs),
}

/// Ride catalog listing
#[derive(Parser, Debug)]
pub struct RidesArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

/// Headless booking
#[derive(Parser, Debug)]
pub struct BookArgs {
    /// Pickup location
    #[arg(long, short)]
    pub pickup: String,

    /// Destination
    #[arg(long, short)]
    pub destination: String,

    /// Ride option id (see `ridehail rides`)
    #[arg(long, short, default_value = "mini")]
    pub ride: String,

    /// Override the driver assignment delay, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_book() {
        let cli = Cli::parse_from([
            "ridehail",
            "book",
            "--pickup",
            "MG Road",
            "--destination",
            "Airport",
            "--ride",
            "auto",
            "--delay-ms",
            "10",
        ]);
        match cli.command {
            Some(Commands::Book(args)) => {
                assert_eq!(args.pickup, "MG Road");
                assert_eq!(args.destination, "Airport");
                assert_eq!(args.ride, "auto");
                assert_eq!(args.delay_ms, Some(10));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::parse_from(["ridehail"]);
        assert!(cli.command.is_none());
    }
}
