//! Configuration CLI command handlers

use std::path::Path;

use crate::cli::commands::ConfigCommand;
use crate::core::config::Config;
use crate::error::Result;

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand, override_path: Option<&Path>) -> Result<()> {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };

    match command {
        ConfigCommand::Path => {
            println!("{}", path.display());
        }
        ConfigCommand::Show => {
            let config = Config::load_from(&path)?;
            let source = if path.exists() { "" } else { " (not found, using defaults)" };
            println!("# {}{}", path.display(), source);
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}
