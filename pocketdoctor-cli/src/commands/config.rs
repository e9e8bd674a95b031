//! Configuration file commands.

use clap::Subcommand;

use pocketdoctor::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Configuration subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Create the config file with defaults if it does not exist
    Init,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Show => {
            let config = ConfigFile::load()?;
            println!("Config file: {}", config_file_path().display());
            println!();
            print!("{}", config.to_config_string());
            Ok(())
        }
        ConfigCommands::Init => {
            let path = ConfigFile::ensure_exists()?;
            println!("Config file ready at {}", path.display());
            Ok(())
        }
    }
}
