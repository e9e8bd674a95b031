//! Pocket Doctor CLI - the app's presentation shell.
//!
//! The four screens of the demo app become commands: `logo`, `locate`,
//! `map download` / `map load`, and the interactive home `menu` (the
//! default when no command is given).

mod commands;
mod error;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pocketdoctor::logging::{default_log_dir, default_log_file, init_logging};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "pocketdoctor")]
#[command(about = "Pocket Doctor - offline maps and device location demo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive home menu (default)
    Menu,
    /// Show the application logo
    Logo {
        /// Write the vector logo to a file instead of describing it
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Read the device location once
    Locate,
    /// Offline map screen
    Map {
        #[command(subcommand)]
        action: commands::map::MapCommands,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let _guard = match init_logging(&default_log_dir(), default_log_file()) {
        Ok(guard) => guard,
        Err(e) => CliError::LoggingInit(e.to_string()).exit(),
    };

    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::run(),
        Commands::Logo { output } => commands::logo::run(output.as_deref()),
        Commands::Locate => commands::locate::run(),
        Commands::Map { action } => commands::map::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        e.exit();
    }
}
