//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use pocketdoctor::config::ConfigFileError;
use pocketdoctor::fetch::FetchError;
use pocketdoctor::location::LocationError;
use pocketdoctor::map::MapError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// Tile package download failed
    Download(FetchError),
    /// Offline map load failed
    MapLoad(MapError),
    /// Location read failed
    Location(LocationError),
    /// Failed to write an output file
    FileWrite { path: String, error: std::io::Error },
    /// Interactive prompt failed
    Prompt(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Download(FetchError::EmptyUrl) => {
                eprintln!();
                eprintln!("Set package_url in the [map] section of the config file,");
                eprintln!("or pass --url to `pocketdoctor map download`.");
            }
            CliError::MapLoad(MapError::MissingFile { .. }) => {
                eprintln!();
                eprintln!("Download the tile package first:");
                eprintln!("  pocketdoctor map download --url <package-url>");
                eprintln!("or point at an existing file with `map load --package <path>`.");
            }
            CliError::Location(LocationError::Unavailable(_)) => {
                eprintln!();
                eprintln!("Set latitude/longitude in the [location] section of the config");
                eprintln!("file to give the positioning service a reference point.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Download(e) => write!(f, "Failed to download tile package: {}", e),
            CliError::MapLoad(e) => write!(f, "Failed to load offline map: {}", e),
            CliError::Location(e) => write!(f, "Failed to read location: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
            CliError::Prompt(msg) => write!(f, "Prompt failed: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Download(e) => Some(e),
            CliError::MapLoad(e) => Some(e),
            CliError::Location(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<MapError> for CliError {
    fn from(e: MapError) -> Self {
        // Surface download problems under their own variant so the hints in
        // `exit` stay specific.
        match e {
            MapError::Fetch(fetch) => CliError::Download(fetch),
            other => CliError::MapLoad(other),
        }
    }
}

impl From<LocationError> for CliError {
    fn from(e: LocationError) -> Self {
        CliError::Location(e)
    }
}
