//! Offline map screen commands.

use std::path::PathBuf;

use clap::Subcommand;
use console::style;

use pocketdoctor::config::ConfigFile;
use pocketdoctor::fetch::{ReqwestClient, TilePackageFetcher};
use pocketdoctor::map::OfflineMapController;
use pocketdoctor::storage::{AppStorage, Storage};

use crate::error::CliError;
use crate::render::{StylePreview, STYLE_FILENAME};

/// Offline map subcommands.
#[derive(Debug, Subcommand)]
pub enum MapCommands {
    /// Download the tile package into application storage
    Download {
        /// Source URL (defaults to package_url from the config file)
        #[arg(long)]
        url: Option<String>,
    },
    /// Build the offline style and hand it to the preview renderer
    Load {
        /// Use this tile package instead of the downloaded one
        #[arg(long)]
        package: Option<PathBuf>,
        /// Where to write the style document (defaults into app storage)
        #[arg(long)]
        style_out: Option<PathBuf>,
    },
}

/// Run an offline map subcommand.
pub fn run(command: MapCommands) -> Result<(), CliError> {
    let config = ConfigFile::load().unwrap_or_default();
    let storage = AppStorage::new();

    let style_path = match &command {
        MapCommands::Load {
            style_out: Some(path),
            ..
        } => path.clone(),
        _ => storage.documents_dir().join(STYLE_FILENAME),
    };

    let client =
        ReqwestClient::with_timeout(config.map.timeout_secs).map_err(CliError::Download)?;
    let fetcher = TilePackageFetcher::new(client, storage);
    let mut controller = OfflineMapController::with_camera(
        fetcher,
        StylePreview::new(style_path),
        config.camera.camera(),
    );

    match command {
        MapCommands::Download { url } => {
            // An absent URL falls through to the fetcher's own validation.
            let url = url
                .or_else(|| config.map.package_url.clone())
                .unwrap_or_default();

            println!("Downloading tile package...");
            controller.request_download(&url)?;
            println!("{} {}", style("✓").green(), controller.status());
            Ok(())
        }
        MapCommands::Load { package, .. } => {
            if let Some(package) = package.or(config.map.package_path.clone()) {
                controller.set_package(package);
            }

            controller.request_load()?;
            println!("{} {}", style("✓").green(), controller.status());
            println!(
                "Style document: {}",
                controller.renderer().output().display()
            );
            Ok(())
        }
    }
}
