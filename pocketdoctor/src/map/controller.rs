//! Offline map screen state machine.
//!
//! Two independent tracks mirror what the screen shows: the download of
//! the tile package, and the check / build / apply sequence that puts it
//! on screen. A package may be loaded without ever downloading when a
//! file reference is already known, and a download never implies a load.
//!
//! Both operations take `&mut self`: the exclusive borrow is the
//! single-flight discipline, so a load can never observe a half-written
//! download through the same controller.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::fetch::{HttpClient, TilePackageFetcher};
use crate::storage::Storage;

use super::error::MapError;
use super::renderer::{CameraPosition, StyleSink, DEFAULT_CAMERA};
use super::style::offline_style;

/// Download track of the screen state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadState {
    Idle,
    Downloading,
    /// Holds the stored tile package reference.
    Downloaded(PathBuf),
    Failed,
}

/// Load track of the screen state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Checking,
    StyleLoading,
    StyleLoaded,
    StyleLoadFailed,
    /// Terminal for the attempt; the user must download (or point at a
    /// package) and retry.
    MissingFile,
}

/// Drives the offline map screen against its collaborators.
pub struct OfflineMapController<C, S, R> {
    fetcher: TilePackageFetcher<C, S>,
    renderer: R,
    package: Option<PathBuf>,
    download: DownloadState,
    load: LoadState,
    status: String,
}

impl<C: HttpClient, S: Storage, R: StyleSink> OfflineMapController<C, S, R> {
    /// Create a controller with the default initial camera.
    pub fn new(fetcher: TilePackageFetcher<C, S>, renderer: R) -> Self {
        Self::with_camera(fetcher, renderer, DEFAULT_CAMERA)
    }

    /// Create a controller, handing `camera` to the rendering engine at
    /// screen construction.
    pub fn with_camera(
        fetcher: TilePackageFetcher<C, S>,
        renderer: R,
        camera: CameraPosition,
    ) -> Self {
        renderer.move_camera(camera);
        Self {
            fetcher,
            renderer,
            package: None,
            download: DownloadState::Idle,
            load: LoadState::Idle,
            status: String::from("Ready"),
        }
    }

    /// Download the tile package from `url` into application storage.
    ///
    /// Independent of the load track: a failed or absent download leaves
    /// the load path free to use an externally supplied package.
    pub fn request_download(&mut self, url: &str) -> Result<PathBuf, MapError> {
        self.download = DownloadState::Downloading;
        self.status = String::from("Downloading tile package");

        match self.fetcher.fetch(url) {
            Ok(path) => {
                self.status = format!("Tile package saved to {}", path.display());
                self.package = Some(path.clone());
                self.download = DownloadState::Downloaded(path.clone());
                Ok(path)
            }
            Err(e) => {
                self.download = DownloadState::Failed;
                self.status = format!("Download failed: {}", e);
                Err(MapError::Fetch(e))
            }
        }
    }

    /// Check for the tile package, build its style document, and hand it
    /// to the rendering engine.
    ///
    /// Uses the last known package reference, falling back to the fixed
    /// default path. A missing file ends the attempt before the rendering
    /// engine is ever invoked.
    pub fn request_load(&mut self) -> Result<(), MapError> {
        self.load = LoadState::Checking;
        let package = self
            .package
            .clone()
            .unwrap_or_else(|| self.fetcher.package_path());

        if !self.fetcher.storage().exists(&package) {
            self.load = LoadState::MissingFile;
            self.status = format!("No tile package at {}", package.display());
            warn!(path = %package.display(), "Tile package missing, load aborted");
            return Err(MapError::MissingFile { path: package });
        }

        self.load = LoadState::StyleLoading;
        let json = match offline_style(&package).to_json() {
            Ok(json) => json,
            Err(e) => {
                self.load = LoadState::StyleLoadFailed;
                self.status = format!("Style document error: {}", e);
                return Err(MapError::Serialize(e));
            }
        };

        if self.renderer.apply_style(&json) {
            self.load = LoadState::StyleLoaded;
            self.status = format!("Offline map loaded from {}", package.display());
            info!(path = %package.display(), "Style applied");
            Ok(())
        } else {
            self.load = LoadState::StyleLoadFailed;
            self.status = String::from("Rendering engine rejected the style document");
            warn!(path = %package.display(), "Style rejected");
            Err(MapError::StyleRejected)
        }
    }

    /// Point the controller at an externally supplied tile package.
    pub fn set_package(&mut self, path: PathBuf) {
        self.package = Some(path);
    }

    /// The tile package the next load will use, if one is known.
    pub fn package(&self) -> Option<&Path> {
        self.package.as_deref()
    }

    /// Current download track state.
    pub fn download_state(&self) -> &DownloadState {
        &self.download
    }

    /// Current load track state.
    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Human-readable outcome of the most recent operation.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The rendering-engine collaborator.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
