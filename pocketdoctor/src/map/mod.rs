//! Offline map viewer core.
//!
//! The screen is driven by a small state machine over three collaborators:
//!
//! ```text
//! OfflineMapController
//!         |
//!         +-- TilePackageFetcher   - download track (crate::fetch)
//!         +-- Storage (trait)      - existence check
//!         +-- StyleSink (trait)    - rendering-engine collaborator
//! ```
//!
//! Loading assembles a fixed-shape style document ([`offline_style`])
//! pointing the engine at the local tile package; the engine does all
//! rendering and tile decoding on its side of the seam.

mod controller;
mod error;
mod renderer;
mod style;

pub use controller::{DownloadState, LoadState, OfflineMapController};
pub use error::MapError;
pub use renderer::{CameraPosition, StyleSink, DEFAULT_CAMERA};
pub use style::{
    offline_style, RasterSource, StyleDocument, StyleLayer, MBTILES_SCHEME, OFFLINE_SOURCE_ID,
    RASTER_TILE_SIZE, STYLE_NAME, STYLE_VERSION,
};
