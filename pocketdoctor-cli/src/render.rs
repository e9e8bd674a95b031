//! Terminal stand-in for the rendering-engine collaborator.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use pocketdoctor::map::{CameraPosition, StyleSink};

/// Filename the style document is written under when no output is given.
pub const STYLE_FILENAME: &str = "style.json";

/// Rendering engine for a terminal session: "applying" a style persists
/// the document so it can be inspected or handed to a real engine later,
/// and camera moves are logged.
pub struct StylePreview {
    output: PathBuf,
}

impl StylePreview {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    /// Where the style document lands on apply.
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl StyleSink for StylePreview {
    fn apply_style(&self, style_json: &str) -> bool {
        match fs::write(&self.output, style_json) {
            Ok(()) => {
                info!(path = %self.output.display(), "Style document written");
                true
            }
            Err(e) => {
                warn!(path = %self.output.display(), error = %e, "Failed to write style document");
                false
            }
        }
    }

    fn move_camera(&self, camera: CameraPosition) {
        info!(
            latitude = camera.latitude,
            longitude = camera.longitude,
            zoom = camera.zoom,
            "Camera positioned"
        );
    }
}
