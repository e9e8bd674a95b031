//! Rendering-engine collaborator seam.

/// A camera position over the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
}

/// Initial camera over the demo tile package coverage.
pub const DEFAULT_CAMERA: CameraPosition = CameraPosition {
    latitude: 47.3769,
    longitude: 8.5417,
    zoom: 12.0,
};

/// Rendering-engine collaborator.
///
/// The engine owns all drawing and tile decoding; this seam only carries
/// the serialized style document and camera moves. `apply_style` answers
/// with a success boolean rather than an error - that is the engine's
/// contract, and the controller translates it into its own state.
pub trait StyleSink: Send + Sync {
    /// Hand a serialized style document to the engine.
    ///
    /// Returns whether the engine accepted the style.
    fn apply_style(&self, style_json: &str) -> bool;

    /// Reposition the camera.
    fn move_camera(&self, camera: CameraPosition);
}
