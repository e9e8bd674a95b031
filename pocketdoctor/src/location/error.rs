//! Error types for device location reads.

use thiserror::Error;

/// Errors that can occur while reading the device location.
#[derive(Debug, Error)]
pub enum LocationError {
    /// The positioning collaborator refused for lack of permission.
    #[error("location permission denied: {0}")]
    PermissionDenied(String),

    /// The positioning collaborator failed to produce a fix.
    #[error("position unavailable: {0}")]
    Unavailable(String),
}
