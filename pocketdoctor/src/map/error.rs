//! Error types for the offline map screen.

use std::path::PathBuf;

use thiserror::Error;

use crate::fetch::FetchError;

/// Errors that can occur while driving the offline map.
#[derive(Debug, Error)]
pub enum MapError {
    /// No tile package exists at the resolved path.
    #[error("no tile package at {}", .path.display())]
    MissingFile { path: PathBuf },

    /// The rendering engine refused the style document.
    #[error("rendering engine rejected the style document")]
    StyleRejected,

    /// The tile package download failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The style document could not be serialized.
    #[error("failed to serialize style document: {0}")]
    Serialize(#[from] serde_json::Error),
}
