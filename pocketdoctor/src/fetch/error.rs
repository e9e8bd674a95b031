//! Error types for tile package retrieval.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur while fetching a tile package.
///
/// One variant per distinguishable outcome: missing input, transport
/// failure, non-success status, and local write failure. None of these is
/// retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No download URL was provided.
    #[error("no download URL provided")]
    EmptyUrl,

    /// Failed to construct the HTTP client.
    #[error("failed to create HTTP client: {0}")]
    Client(String),

    /// The request never completed (DNS failure, unreachable host, timeout).
    #[error("failed to reach {url}: {reason}")]
    Transport { url: String, reason: String },

    /// The server answered outside the 2xx range.
    #[error("download of {url} failed with HTTP status {status}")]
    Status { url: String, status: u16 },

    /// The payload could not be written to application storage.
    #[error(transparent)]
    Write(#[from] StorageError),
}
