//! Tile package retrieval into application storage.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::storage::Storage;

use super::client::HttpClient;
use super::error::FetchError;

/// Filename the tile package is stored under inside the documents directory.
pub const TILE_PACKAGE_FILENAME: &str = "tiles.mbtiles";

/// Downloads a tile package to a deterministic local path.
///
/// A single best-effort attempt: no retry, no resume, no integrity check.
/// Any existing package at the destination is overwritten.
pub struct TilePackageFetcher<C, S> {
    client: C,
    storage: S,
}

impl<C: HttpClient, S: Storage> TilePackageFetcher<C, S> {
    /// Create a fetcher over an HTTP client and a storage backend.
    pub fn new(client: C, storage: S) -> Self {
        Self { client, storage }
    }

    /// The storage backend, shared with callers that need existence checks.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Destination path for the downloaded package.
    pub fn package_path(&self) -> PathBuf {
        self.storage.documents_dir().join(TILE_PACKAGE_FILENAME)
    }

    /// Download the tile package at `url` and return where it was stored.
    ///
    /// Fails fast on an empty URL without touching the network. A non-2xx
    /// response fails with the status code and writes nothing.
    pub fn fetch(&self, url: &str) -> Result<PathBuf, FetchError> {
        if url.trim().is_empty() {
            return Err(FetchError::EmptyUrl);
        }

        debug!(url, "Requesting tile package");
        let response = self.client.get(url)?;

        if !response.is_success() {
            warn!(url, status = response.status, "Tile package request rejected");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        let dest = self.package_path();
        self.storage.write(&dest, &response.body)?;
        info!(
            path = %dest.display(),
            bytes = response.body.len(),
            "Tile package stored"
        );

        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::super::client::tests::MockHttpClient;
    use super::*;
    use crate::storage::AppStorage;

    fn fetcher_in(
        temp: &tempfile::TempDir,
        client: MockHttpClient,
    ) -> TilePackageFetcher<MockHttpClient, AppStorage> {
        TilePackageFetcher::new(client, AppStorage::with_root(temp.path()))
    }

    #[test]
    fn test_empty_url_fails_without_network_call() {
        let temp = tempfile::TempDir::new().unwrap();
        let fetcher = fetcher_in(&temp, MockHttpClient::with_response(200, b"tiles".to_vec()));

        let result = fetcher.fetch("");
        assert!(matches!(result, Err(FetchError::EmptyUrl)));
        assert_eq!(fetcher.client.calls(), 0);

        // Whitespace-only input counts as missing too.
        let result = fetcher.fetch("   ");
        assert!(matches!(result, Err(FetchError::EmptyUrl)));
        assert_eq!(fetcher.client.calls(), 0);
    }

    #[test]
    fn test_non_success_status_writes_nothing() {
        let temp = tempfile::TempDir::new().unwrap();
        let fetcher = fetcher_in(&temp, MockHttpClient::with_response(404, b"not found".to_vec()));

        let result = fetcher.fetch("http://example.com/tiles.mbtiles");
        match result {
            Err(FetchError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected Status error, got {:?}", other),
        }
        assert!(!fetcher.package_path().exists());
    }

    #[test]
    fn test_status_error_message_carries_the_code() {
        let temp = tempfile::TempDir::new().unwrap();
        let fetcher = fetcher_in(&temp, MockHttpClient::with_response(404, Vec::new()));

        let err = fetcher.fetch("http://example.com/t.mbtiles").unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_success_writes_exact_payload_to_deterministic_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let payload = b"raster tile package bytes".to_vec();
        let fetcher = fetcher_in(&temp, MockHttpClient::with_response(200, payload.clone()));

        let path = fetcher.fetch("http://example.com/tiles.mbtiles").unwrap();

        assert_eq!(path, temp.path().join(TILE_PACKAGE_FILENAME));
        assert_eq!(fs::read(&path).unwrap(), payload);
    }

    #[test]
    fn test_success_overwrites_previous_package() {
        let temp = tempfile::TempDir::new().unwrap();
        let storage = AppStorage::with_root(temp.path());
        let dest = temp.path().join(TILE_PACKAGE_FILENAME);
        fs::create_dir_all(temp.path()).unwrap();
        fs::write(&dest, b"stale package").unwrap();

        let fetcher =
            TilePackageFetcher::new(MockHttpClient::with_response(200, b"fresh".to_vec()), storage);
        fetcher.fetch("http://example.com/tiles.mbtiles").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"fresh");
    }

    #[test]
    fn test_transport_failure_is_reported() {
        let temp = tempfile::TempDir::new().unwrap();
        let fetcher = fetcher_in(&temp, MockHttpClient::with_transport_failure("host unreachable"));

        let err = fetcher.fetch("http://nowhere.invalid/t.mbtiles").unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
        assert!(err.to_string().contains("host unreachable"));
        assert!(!fetcher.package_path().exists());
    }
}
