//! Filesystem collaborator for application-private storage.
//!
//! Downloads land in and are loaded from a single documents directory owned
//! by the application. The [`Storage`] trait keeps the fetcher and the map
//! controller testable against a temporary directory instead of the real
//! platform data dir.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while writing to application storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to create a parent directory.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDirFailed { path: PathBuf, source: io::Error },

    /// Failed to write a file.
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed { path: PathBuf, source: io::Error },
}

/// Filesystem operations needed by the core.
pub trait Storage: Send + Sync {
    /// The application-private documents directory.
    fn documents_dir(&self) -> &Path;

    /// Write `bytes` to `path`, replacing any existing file.
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), StorageError>;

    /// Check whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Production storage rooted at the platform data directory.
pub struct AppStorage {
    root: PathBuf,
}

impl AppStorage {
    /// Create storage rooted at the platform data dir (e.g.
    /// `~/.local/share/pocketdoctor` on Linux).
    pub fn new() -> Self {
        let root = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pocketdoctor");
        Self { root }
    }

    /// Create storage rooted at an explicit directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for AppStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for AppStorage {
    fn documents_dir(&self) -> &Path {
        &self.root
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirFailed {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(path, bytes).map_err(|e| StorageError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_directories() {
        let temp = tempfile::TempDir::new().unwrap();
        let storage = AppStorage::with_root(temp.path());
        let dest = temp.path().join("nested/deep/file.bin");

        storage.write(&dest, b"payload").unwrap();

        assert!(storage.exists(&dest));
        assert_eq!(fs::read(&dest).unwrap(), b"payload");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let storage = AppStorage::with_root(temp.path());
        let dest = temp.path().join("file.bin");

        storage.write(&dest, b"old contents").unwrap();
        storage.write(&dest, b"new").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"new");
    }

    #[test]
    fn test_exists_for_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let storage = AppStorage::with_root(temp.path());

        assert!(!storage.exists(&temp.path().join("absent.bin")));
    }

    #[test]
    fn test_documents_dir_is_the_root() {
        let storage = AppStorage::with_root("/tmp/pd-test");
        assert_eq!(storage.documents_dir(), Path::new("/tmp/pd-test"));
    }
}
