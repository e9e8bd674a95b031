//! Tile package retrieval.
//!
//! A tile package is a single opaque file bundling map imagery for offline
//! use. This module downloads one over HTTP and stores it at a fixed path
//! inside the application documents directory:
//!
//! ```text
//! TilePackageFetcher
//!         |
//!         +-- HttpClient (trait)  - network transfer collaborator
//!         +-- Storage (trait)     - filesystem collaborator
//! ```
//!
//! The internal tile format is never parsed here; the rendering engine
//! consumes the file through the style document built in [`crate::map`].

mod client;
mod error;
mod fetcher;

pub use client::{HttpClient, HttpResponse, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use error::FetchError;
pub use fetcher::{TilePackageFetcher, TILE_PACKAGE_FILENAME};

#[cfg(test)]
pub use client::tests::MockHttpClient;
