//! Pocket Doctor - offline-map demo application core.
//!
//! This library holds the reproducible core behind the app's four screens:
//!
//! - [`map`] - the offline map viewer: style document assembly and the
//!   download / check / load state machine.
//! - [`fetch`] - tile package retrieval over HTTP into application storage.
//! - [`location`] - one-shot device location reads behind permission and
//!   positioning collaborator traits.
//! - [`config`] - user configuration at `~/.pocketdoctor/config.ini`.
//! - [`storage`] - the application-private documents directory.
//! - [`logging`] - tracing setup with file and console output.
//!
//! Screen presentation (the home menu and command-line surface) lives in
//! the `pocketdoctor-cli` crate.

pub mod config;
pub mod fetch;
pub mod location;
pub mod logging;
pub mod map;
pub mod storage;
