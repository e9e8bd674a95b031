//! Device location screen core.
//!
//! One-shot position reads behind two independent collaborator seams: the
//! OS permission dialog ([`PermissionGate`]) and the positioning service
//! ([`PositionSource`]). [`LocationReader`] is the screen's state holder -
//! last permission answer, last good sample, current status line.
//!
//! No timeout, no accuracy fallback, no continuous tracking: the screen
//! reads one fix at a time on request.

mod error;
mod reader;
mod source;

pub use error::LocationError;
pub use reader::LocationReader;
pub use source::{Permission, PermissionGate, Position, PositionSource};
