//! Collaborator seams and core types for device location.

use std::fmt;

use super::error::LocationError;

/// One position sample in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Outcome of an OS-level permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Granted => write!(f, "granted"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

/// Positioning collaborator: one-shot position reads.
///
/// Independent of [`PermissionGate`] - the platform service may prompt or
/// refuse on its own, so a read is valid without a prior explicit grant.
pub trait PositionSource: Send + Sync {
    /// Read the current device position.
    fn current_position(&self) -> Result<Position, LocationError>;
}

/// Permission collaborator: asks the OS for location access.
pub trait PermissionGate: Send + Sync {
    /// Request location permission, reporting the grant as decided by the
    /// platform.
    fn request_location_permission(&self) -> Permission;
}
