//! Device location screen state holder.

use tracing::{info, warn};

use super::error::LocationError;
use super::source::{Permission, PermissionGate, Position, PositionSource};

/// Holds the location screen's state: the last permission answer, the last
/// good sample, and the status line shown to the user.
///
/// A failed read never clears the previous sample - the screen keeps
/// showing the last good fix alongside the failure status.
pub struct LocationReader<G, P> {
    gate: G,
    source: P,
    permission: Option<Permission>,
    sample: Option<Position>,
    status: String,
}

impl<G: PermissionGate, P: PositionSource> LocationReader<G, P> {
    /// Create a reader over the permission and positioning collaborators.
    pub fn new(gate: G, source: P) -> Self {
        Self {
            gate,
            source,
            permission: None,
            sample: None,
            status: String::from("Ready"),
        }
    }

    /// Ask the permission collaborator for location access.
    ///
    /// Reports the answer as decided; denial is not retried and does not
    /// escalate to system settings.
    pub fn request_permission(&mut self) -> Permission {
        let permission = self.gate.request_location_permission();
        self.permission = Some(permission);
        self.status = format!("Location permission {}", permission);
        info!(%permission, "Permission request answered");
        permission
    }

    /// Read one position sample from the positioning collaborator.
    ///
    /// Callable without a prior grant: the collaborator may prompt or
    /// refuse independently. On failure the status carries the detail and
    /// the previous sample stays untouched.
    pub fn request_location(&mut self) -> Result<Position, LocationError> {
        match self.source.current_position() {
            Ok(sample) => {
                self.sample = Some(sample);
                self.status = format!(
                    "Position: {:.4}, {:.4}",
                    sample.latitude, sample.longitude
                );
                info!(
                    latitude = sample.latitude,
                    longitude = sample.longitude,
                    "Position sample read"
                );
                Ok(sample)
            }
            Err(e) => {
                self.status = format!("Failed to read position: {}", e);
                warn!(error = %e, "Position read failed");
                Err(e)
            }
        }
    }

    /// The last permission answer, if one was requested.
    pub fn permission(&self) -> Option<Permission> {
        self.permission
    }

    /// The last good position sample, if any.
    pub fn sample(&self) -> Option<Position> {
        self.sample
    }

    /// Human-readable outcome of the most recent operation.
    pub fn status(&self) -> &str {
        &self.status
    }
}
