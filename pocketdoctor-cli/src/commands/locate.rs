//! Device location screen.

use console::style;

use pocketdoctor::config::ConfigFile;
use pocketdoctor::location::{
    LocationError, LocationReader, Permission, PermissionGate, Position, PositionSource,
};

use crate::error::CliError;

/// Permission collaborator for a terminal session: the user running the
/// process already owns it, so access is granted.
struct TerminalGate;

impl PermissionGate for TerminalGate {
    fn request_location_permission(&self) -> Permission {
        Permission::Granted
    }
}

/// Positioning collaborator seeded from the config file.
///
/// Without GPS hardware the configured reference point plays the device
/// position; an unset `[location]` section reads as a positioning failure.
struct ConfiguredPosition {
    position: Option<Position>,
}

impl PositionSource for ConfiguredPosition {
    fn current_position(&self) -> Result<Position, LocationError> {
        self.position.ok_or_else(|| {
            LocationError::Unavailable("no reference position configured".to_string())
        })
    }
}

/// Run the location screen: one permission request, one position read.
pub fn run() -> Result<(), CliError> {
    let config = ConfigFile::load().unwrap_or_default();
    let source = ConfiguredPosition {
        position: config.location.position(),
    };
    let mut reader = LocationReader::new(TerminalGate, source);

    let permission = reader.request_permission();
    println!("Location permission: {}", permission);

    match reader.request_location() {
        Ok(_) => {
            println!("{} {}", style("✓").green(), reader.status());
            Ok(())
        }
        Err(e) => Err(CliError::Location(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_position_answers_with_the_reference() {
        let source = ConfiguredPosition {
            position: Some(Position {
                latitude: 47.0,
                longitude: 8.0,
            }),
        };

        let sample = source.current_position().unwrap();
        assert_eq!(sample.latitude, 47.0);
        assert_eq!(sample.longitude, 8.0);
    }

    #[test]
    fn test_unset_section_reads_as_unavailable() {
        let source = ConfiguredPosition { position: None };

        assert!(matches!(
            source.current_position(),
            Err(LocationError::Unavailable(_))
        ));
    }

    #[test]
    fn test_terminal_gate_grants() {
        assert_eq!(
            TerminalGate.request_location_permission(),
            Permission::Granted
        );
    }
}
