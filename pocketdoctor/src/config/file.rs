//! Configuration file handling for ~/.pocketdoctor/config.ini.
//!
//! Loads and saves user configuration with sensible defaults. A missing
//! file reads as the defaults; a present file only needs the keys it wants
//! to override.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use crate::fetch::DEFAULT_TIMEOUT_SECS;
use crate::location::Position;
use crate::map::{CameraPosition, DEFAULT_CAMERA};

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

/// Offline map settings (`[map]` section).
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    /// Where to fetch the tile package from.
    pub package_url: Option<String>,
    /// Override for the local tile package path.
    pub package_path: Option<PathBuf>,
    /// HTTP timeout in whole seconds.
    pub timeout_secs: u64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            package_url: None,
            package_path: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Initial camera settings (`[camera]` section).
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSettings {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
}

impl CameraSettings {
    /// The camera position handed to the rendering engine.
    pub fn camera(&self) -> CameraPosition {
        CameraPosition {
            latitude: self.latitude,
            longitude: self.longitude,
            zoom: self.zoom,
        }
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_CAMERA.latitude,
            longitude: DEFAULT_CAMERA.longitude,
            zoom: DEFAULT_CAMERA.zoom,
        }
    }
}

/// Location screen settings (`[location]` section).
///
/// Seeds the CLI's positioning collaborator; leaving the section unset
/// models a device without a fix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationSettings {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationSettings {
    /// The configured reference position, when both coordinates are set.
    pub fn position(&self) -> Option<Position> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Position {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

/// User configuration, one struct per file section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub map: MapSettings,
    pub camera: CameraSettings,
    pub location: LocationSettings,
}

impl ConfigFile {
    /// Load configuration from the default path (~/.pocketdoctor/config.ini).
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigFileError> {
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("map")) {
            if let Some(url) = section.get("package_url") {
                config.map.package_url = Some(url.to_string());
            }
            if let Some(path) = section.get("package_path") {
                config.map.package_path = Some(PathBuf::from(path));
            }
            if let Some(value) = section.get("timeout") {
                config.map.timeout_secs = parse_value("map", "timeout", value, "whole seconds")?;
            }
        }

        if let Some(section) = ini.section(Some("camera")) {
            if let Some(value) = section.get("latitude") {
                config.camera.latitude =
                    parse_value("camera", "latitude", value, "decimal degrees")?;
            }
            if let Some(value) = section.get("longitude") {
                config.camera.longitude =
                    parse_value("camera", "longitude", value, "decimal degrees")?;
            }
            if let Some(value) = section.get("zoom") {
                config.camera.zoom = parse_value("camera", "zoom", value, "a zoom level")?;
            }
        }

        if let Some(section) = ini.section(Some("location")) {
            if let Some(value) = section.get("latitude") {
                config.location.latitude =
                    Some(parse_value("location", "latitude", value, "decimal degrees")?);
            }
            if let Some(value) = section.get("longitude") {
                config.location.longitude = Some(parse_value(
                    "location",
                    "longitude",
                    value,
                    "decimal degrees",
                )?);
            }
        }

        Ok(config)
    }

    /// Save configuration to the default path (~/.pocketdoctor/config.ini).
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        std::fs::write(path, self.to_config_string())
            .map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
        }
        Ok(path)
    }

    /// Render the configuration in its file format.
    pub fn to_config_string(&self) -> String {
        let mut out = String::from("# Pocket Doctor configuration\n\n[map]\n");
        if let Some(url) = &self.map.package_url {
            out.push_str(&format!("package_url = {}\n", url));
        }
        if let Some(path) = &self.map.package_path {
            out.push_str(&format!("package_path = {}\n", path.display()));
        }
        out.push_str(&format!("timeout = {}\n", self.map.timeout_secs));

        out.push_str("\n[camera]\n");
        out.push_str(&format!("latitude = {}\n", self.camera.latitude));
        out.push_str(&format!("longitude = {}\n", self.camera.longitude));
        out.push_str(&format!("zoom = {}\n", self.camera.zoom));

        out.push_str("\n[location]\n");
        if let Some(latitude) = self.location.latitude {
            out.push_str(&format!("latitude = {}\n", latitude));
        }
        if let Some(longitude) = self.location.longitude {
            out.push_str(&format!("longitude = {}\n", longitude));
        }

        out
    }
}

fn parse_value<T: std::str::FromStr>(
    section: &str,
    key: &str,
    value: &str,
    expected: &str,
) -> Result<T, ConfigFileError> {
    value.parse().map_err(|_| ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: format!("expected {}", expected),
    })
}

/// Get the path to the config directory (~/.pocketdoctor).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pocketdoctor")
}

/// Get the path to the config file (~/.pocketdoctor/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert!(config.map.package_url.is_none());
        assert!(config.map.package_path.is_none());
        assert_eq!(config.map.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.camera.camera(), DEFAULT_CAMERA);
        assert!(config.location.position().is_none());
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join("nonexistent.ini");

        let config = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.map.package_url = Some("https://example.com/tiles.mbtiles".to_string());
        config.map.timeout_secs = 60;
        config.camera.zoom = 9.5;
        config.location.latitude = Some(47.05);
        config.location.longitude = Some(8.3);

        config.save_to(&config_path).unwrap();
        let reloaded = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join("config.ini");
        std::fs::write(&config_path, "[map]\npackage_url = http://h/t.mbtiles\n").unwrap();

        let config = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(
            config.map.package_url.as_deref(),
            Some("http://h/t.mbtiles")
        );
        assert_eq!(config.map.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.camera.camera(), DEFAULT_CAMERA);
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join("config.ini");
        std::fs::write(&config_path, "[map]\ntimeout = soon\n").unwrap();

        let result = ConfigFile::load_from(&config_path);

        match result {
            Err(ConfigFileError::InvalidValue { section, key, .. }) => {
                assert_eq!(section, "map");
                assert_eq!(key, "timeout");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_location_position_requires_both_coordinates() {
        let settings = LocationSettings {
            latitude: Some(47.0),
            longitude: None,
        };
        assert!(settings.position().is_none());

        let settings = LocationSettings {
            latitude: Some(47.0),
            longitude: Some(8.0),
        };
        assert_eq!(
            settings.position(),
            Some(Position {
                latitude: 47.0,
                longitude: 8.0
            })
        );
    }
}
