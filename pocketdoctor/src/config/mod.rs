//! User configuration handling for `~/.pocketdoctor/config.ini`.

mod file;

pub use file::{
    config_directory, config_file_path, CameraSettings, ConfigFile, ConfigFileError,
    LocationSettings, MapSettings,
};
