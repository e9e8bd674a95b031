//! Interactive home screen.

use dialoguer::{theme::ColorfulTheme, Select};

use crate::commands::{locate, logo, map};
use crate::error::CliError;

const ENTRIES: &[&str] = &[
    "Logo preview",
    "Device location",
    "Offline map: download package",
    "Offline map: load",
    "Quit",
];

/// Run the home menu until the user quits.
pub fn run() -> Result<(), CliError> {
    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Pocket Doctor")
            .items(ENTRIES)
            .default(0)
            .interact()
            .map_err(|e| CliError::Prompt(e.to_string()))?;

        let result = match selection {
            0 => logo::run(None),
            1 => locate::run(),
            2 => map::run(map::MapCommands::Download { url: None }),
            3 => map::run(map::MapCommands::Load {
                package: None,
                style_out: None,
            }),
            _ => return Ok(()),
        };

        // A failed screen reports its status and returns to the menu; it
        // does not end the app.
        if let Err(e) = result {
            eprintln!("Error: {}", e);
        }
        println!();
    }
}
