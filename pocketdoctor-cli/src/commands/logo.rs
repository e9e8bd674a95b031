//! Static logo screen.

use std::fs;
use std::path::Path;

use console::style;

use crate::error::CliError;

/// The embedded vector logo shown on the app's landing screen.
const LOGO_SVG: &str = include_str!("../../assets/logo.svg");

/// Show the logo screen, or export the vector asset when `output` is set.
pub fn run(output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            fs::write(path, LOGO_SVG).map_err(|error| CliError::FileWrite {
                path: path.display().to_string(),
                error,
            })?;
            println!("{} Logo written to {}", style("✓").green(), path.display());
        }
        None => {
            println!("{}", style("Pocket Doctor").cyan().bold());
            println!("Embedded vector logo ({} bytes of SVG).", LOGO_SVG.len());
            println!("Use `logo --output <path>` to export it.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_logo_is_valid_svg_shell() {
        assert!(LOGO_SVG.starts_with("<svg"));
        assert!(LOGO_SVG.contains("Pocket Doctor"));
    }

    #[test]
    fn test_export_writes_the_asset() {
        let temp = tempfile::TempDir::new().unwrap();
        let out = temp.path().join("logo.svg");

        run(Some(&out)).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), LOGO_SVG);
    }
}
