//! Map style document assembly.
//!
//! The rendering engine consumes a JSON style document naming its data
//! sources and visual layers. For the offline viewer that document has a
//! fixed shape: one raster source backed by the local tile package, one
//! layer drawing it, both named `"offline"`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

/// Style specification version understood by the rendering engine.
pub const STYLE_VERSION: u32 = 8;

/// Name of the generated style.
pub const STYLE_NAME: &str = "offline";

/// Identifier shared by the single source and the single layer.
pub const OFFLINE_SOURCE_ID: &str = "offline";

/// URL scheme for locally stored tile packages.
pub const MBTILES_SCHEME: &str = "mbtiles://";

/// Raster tile edge length in pixels.
pub const RASTER_TILE_SIZE: u32 = 256;

/// Style description handed to the rendering engine.
#[derive(Debug, Clone, Serialize)]
pub struct StyleDocument {
    pub version: u32,
    pub name: String,
    pub sources: BTreeMap<String, RasterSource>,
    pub layers: Vec<StyleLayer>,
}

/// A raster imagery source backed by a tile package.
#[derive(Debug, Clone, Serialize)]
pub struct RasterSource {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    #[serde(rename = "tileSize")]
    pub tile_size: u32,
}

/// A visual layer drawing one source.
#[derive(Debug, Clone, Serialize)]
pub struct StyleLayer {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub source: String,
}

impl StyleDocument {
    /// Serialize to the JSON form the rendering engine accepts.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Build the style document for a locally stored tile package.
///
/// Pure and deterministic: the path is embedded verbatim behind the
/// `mbtiles://` scheme, with no validation that it exists or parses. The
/// rendering engine reports any problem with the referenced file when the
/// style is applied.
pub fn offline_style(package: &Path) -> StyleDocument {
    let mut sources = BTreeMap::new();
    sources.insert(
        OFFLINE_SOURCE_ID.to_string(),
        RasterSource {
            kind: "raster".to_string(),
            url: format!("{}{}", MBTILES_SCHEME, package.display()),
            tile_size: RASTER_TILE_SIZE,
        },
    );

    StyleDocument {
        version: STYLE_VERSION,
        name: STYLE_NAME.to_string(),
        sources,
        layers: vec![StyleLayer {
            id: OFFLINE_SOURCE_ID.to_string(),
            kind: "raster".to_string(),
            source: OFFLINE_SOURCE_ID.to_string(),
        }],
    }
}
