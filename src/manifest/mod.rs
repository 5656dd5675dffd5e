//! Manifest schema, construction and text encodings

/// Manifest assembly from canonical set and atlas positions
pub mod builder;
/// camelCase JSON encoding
pub mod json;
/// Typed manifest model
pub mod schema;
/// `Tileset` XML encoding
pub mod xml;

pub use schema::{BitWeights, Encoding, Manifest, Rect, TileRecord};

use crate::io::error::Result;

/// Encode a manifest in the given format
///
/// # Errors
///
/// Returns an encoding error if serialization fails
pub fn encode(manifest: &Manifest, encoding: Encoding, pretty: bool) -> Result<String> {
    match encoding {
        Encoding::Json => json::to_string(manifest, pretty),
        Encoding::Xml => xml::to_string(manifest, pretty),
    }
}

/// Decode a manifest from text in the given format
///
/// # Errors
///
/// Returns an encoding error for malformed text and a manifest data error
/// for missing sections
pub fn decode(text: &str, encoding: Encoding) -> Result<Manifest> {
    match encoding {
        Encoding::Json => json::from_str(text),
        Encoding::Xml => xml::from_str(text),
    }
}
