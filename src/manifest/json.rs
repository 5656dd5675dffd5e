//! JSON encoding of manifests
//!
//! Field names are camelCase: `image`, `bits.topLeft`, `tiles[].source.x`,
//! `tiles[].indices`.

use crate::io::error::{Result, encoding_error, manifest_error, missing_section};
use crate::manifest::schema::{BitWeights, Manifest, Rect, TileRecord};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const FORMAT: &str = "json";

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBits {
    #[serde(default, deserialize_with = "lenient_u32")]
    top_left: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    top: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    top_right: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    right: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    bottom_right: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    bottom: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    bottom_left: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    left: u32,
}

impl From<BitWeights> for WireBits {
    fn from(bits: BitWeights) -> Self {
        let [top_left, top, top_right, right, bottom_right, bottom, bottom_left, left] =
            bits.as_array();
        Self {
            top_left,
            top,
            top_right,
            right,
            bottom_right,
            bottom,
            bottom_left,
            left,
        }
    }
}

impl From<WireBits> for BitWeights {
    fn from(bits: WireBits) -> Self {
        Self::new([
            bits.top_left,
            bits.top,
            bits.top_right,
            bits.right,
            bits.bottom_right,
            bits.bottom,
            bits.bottom_left,
            bits.left,
        ])
    }
}

#[derive(Deserialize)]
struct WireRect {
    #[serde(default, deserialize_with = "lenient_u32")]
    x: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    y: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    width: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    height: u32,
}

#[derive(Deserialize)]
struct WireTile {
    source: Option<WireRect>,
    #[serde(default, deserialize_with = "lenient_indices")]
    indices: Option<Vec<u32>>,
}

#[derive(Deserialize)]
struct WireManifest {
    image: Option<String>,
    bits: Option<WireBits>,
    tiles: Option<Vec<WireTile>>,
}

#[derive(Serialize)]
struct OutTile<'a> {
    source: Rect,
    indices: &'a [u32],
}

#[derive(Serialize)]
struct OutManifest<'a> {
    image: &'a str,
    bits: WireBits,
    tiles: Vec<OutTile<'a>>,
}

/// Integer value of a JSON number or numeric string, if it fits a `u32`
fn coerce_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_u32(&value).unwrap_or(0))
}

fn lenient_indices<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<Vec<u32>>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(items.iter().filter_map(coerce_u32).collect()),
        _ => None,
    })
}

/// Serialize a manifest, optionally pretty-printed
///
/// # Errors
///
/// Returns an encoding error if serialization fails
pub fn to_string(manifest: &Manifest, pretty: bool) -> Result<String> {
    let out = OutManifest {
        image: &manifest.image,
        bits: manifest.bits.into(),
        tiles: manifest
            .tiles
            .iter()
            .map(|tile| OutTile {
                source: tile.source,
                indices: &tile.indices,
            })
            .collect(),
    };

    let encoded = if pretty {
        serde_json::to_string_pretty(&out)
    } else {
        serde_json::to_string(&out)
    };
    encoded.map_err(|e| encoding_error(FORMAT, &e))
}

/// Parse a manifest, checking every required section is present
///
/// Unparsable numbers in `bits` and `source` become zero and unparsable
/// entries in `indices` are skipped.
///
/// # Errors
///
/// Returns an encoding error for malformed JSON and a manifest data error
/// naming the first missing section or tile field
pub fn from_str(text: &str) -> Result<Manifest> {
    let wire: WireManifest = serde_json::from_str(text).map_err(|e| encoding_error(FORMAT, &e))?;

    let image = wire.image.ok_or_else(|| missing_section("image"))?;
    let bits = wire.bits.ok_or_else(|| missing_section("bits"))?;
    let tiles = wire.tiles.ok_or_else(|| missing_section("tiles"))?;

    let tiles = tiles
        .into_iter()
        .enumerate()
        .map(|(position, tile)| {
            let source = tile
                .source
                .ok_or_else(|| manifest_error(&format!("tile {position} has no source")))?;
            let indices = tile
                .indices
                .ok_or_else(|| manifest_error(&format!("tile {position} has no indices")))?;
            Ok(TileRecord {
                source: Rect::new(source.x, source.y, source.width, source.height),
                indices,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Manifest {
        image,
        bits: bits.into(),
        tiles,
    })
}
