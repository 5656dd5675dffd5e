//! Manifest data model shared by the generator and the runtime lookup

use crate::io::configuration::{DEFAULT_BIT_WEIGHTS, IMAGE_EXTENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::mask::Direction;
use serde::Serialize;
use std::path::Path;

/// Rectangle in atlas pixel space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Create a rectangle
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Weight contributed by each neighbour direction to a tile index
///
/// Stored in direction order: top left, top, top right, right, bottom right,
/// bottom, bottom left, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitWeights([u32; 8]);

impl Default for BitWeights {
    fn default() -> Self {
        Self(DEFAULT_BIT_WEIGHTS)
    }
}

impl BitWeights {
    /// Wrap weights given in direction order
    pub const fn new(weights: [u32; 8]) -> Self {
        Self(weights)
    }

    /// Weights in direction order
    pub const fn as_array(&self) -> [u32; 8] {
        self.0
    }

    /// Weight of one direction
    pub fn get(&self, direction: Direction) -> u32 {
        self.0.get(direction.index()).copied().unwrap_or(0)
    }

    /// OR together the weights of every present neighbour
    pub fn combine(&self, flags: [bool; 8]) -> u32 {
        self.0
            .iter()
            .zip(flags)
            .filter(|&(_, present)| present)
            .fold(0, |index, (&weight, _)| index | weight)
    }

    /// Parse a comma separated list of eight weights
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly eight unsigned integers are given
    pub fn parse(text: &str) -> Result<Self> {
        let values = text
            .split(',')
            .map(|part| part.trim().parse::<u32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| invalid_parameter("bits", &text, &e))?;

        let weights: [u32; 8] = values.try_into().map_err(|v: Vec<u32>| {
            invalid_parameter("bits", &text, &format!("expected 8 weights, got {}", v.len()))
        })?;
        Ok(Self(weights))
    }

    /// Test whether the weights are the default single bits
    ///
    /// Only then does a combined index address the generated 0..=255 range
    /// one-to-one.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// One atlas region and every raw index drawn with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRecord {
    /// Region in the atlas image
    pub source: Rect,
    /// Raw neighbour indices resolving to this region, canonical index first
    pub indices: Vec<u32>,
}

/// Declarative mapping from neighbour index to atlas region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Path to the atlas image, relative to the manifest or absolute
    pub image: String,
    /// Weights used to turn neighbour flags into an index
    pub bits: BitWeights,
    /// Tile regions
    pub tiles: Vec<TileRecord>,
}

/// Text encoding of a persisted manifest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// camelCase JSON object
    #[default]
    Json,
    /// `Tileset` XML document
    Xml,
}

impl Encoding {
    /// File extension for this encoding
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    /// Guess the encoding from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xml") => Self::Xml,
            _ => Self::Json,
        }
    }
}

/// File name of the atlas image next to a manifest with the given stem
pub fn image_file_name(stem: &Path) -> String {
    let name = stem
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{name}.{IMAGE_EXTENSION}")
}
