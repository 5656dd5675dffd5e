//! Composition of full tiles from four quadrant sprites

use crate::io::error::{Result, computation_error};
use crate::mask::{CanonicalMask, CanonicalSet};
use crate::parts::{PartLibrary, PartRef, Projection, Quadrant};
use image::RgbaImage;
use image::imageops;
use rayon::prelude::*;

/// One rendered tile and the canonical mask it represents
#[derive(Debug, Clone)]
pub struct ComposedTile {
    /// Mask this tile was drawn for
    pub mask: CanonicalMask,
    /// Tile pixels, `size × tile_height`
    pub image: RgbaImage,
}

/// Top-left pixel offset of a quadrant inside a tile `size` pixels wide
///
/// Isometric quadrants sit on a diamond: the top-left sprite is the top of
/// the diamond, top-right the right, bottom-left the left and bottom-right
/// the bottom.
pub const fn quadrant_offset(quadrant: Quadrant, size: u32, projection: Projection) -> (u32, u32) {
    match projection {
        Projection::Orthogonal => {
            let half = size / 2;
            match quadrant {
                Quadrant::TopLeft => (0, 0),
                Quadrant::TopRight => (half, 0),
                Quadrant::BottomLeft => (0, half),
                Quadrant::BottomRight => (half, half),
            }
        }
        Projection::Isometric => {
            let width = size;
            let height = size / 2;
            match quadrant {
                Quadrant::TopLeft => (width / 4, 0),
                Quadrant::TopRight => (width / 2, height / 4),
                Quadrant::BottomLeft => (0, height / 4),
                Quadrant::BottomRight => (width / 4, height / 2),
            }
        }
    }
}

/// Renders canonical masks using a part library
#[derive(Debug, Clone, Copy)]
pub struct Compositor<'a> {
    library: &'a PartLibrary,
    size: u32,
}

impl<'a> Compositor<'a> {
    /// Create a compositor for tiles `size` pixels wide
    pub const fn new(library: &'a PartLibrary, size: u32) -> Self {
        Self { library, size }
    }

    /// Width and height of every composed tile
    pub const fn tile_dimensions(&self) -> (u32, u32) {
        (self.size, self.library.projection().tile_height(self.size))
    }

    /// Draw the tile for one canonical mask
    ///
    /// # Errors
    ///
    /// Returns an error if the library lacks a sprite the mask needs
    pub fn compose(&self, mask: CanonicalMask) -> Result<ComposedTile> {
        let (width, height) = self.tile_dimensions();
        let projection = self.library.projection();
        let mut image = RgbaImage::new(width, height);

        for quadrant in Quadrant::ALL {
            let part = PartRef::select(mask, quadrant);
            let sprite = self.library.sprite(part).ok_or_else(|| {
                computation_error(
                    "tile composition",
                    &format!("no sprite for {part:?} in {:?} library", self.library.layout()),
                )
            })?;
            let (x, y) = quadrant_offset(quadrant, self.size, projection);
            imageops::overlay(&mut image, sprite, i64::from(x), i64::from(y));
        }

        Ok(ComposedTile { mask, image })
    }

    /// Draw every tile of the canonical set, in set order
    ///
    /// Tiles are rendered in parallel; `on_tile` runs once per finished tile.
    ///
    /// # Errors
    ///
    /// Returns the first composition error encountered
    pub fn compose_all<F>(&self, set: &CanonicalSet, on_tile: F) -> Result<Vec<ComposedTile>>
    where
        F: Fn(CanonicalMask) + Sync,
    {
        let masks: Vec<CanonicalMask> = set.masks().collect();
        masks
            .par_iter()
            .map(|&mask| {
                let tile = self.compose(mask)?;
                on_tile(mask);
                Ok(tile)
            })
            .collect()
    }
}
