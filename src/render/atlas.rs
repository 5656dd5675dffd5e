//! Packing composed tiles into a single atlas image

use crate::io::configuration::{ATLAS_COLUMNS, CANONICAL_TILE_COUNT};
use crate::io::error::{Result, computation_error};
use crate::manifest::schema::Rect;
use crate::mask::CanonicalMask;
use crate::parts::Projection;
use crate::render::compositor::ComposedTile;
use image::RgbaImage;
use image::imageops;
use std::collections::BTreeMap;

/// Atlas dimensions and grid for a given tile size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasLayout {
    /// Atlas width in pixels
    pub width: u32,
    /// Atlas height in pixels
    pub height: u32,
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    /// Tiles per row
    pub columns: u32,
}

impl AtlasLayout {
    /// Size an atlas for the canonical tile count
    ///
    /// The default is a 7×7 grid. With `power_of_two` the width is the next
    /// power of two holding seven tiles, and the height the next power of two
    /// holding every row that width implies.
    pub fn new(size: u32, projection: Projection, power_of_two: bool) -> Self {
        let tile_width = size.max(1);
        let tile_height = projection.tile_height(size).max(1);

        if power_of_two {
            let width = (ATLAS_COLUMNS * tile_width).next_power_of_two();
            let columns = width / tile_width;
            let rows = (CANONICAL_TILE_COUNT as u32).div_ceil(columns);
            let height = (rows * tile_height).next_power_of_two();
            Self {
                width,
                height,
                tile_width,
                tile_height,
                columns,
            }
        } else {
            Self {
                width: ATLAS_COLUMNS * tile_width,
                height: ATLAS_COLUMNS * tile_height,
                tile_width,
                tile_height,
                columns: ATLAS_COLUMNS,
            }
        }
    }

    /// Region of the tile at position `slot` in raster order
    pub const fn region(&self, slot: u32) -> Rect {
        Rect {
            x: (slot % self.columns) * self.tile_width,
            y: (slot / self.columns) * self.tile_height,
            width: self.tile_width,
            height: self.tile_height,
        }
    }

    /// Number of tiles the atlas can hold
    pub const fn capacity(&self) -> u32 {
        self.columns * (self.height / self.tile_height)
    }
}

/// Packed atlas image with the region of every canonical tile
#[derive(Debug, Clone)]
pub struct Atlas {
    /// Atlas pixels
    pub image: RgbaImage,
    /// Region of each tile, keyed by its canonical mask
    pub positions: BTreeMap<CanonicalMask, Rect>,
}

/// Place tiles left to right, top to bottom, in the order given
///
/// # Errors
///
/// Returns an error if there are more tiles than the layout holds or a tile
/// does not match the layout's tile size
pub fn pack(tiles: &[ComposedTile], layout: &AtlasLayout) -> Result<Atlas> {
    if tiles.len() > layout.capacity() as usize {
        return Err(computation_error(
            "atlas packing",
            &format!(
                "{} tiles do not fit a {}x{} atlas of {}x{} tiles",
                tiles.len(),
                layout.width,
                layout.height,
                layout.tile_width,
                layout.tile_height
            ),
        ));
    }

    let mut image = RgbaImage::new(layout.width, layout.height);
    let mut positions = BTreeMap::new();

    for (slot, tile) in (0u32..).zip(tiles) {
        if tile.image.dimensions() != (layout.tile_width, layout.tile_height) {
            return Err(computation_error(
                "atlas packing",
                &format!(
                    "tile {} is {}x{}, expected {}x{}",
                    tile.mask,
                    tile.image.width(),
                    tile.image.height(),
                    layout.tile_width,
                    layout.tile_height
                ),
            ));
        }

        let region = layout.region(slot);
        imageops::replace(
            &mut image,
            &tile.image,
            i64::from(region.x),
            i64::from(region.y),
        );
        positions.insert(tile.mask, region);
    }

    log::debug!(
        "packed {} tiles into {}x{} atlas",
        positions.len(),
        layout.width,
        layout.height
    );

    Ok(Atlas { image, positions })
}
