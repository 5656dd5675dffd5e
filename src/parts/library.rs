//! Quadrant sprite libraries in orthogonal or isometric projection

use crate::io::error::{BlobError, Result, computation_error, invalid_parameter};
use crate::parts::part::{PartLayout, PartRef};
use crate::parts::{sliced, synthetic};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use std::path::Path;

/// Geometric projection of the generated tiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Square tiles split in half along each axis
    #[default]
    Orthogonal,
    /// Diamond tiles with a 2:1 bounding box
    Isometric,
}

impl Projection {
    /// Height of a full tile `size` pixels wide
    pub const fn tile_height(self, size: u32) -> u32 {
        match self {
            Self::Orthogonal => size,
            Self::Isometric => size / 2,
        }
    }

    /// Height of a quadrant cell `half` pixels wide
    pub const fn cell_height(self, half: u32) -> u32 {
        self.tile_height(half)
    }

    /// Test for isometric projection
    pub const fn is_isometric(self) -> bool {
        matches!(self, Self::Isometric)
    }
}

/// Ordered quadrant sprites addressable by [`PartRef`]
#[derive(Debug, Clone)]
pub struct PartLibrary {
    layout: PartLayout,
    projection: Projection,
    sprites: Vec<RgbaImage>,
}

impl PartLibrary {
    /// Draw the 13-sprite template at `half` pixels per quadrant
    ///
    /// Isometric sprites are the orthogonal template squashed to half height.
    ///
    /// # Errors
    ///
    /// Returns an error if `half` is zero or too small to squash
    pub fn synthetic(half: u32, projection: Projection) -> Result<Self> {
        let cell_height = projection.cell_height(half);
        if half == 0 || cell_height == 0 {
            return Err(invalid_parameter(
                "half",
                &half,
                &"quadrant sprites need at least one pixel per side",
            ));
        }

        let mut sprites = synthetic::synthesize(half);
        if projection.is_isometric() {
            sprites = sprites
                .iter()
                .map(|sprite| imageops::resize(sprite, half, cell_height, FilterType::Nearest))
                .collect();
        }

        Self::from_sprites(PartLayout::Micro, projection, sprites)
    }

    /// Slice quadrant sprites out of an in-memory source image
    ///
    /// # Errors
    ///
    /// Returns `SourceTooSmall` if the image cannot hold the 13-sprite grid
    pub fn from_image(source: &RgbaImage, half: u32, projection: Projection) -> Result<Self> {
        if half == 0 {
            return Err(invalid_parameter(
                "half",
                &half,
                &"quadrant sprites need at least one pixel per side",
            ));
        }
        let (layout, sprites) = sliced::slice(source, half, projection)?;
        log::debug!(
            "sliced {} sprites ({layout:?}) from {}x{} source",
            sprites.len(),
            source.width(),
            source.height()
        );
        Self::from_sprites(layout, projection, sprites)
    }

    /// Load a source image from disk and slice it
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, cannot be decoded, or is too small
    pub fn from_path<P: AsRef<Path>>(path: P, half: u32, projection: Projection) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(invalid_parameter(
                "source",
                &path.display(),
                &"could not find source file",
            ));
        }
        let source = image::open(path)
            .map_err(|e| BlobError::ImageLoad {
                path: path.to_path_buf(),
                source: e,
            })?
            .to_rgba8();
        Self::from_image(&source, half, projection)
    }

    /// Wrap already-prepared sprites
    ///
    /// # Errors
    ///
    /// Returns an error if the sprite count does not match the layout
    pub fn from_sprites(
        layout: PartLayout,
        projection: Projection,
        sprites: Vec<RgbaImage>,
    ) -> Result<Self> {
        if sprites.len() != layout.sprite_count() {
            return Err(computation_error(
                "part library",
                &format!(
                    "{layout:?} layout needs {} sprites, got {}",
                    layout.sprite_count(),
                    sprites.len()
                ),
            ));
        }
        Ok(Self {
            layout,
            projection,
            sprites,
        })
    }

    /// Sprite for a part, if the library holds it
    pub fn sprite(&self, part: PartRef) -> Option<&RgbaImage> {
        self.sprites.get(self.layout.slot(part))
    }

    /// Slot arrangement of this library
    pub const fn layout(&self) -> PartLayout {
        self.layout
    }

    /// Projection the sprites were prepared for
    pub const fn projection(&self) -> Projection {
        self.projection
    }

    /// All sprites in slot order
    pub fn sprites(&self) -> &[RgbaImage] {
        &self.sprites
    }
}
