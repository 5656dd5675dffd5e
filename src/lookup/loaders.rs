//! Ready-made loaders backed by the `image` crate

use crate::io::error::{BlobError, Result, loader_error};
use crate::lookup::tileset::RegionLoader;
use crate::manifest::Rect;
use image::RgbaImage;
use image::imageops;
use std::path::{Path, PathBuf};

fn load_rgba(base: Option<&Path>, path: &str) -> Result<RgbaImage> {
    let path = match base {
        Some(base) => base.join(path),
        None => PathBuf::from(path),
    };
    image::open(&path)
        .map(|image| image.to_rgba8())
        .map_err(|e| BlobError::ImageLoad { path, source: e })
}

fn check_bounds(image: &RgbaImage, source: Rect) -> Result<()> {
    let right = u64::from(source.x) + u64::from(source.width);
    let bottom = u64::from(source.y) + u64::from(source.height);
    if right > u64::from(image.width()) || bottom > u64::from(image.height()) {
        return Err(loader_error(&format!(
            "region {}x{} at ({}, {}) exceeds {}x{} image",
            source.width,
            source.height,
            source.x,
            source.y,
            image.width(),
            image.height()
        )));
    }
    Ok(())
}

/// Loads the atlas as an RGBA image and keeps regions as rectangles
#[derive(Debug, Clone, Default)]
pub struct RectLoader {
    base: Option<PathBuf>,
}

impl RectLoader {
    /// Resolve image paths as given
    pub const fn new() -> Self {
        Self { base: None }
    }

    /// Resolve relative image paths against `base`
    pub fn relative_to(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }
}

impl RegionLoader for RectLoader {
    type Image = RgbaImage;
    type Region = Rect;

    fn load_image(&mut self, path: &str) -> Result<RgbaImage> {
        load_rgba(self.base.as_deref(), path)
    }

    fn load_region(&mut self, image: &RgbaImage, source: Rect) -> Result<Rect> {
        check_bounds(image, source)?;
        Ok(source)
    }
}

/// Loads the atlas as an RGBA image and copies each region out of it
#[derive(Debug, Clone, Default)]
pub struct ImageRegionLoader {
    base: Option<PathBuf>,
}

impl ImageRegionLoader {
    /// Resolve image paths as given
    pub const fn new() -> Self {
        Self { base: None }
    }

    /// Resolve relative image paths against `base`
    pub fn relative_to(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }
}

impl RegionLoader for ImageRegionLoader {
    type Image = RgbaImage;
    type Region = RgbaImage;

    fn load_image(&mut self, path: &str) -> Result<RgbaImage> {
        load_rgba(self.base.as_deref(), path)
    }

    fn load_region(&mut self, image: &RgbaImage, source: Rect) -> Result<RgbaImage> {
        check_bounds(image, source)?;
        Ok(imageops::crop_imm(image, source.x, source.y, source.width, source.height).to_image())
    }
}

/// Directory containing a manifest file, for resolving its image path
pub fn manifest_dir(manifest_path: &Path) -> PathBuf {
    manifest_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
