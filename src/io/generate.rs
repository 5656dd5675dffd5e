//! Generation entry point: atlas image plus manifest on disk

use crate::io::configuration::{CANONICAL_TILE_COUNT, IMAGE_EXTENSION, MAX_TILE_SIZE};
use crate::io::error::{BlobError, Result, invalid_parameter};
use crate::io::progress::GenerationProgress;
use crate::manifest::schema::image_file_name;
use crate::manifest::{self, BitWeights, Encoding, Manifest};
use crate::mask::CanonicalSet;
use crate::parts::{PartLibrary, Projection};
use crate::render::atlas::{self, AtlasLayout};
use crate::render::compositor::Compositor;
use crate::render::overlay;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Options for one generation run
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateOptions {
    /// Size the atlas to power-of-two dimensions
    pub power_of_two: bool,
    /// Indent the manifest
    pub pretty: bool,
    /// Image to slice quadrant sprites from instead of the built-in template
    pub source: Option<PathBuf>,
    /// Draw each tile's canonical index over it
    pub draw_indices: bool,
    /// Manifest encoding
    pub encoding: Encoding,
    /// Tile projection
    pub projection: Projection,
    /// Weights written to the manifest
    pub bits: BitWeights,
    /// Show a progress bar while composing
    pub show_progress: bool,
}

/// Files written by a generation run
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    /// Atlas image path
    pub image_path: PathBuf,
    /// Manifest path
    pub manifest_path: PathBuf,
    /// Manifest as written
    pub manifest: Manifest,
}

/// Check a tile size can be split into quadrants for the projection
///
/// # Errors
///
/// Returns an error for odd sizes, sizes outside 2..=4096, or isometric sizes
/// that are not a multiple of four
pub fn validate_size(size: u32, projection: Projection) -> Result<()> {
    let step = if projection.is_isometric() { 4 } else { 2 };
    if size < step || size > MAX_TILE_SIZE {
        return Err(invalid_parameter(
            "size",
            &size,
            &format!("must be between {step} and {MAX_TILE_SIZE}"),
        ));
    }
    if size % step != 0 {
        return Err(invalid_parameter(
            "size",
            &size,
            &format!("must be a multiple of {step} in {projection:?} projection"),
        ));
    }
    Ok(())
}

fn load_library(size: u32, options: &GenerateOptions) -> Result<PartLibrary> {
    let half = size / 2;
    match options.source {
        Some(ref source) => PartLibrary::from_path(source, half, options.projection),
        None => PartLibrary::synthetic(half, options.projection),
    }
}

/// Run the whole pipeline in memory
///
/// `image_name` is recorded as the manifest's image path.
///
/// # Errors
///
/// Returns configuration errors for bad sizes or a missing source, geometric
/// errors for an undersized source, and any composition error
pub fn render_atlas(
    size: u32,
    image_name: &str,
    options: &GenerateOptions,
    progress: &GenerationProgress,
) -> Result<(RgbaImage, Manifest)> {
    validate_size(size, options.projection)?;
    let library = load_library(size, options)?;
    let set = CanonicalSet::build();
    log::info!(
        "composing {} tiles at {size}px ({:?}, {:?} parts)",
        set.len(),
        options.projection,
        library.layout()
    );

    progress.stage("composing");
    let compositor = Compositor::new(&library, size);
    let tiles = compositor.compose_all(&set, |_| progress.tile_done())?;

    progress.stage("packing");
    let layout = AtlasLayout::new(size, options.projection, options.power_of_two);
    let mut packed = atlas::pack(&tiles, &layout)?;

    if options.draw_indices {
        let scale = overlay::label_scale(size);
        for (mask, &region) in &packed.positions {
            overlay::draw_label(&mut packed.image, region, u32::from(mask.bits()), scale);
        }
    }

    let manifest = manifest::builder::build(&set, &packed.positions, image_name, options.bits)?;
    debug_assert_eq!(manifest.tiles.len(), CANONICAL_TILE_COUNT);
    Ok((packed.image, manifest))
}

fn encode_png(image: &RgbaImage, path: &Path) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| BlobError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(bytes.into_inner())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| BlobError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source: e,
    })
}

/// Path with `extension` appended to the stem, keeping any dots in the stem
fn with_extension(stem: &Path, extension: &str) -> PathBuf {
    let mut path = stem.as_os_str().to_owned();
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

/// Generate `<stem>.png` and `<stem>.json` (or `.xml`)
///
/// Both files are fully encoded before either is written. If the manifest
/// cannot be written the atlas image is removed again.
///
/// # Errors
///
/// Returns configuration, geometric and composition errors before touching
/// the filesystem, and file system errors if writing fails
pub fn generate(size: u32, stem: &Path, options: &GenerateOptions) -> Result<GenerationOutput> {
    let progress = GenerationProgress::new(CANONICAL_TILE_COUNT, options.show_progress);
    let image_name = image_file_name(stem);
    let (image, manifest) = render_atlas(size, &image_name, options, &progress)?;

    progress.stage("writing");
    let image_path = with_extension(stem, IMAGE_EXTENSION);
    let manifest_path = with_extension(stem, options.encoding.extension());
    let png = encode_png(&image, &image_path)?;
    let text = manifest::encode(&manifest, options.encoding, options.pretty)?;

    if let Some(parent) = image_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| BlobError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    write_file(&image_path, &png)?;
    if let Err(error) = write_file(&manifest_path, text.as_bytes()) {
        if let Err(cleanup) = std::fs::remove_file(&image_path) {
            log::warn!(
                "could not remove '{}' after failed write: {cleanup}",
                image_path.display()
            );
        }
        return Err(error);
    }

    progress.finish();
    log::info!(
        "wrote '{}' and '{}'",
        image_path.display(),
        manifest_path.display()
    );

    Ok(GenerationOutput {
        image_path,
        manifest_path,
        manifest,
    })
}
