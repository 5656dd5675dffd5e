//! Slicing a user-supplied image into quadrant sprites

use crate::io::error::{BlobError, Result};
use crate::parts::library::Projection;
use crate::parts::part::PartLayout;
use image::RgbaImage;
use image::imageops;

/// Minimum source (width, height) in pixels for `layout` at `half` pixels per cell
///
/// Isometric cells are half as tall, so the height requirement is halved
/// after scaling by the row count.
pub const fn required_size(layout: PartLayout, half: u32, projection: Projection) -> (u32, u32) {
    let (columns, rows) = layout.grid();
    let height = match projection {
        Projection::Orthogonal => rows * half,
        Projection::Isometric => (rows * half) / 2,
    };
    (columns * half, height)
}

/// Pick the richest layout the source image can hold
///
/// # Errors
///
/// Returns `SourceTooSmall` if the image cannot hold even the 13-sprite layout
pub fn detect_layout(
    width: u32,
    height: u32,
    half: u32,
    projection: Projection,
) -> Result<PartLayout> {
    let fits = |(min_width, min_height): (u32, u32)| width >= min_width && height >= min_height;

    let micro = required_size(PartLayout::Micro, half, projection);
    if !fits(micro) {
        return Err(BlobError::SourceTooSmall {
            required: micro,
            actual: (width, height),
        });
    }

    if fits(required_size(PartLayout::Macro, half, projection)) {
        Ok(PartLayout::Macro)
    } else {
        Ok(PartLayout::Micro)
    }
}

/// Cut the source image into sprites for the detected layout
///
/// # Errors
///
/// Returns `SourceTooSmall` before any cropping if the source is too small
pub fn slice(
    source: &RgbaImage,
    half: u32,
    projection: Projection,
) -> Result<(PartLayout, Vec<RgbaImage>)> {
    let layout = detect_layout(source.width(), source.height(), half, projection)?;
    let cell_width = half;
    let cell_height = projection.cell_height(half);

    let sprites = layout
        .cells()
        .iter()
        .map(|&(column, row)| {
            imageops::crop_imm(
                source,
                column * cell_width,
                row * cell_height,
                cell_width,
                cell_height,
            )
            .to_image()
        })
        .collect();

    Ok((layout, sprites))
}
