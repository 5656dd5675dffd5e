//! Procedural template sprites for building an atlas without a source image

use crate::io::configuration::{TEMPLATE_EMPTY, TEMPLATE_OUTLINE, TEMPLATE_SOLID};
use image::{Rgba, RgbaImage};

/// Side of a sprite that is filled solid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Upper half
    Top,
    /// Left half
    Left,
    /// Right half
    Right,
    /// Lower half
    Bottom,
}

/// One synthesized sprite, described by its shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Solid square
    Solid,
    /// Square with a circle of radius `size / 2` centred at (u, v) in unit coordinates
    Circle {
        /// Horizontal centre, 0 = left edge, 1 = right edge
        u: f32,
        /// Vertical centre, 0 = top edge, 1 = bottom edge
        v: f32,
        /// Whether the square is solid and the circle empty
        cutout: bool,
    },
    /// Square with one half solid
    Half(Side),
}

/// Shapes of the 13 micro sprites in slot order
pub const MICRO_SHAPES: [Shape; 13] = [
    Shape::Circle {
        u: 1.0,
        v: 1.0,
        cutout: true,
    },
    Shape::Circle {
        u: 0.0,
        v: 1.0,
        cutout: true,
    },
    Shape::Circle {
        u: 1.0,
        v: 0.0,
        cutout: true,
    },
    Shape::Circle {
        u: 0.0,
        v: 0.0,
        cutout: true,
    },
    Shape::Circle {
        u: 1.0,
        v: 1.0,
        cutout: false,
    },
    Shape::Half(Side::Bottom),
    Shape::Circle {
        u: 0.0,
        v: 1.0,
        cutout: false,
    },
    Shape::Half(Side::Right),
    Shape::Solid,
    Shape::Half(Side::Left),
    Shape::Circle {
        u: 1.0,
        v: 0.0,
        cutout: false,
    },
    Shape::Half(Side::Top),
    Shape::Circle {
        u: 0.0,
        v: 0.0,
        cutout: false,
    },
];

/// Draw all 13 micro sprites at `size × size`
pub fn synthesize(size: u32) -> Vec<RgbaImage> {
    MICRO_SHAPES
        .iter()
        .map(|&shape| draw_shape(shape, size))
        .collect()
}

/// Draw a single sprite
pub fn draw_shape(shape: Shape, size: u32) -> RgbaImage {
    let solid = Rgba(TEMPLATE_SOLID);
    let empty = Rgba(TEMPLATE_EMPTY);
    let outline = Rgba(TEMPLATE_OUTLINE);
    let extent = size as f32;

    RgbaImage::from_fn(size, size, |x, y| {
        // Sample at the pixel centre
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        match shape {
            Shape::Solid => solid,
            Shape::Circle { u, v, cutout } => {
                let radius = extent / 2.0;
                let distance = (px - u * extent).hypot(py - v * extent);
                if (distance - radius).abs() < 0.5 {
                    outline
                } else if (distance < radius) != cutout {
                    solid
                } else {
                    empty
                }
            }
            Shape::Half(side) => {
                let (coordinate, solid_low) = match side {
                    Side::Top => (y, true),
                    Side::Bottom => (y, false),
                    Side::Left => (x, true),
                    Side::Right => (x, false),
                };
                // Outline takes the first pixel line past the middle
                let middle = size / 2;
                if coordinate == middle {
                    outline
                } else if (coordinate < middle) == solid_low {
                    solid
                } else {
                    empty
                }
            }
        }
    })
}
