//! Generation constants and runtime configuration defaults

/// Number of raw neighbour masks (one bit per compass direction)
pub const MASK_COUNT: usize = 256;

/// Number of distinct tiles after canonicalization
pub const CANONICAL_TILE_COUNT: usize = 47;

/// Tiles per atlas row when not sizing to a power of two
pub const ATLAS_COLUMNS: u32 = 7;

/// Default tile size in pixels
pub const DEFAULT_TILE_SIZE: u32 = 32;

/// Default output path stem
pub const DEFAULT_OUTPUT_STEM: &str = "blob";

/// Largest accepted tile size in pixels
pub const MAX_TILE_SIZE: u32 = 4096;

/// Default bit weights in direction order, top left clockwise to left
pub const DEFAULT_BIT_WEIGHTS: [u32; 8] = [1, 2, 4, 8, 16, 32, 64, 128];

// Source grid dimensions in half-tile cells
/// Columns and rows of the 13-sprite source layout
pub const MICRO_GRID: (u32, u32) = (3, 5);
/// Columns and rows of the 20-sprite source layout
pub const MACRO_GRID: (u32, u32) = (4, 6);

// Template colours for synthesized sprites
/// Solid side of a synthesized sprite
pub const TEMPLATE_SOLID: [u8; 4] = [255, 255, 0, 255];
/// Empty side of a synthesized sprite
pub const TEMPLATE_EMPTY: [u8; 4] = [255, 255, 255, 255];
/// Outline drawn on shape boundaries
pub const TEMPLATE_OUTLINE: [u8; 4] = [128, 128, 128, 255];

/// Colour of index labels drawn over the atlas
pub const LABEL_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Tile pixels per label glyph pixel
pub const LABEL_SCALE_DIVISOR: u32 = 16;

/// Atlas image file extension
pub const IMAGE_EXTENSION: &str = "png";
