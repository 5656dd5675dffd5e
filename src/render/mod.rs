//! Tile composition and atlas packing

/// Atlas sizing and tile placement
pub mod atlas;
/// Quadrant composition of individual tiles
pub mod compositor;
/// Debug index labels
pub mod overlay;

pub use atlas::{Atlas, AtlasLayout};
pub use compositor::{ComposedTile, Compositor};
