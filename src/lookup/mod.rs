//! Runtime lookup of atlas regions by neighbour index

/// Image-backed loader implementations
pub mod loaders;
/// Generic lookup table and loader strategy
pub mod tileset;

pub use loaders::{ImageRegionLoader, RectLoader};
pub use tileset::{FnLoader, RegionLoader, TileLookup};
