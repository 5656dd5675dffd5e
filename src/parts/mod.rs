//! Quadrant sprite libraries
//!
//! Sprites come either from the procedural template or from slicing a
//! user image laid out on a grid of half-tile cells.

/// Sprite library and projection
pub mod library;
/// Part vocabulary and slot layouts
pub mod part;
/// Source image slicing
pub mod sliced;
/// Procedural template sprites
pub mod synthetic;

pub use library::{PartLibrary, Projection};
pub use part::{PartKind, PartLayout, PartRef, Quadrant};
