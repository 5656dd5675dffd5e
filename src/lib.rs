//! Blob autotile generation and neighbour-mask tile lookup
//!
//! The generator composes the 47 distinct tiles of an eight-neighbour blob
//! tileset from quadrant sprites, packs them into an atlas image and writes a
//! manifest mapping all 256 neighbour masks to atlas regions. The lookup side
//! reads a manifest back and answers "which region for these neighbours".

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Runtime lookup from neighbour flags to loaded regions
pub mod lookup;
/// Manifest model and its JSON and XML encodings
pub mod manifest;
/// Neighbour masks and their canonical forms
pub mod mask;
/// Quadrant sprite vocabulary and libraries
pub mod parts;
/// Tile composition and atlas packing
pub mod render;

pub use io::error::{BlobError, Result};
pub use io::generate::{GenerateOptions, GenerationOutput, generate};
pub use lookup::TileLookup;
