//! Neighbour mask model and canonicalization

/// Canonical set construction and duplicate folding
pub mod canonical;
/// Directions, raw masks and the canonicalization rule
pub mod neighbor;

pub use canonical::CanonicalSet;
pub use neighbor::{CanonicalMask, Direction, NeighborMask};
