//! Quadrant sprite vocabulary and the slot layouts that address it
//!
//! Sprites in source order, left to right and top to bottom:
//!
//! ```text
//! XX  XX
//! X-  -X
//!
//! X-  -X
//! XX  XX
//!
//! --  --  --
//! -X  XX  X-
//!
//! -X  XX  X-
//! -X  XX  X-
//!
//! -X  XX  X-
//! --  --  --
//! ```

use crate::io::configuration::{MACRO_GRID, MICRO_GRID};
use crate::mask::neighbor::{CanonicalMask, Direction};

/// One quarter of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Upper left quarter
    TopLeft,
    /// Upper right quarter
    TopRight,
    /// Lower left quarter
    BottomLeft,
    /// Lower right quarter
    BottomRight,
}

impl Quadrant {
    /// All quadrants in drawing order
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Cardinal neighbour above or below this quadrant
    pub const fn vertical_edge(self) -> Direction {
        match self {
            Self::TopLeft | Self::TopRight => Direction::Top,
            Self::BottomLeft | Self::BottomRight => Direction::Bottom,
        }
    }

    /// Cardinal neighbour beside this quadrant
    pub const fn horizontal_edge(self) -> Direction {
        match self {
            Self::TopLeft | Self::BottomLeft => Direction::Left,
            Self::TopRight | Self::BottomRight => Direction::Right,
        }
    }

    /// Diagonal neighbour touching this quadrant's outer corner
    pub const fn corner(self) -> Direction {
        match self {
            Self::TopLeft => Direction::TopLeft,
            Self::TopRight => Direction::TopRight,
            Self::BottomLeft => Direction::BottomLeft,
            Self::BottomRight => Direction::BottomRight,
        }
    }
}

/// Shape of a quadrant sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    /// Solid interior
    Full,
    /// Both edges connected, diagonal missing
    CornerInner,
    /// Isolated corner
    CornerOuter,
    /// Connected sideways only
    EdgeHorizontal,
    /// Connected up or down only
    EdgeVertical,
}

/// A sprite shape for a specific quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartRef {
    /// Shape to draw
    pub kind: PartKind,
    /// Quadrant it is drawn into
    pub quadrant: Quadrant,
}

impl PartRef {
    /// Create a part reference
    pub const fn new(kind: PartKind, quadrant: Quadrant) -> Self {
        Self { kind, quadrant }
    }

    /// Pick the sprite shape for one quadrant of a canonical mask
    pub const fn select(mask: CanonicalMask, quadrant: Quadrant) -> Self {
        let vertical = mask.has(quadrant.vertical_edge());
        let horizontal = mask.has(quadrant.horizontal_edge());
        let kind = match (vertical, horizontal) {
            (true, true) if mask.has(quadrant.corner()) => PartKind::Full,
            (true, true) => PartKind::CornerInner,
            (true, false) => PartKind::EdgeVertical,
            (false, true) => PartKind::EdgeHorizontal,
            (false, false) => PartKind::CornerOuter,
        };
        Self::new(kind, quadrant)
    }
}

/// Arrangement of quadrant sprites in a part library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartLayout {
    /// 13 sprites: one shared full sprite, edges shared along each side
    Micro,
    /// 20 sprites: quadrant-specific full and edge sprites
    Macro,
}

// Cell (column, row) of each slot in the source image, in half-tile units
const MICRO_CELLS: [(u32, u32); 13] = [
    (1, 0),
    (2, 0),
    (1, 1),
    (2, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (0, 3),
    (1, 3),
    (2, 3),
    (0, 4),
    (1, 4),
    (2, 4),
];

const MACRO_CELLS: [(u32, u32); 20] = [
    (2, 0),
    (3, 0),
    (2, 1),
    (3, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (3, 2),
    (0, 3),
    (1, 3),
    (2, 3),
    (3, 3),
    (0, 4),
    (1, 4),
    (2, 4),
    (3, 4),
    (0, 5),
    (1, 5),
    (2, 5),
    (3, 5),
];

impl PartLayout {
    /// Number of sprites in this layout
    pub const fn sprite_count(self) -> usize {
        match self {
            Self::Micro => MICRO_CELLS.len(),
            Self::Macro => MACRO_CELLS.len(),
        }
    }

    /// Source grid size (columns, rows) in half-tile cells
    pub const fn grid(self) -> (u32, u32) {
        match self {
            Self::Micro => MICRO_GRID,
            Self::Macro => MACRO_GRID,
        }
    }

    /// Source cell (column, row) of every slot, in slot order
    pub const fn cells(self) -> &'static [(u32, u32)] {
        match self {
            Self::Micro => &MICRO_CELLS,
            Self::Macro => &MACRO_CELLS,
        }
    }

    /// Sprite slot holding `part`
    pub const fn slot(self, part: PartRef) -> usize {
        use PartKind::{CornerInner, CornerOuter, EdgeHorizontal, EdgeVertical, Full};
        use Quadrant::{BottomLeft, BottomRight, TopLeft, TopRight};

        match (part.kind, part.quadrant) {
            (CornerInner, BottomRight) => 0,
            (CornerInner, BottomLeft) => 1,
            (CornerInner, TopRight) => 2,
            (CornerInner, TopLeft) => 3,
            (CornerOuter, TopLeft) => 4,
            (kind, quadrant) => match self {
                Self::Micro => match (kind, quadrant) {
                    (EdgeHorizontal, TopLeft | TopRight) => 5,
                    (CornerOuter, TopRight) => 6,
                    (EdgeVertical, TopLeft | BottomLeft) => 7,
                    (Full, _) => 8,
                    (EdgeVertical, TopRight | BottomRight) => 9,
                    (CornerOuter, BottomLeft) => 10,
                    (EdgeHorizontal, BottomLeft | BottomRight) => 11,
                    _ => 12,
                },
                Self::Macro => match (kind, quadrant) {
                    (EdgeHorizontal, TopRight) => 5,
                    (EdgeHorizontal, TopLeft) => 6,
                    (CornerOuter, TopRight) => 7,
                    (EdgeVertical, BottomLeft) => 8,
                    (Full, BottomRight) => 9,
                    (Full, BottomLeft) => 10,
                    (EdgeVertical, BottomRight) => 11,
                    (EdgeVertical, TopLeft) => 12,
                    (Full, TopRight) => 13,
                    (Full, TopLeft) => 14,
                    (EdgeVertical, TopRight) => 15,
                    (CornerOuter, BottomLeft) => 16,
                    (EdgeHorizontal, BottomRight) => 17,
                    (EdgeHorizontal, BottomLeft) => 18,
                    _ => 19,
                },
            },
        }
    }
}
