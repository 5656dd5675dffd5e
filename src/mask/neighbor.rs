//! Eight-direction neighbour masks and the canonicalization rule
//!
//! Bit layout, one bit per direction:
//!
//! ```text
//! |  1  |  2  |  4  |
//! | 128 |     |  8  |
//! | 64  | 32  | 16  |
//! ```

use std::fmt;

/// Compass direction of a neighbouring cell, in bit order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Upper left diagonal
    TopLeft,
    /// Directly above
    Top,
    /// Upper right diagonal
    TopRight,
    /// Directly right
    Right,
    /// Lower right diagonal
    BottomRight,
    /// Directly below
    Bottom,
    /// Lower left diagonal
    BottomLeft,
    /// Directly left
    Left,
}

impl Direction {
    /// All directions in bit order
    pub const ALL: [Self; 8] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
    ];

    /// Position of this direction in bit order
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Default single-bit weight for this direction
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Test whether this is one of the four diagonal directions
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomRight | Self::BottomLeft
        )
    }

    /// The two cardinal directions a diagonal depends on
    ///
    /// Returns `None` for cardinal directions
    pub const fn adjacent_cardinals(self) -> Option<(Self, Self)> {
        match self {
            Self::TopLeft => Some((Self::Top, Self::Left)),
            Self::TopRight => Some((Self::Top, Self::Right)),
            Self::BottomRight => Some((Self::Bottom, Self::Right)),
            Self::BottomLeft => Some((Self::Bottom, Self::Left)),
            Self::Top | Self::Right | Self::Bottom | Self::Left => None,
        }
    }
}

/// Raw 8-bit neighbour configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeighborMask(u8);

impl NeighborMask {
    /// No neighbours present
    pub const EMPTY: Self = Self(0);
    /// All eight neighbours present
    pub const FULL: Self = Self(u8::MAX);

    /// Wrap raw bits
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Test whether the neighbour in `direction` is present
    pub const fn has(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Copy with the neighbour in `direction` set or cleared
    #[must_use]
    pub const fn with(self, direction: Direction, present: bool) -> Self {
        if present {
            Self(self.0 | direction.bit())
        } else {
            Self(self.0 & !direction.bit())
        }
    }

    /// Build from presence flags in direction order
    pub fn from_flags(flags: [bool; 8]) -> Self {
        Direction::ALL
            .iter()
            .zip(flags)
            .fold(Self::EMPTY, |mask, (&direction, present)| {
                mask.with(direction, present)
            })
    }

    /// Presence flags in direction order
    pub fn to_flags(self) -> [bool; 8] {
        Direction::ALL.map(|direction| self.has(direction))
    }

    /// Clear every diagonal whose two adjacent cardinals are not both present
    ///
    /// Cardinal bits are never altered, so applying this twice is the same as once.
    pub fn canonicalize(self) -> CanonicalMask {
        let bits = Direction::ALL
            .iter()
            .filter_map(|&direction| {
                direction
                    .adjacent_cardinals()
                    .map(|cardinals| (direction, cardinals))
            })
            .fold(self, |mask, (diagonal, (first, second))| {
                if mask.has(first) && mask.has(second) {
                    mask
                } else {
                    mask.with(diagonal, false)
                }
            });
        CanonicalMask(bits)
    }

    /// Test whether this mask is its own canonical form
    pub fn is_canonical(self) -> bool {
        self.canonicalize().mask() == self
    }

    /// Iterate every raw mask from 0 to 255
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=u8::MAX).map(Self)
    }
}

impl From<u8> for NeighborMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl fmt::Display for NeighborMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Neighbour mask whose diagonals are only set alongside both adjacent cardinals
///
/// Only obtainable through [`NeighborMask::canonicalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalMask(NeighborMask);

impl CanonicalMask {
    /// Underlying neighbour mask
    pub const fn mask(self) -> NeighborMask {
        self.0
    }

    /// Raw bits
    pub const fn bits(self) -> u8 {
        self.0.bits()
    }

    /// Test whether the neighbour in `direction` is present
    pub const fn has(self, direction: Direction) -> bool {
        self.0.has(direction)
    }
}

impl fmt::Display for CanonicalMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
