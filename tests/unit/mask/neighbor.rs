//! Tests for direction bits, flag conversion and the canonicalization rule

#[cfg(test)]
mod tests {
    use blobtile::mask::{Direction, NeighborMask};

    // Tests each direction maps to its single-bit weight in clockwise order
    // Verified by swapping the Right and Left variants
    #[test]
    fn test_direction_bits() {
        let bits: Vec<u8> = Direction::ALL.iter().map(|d| d.bit()).collect();
        assert_eq!(bits, vec![1, 2, 4, 8, 16, 32, 64, 128]);
        assert_eq!(Direction::Left.index(), 7);
    }

    // Tests diagonals report the two cardinals that gate them
    // Verified by pairing BottomLeft with Right
    #[test]
    fn test_adjacent_cardinals() {
        assert_eq!(
            Direction::TopLeft.adjacent_cardinals(),
            Some((Direction::Top, Direction::Left))
        );
        assert_eq!(
            Direction::BottomLeft.adjacent_cardinals(),
            Some((Direction::Bottom, Direction::Left))
        );
        assert_eq!(Direction::Right.adjacent_cardinals(), None);

        let diagonals = Direction::ALL.iter().filter(|d| d.is_diagonal()).count();
        assert_eq!(diagonals, 4);
    }

    // Tests flags in direction order combine into the expected raw bits
    // Verified by reversing the flag order in from_flags
    #[test]
    fn test_from_flags() {
        let alternating =
            NeighborMask::from_flags([true, false, true, false, true, false, true, false]);
        assert_eq!(alternating.bits(), 1 | 4 | 16 | 64);

        let cardinals =
            NeighborMask::from_flags([false, true, false, true, false, true, false, true]);
        assert_eq!(cardinals.bits(), 2 | 8 | 32 | 128);

        assert_eq!(NeighborMask::from_flags([true; 8]), NeighborMask::FULL);
        assert_eq!(NeighborMask::from_flags([false; 8]), NeighborMask::EMPTY);
    }

    // Tests to_flags inverts from_flags for every raw mask
    // Verified by dropping the last flag in to_flags
    #[test]
    fn test_flags_inverse() {
        for raw in NeighborMask::all() {
            assert_eq!(NeighborMask::from_flags(raw.to_flags()), raw);
        }
    }

    // Tests diagonals without both adjacent cardinals are cleared
    // Verified by checking only one cardinal per diagonal
    #[test]
    fn test_canonicalize_clears_unsupported_diagonals() {
        // Four diagonals alone collapse to nothing
        assert_eq!(NeighborMask::new(1 | 4 | 16 | 64).canonicalize().bits(), 0);

        // Top left with only top present
        assert_eq!(NeighborMask::new(1 | 2).canonicalize().bits(), 2);

        // Top left with top and left survives
        assert_eq!(NeighborMask::new(1 | 2 | 128).canonicalize().bits(), 131);

        // Bottom right needs bottom and right
        assert_eq!(NeighborMask::new(16 | 32 | 8).canonicalize().bits(), 56);
        assert_eq!(NeighborMask::new(16 | 32).canonicalize().bits(), 32);

        assert_eq!(NeighborMask::FULL.canonicalize().bits(), 255);
    }

    // Tests canonicalization never changes cardinal bits and is idempotent
    // Verified by clearing cardinals alongside diagonals
    #[test]
    fn test_canonicalize_idempotent_and_cardinal_preserving() {
        let cardinals = [Direction::Top, Direction::Right, Direction::Bottom, Direction::Left];

        for raw in NeighborMask::all() {
            let canonical = raw.canonicalize();
            assert_eq!(canonical.mask().canonicalize(), canonical, "mask {raw}");
            assert!(canonical.mask().is_canonical());

            for direction in cardinals {
                assert_eq!(raw.has(direction), canonical.has(direction));
            }

            for direction in Direction::ALL {
                if let Some((first, second)) = direction.adjacent_cardinals()
                    && canonical.has(direction)
                {
                    assert!(canonical.has(first) && canonical.has(second));
                }
            }
        }
    }

    // Tests exactly 47 raw masks are already canonical
    // Verified by ignoring the bottom left diagonal rule
    #[test]
    fn test_canonical_count() {
        let count = NeighborMask::all().filter(|raw| raw.is_canonical()).count();
        assert_eq!(count, 47);
    }

    // Tests with() sets and clears a single direction
    // Verified by always setting the bit
    #[test]
    fn test_with_direction() {
        let mask = NeighborMask::EMPTY.with(Direction::Bottom, true);
        assert_eq!(mask.bits(), 32);
        assert!(mask.has(Direction::Bottom));
        assert_eq!(mask.with(Direction::Bottom, false), NeighborMask::EMPTY);
        assert_eq!(NeighborMask::from(200).to_string(), "200");
    }
}
