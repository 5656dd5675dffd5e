//! Tests for generation constants

#[cfg(test)]
mod tests {
    use blobtile::io::configuration::{
        ATLAS_COLUMNS, CANONICAL_TILE_COUNT, DEFAULT_BIT_WEIGHTS, DEFAULT_OUTPUT_STEM,
        DEFAULT_TILE_SIZE, MACRO_GRID, MASK_COUNT, MAX_TILE_SIZE, MICRO_GRID,
    };

    // Tests mask and tile counts
    // Verified by changing the canonical tile count
    #[test]
    fn test_tile_counts() {
        assert_eq!(MASK_COUNT, 256);
        assert_eq!(CANONICAL_TILE_COUNT, 47);
    }

    // Tests the default grid holds every canonical tile
    // Verified by narrowing the atlas to six columns
    #[test]
    fn test_atlas_columns_hold_all_tiles() {
        assert_eq!(ATLAS_COLUMNS, 7);
        assert!((ATLAS_COLUMNS * ATLAS_COLUMNS) as usize >= CANONICAL_TILE_COUNT);
    }

    // Tests default weights are distinct single bits
    // Verified by duplicating a weight
    #[test]
    fn test_default_bit_weights() {
        assert!(DEFAULT_BIT_WEIGHTS.iter().all(|w| w.is_power_of_two()));
        assert_eq!(DEFAULT_BIT_WEIGHTS.iter().sum::<u32>(), 255);
    }

    // Tests source grids hold their sprite counts
    // Verified by shrinking the macro grid
    #[test]
    fn test_source_grids() {
        assert_eq!(MICRO_GRID, (3, 5));
        assert_eq!(MACRO_GRID, (4, 6));
    }

    // Tests command-line defaults
    // Verified by changing the default stem
    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_TILE_SIZE, 32);
        assert_eq!(DEFAULT_OUTPUT_STEM, "blob");
        assert_eq!(MAX_TILE_SIZE, 4096);
        assert_eq!(DEFAULT_TILE_SIZE % 4, 0);
    }
}
