//! Tests for assembling manifest records from the canonical set

#[cfg(test)]
mod tests {
    use blobtile::BlobError;
    use blobtile::manifest::builder::build;
    use blobtile::manifest::{BitWeights, Rect};
    use blobtile::mask::{CanonicalMask, CanonicalSet};
    use blobtile::parts::Projection;
    use blobtile::render::AtlasLayout;
    use std::collections::{BTreeMap, BTreeSet};

    fn positions(set: &CanonicalSet) -> BTreeMap<CanonicalMask, Rect> {
        let layout = AtlasLayout::new(32, Projection::Orthogonal, false);
        (0u32..)
            .zip(set.masks())
            .map(|(slot, mask)| (mask, layout.region(slot)))
            .collect()
    }

    // Tests one record per canonical mask, in set order, with the canonical index first
    // Verified by emitting duplicates before the canonical index
    #[test]
    fn test_build_records() {
        let set = CanonicalSet::build();
        let manifest = build(&set, &positions(&set), "blob.png", BitWeights::default())
            .expect("complete positions");

        assert_eq!(manifest.image, "blob.png");
        assert_eq!(manifest.tiles.len(), 47);
        for (record, canonical) in manifest.tiles.iter().zip(set.masks()) {
            assert_eq!(record.indices.first(), Some(&u32::from(canonical.bits())));
        }

        let first = manifest.tiles.first().expect("47 records");
        assert_eq!(first.source, Rect::new(0, 0, 32, 32));
        assert!(first.indices.contains(&17));
    }

    // Tests every raw mask appears in exactly one record
    // Verified by listing the canonical index twice
    #[test]
    fn test_build_covers_all_masks() {
        let set = CanonicalSet::build();
        let manifest = build(&set, &positions(&set), "blob.png", BitWeights::default())
            .expect("complete positions");

        let mut seen = BTreeSet::new();
        for record in &manifest.tiles {
            for &index in &record.indices {
                assert!(seen.insert(index), "index {index} repeated");
            }
        }
        assert_eq!(seen, (0..256).collect::<BTreeSet<u32>>());
    }

    // Tests the weights are carried into the manifest unchanged
    // Verified by always writing default weights
    #[test]
    fn test_build_keeps_weights() {
        let set = CanonicalSet::build();
        let bits = BitWeights::new([2, 4, 8, 16, 32, 64, 128, 1]);
        let manifest = build(&set, &positions(&set), "a.png", bits).expect("complete positions");
        assert_eq!(manifest.bits, bits);
    }

    // Tests a canonical mask without a position is an error
    // Verified by skipping masks without positions
    #[test]
    fn test_build_missing_position() {
        let set = CanonicalSet::build();
        let mut incomplete = positions(&set);
        let last = set.masks().last().expect("non-empty set");
        incomplete.remove(&last);

        let result = build(&set, &incomplete, "blob.png", BitWeights::default());
        assert!(matches!(result, Err(BlobError::Computation { .. })));
    }
}
