//! Reduction of the 256 raw masks to the canonical tile set

use crate::mask::neighbor::{CanonicalMask, NeighborMask};
use std::collections::{BTreeMap, BTreeSet};

/// The distinct canonical masks together with every raw mask folded into them
///
/// Canonical masks iterate in ascending order. A canonical value is never
/// larger than any raw mask collapsing to it, so this is also the order in
/// which each one is first seen when walking 0..=255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalSet {
    masks: BTreeSet<CanonicalMask>,
    duplicates: BTreeMap<NeighborMask, CanonicalMask>,
}

impl Default for CanonicalSet {
    fn default() -> Self {
        Self::build()
    }
}

impl CanonicalSet {
    /// Canonicalize every raw mask, recording repeats as duplicates
    pub fn build() -> Self {
        let mut masks = BTreeSet::new();
        let mut duplicates = BTreeMap::new();

        for raw in NeighborMask::all() {
            let canonical = raw.canonicalize();
            if !masks.insert(canonical) {
                duplicates.insert(raw, canonical);
            }
        }

        Self { masks, duplicates }
    }

    /// Canonical masks in ascending order
    pub fn masks(&self) -> impl ExactSizeIterator<Item = CanonicalMask> + '_ {
        self.masks.iter().copied()
    }

    /// Raw masks that are not canonical, keyed to the mask they collapse to
    pub const fn duplicates(&self) -> &BTreeMap<NeighborMask, CanonicalMask> {
        &self.duplicates
    }

    /// Raw masks folded into `canonical`, ascending, excluding `canonical` itself
    pub fn duplicates_of(
        &self,
        canonical: CanonicalMask,
    ) -> impl Iterator<Item = NeighborMask> + '_ {
        self.duplicates
            .iter()
            .filter(move |&(_, &target)| target == canonical)
            .map(|(&raw, _)| raw)
    }

    /// Every raw mask that resolves to `canonical`, starting with `canonical`
    pub fn members_of(&self, canonical: CanonicalMask) -> Vec<NeighborMask> {
        std::iter::once(canonical.mask())
            .chain(self.duplicates_of(canonical))
            .collect()
    }

    /// Canonical mask a raw mask resolves to
    pub fn resolve(&self, raw: NeighborMask) -> CanonicalMask {
        self.duplicates
            .get(&raw)
            .copied()
            .unwrap_or_else(|| raw.canonicalize())
    }

    /// Test membership of a canonical mask
    pub fn contains(&self, canonical: CanonicalMask) -> bool {
        self.masks.contains(&canonical)
    }

    /// Number of canonical masks
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// Test if the set holds no masks
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}
