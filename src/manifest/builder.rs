//! Assembly of the manifest from the canonical set and atlas positions

use crate::io::configuration::MASK_COUNT;
use crate::io::error::{Result, computation_error};
use crate::manifest::schema::{BitWeights, Manifest, Rect, TileRecord};
use crate::mask::{CanonicalMask, CanonicalSet};
use bitvec::prelude::*;
use std::collections::BTreeMap;

/// Emit one record per canonical mask, in set order
///
/// Each record's indices are the canonical mask followed by every raw mask
/// that collapses to it. Every raw mask must land in exactly one record.
///
/// # Errors
///
/// Returns an error if a canonical mask has no atlas position or the records
/// do not cover each raw mask exactly once
pub fn build(
    set: &CanonicalSet,
    positions: &BTreeMap<CanonicalMask, Rect>,
    image: impl Into<String>,
    bits: BitWeights,
) -> Result<Manifest> {
    let mut covered = bitarr![0; MASK_COUNT];
    let mut tiles = Vec::with_capacity(set.len());

    for canonical in set.masks() {
        let source = positions.get(&canonical).copied().ok_or_else(|| {
            computation_error(
                "manifest build",
                &format!("canonical mask {canonical} has no atlas position"),
            )
        })?;

        let indices: Vec<u32> = set
            .members_of(canonical)
            .into_iter()
            .map(|raw| u32::from(raw.bits()))
            .collect();

        for &index in &indices {
            let seen = covered.get(index as usize).as_deref() == Some(&true);
            if seen {
                return Err(computation_error(
                    "manifest build",
                    &format!("raw mask {index} assigned to more than one tile"),
                ));
            }
            covered.set(index as usize, true);
        }

        tiles.push(TileRecord { source, indices });
    }

    let missing = covered.count_zeros();
    if missing > 0 {
        return Err(computation_error(
            "manifest build",
            &format!("{missing} raw masks are not assigned to any tile"),
        ));
    }

    Ok(Manifest {
        image: image.into(),
        bits,
        tiles,
    })
}
