//! Runtime tile lookup over caller-chosen image and region types

use crate::io::configuration::MASK_COUNT;
use crate::io::error::{BlobError, Result, invalid_parameter};
use crate::manifest::{self, BitWeights, Encoding, Manifest, Rect};
use std::path::Path;

/// Strategy for turning manifest entries into caller-side values
///
/// Implement this to bind the lookup to an image library: `load_image` is
/// called once with the manifest's image path, then `load_region` once per
/// tile record.
pub trait RegionLoader {
    /// Loaded atlas image
    type Image;
    /// Region of the atlas for a single tile
    type Region;

    /// Load the atlas image named in the manifest
    ///
    /// # Errors
    ///
    /// Implementations return an error if the image cannot be loaded
    fn load_image(&mut self, path: &str) -> Result<Self::Image>;

    /// Cut the region for one tile record out of the loaded image
    ///
    /// # Errors
    ///
    /// Implementations return an error if the region cannot be produced
    fn load_region(&mut self, image: &Self::Image, source: Rect) -> Result<Self::Region>;
}

/// Loader built from a pair of closures
pub struct FnLoader<FI, FR> {
    image: FI,
    region: FR,
}

impl<FI, FR> FnLoader<FI, FR> {
    /// Wrap an image loading and a region loading closure
    pub const fn new(image: FI, region: FR) -> Self {
        Self { image, region }
    }
}

impl<I, R, FI, FR> RegionLoader for FnLoader<FI, FR>
where
    FI: FnMut(&str) -> Result<I>,
    FR: FnMut(&I, Rect) -> Result<R>,
{
    type Image = I;
    type Region = R;

    fn load_image(&mut self, path: &str) -> Result<I> {
        (self.image)(path)
    }

    fn load_region(&mut self, image: &I, source: Rect) -> Result<R> {
        (self.region)(image, source)
    }
}

// Where an index finds its region
#[derive(Debug)]
enum Slot<R> {
    // Region of a manifest record, shared with the record's other indices
    Record(usize),
    // Region set for this index alone
    Owned(R),
}

/// Lookup table from raw neighbour index to a loaded region
///
/// Each tile record's region is loaded once and shared by every index the
/// record lists, so duplicate indices resolve to the same value.
#[derive(Debug)]
pub struct TileLookup<I, R> {
    image: I,
    bits: BitWeights,
    regions: Vec<R>,
    slots: Vec<Option<Slot<R>>>,
}

impl<I, R> TileLookup<I, R> {
    /// Load the image and every region of a parsed manifest
    ///
    /// Indices outside 0..=255 cannot be queried and are skipped.
    ///
    /// # Errors
    ///
    /// Propagates loader errors
    pub fn from_manifest<L>(manifest: &Manifest, loader: &mut L) -> Result<Self>
    where
        L: RegionLoader<Image = I, Region = R>,
    {
        let image = loader.load_image(&manifest.image)?;
        let mut regions = Vec::with_capacity(manifest.tiles.len());
        let mut slots: Vec<Option<Slot<R>>> = (0..MASK_COUNT).map(|_| None).collect();

        for tile in &manifest.tiles {
            let region = loader.load_region(&image, tile.source)?;
            let slot = regions.len();
            regions.push(region);

            for &index in &tile.indices {
                match slots.get_mut(index as usize) {
                    Some(entry) => *entry = Some(Slot::Record(slot)),
                    None => log::warn!("skipping tile index {index}: outside 0..=255"),
                }
            }
        }

        let lookup = Self {
            image,
            bits: manifest.bits,
            regions,
            slots,
        };
        log::debug!(
            "loaded {} regions covering {} indices from '{}'",
            lookup.regions.len(),
            lookup.mapped_count(),
            manifest.image
        );
        Ok(lookup)
    }

    /// Parse a JSON manifest and load it
    ///
    /// # Errors
    ///
    /// Returns manifest errors for malformed or incomplete text and
    /// propagates loader errors
    pub fn from_json_str<L>(text: &str, loader: &mut L) -> Result<Self>
    where
        L: RegionLoader<Image = I, Region = R>,
    {
        Self::from_manifest(&manifest::json::from_str(text)?, loader)
    }

    /// Parse an XML manifest and load it
    ///
    /// # Errors
    ///
    /// Returns manifest errors for malformed or incomplete text and
    /// propagates loader errors
    pub fn from_xml_str<L>(text: &str, loader: &mut L) -> Result<Self>
    where
        L: RegionLoader<Image = I, Region = R>,
    {
        Self::from_manifest(&manifest::xml::from_str(text)?, loader)
    }

    /// Read a manifest file, choosing the encoding from its extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed and propagates
    /// loader errors
    pub fn from_path<L, P>(path: P, loader: &mut L) -> Result<Self>
    where
        L: RegionLoader<Image = I, Region = R>,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| BlobError::FileSystem {
            path: path.to_path_buf(),
            operation: "read manifest",
            source: e,
        })?;
        let manifest = manifest::decode(&text, Encoding::from_path(path))?;
        Self::from_manifest(&manifest, loader)
    }

    /// Combine neighbour flags into an index using the manifest's weights
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn index_from_flags(
        &self,
        top_left: bool,
        top: bool,
        top_right: bool,
        right: bool,
        bottom_right: bool,
        bottom: bool,
        bottom_left: bool,
        left: bool,
    ) -> u32 {
        self.bits.combine([
            top_left,
            top,
            top_right,
            right,
            bottom_right,
            bottom,
            bottom_left,
            left,
        ])
    }

    /// Region for a raw index, or `None` if out of range or unmapped
    pub fn get_tile(&self, index: u32) -> Option<&R> {
        match self.slots.get(index as usize)?.as_ref()? {
            Slot::Record(record) => self.regions.get(*record),
            Slot::Owned(region) => Some(region),
        }
    }

    /// Region for a set of neighbour flags
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn tile_from_flags(
        &self,
        top_left: bool,
        top: bool,
        top_right: bool,
        right: bool,
        bottom_right: bool,
        bottom: bool,
        bottom_left: bool,
        left: bool,
    ) -> Option<&R> {
        self.get_tile(self.index_from_flags(
            top_left,
            top,
            top_right,
            right,
            bottom_right,
            bottom,
            bottom_left,
            left,
        ))
    }

    /// Override or add the region for a single index
    ///
    /// Other indices that shared the previous region keep it. A region set
    /// earlier for the same index is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is outside 0..=255
    pub fn set_tile(&mut self, index: u32, region: R) -> Result<()> {
        let entry = self
            .slots
            .get_mut(index as usize)
            .ok_or_else(|| invalid_parameter("index", &index, &"must be within 0..=255"))?;
        *entry = Some(Slot::Owned(region));
        Ok(())
    }

    /// Loaded atlas image
    pub const fn image(&self) -> &I {
        &self.image
    }

    /// Weights used by [`Self::index_from_flags`]
    pub const fn bits(&self) -> BitWeights {
        self.bits
    }

    /// Number of indices in 0..=255 that resolve to a region
    pub fn mapped_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
