//! Command-line interface for generating a blob atlas and its manifest

use crate::io::configuration::{DEFAULT_OUTPUT_STEM, DEFAULT_TILE_SIZE};
use crate::io::error::Result;
use crate::io::generate::{self, GenerateOptions, GenerationOutput};
use crate::manifest::{BitWeights, Encoding};
use crate::parts::Projection;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blobtile")]
#[command(
    author,
    version,
    about = "Generate a 47-tile blob autotile atlas and its lookup manifest"
)]
/// Command-line arguments for the atlas generator
// Each flag toggles an independent output option
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Tile width in pixels
    #[arg(value_name = "SIZE", default_value_t = DEFAULT_TILE_SIZE)]
    pub size: u32,

    /// Output path stem; writes <OUTPUT>.png and <OUTPUT>.json
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_STEM)]
    pub output: PathBuf,

    /// Size the atlas to power-of-two dimensions
    #[arg(long = "pow2", visible_alias = "poweroftwo")]
    pub power_of_two: bool,

    /// Indent the manifest
    #[arg(long)]
    pub indent: bool,

    /// Image to slice quadrant sprites from instead of the built-in template
    #[arg(long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Draw each tile's index over it
    #[arg(long)]
    pub index: bool,

    /// Write the manifest as XML instead of JSON
    #[arg(long)]
    pub xml: bool,

    /// Generate isometric tiles
    #[arg(long)]
    pub iso: bool,

    /// Comma separated neighbour weights, top left clockwise to left
    #[arg(long, value_name = "W,W,W,W,W,W,W,W", value_parser = parse_bits)]
    pub bits: Option<BitWeights>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_bits(text: &str) -> std::result::Result<BitWeights, String> {
    BitWeights::parse(text).map_err(|e| e.to_string())
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Manifest encoding selected by the flags
    pub const fn encoding(&self) -> Encoding {
        if self.xml { Encoding::Xml } else { Encoding::Json }
    }

    /// Projection selected by the flags
    pub const fn projection(&self) -> Projection {
        if self.iso {
            Projection::Isometric
        } else {
            Projection::Orthogonal
        }
    }

    /// Translate the flags into generation options
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            power_of_two: self.power_of_two,
            pretty: self.indent,
            source: self.source.clone(),
            draw_indices: self.index,
            encoding: self.encoding(),
            projection: self.projection(),
            bits: self.bits.unwrap_or_default(),
            show_progress: self.should_show_progress(),
        }
    }

    /// Generate the atlas and manifest described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if validation, composition or writing fails
    pub fn run(&self) -> Result<GenerationOutput> {
        let options = self.options();
        if !options.bits.is_default() {
            log::warn!(
                "custom bit weights {:?} are recorded in the manifest; lookups only address indices 0..=255",
                options.bits.as_array()
            );
        }
        generate::generate(self.size, &self.output, &options)
    }
}
