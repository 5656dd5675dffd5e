/// Command-line argument parsing
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Atlas and manifest generation entry point
pub mod generate;
/// Progress display
pub mod progress;
