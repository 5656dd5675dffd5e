//! CLI entry point for the blob atlas generator

use blobtile::io::cli::Cli;
use clap::Parser;

fn main() -> blobtile::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    cli.run()?;
    Ok(())
}
