//! Tests for command-line parsing and option translation

#[cfg(test)]
mod tests {
    use blobtile::io::cli::Cli;
    use blobtile::io::configuration::{DEFAULT_OUTPUT_STEM, DEFAULT_TILE_SIZE};
    use blobtile::manifest::{BitWeights, Encoding};
    use blobtile::parts::Projection;
    use clap::Parser;
    use std::path::PathBuf;

    // Tests defaults when no arguments are given
    // Verified by changing the default tile size
    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["blobtile"]);

        assert_eq!(cli.size, DEFAULT_TILE_SIZE);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_STEM));
        assert!(!cli.power_of_two);
        assert!(!cli.quiet);
        assert!(cli.source.is_none());
        assert!(cli.bits.is_none());
    }

    // Tests every flag is parsed
    // Verified by renaming the pow2 flag
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "blobtile",
            "64",
            "out/grass",
            "--pow2",
            "--indent",
            "--source",
            "parts.png",
            "--index",
            "--xml",
            "--iso",
            "--bits",
            "128,64,32,16,8,4,2,1",
            "--quiet",
        ]);

        assert_eq!(cli.size, 64);
        assert_eq!(cli.output, PathBuf::from("out/grass"));
        assert!(cli.power_of_two && cli.indent && cli.index && cli.xml && cli.iso && cli.quiet);
        assert_eq!(cli.source, Some(PathBuf::from("parts.png")));
        assert_eq!(
            cli.bits.map(|bits| bits.as_array()),
            Some([128, 64, 32, 16, 8, 4, 2, 1])
        );
    }

    // Tests the long power-of-two spelling is accepted
    // Verified by removing the alias
    #[test]
    fn test_cli_poweroftwo_alias() {
        let cli = Cli::parse_from(["blobtile", "16", "--poweroftwo"]);
        assert!(cli.power_of_two);
    }

    // Tests malformed sizes and weights are rejected during parsing
    // Verified by accepting partial weight lists
    #[test]
    fn test_cli_rejects_invalid() {
        assert!(Cli::try_parse_from(["blobtile", "big"]).is_err());
        assert!(Cli::try_parse_from(["blobtile", "32", "--bits", "1,2,3"]).is_err());
    }

    // Tests flags translate into generation options
    // Verified by mapping --xml to JSON
    #[test]
    fn test_cli_options() {
        let cli = Cli::parse_from(["blobtile", "32", "--xml", "--iso", "--indent", "-q"]);
        let options = cli.options();

        assert_eq!(options.encoding, Encoding::Xml);
        assert_eq!(options.projection, Projection::Isometric);
        assert!(options.pretty);
        assert!(!options.show_progress);
        assert!(!options.draw_indices);
        assert_eq!(options.bits, BitWeights::default());

        let defaults = Cli::parse_from(["blobtile"]).options();
        assert_eq!(defaults.encoding, Encoding::Json);
        assert_eq!(defaults.projection, Projection::Orthogonal);
        assert!(defaults.show_progress);
    }

    // Tests run writes both output files
    // Verified by skipping the manifest write
    #[test]
    fn test_cli_run() {
        let dir = tempfile::tempdir().expect("temp dir");
        let stem = dir.path().join("tiles");
        let stem_arg = stem.to_string_lossy().into_owned();

        let cli = Cli::parse_from(["blobtile", "8", stem_arg.as_str(), "--quiet"]);
        let output = cli.run().expect("generates");

        assert!(output.image_path.is_file());
        assert!(output.manifest_path.is_file());
        assert_eq!(output.manifest_path, dir.path().join("tiles.json"));
    }
}
