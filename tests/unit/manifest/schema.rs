//! Tests for bit weights, encodings and manifest naming helpers

#[cfg(test)]
mod tests {
    use blobtile::BlobError;
    use blobtile::manifest::schema::image_file_name;
    use blobtile::manifest::{BitWeights, Encoding};
    use blobtile::mask::Direction;
    use std::path::Path;

    // Tests default weights are single bits in direction order
    // Verified by reversing the default weights
    #[test]
    fn test_default_weights() {
        let bits = BitWeights::default();
        assert_eq!(bits.as_array(), [1, 2, 4, 8, 16, 32, 64, 128]);
        assert_eq!(bits.get(Direction::TopRight), 4);
        assert_eq!(bits.get(Direction::Left), 128);
        assert!(bits.is_default());
    }

    // Tests present neighbours contribute their weights to the index
    // Verified by summing absent neighbours
    #[test]
    fn test_combine() {
        let bits = BitWeights::default();
        assert_eq!(bits.combine([false; 8]), 0);
        assert_eq!(bits.combine([true; 8]), 255);
        assert_eq!(
            bits.combine([true, false, true, false, true, false, true, false]),
            85
        );
        assert_eq!(
            bits.combine([false, false, false, true, false, false, false, true]),
            136
        );
    }

    // Tests custom weights are used as given
    // Verified by ignoring custom weights
    #[test]
    fn test_combine_custom() {
        let bits = BitWeights::new([128, 64, 32, 16, 8, 4, 2, 1]);
        assert!(!bits.is_default());
        assert_eq!(bits.combine([true, false, false, false, false, false, false, false]), 128);
        assert_eq!(bits.combine([false, false, false, false, false, false, false, true]), 1);
    }

    // Tests comma separated weights parse with surrounding whitespace
    // Verified by splitting on semicolons
    #[test]
    fn test_parse_weights() {
        let bits = BitWeights::parse("1, 2, 4, 8, 16, 32, 64, 128").expect("eight weights");
        assert_eq!(bits, BitWeights::default());

        let custom = BitWeights::parse("8,4,2,1,0,0,0,0").expect("eight weights");
        assert_eq!(custom.as_array(), [8, 4, 2, 1, 0, 0, 0, 0]);
    }

    // Tests the wrong number of weights or non-numbers are rejected
    // Verified by padding short lists with zeros
    #[test]
    fn test_parse_weights_invalid() {
        for text in ["1,2,4", "1,2,4,8,16,32,64,128,256", "1,2,4,8,16,32,64,x", ""] {
            let result = BitWeights::parse(text);
            assert!(
                matches!(result, Err(BlobError::InvalidParameter { parameter: "bits", .. })),
                "accepted '{text}'"
            );
        }
    }

    // Tests encodings map to and from file extensions
    // Verified by matching extensions case-sensitively
    #[test]
    fn test_encoding_extensions() {
        assert_eq!(Encoding::Json.extension(), "json");
        assert_eq!(Encoding::Xml.extension(), "xml");
        assert_eq!(Encoding::from_path(Path::new("blob.xml")), Encoding::Xml);
        assert_eq!(Encoding::from_path(Path::new("blob.XML")), Encoding::Xml);
        assert_eq!(Encoding::from_path(Path::new("blob.json")), Encoding::Json);
        assert_eq!(Encoding::from_path(Path::new("blob")), Encoding::Json);
        assert_eq!(Encoding::default(), Encoding::Json);
    }

    // Tests the recorded image name drops the directory part of the stem
    // Verified by recording the full stem path
    #[test]
    fn test_image_file_name() {
        assert_eq!(image_file_name(Path::new("blob")), "blob.png");
        assert_eq!(image_file_name(Path::new("out/tiles/grass")), "grass.png");
        assert_eq!(image_file_name(Path::new("v1.2")), "v1.2.png");
    }
}
