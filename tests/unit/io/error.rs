//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use blobtile::BlobError;
    use blobtile::io::error::{
        computation_error, encoding_error, invalid_parameter, loader_error, missing_section,
    };
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = BlobError::FileSystem {
            path: "/tmp/blob.json".into(),
            operation: "write",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/blob.json"));
        assert!(missing_section("tiles").source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("size", &33, &"must be even");
        let message = error.to_string();
        assert!(message.contains("size"));
        assert!(message.contains("33"));
        assert!(message.contains("must be even"));
    }

    // Tests undersized sources report both dimensions
    // Verified by swapping required and actual
    #[test]
    fn test_source_too_small_message() {
        let error = BlobError::SourceTooSmall {
            required: (48, 80),
            actual: (32, 32),
        };
        assert_eq!(
            error.to_string(),
            "Insufficient source file size, must be at least 48x80, was 32x32"
        );
    }

    // Tests missing sections are manifest data errors naming the section
    // Verified by producing an encoding error instead
    #[test]
    fn test_missing_section() {
        let error = missing_section("bits");
        assert!(matches!(error, BlobError::ManifestData { .. }));
        assert!(error.to_string().contains("bits section not found"));
    }

    // Tests helper constructors pick the right variants
    // Verified by mapping loader errors to computation errors
    #[test]
    fn test_helper_variants() {
        assert!(matches!(
            encoding_error("xml", &"bad tag"),
            BlobError::Encoding { format: "xml", .. }
        ));
        assert!(matches!(loader_error(&"gone"), BlobError::Loader { .. }));
        assert!(matches!(
            computation_error("atlas packing", &"overflow"),
            BlobError::Computation {
                operation: "atlas packing",
                ..
            }
        ));
    }

    // Tests conversions from library errors
    // Verified by converting io errors to image errors
    #[test]
    fn test_from_conversions() {
        let io_error = std::io::Error::other("disk full");
        let error: BlobError = io_error.into();
        assert!(matches!(error, BlobError::FileSystem { .. }));
        assert!(error.source().is_some());
    }
}
