//! Error types for atlas generation and manifest lookup

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation and lookup operations
#[derive(Debug)]
pub enum BlobError {
    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or save a generated image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Source image cannot hold the quadrant grid for the requested tile size
    SourceTooSmall {
        /// Minimum (width, height) in pixels
        required: (u32, u32),
        /// Actual (width, height) of the source image
        actual: (u32, u32),
    },

    /// Manifest is missing a required section or tile field
    ManifestData {
        /// Which part of the manifest was missing or malformed
        reason: String,
    },

    /// Manifest text could not be encoded or parsed as the given format
    Encoding {
        /// Name of the encoding ("json" or "xml")
        format: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Caller-supplied image or region loader failed
    Loader {
        /// Description of the failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Geometry computation produced an inconsistent result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for BlobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SourceTooSmall { required, actual } => {
                write!(
                    f,
                    "Insufficient source file size, must be at least {}x{}, was {}x{}",
                    required.0, required.1, actual.0, actual.1
                )
            }
            Self::ManifestData { reason } => {
                write!(f, "Invalid manifest data: {reason}")
            }
            Self::Encoding { format, reason } => {
                write!(f, "Manifest {format} error: {reason}")
            }
            Self::Loader { reason } => {
                write!(f, "Tile loader failed: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for BlobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, BlobError>;

impl From<image::ImageError> for BlobError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for BlobError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> BlobError {
    BlobError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> BlobError {
    BlobError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a manifest data error
pub fn manifest_error(reason: &impl ToString) -> BlobError {
    BlobError::ManifestData {
        reason: reason.to_string(),
    }
}

/// Create a manifest error for a missing top-level section
pub fn missing_section(section: &str) -> BlobError {
    manifest_error(&format!("{section} section not found"))
}

/// Create an encoding error for the named format
pub fn encoding_error(format: &'static str, reason: &impl ToString) -> BlobError {
    BlobError::Encoding {
        format,
        reason: reason.to_string(),
    }
}

/// Create a loader error, for use inside caller-supplied loaders
pub fn loader_error(reason: &impl ToString) -> BlobError {
    BlobError::Loader {
        reason: reason.to_string(),
    }
}
