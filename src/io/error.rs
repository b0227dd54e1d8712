//! Error types for drawable generation, split into fatal and per-density failures

use std::fmt;
use std::path::PathBuf;

/// Main error type for all drawable generation operations
///
/// Errors returned from the pipeline abort the whole run. Errors recorded in a
/// [`crate::generation::GenerationReport`] affect a single density only.
#[derive(Debug)]
pub enum DrawableError {
    /// Failed to open or decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Requested identifier is not one of the five density buckets
    UnknownDensity {
        /// The identifier as supplied by the caller
        identifier: String,
    },

    /// Failed to encode a resampled image as PNG
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// Request was rejected before generation started
    InvalidRequest {
        /// Description of what's wrong with the request
        reason: String,
    },

    /// Every requested density failed
    NothingGenerated {
        /// Number of densities that were attempted
        failed: usize,
    },
}

impl fmt::Display for DrawableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::UnknownDensity { .. } => f.write_str("unknown density"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
            Self::InvalidRequest { reason } => write!(f, "Invalid request: {reason}"),
            Self::NothingGenerated { failed } => {
                write!(f, "No images generated ({failed} densities failed)")
            }
        }
    }
}

impl std::error::Error for DrawableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for drawable generation results
pub type Result<T> = std::result::Result<T, DrawableError>;

/// Create an invalid request error
pub fn invalid_request(reason: &impl ToString) -> DrawableError {
    DrawableError::InvalidRequest {
        reason: reason.to_string(),
    }
}

/// Create a file system error for the given path and operation
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> DrawableError {
    DrawableError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
