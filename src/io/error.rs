//! Error types for image loading, validation and report output

use crate::io::configuration::MEMORY_SOURCE_LABEL;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all analysis operations
#[derive(Debug)]
pub enum AnalyzerError {
    /// Input could not be decoded as an image
    ImageLoad {
        /// Path to the image file, or a placeholder for in-memory input
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Image dimensions or buffer layout make the metrics undefined
    ///
    /// Raised for zero width or height before any per-pixel division, and for
    /// raw buffers whose length does not match the declared dimensions
    InvalidImage {
        /// Declared image width in pixels
        width: u32,
        /// Declared image height in pixels
        height: u32,
        /// Description of what's wrong with the image
        reason: String,
    },

    /// Raw pixel buffer does not carry three color channels
    ChannelMismatch {
        /// Channel count the analysis requires
        expected: usize,
        /// Channel count that was supplied
        found: usize,
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

    /// Report could not be rendered in the requested format
    Output {
        /// Name of the output format
        format: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidImage {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid image ({width}x{height}): {reason}")
            }
            Self::ChannelMismatch { expected, found } => {
                write!(
                    f,
                    "Expected {expected} color channels per pixel, found {found}"
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
            Self::Output { format, reason } => {
                write!(f, "Failed to render {format} report: {reason}")
            }
        }
    }
}

impl std::error::Error for AnalyzerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for analysis results
pub type Result<T> = std::result::Result<T, AnalyzerError>;

// In-memory decoding has no path; the placeholder label stands in for it
impl From<image::ImageError> for AnalyzerError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(MEMORY_SOURCE_LABEL),
            source: err,
        }
    }
}

/// Create an invalid image error for the given dimensions
pub fn invalid_image(width: u32, height: u32, reason: &impl ToString) -> AnalyzerError {
    AnalyzerError::InvalidImage {
        width,
        height,
        reason: reason.to_string(),
    }
}
