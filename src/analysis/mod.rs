//! Image metrics and the analysis pipeline built on them

/// End-to-end analysis entry points
pub mod analyzer;
/// Threshold-based level classification
pub mod classification;
/// Distinct color counting
pub mod colors;
/// Canny edge detection and edge density
pub mod edges;
/// Luminance conversion
pub mod grayscale;
/// Co-occurrence matrix texture statistics
pub mod texture;
