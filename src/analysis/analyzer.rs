//! Cognitive load analysis pipeline
//!
//! decode → grayscale → contrast, edge density, unique colors → weighted score
//! → classification. Every entry point is a pure function of its input; no
//! state is shared between calls.

use crate::analysis::colors::count_unique_colors;
use crate::analysis::edges::detect_edges;
use crate::analysis::grayscale::to_grayscale;
use crate::analysis::texture::glcm_contrast;
use crate::io::error::Result;
use crate::io::image::RgbFrame;
use crate::io::report::AnalysisResult;
use crate::math::rounding::round_report;
use crate::math::scoring::{ScoreBreakdown, cognitive_load_score};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, info_span};

/// Unformatted metric values, each rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawMetrics {
    /// GLCM contrast of the grayscale image
    pub contrast: f64,
    /// Mean edge map value per pixel (edge pixels count as 255)
    pub text_density: f64,
    /// Number of distinct RGB triples
    pub unique_colors: usize,
    /// Weighted combination of the three metrics above
    pub score: f64,
}

/// Compute the raw metrics of a decoded frame
///
/// # Errors
///
/// Returns [`crate::AnalyzerError::InvalidImage`] if the frame has zero width
/// or height
pub fn measure(frame: &RgbFrame) -> Result<RawMetrics> {
    let span = info_span!("measure", width = frame.width(), height = frame.height());
    let _guard = span.enter();

    frame.ensure_non_empty()?;

    let gray = to_grayscale(frame);

    let contrast = round_report(glcm_contrast(&gray));
    debug!(contrast, "texture contrast");

    let edges = detect_edges(&gray);
    let text_density = round_report(edges.density()?);
    debug!(text_density, edge_pixels = edges.edge_count(), "edge density");

    let unique_colors = count_unique_colors(frame);
    debug!(unique_colors, "color diversity");

    let score = cognitive_load_score(contrast, text_density, unique_colors);
    let color_share = ScoreBreakdown::new(contrast, text_density, unique_colors).color_share();
    info!(score, color_share, "cognitive load score");

    Ok(RawMetrics {
        contrast,
        text_density,
        unique_colors,
        score,
    })
}

/// Analyze an already decoded frame
///
/// # Errors
///
/// Returns [`crate::AnalyzerError::InvalidImage`] if the frame has zero width
/// or height
pub fn analyze_frame(frame: &RgbFrame) -> Result<AnalysisResult> {
    let metrics = measure(frame)?;
    Ok(AnalysisResult::from_metrics(&metrics))
}

/// Analyze the image file at `image_path`
///
/// # Errors
///
/// Returns an error if:
/// - The file is missing or not a decodable image ([`crate::AnalyzerError::ImageLoad`])
/// - The image has zero width or height ([`crate::AnalyzerError::InvalidImage`])
pub fn analyze<P: AsRef<Path>>(image_path: P) -> Result<AnalysisResult> {
    let frame = RgbFrame::open(image_path)?;
    analyze_frame(&frame)
}

/// Analyze an encoded image (PNG, JPEG) held in memory
///
/// # Errors
///
/// Returns an error if:
/// - The buffer is not a decodable image ([`crate::AnalyzerError::ImageLoad`])
/// - The image has zero width or height ([`crate::AnalyzerError::InvalidImage`])
pub fn analyze_bytes(bytes: &[u8]) -> Result<AnalysisResult> {
    let frame = RgbFrame::decode(bytes)?;
    analyze_frame(&frame)
}
