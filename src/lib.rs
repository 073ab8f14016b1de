//! Heuristic cognitive load estimation for user interface screenshots
//!
//! Three image metrics are derived from a screenshot: GLCM contrast (texture
//! variation), edge density (a rough proxy for text), and the number of
//! distinct colors. They are combined into a weighted score and each value is
//! bucketed as Low, Moderate or High against fixed thresholds.

#![forbid(unsafe_code)]

/// Image metrics and the end-to-end analysis pipeline
pub mod analysis;
/// Input/output operations, reporting and error handling
pub mod io;
/// Rounding and score combination
pub mod math;

pub use analysis::analyzer::{RawMetrics, analyze, analyze_bytes, analyze_frame, measure};
pub use io::error::{AnalyzerError, Result};
pub use io::image::RgbFrame;
pub use io::report::AnalysisResult;
