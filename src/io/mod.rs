//! Input/output: decoding, reporting, CLI and error handling

/// Command-line argument parsing and report runner
pub mod cli;
/// Fixed constants for scoring, detection and presentation
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Image decoding into RGB frames
pub mod image;
/// Terminal progress spinner
pub mod progress;
/// Classified results and their renderings
pub mod report;
