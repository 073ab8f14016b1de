//! Numeric helpers for metric rounding and score combination

/// Decimal rounding of reported values
pub mod rounding;
/// Weighted combination of the base metrics into one score
pub mod scoring;
