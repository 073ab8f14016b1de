//! Fixed-precision rounding shared by every reported metric

use crate::io::configuration::REPORT_DECIMALS;
use num_traits::Float;
use std::fmt::Display;
use std::str::FromStr;

/// Round `value` to `decimals` places
///
/// Rounds the exact decimal expansion of the stored float, with exact halves
/// going to the even neighbor. `0.125` becomes `0.12`, while `0.645` (stored
/// slightly above the half) becomes `0.65`. Non-finite values pass through
/// unchanged.
pub fn round_to<T>(value: T, decimals: usize) -> T
where
    T: Float + Display + FromStr,
{
    if !value.is_finite() {
        return value;
    }
    // Precision formatting is exact and rounds half to even
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Round to the precision used in reports (2 decimal places)
pub fn round_report(value: f64) -> f64 {
    round_to(value, REPORT_DECIMALS)
}
