//! Weighted cognitive load score
//!
//! The three inputs live on very different scales: GLCM contrast is usually
//! in the tens to hundreds, edge density between 0 and 10, and the unique
//! color count anywhere from hundreds to tens of thousands. The weights are
//! applied to the raw values, so the color count dominates the total. Reports
//! depend on this exact combination.

use crate::io::configuration::{CONTRAST_WEIGHT, TEXT_DENSITY_WEIGHT, UNIQUE_COLORS_WEIGHT};
use crate::math::rounding::round_report;

/// Weighted contribution of each metric to the score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Contrast term (`0.4 * contrast`)
    pub contrast: f64,
    /// Edge density term (`0.3 * text_density`)
    pub text_density: f64,
    /// Unique color term (`0.3 * unique_colors`)
    pub unique_colors: f64,
}

impl ScoreBreakdown {
    /// Weight the three raw metrics
    pub const fn new(contrast: f64, text_density: f64, unique_colors: usize) -> Self {
        Self {
            contrast: contrast * CONTRAST_WEIGHT,
            text_density: text_density * TEXT_DENSITY_WEIGHT,
            unique_colors: unique_colors as f64 * UNIQUE_COLORS_WEIGHT,
        }
    }

    /// Unrounded sum of the weighted terms, added left to right
    pub const fn total(&self) -> f64 {
        self.contrast + self.text_density + self.unique_colors
    }

    /// Fraction of the total contributed by the unique color term
    pub const fn color_share(&self) -> f64 {
        let total = self.total();
        if total > 0.0 {
            self.unique_colors / total
        } else {
            0.0
        }
    }
}

/// Combine the three base metrics into the cognitive load score
///
/// Returns `round(0.4 * contrast + 0.3 * text_density + 0.3 * unique_colors, 2)`.
pub fn cognitive_load_score(contrast: f64, text_density: f64, unique_colors: usize) -> f64 {
    round_report(ScoreBreakdown::new(contrast, text_density, unique_colors).total())
}
