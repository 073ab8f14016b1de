//! Three-way bucketing of metric values against fixed threshold pairs

use crate::io::configuration::{
    CONTRAST_HIGH, CONTRAST_LOW, HIGH_DESCRIPTION, HIGH_GLYPH, LOW_DESCRIPTION, LOW_GLYPH,
    MODERATE_DESCRIPTION, MODERATE_GLYPH, SCORE_HIGH, SCORE_LOW, TEXT_DENSITY_HIGH,
    TEXT_DENSITY_LOW, UNIQUE_COLORS_HIGH, UNIQUE_COLORS_LOW,
};
use serde::Serialize;
use std::fmt;

/// Qualitative bucket of a metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Level {
    /// Below the low threshold
    Low,
    /// Between the thresholds, inclusive
    Moderate,
    /// Above the high threshold
    High,
}

impl Level {
    /// Label shown in reports
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Colored indicator glyph (green, orange, red)
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Low => LOW_GLYPH,
            Self::Moderate => MODERATE_GLYPH,
            Self::High => HIGH_GLYPH,
        }
    }

    /// Fixed sentence describing the level
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => LOW_DESCRIPTION,
            Self::Moderate => MODERATE_DESCRIPTION,
            Self::High => HIGH_DESCRIPTION,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Low/high threshold pair for one metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Values strictly below are `Low`
    pub low: f64,
    /// Values strictly above are `High`
    pub high: f64,
}

impl Thresholds {
    /// Thresholds for GLCM contrast
    pub const CONTRAST: Self = Self {
        low: CONTRAST_LOW,
        high: CONTRAST_HIGH,
    };
    /// Thresholds for edge density
    pub const TEXT_DENSITY: Self = Self {
        low: TEXT_DENSITY_LOW,
        high: TEXT_DENSITY_HIGH,
    };
    /// Thresholds for the unique color count
    pub const UNIQUE_COLORS: Self = Self {
        low: UNIQUE_COLORS_LOW,
        high: UNIQUE_COLORS_HIGH,
    };
    /// Thresholds for the combined score
    pub const SCORE: Self = Self {
        low: SCORE_LOW,
        high: SCORE_HIGH,
    };

    /// Classify a value against this pair
    pub const fn classify(self, value: f64) -> Level {
        interpret(value, self.low, self.high)
    }
}

/// Bucket `value`: below `low` is Low, above `high` is High, otherwise Moderate
pub const fn interpret(value: f64, low: f64, high: f64) -> Level {
    if value < low {
        Level::Low
    } else if value > high {
        Level::High
    } else {
        Level::Moderate
    }
}
