//! Formatted analysis results and their text and JSON renderings

use crate::analysis::analyzer::RawMetrics;
use crate::analysis::classification::{Level, Thresholds};
use crate::io::configuration::{
    CONTRAST_NAME, REPORT_HEADING, SCORE_NAME, TEXT_DENSITY_NAME, UNIQUE_COLORS_NAME,
};
use crate::io::error::{AnalyzerError, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Numeric value of a metric as it appears in a report
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// Fractional value, already rounded
    Decimal(f64),
    /// Whole count
    Count(usize),
}

impl MetricValue {
    /// Value used for classification
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Decimal(value) => value,
            Self::Count(count) => count as f64,
        }
    }
}

impl fmt::Display for MetricValue {
    // Rounded values are whole exactly when their fractional part is zero
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole floats keep one fractional digit: 0.0, 12.0
            Self::Decimal(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value:.1}")
            }
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Count(count) => write!(f, "{count}"),
        }
    }
}

/// One classified metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricReading {
    /// Display name, also the report key
    pub name: &'static str,
    /// Rounded value
    pub value: MetricValue,
    /// Bucket derived from the metric's thresholds
    pub level: Level,
}

impl MetricReading {
    /// Classify `value` against `thresholds`
    pub const fn new(name: &'static str, value: MetricValue, thresholds: Thresholds) -> Self {
        Self {
            name,
            value,
            level: thresholds.classify(value.as_f64()),
        }
    }
}

/// Renders as `"{glyph} {value} ({level}) - {description}"`
impl fmt::Display for MetricReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) - {}",
            self.level.glyph(),
            self.value,
            self.level.label(),
            self.level.description()
        )
    }
}

/// The four classified metrics of one screenshot
///
/// Always holds Contrast, Text Density, Unique Colors and Cognitive Load Score
/// in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    readings: [MetricReading; 4],
}

impl AnalysisResult {
    /// Classify raw metrics into a report
    pub const fn from_metrics(metrics: &RawMetrics) -> Self {
        Self {
            readings: [
                MetricReading::new(
                    CONTRAST_NAME,
                    MetricValue::Decimal(metrics.contrast),
                    Thresholds::CONTRAST,
                ),
                MetricReading::new(
                    TEXT_DENSITY_NAME,
                    MetricValue::Decimal(metrics.text_density),
                    Thresholds::TEXT_DENSITY,
                ),
                MetricReading::new(
                    UNIQUE_COLORS_NAME,
                    MetricValue::Count(metrics.unique_colors),
                    Thresholds::UNIQUE_COLORS,
                ),
                MetricReading::new(
                    SCORE_NAME,
                    MetricValue::Decimal(metrics.score),
                    Thresholds::SCORE,
                ),
            ],
        }
    }

    /// Classified readings in report order
    pub const fn readings(&self) -> &[MetricReading; 4] {
        &self.readings
    }

    /// Metric names paired with their formatted strings
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        self.readings
            .iter()
            .map(|reading| (reading.name, reading.to_string()))
            .collect()
    }

    /// Formatted string for a metric name, if present
    pub fn get(&self, name: &str) -> Option<String> {
        self.readings
            .iter()
            .find(|reading| reading.name == name)
            .map(ToString::to_string)
    }

    /// Reading for a metric name, if present
    pub fn reading(&self, name: &str) -> Option<&MetricReading> {
        self.readings.iter().find(|reading| reading.name == name)
    }

    /// Heading followed by one `Name: formatted` line per metric
    pub fn to_text(&self) -> String {
        let mut text = format!("### {REPORT_HEADING}\n");
        for (name, formatted) in self.entries() {
            text.push_str(&format!("{name}: {formatted}\n"));
        }
        text
    }

    /// JSON object keyed by metric name
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Output`] if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| AnalyzerError::Output {
            format: "json",
            reason: e.to_string(),
        })
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.readings.len()))?;
        for reading in &self.readings {
            map.serialize_entry(reading.name, &reading.to_string())?;
        }
        map.end()
    }
}
