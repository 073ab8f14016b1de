//! Tests for report formatting and rendering

#[cfg(test)]
mod tests {
    use uiload::analysis::classification::{Level, Thresholds};
    use uiload::io::report::{AnalysisResult, MetricReading, MetricValue};
    use uiload::RawMetrics;

    fn mixed_metrics() -> RawMetrics {
        RawMetrics {
            contrast: 120.5,
            text_density: 6.2,
            unique_colors: 800,
            score: 290.06,
        }
    }

    // Tests values print like their shortest decimal form with one fractional digit minimum
    // Verified by printing whole floats without the trailing .0
    #[test]
    fn test_metric_value_display() {
        assert_eq!(MetricValue::Decimal(0.0).to_string(), "0.0");
        assert_eq!(MetricValue::Decimal(0.3).to_string(), "0.3");
        assert_eq!(MetricValue::Decimal(12.0).to_string(), "12.0");
        assert_eq!(MetricValue::Decimal(153.47).to_string(), "153.47");
        assert_eq!(MetricValue::Count(65_536).to_string(), "65536");
    }

    // Tests the reading layout: glyph, value, level, description
    // Verified by swapping level and description
    #[test]
    fn test_metric_reading_display() {
        let reading = MetricReading::new("Contrast", MetricValue::Decimal(250.0), Thresholds::CONTRAST);

        assert_eq!(reading.level, Level::High);
        assert_eq!(
            reading.to_string(),
            "\u{1F534} 250.0 (High) - Might be overwhelming or hard to process."
        );
    }

    // Tests each metric uses its own thresholds
    // Verified by classifying every metric with contrast thresholds
    #[test]
    fn test_from_metrics_levels() {
        let result = AnalysisResult::from_metrics(&mixed_metrics());
        let levels: Vec<Level> = result.readings().iter().map(|r| r.level).collect();

        assert_eq!(
            levels,
            vec![Level::Moderate, Level::High, Level::Low, Level::Low]
        );
        assert_eq!(
            result.get("Contrast").unwrap(),
            "\u{1F7E0} 120.5 (Moderate) - Balanced, but could be optimized."
        );
        assert_eq!(
            result.get("Unique Colors").unwrap(),
            "\u{1F7E2} 800 (Low) - Clear and easy to read."
        );
        assert!(result.get("Brightness").is_none());
    }

    // Tests text rendering has a heading and one labeled line per metric
    // Verified by omitting the metric labels
    #[test]
    fn test_to_text() {
        let text = AnalysisResult::from_metrics(&mixed_metrics()).to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines.first().copied(), Some("### Cognitive Load Analysis Results"));
        assert_eq!(
            lines.get(2).copied(),
            Some("Text Density: \u{1F534} 6.2 (High) - Might be overwhelming or hard to process.")
        );
        assert!(lines.get(4).is_some_and(|l| l.starts_with("Cognitive Load Score: ")));
    }

    // Tests JSON rendering keeps the four keys in report order
    // Verified by serializing the raw metrics instead
    #[test]
    fn test_to_json() {
        let json = AnalysisResult::from_metrics(&mixed_metrics()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(
            object.get("Cognitive Load Score").and_then(|v| v.as_str()),
            Some("\u{1F7E2} 290.06 (Low) - Clear and easy to read.")
        );

        let positions: Vec<usize> = ["\"Contrast\"", "\"Text Density\"", "\"Unique Colors\"", "\"Cognitive Load Score\""]
            .iter()
            .map(|key| json.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
