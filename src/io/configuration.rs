//! Scoring constants, detector parameters and presentation defaults

// Metric display names, also used as report keys
/// Display name of the GLCM contrast metric
pub const CONTRAST_NAME: &str = "Contrast";
/// Display name of the edge density metric
pub const TEXT_DENSITY_NAME: &str = "Text Density";
/// Display name of the unique color metric
pub const UNIQUE_COLORS_NAME: &str = "Unique Colors";
/// Display name of the combined score
pub const SCORE_NAME: &str = "Cognitive Load Score";

// Classification thresholds as (low, high) pairs
/// Contrast below this is "Low"
pub const CONTRAST_LOW: f64 = 50.0;
/// Contrast above this is "High"
pub const CONTRAST_HIGH: f64 = 200.0;
/// Text density below this is "Low"
pub const TEXT_DENSITY_LOW: f64 = 0.5;
/// Text density above this is "High"
pub const TEXT_DENSITY_HIGH: f64 = 5.0;
/// Unique color count below this is "Low"
pub const UNIQUE_COLORS_LOW: f64 = 1000.0;
/// Unique color count above this is "High"
pub const UNIQUE_COLORS_HIGH: f64 = 50_000.0;
/// Cognitive load score below this is "Low"
pub const SCORE_LOW: f64 = 3000.0;
/// Cognitive load score above this is "High"
pub const SCORE_HIGH: f64 = 15_000.0;

// Score weights. The inputs are not normalized, so the unique color term
// dominates for any realistic screenshot. Output depends on this, keep as is.
/// Weight applied to GLCM contrast
pub const CONTRAST_WEIGHT: f64 = 0.4;
/// Weight applied to edge density
pub const TEXT_DENSITY_WEIGHT: f64 = 0.3;
/// Weight applied to the unique color count
pub const UNIQUE_COLORS_WEIGHT: f64 = 0.3;

/// Decimal places kept for every reported value
pub const REPORT_DECIMALS: usize = 2;

// Texture analysis
/// Number of gray levels in the co-occurrence matrix
pub const GLCM_LEVELS: usize = 256;
/// Horizontal pixel offset between co-occurring pairs
pub const GLCM_DISTANCE: usize = 1;

// Edge detection
/// Lower hysteresis threshold on L1 gradient magnitude
pub const CANNY_LOW_THRESHOLD: i32 = 100;
/// Upper hysteresis threshold on L1 gradient magnitude
pub const CANNY_HIGH_THRESHOLD: i32 = 200;
/// Value an edge pixel carries in the binary edge map
pub const EDGE_PIXEL_VALUE: u64 = 255;

// Indicator glyphs
/// Glyph for "Low"
pub const LOW_GLYPH: &str = "\u{1F7E2}";
/// Glyph for "Moderate"
pub const MODERATE_GLYPH: &str = "\u{1F7E0}";
/// Glyph for "High"
pub const HIGH_GLYPH: &str = "\u{1F534}";

// Fixed descriptions per level
/// Description for "Low"
pub const LOW_DESCRIPTION: &str = "Clear and easy to read.";
/// Description for "Moderate"
pub const MODERATE_DESCRIPTION: &str = "Balanced, but could be optimized.";
/// Description for "High"
pub const HIGH_DESCRIPTION: &str = "Might be overwhelming or hard to process.";

// Presentation
/// Heading printed above text reports
pub const REPORT_HEADING: &str = "Cognitive Load Analysis Results";
/// Path label used for images decoded from memory
pub const MEMORY_SOURCE_LABEL: &str = "<memory>";
/// Spinner redraw interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;
