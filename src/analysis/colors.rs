//! Exact distinct color counting

use crate::io::image::RgbFrame;
use std::collections::HashSet;

/// Count distinct RGB triples in the frame
///
/// Every channel value is significant: no quantization or binning.
pub fn count_unique_colors(frame: &RgbFrame) -> usize {
    frame
        .as_rgb_image()
        .pixels()
        .map(|pixel| pixel.0)
        .collect::<HashSet<[u8; 3]>>()
        .len()
}
