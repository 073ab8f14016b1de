//! Gray-level co-occurrence texture statistics
//!
//! Builds the one-step, zero-degree co-occurrence matrix: every pixel is
//! paired with its right-hand neighbor, the matrix is made symmetric by adding
//! its transpose, and the counts are normalized to probabilities.

use crate::io::configuration::{GLCM_DISTANCE, GLCM_LEVELS};
use image::GrayImage;
use ndarray::Array2;

/// Normalized, symmetric co-occurrence matrix over 256 gray levels
#[derive(Debug, Clone, PartialEq)]
pub struct Glcm {
    probabilities: Array2<f64>,
    pair_count: usize,
}

impl Glcm {
    /// Build the matrix for horizontally adjacent pixel pairs
    ///
    /// Images narrower than two pixels have no pairs; their matrix is all
    /// zeros.
    pub fn horizontal(gray: &GrayImage) -> Self {
        let mut counts = Array2::<f64>::zeros((GLCM_LEVELS, GLCM_LEVELS));
        let mut pair_count = 0;

        for row in gray.rows() {
            let levels: Vec<usize> = row.map(|pixel| usize::from(pixel.0[0])).collect();
            for window in levels.windows(GLCM_DISTANCE + 1) {
                let (Some(&reference), Some(&neighbor)) = (window.first(), window.last()) else {
                    continue;
                };
                if let Some(count) = counts.get_mut((reference, neighbor)) {
                    *count += 1.0;
                    pair_count += 1;
                }
            }
        }

        let symmetric = &counts + &counts.t();
        let total = symmetric.sum();
        let probabilities = if total > 0.0 {
            symmetric / total
        } else {
            symmetric
        };

        Self {
            probabilities,
            pair_count,
        }
    }

    /// Probability of each (reference, neighbor) gray level pair
    pub const fn probabilities(&self) -> &Array2<f64> {
        &self.probabilities
    }

    /// Number of pixel pairs counted before symmetrization
    pub const fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Contrast property: sum of `P(i, j) * (i - j)^2`
    pub fn contrast(&self) -> f64 {
        self.probabilities
            .indexed_iter()
            .map(|((i, j), &p)| {
                let diff = i as f64 - j as f64;
                p * diff * diff
            })
            .sum()
    }
}

/// GLCM contrast of a grayscale image, unrounded
pub fn glcm_contrast(gray: &GrayImage) -> f64 {
    Glcm::horizontal(gray).contrast()
}
