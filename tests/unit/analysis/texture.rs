//! Tests for co-occurrence matrix construction and contrast

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma};
    use uiload::analysis::texture::{Glcm, glcm_contrast};

    fn row(values: &[u8]) -> GrayImage {
        GrayImage::from_fn(values.len() as u32, 1, |x, _| {
            Luma([values.get(x as usize).copied().unwrap_or(0)])
        })
    }

    // Tests a uniform image has zero contrast
    // Verified by weighting with |i - j| instead of (i - j)^2
    #[test]
    fn test_uniform_contrast_is_zero() {
        let gray = GrayImage::from_pixel(16, 16, Luma([77]));
        assert!(glcm_contrast(&gray).abs() < f64::EPSILON);
    }

    // Tests a single pair produces symmetric probabilities
    // Verified by skipping the transpose
    #[test]
    fn test_single_pair_is_symmetric() {
        let glcm = Glcm::horizontal(&row(&[0, 10]));
        let p = glcm.probabilities();

        assert_eq!(glcm.pair_count(), 1);
        assert!((p[(0, 10)] - 0.5).abs() < 1e-12);
        assert!((p[(10, 0)] - 0.5).abs() < 1e-12);
        assert!((glcm.contrast() - 100.0).abs() < 1e-9);
    }

    // Tests only horizontal neighbors are paired
    // Verified by pairing vertical neighbors
    #[test]
    fn test_vertical_changes_are_ignored() {
        let gray = GrayImage::from_fn(4, 4, |_, y| Luma([(y * 60) as u8]));
        let glcm = Glcm::horizontal(&gray);

        assert_eq!(glcm.pair_count(), 12);
        assert!(glcm.contrast().abs() < f64::EPSILON);
    }

    // Tests alternating levels give the squared step as contrast
    // Verified by dropping normalization
    #[test]
    fn test_alternating_levels() {
        let glcm = Glcm::horizontal(&row(&[0, 2, 0, 2]));

        assert!((glcm.probabilities().sum() - 1.0).abs() < 1e-12);
        assert!((glcm.contrast() - 4.0).abs() < 1e-9);
    }

    // Tests images without horizontal pairs yield an empty matrix
    // Verified by dividing by a zero total
    #[test]
    fn test_single_column_has_no_pairs() {
        let gray = GrayImage::from_fn(1, 8, |_, y| Luma([(y * 30) as u8]));
        let glcm = Glcm::horizontal(&gray);

        assert_eq!(glcm.pair_count(), 0);
        assert!(glcm.probabilities().sum().abs() < f64::EPSILON);
        assert!(glcm.contrast().abs() < f64::EPSILON);
    }
}
