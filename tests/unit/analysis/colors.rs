//! Tests for exact distinct color counting

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use uiload::RgbFrame;
    use uiload::analysis::colors::count_unique_colors;

    const NOISE_SEED: u64 = 42;

    fn frame_from_colors(width: u32, height: u32, colors: &[[u8; 3]]) -> RgbFrame {
        let data: Vec<u8> = colors.iter().flatten().copied().collect();
        RgbFrame::from_raw(width, height, 3, data).unwrap()
    }

    fn seeded_noise(seed: u64) -> RgbFrame {
        let mut rng = StdRng::seed_from_u64(seed);
        let colors: Vec<[u8; 3]> = (0..100 * 100)
            .map(|_| [rng.random(), rng.random(), rng.random()])
            .collect();
        frame_from_colors(100, 100, &colors)
    }

    // Tests a single-color image counts one color
    // Verified by counting pixels instead of colors
    #[test]
    fn test_solid_image_has_one_color() {
        let frame = RgbFrame::from_rgb_image(RgbImage::from_pixel(100, 100, Rgb([0, 0, 0])));
        assert_eq!(count_unique_colors(&frame), 1);
    }

    // Tests colors differing in a single channel are distinct
    // Verified by dropping the blue channel from the key
    #[test]
    fn test_single_channel_difference_counts() {
        let frame = frame_from_colors(
            2,
            2,
            &[[10, 20, 30], [10, 20, 31], [10, 20, 30], [11, 20, 30]],
        );
        assert_eq!(count_unique_colors(&frame), 3);
    }

    // Tests a seeded shuffle of 10000 distinct colors counts exactly 10000
    // Verified by quantizing to 5 bits per channel
    #[test]
    fn test_shuffled_distinct_colors_exact_count() {
        let mut colors: Vec<[u8; 3]> = (0u32..10_000)
            .map(|i| [(i >> 16) as u8, (i >> 8) as u8, i as u8])
            .collect();
        let mut rng = StdRng::seed_from_u64(NOISE_SEED);
        colors.shuffle(&mut rng);

        let frame = frame_from_colors(100, 100, &colors);
        assert_eq!(count_unique_colors(&frame), 10_000);
    }

    // Tests uniform random noise has the exact count for a fixed seed
    // Verified by reseeding from entropy
    #[test]
    fn test_seeded_noise_exact_count() {
        // 10000 draws from 2^24 colors; this seed produces one collision
        assert_eq!(count_unique_colors(&seeded_noise(NOISE_SEED)), 9_999);
        assert_eq!(
            count_unique_colors(&seeded_noise(NOISE_SEED)),
            count_unique_colors(&seeded_noise(NOISE_SEED))
        );
    }
}
