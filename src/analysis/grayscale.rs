//! Luminance conversion from RGB frames to 8-bit grayscale
//!
//! Uses the ITU-R BT.601 weights (0.299, 0.587, 0.114) in 14-bit fixed point
//! with round-to-nearest, so the result is exact integer arithmetic and does
//! not depend on floating-point evaluation order.

use crate::io::image::RgbFrame;
use image::{GrayImage, Luma, Rgb};

const LUMA_SHIFT: u32 = 14;
const RED_WEIGHT: u32 = 4899;
const GREEN_WEIGHT: u32 = 9617;
const BLUE_WEIGHT: u32 = 1868;
const ROUNDING: u32 = 1 << (LUMA_SHIFT - 1);

/// Luminance of a single RGB pixel
pub fn luma(pixel: Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    let weighted =
        u32::from(r) * RED_WEIGHT + u32::from(g) * GREEN_WEIGHT + u32::from(b) * BLUE_WEIGHT;
    // Weights sum to 1 << 14, so the shifted value never exceeds 255
    ((weighted + ROUNDING) >> LUMA_SHIFT) as u8
}

/// Convert a color frame to a grayscale image of the same dimensions
pub fn to_grayscale(frame: &RgbFrame) -> GrayImage {
    let rgb = frame.as_rgb_image();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        Luma([luma(*rgb.get_pixel(x, y))])
    })
}
