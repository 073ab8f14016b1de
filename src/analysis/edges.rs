//! Canny edge detection producing a binary edge map
//!
//! - 3×3 Sobel derivatives with replicated borders.
//! - L1 gradient magnitude `|gx| + |gy|`.
//! - Non-maximum suppression along four directions (0°, 45°, 90°, 135°),
//!   split at tan 22.5° in Q15 fixed point. Neighbors outside the image have
//!   zero magnitude.
//! - Double threshold with 8-connected hysteresis: pixels above `high` seed
//!   edges, pixels above `low` join an edge only when connected to a seed.

use crate::io::configuration::{CANNY_HIGH_THRESHOLD, CANNY_LOW_THRESHOLD, EDGE_PIXEL_VALUE};
use crate::io::error::{Result, invalid_image};
use bitvec::prelude::*;
use image::GrayImage;
use ndarray::Array2;

// tan(22.5°) scaled by 2^15
const TAN_22_5_Q15: i64 = 13_573;

const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Lower and upper gradient magnitude thresholds for hysteresis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HysteresisThresholds {
    /// Candidates must exceed this magnitude
    pub low: i32,
    /// Seeds must exceed this magnitude
    pub high: i32,
}

impl Default for HysteresisThresholds {
    fn default() -> Self {
        Self {
            low: CANNY_LOW_THRESHOLD,
            high: CANNY_HIGH_THRESHOLD,
        }
    }
}

/// Per-pixel Sobel derivatives and L1 magnitude, indexed `[row, col]`
#[derive(Debug, Clone)]
pub struct Gradients {
    /// Horizontal derivative
    pub gx: Array2<i32>,
    /// Vertical derivative
    pub gy: Array2<i32>,
    /// `|gx| + |gy|`
    pub magnitude: Array2<i32>,
}

impl Gradients {
    fn magnitude_at(&self, x: isize, y: isize) -> i32 {
        if x < 0 || y < 0 {
            return 0;
        }
        self.magnitude
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or(0)
    }
}

/// Compute Sobel derivatives with border replication
pub fn sobel_gradients(gray: &GrayImage) -> Gradients {
    let (w, h) = (gray.width() as usize, gray.height() as usize);
    let mut gx = Array2::<i32>::zeros((h, w));
    let mut gy = Array2::<i32>::zeros((h, w));
    let mut magnitude = Array2::<i32>::zeros((h, w));

    let sample = |x: usize, y: usize| -> i32 {
        gray.get_pixel_checked(x as u32, y as u32)
            .map_or(0, |pixel| i32::from(pixel.0[0]))
    };

    for y in 0..h {
        let up = y.saturating_sub(1);
        let down = (y + 1).min(h - 1);
        for x in 0..w {
            let left = x.saturating_sub(1);
            let right = (x + 1).min(w - 1);

            let dx = sample(right, up) + 2 * sample(right, y) + sample(right, down)
                - sample(left, up)
                - 2 * sample(left, y)
                - sample(left, down);
            let dy = sample(left, down) + 2 * sample(x, down) + sample(right, down)
                - sample(left, up)
                - 2 * sample(x, up)
                - sample(right, up);

            if let Some(v) = gx.get_mut((y, x)) {
                *v = dx;
            }
            if let Some(v) = gy.get_mut((y, x)) {
                *v = dy;
            }
            if let Some(v) = magnitude.get_mut((y, x)) {
                *v = dx.abs() + dy.abs();
            }
        }
    }

    Gradients { gx, gy, magnitude }
}

// A pixel survives if it is a local maximum along its gradient direction
fn is_local_maximum(grad: &Gradients, x: usize, y: usize, m: i32) -> bool {
    let dx = grad.gx.get((y, x)).copied().unwrap_or(0);
    let dy = grad.gy.get((y, x)).copied().unwrap_or(0);
    let (xi, yi) = (x as isize, y as isize);

    let abs_dx = i64::from(dx.abs());
    let abs_dy = i64::from(dy.abs()) << 15;
    let tan22 = abs_dx * TAN_22_5_Q15;

    if abs_dy < tan22 {
        return m > grad.magnitude_at(xi - 1, yi) && m >= grad.magnitude_at(xi + 1, yi);
    }

    let tan67 = tan22 + (abs_dx << 16);
    if abs_dy > tan67 {
        return m > grad.magnitude_at(xi, yi - 1) && m >= grad.magnitude_at(xi, yi + 1);
    }

    let step: isize = if (dx ^ dy) < 0 { -1 } else { 1 };
    m > grad.magnitude_at(xi - step, yi - 1) && m > grad.magnitude_at(xi + step, yi + 1)
}

/// Binary edge map; each edge pixel stands for the value 255
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMap {
    width: usize,
    height: usize,
    bits: BitVec,
}

impl EdgeMap {
    /// Width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at (x, y) is an edge; false outside the image
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        x < self.width && self.bits.get(y * self.width + x).as_deref() == Some(&true)
    }

    /// Number of edge pixels
    pub fn edge_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Sum of all edge map values (255 per edge pixel)
    pub fn pixel_sum(&self) -> u64 {
        self.edge_count() as u64 * EDGE_PIXEL_VALUE
    }

    /// Average edge map value per pixel
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalyzerError::InvalidImage`] if the map has no
    /// pixels
    pub fn density(&self) -> Result<f64> {
        let total = self.width * self.height;
        if total == 0 {
            return Err(invalid_image(
                self.width as u32,
                self.height as u32,
                &"edge density is undefined for an image without pixels",
            ));
        }
        Ok(self.pixel_sum() as f64 / total as f64)
    }
}

/// Run Canny with explicit thresholds
pub fn detect_edges_with(gray: &GrayImage, thresholds: HysteresisThresholds) -> EdgeMap {
    let (w, h) = (gray.width() as usize, gray.height() as usize);
    let grad = sobel_gradients(gray);

    let mut candidates = bitvec![0; w * h];
    let mut edges = bitvec![0; w * h];
    let mut stack = Vec::new();

    for ((y, x), &m) in grad.magnitude.indexed_iter() {
        if m <= thresholds.low || !is_local_maximum(&grad, x, y, m) {
            continue;
        }
        let idx = y * w + x;
        candidates.set(idx, true);
        if m > thresholds.high {
            edges.set(idx, true);
            stack.push((x, y));
        }
    }

    while let Some((x, y)) = stack.pop() {
        for (dx, dy) in NEIGHBORS_8 {
            let (nx, ny) = (x as isize + dx, y as isize + dy);
            if nx < 0 || ny < 0 || nx as usize >= w || ny as usize >= h {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            let idx = ny * w + nx;
            let is_candidate = candidates.get(idx).as_deref() == Some(&true);
            let is_edge = edges.get(idx).as_deref() == Some(&true);
            if is_candidate && !is_edge {
                edges.set(idx, true);
                stack.push((nx, ny));
            }
        }
    }

    EdgeMap {
        width: w,
        height: h,
        bits: edges,
    }
}

/// Run Canny with the fixed 100/200 thresholds
pub fn detect_edges(gray: &GrayImage) -> EdgeMap {
    detect_edges_with(gray, HysteresisThresholds::default())
}
