//! Image decoding and validation into owned three-channel frames

use crate::io::error::{AnalyzerError, Result, invalid_image};
use image::RgbImage;
use std::path::Path;

/// Channel count every analyzed frame carries
pub const RGB_CHANNELS: usize = 3;

/// An immutable three-channel, 8-bit color image
///
/// Decoded files are normalized to RGB: alpha is dropped and single-channel
/// images are expanded, matching what a color-mode image reader returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbFrame {
    pixels: RgbImage,
}

impl RgbFrame {
    /// Decode an image file from disk
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::ImageLoad`] if the file cannot be opened or is
    /// not a decodable image
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let img = image::open(&path_buf).map_err(|e| AnalyzerError::ImageLoad {
            path: path_buf,
            source: e,
        })?;

        Ok(Self {
            pixels: img.to_rgb8(),
        })
    }

    /// Decode an encoded image (PNG, JPEG) held in memory
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::ImageLoad`] if the buffer is not a decodable
    /// image
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)?;

        Ok(Self {
            pixels: img.to_rgb8(),
        })
    }

    /// Build a frame from a raw interleaved pixel buffer
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `channels` is not 3 ([`AnalyzerError::ChannelMismatch`])
    /// - `data` is not exactly `width * height * 3` bytes long
    ///   ([`AnalyzerError::InvalidImage`])
    pub fn from_raw(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Result<Self> {
        if channels != RGB_CHANNELS {
            return Err(AnalyzerError::ChannelMismatch {
                expected: RGB_CHANNELS,
                found: channels,
            });
        }

        let expected_len = width as usize * height as usize * RGB_CHANNELS;
        if data.len() != expected_len {
            return Err(invalid_image(
                width,
                height,
                &format!(
                    "buffer holds {} bytes, expected {expected_len}",
                    data.len()
                ),
            ));
        }

        let pixels = RgbImage::from_raw(width, height, data).ok_or_else(|| {
            invalid_image(width, height, &"buffer does not match image dimensions")
        })?;

        Ok(Self { pixels })
    }

    /// Wrap an already decoded RGB image
    pub const fn from_rgb_image(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Total number of pixels (height × width)
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Borrow the underlying RGB buffer
    pub const fn as_rgb_image(&self) -> &RgbImage {
        &self.pixels
    }

    /// Reject frames with no pixels
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::InvalidImage`] if width or height is zero
    pub fn ensure_non_empty(&self) -> Result<()> {
        if self.width() == 0 || self.height() == 0 {
            return Err(invalid_image(
                self.width(),
                self.height(),
                &"image has zero width or height",
            ));
        }
        Ok(())
    }
}
