//! Mask grids, pixel classification, and mask loading.

mod classify;
mod load;

pub use classify::{classify, intensity, is_blocked, BLOCKED_THRESHOLD};
pub use load::load_mask;

use image::{ImageBuffer, Rgba};

use crate::error::{Error, Result};

/// One cell sample: red, green, blue, alpha, each in 0-65535.
///
/// Color channels are alpha-premultiplied.
pub type Sample = Rgba<u16>;

/// Read-only access to a grid of channel samples.
///
/// Implementors must answer `sample` for every `0 <= x < width`,
/// `0 <= y < height`.
pub trait MaskSource {
    /// Grid width (X extent).
    fn width(&self) -> u32;

    /// Grid height (Y extent).
    fn height(&self) -> u32;

    /// Channel samples at `(x, y)`.
    fn sample(&self, x: u32, y: u32) -> Sample;
}

/// Owned, immutable mask of premultiplied 16-bit RGBA samples.
#[derive(Debug, Clone)]
pub struct Mask {
    pixels: ImageBuffer<Sample, Vec<u16>>,
}

impl Mask {
    /// Wrap a buffer of premultiplied samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMask`] if either dimension is zero.
    pub fn new(pixels: ImageBuffer<Sample, Vec<u16>>) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::EmptyMask { width, height });
        }
        Ok(Self { pixels })
    }

    /// Build a mask by evaluating `f(x, y)` for every cell.
    ///
    /// The returned samples are stored as-is, so they should already be
    /// premultiplied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMask`] if either dimension is zero.
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Sample,
    {
        Self::new(ImageBuffer::from_fn(width, height, f))
    }

    /// Dimensions as `(width, height)`.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Number of cells classified blocked.
    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.pixels
            .pixels()
            .filter(|&&sample| classify(sample))
            .count()
    }
}

impl MaskSource for Mask {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[inline]
    fn sample(&self, x: u32, y: u32) -> Sample {
        *self.pixels.get_pixel(x, y)
    }
}
