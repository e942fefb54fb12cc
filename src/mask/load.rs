//! Mask loading utilities.

use std::path::Path;

use image::{DynamicImage, Rgba};

use crate::error::{Error, Result};

use super::{Mask, Sample};

/// Load a mask image from disk.
///
/// The image is:
/// 1. Decoded from the specified path (format inferred by the `image` crate)
/// 2. Widened to 16 bits per channel
/// 3. Alpha-premultiplied
///
/// # Errors
///
/// Returns an error if the image cannot be opened or decoded, or if it has
/// no pixels.
pub fn load_mask<P: AsRef<Path>>(path: P) -> Result<Mask> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::MaskLoad {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Decoded {} as {}x{} {:?}",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Mask::from_image(&img)
}

impl Mask {
    /// Convert a decoded image into a mask of premultiplied 16-bit samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMask`] if either dimension is zero.
    pub fn from_image(img: &DynamicImage) -> Result<Self> {
        let mut pixels = img.to_rgba16();
        for pixel in pixels.pixels_mut() {
            *pixel = premultiply(*pixel);
        }
        Self::new(pixels)
    }
}

/// Scale color channels by alpha, flooring to the 16-bit range.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn premultiply(sample: Sample) -> Sample {
    let [r, g, b, a] = sample.0;
    let alpha = u32::from(a);
    // Safe: c * alpha / 65535 never exceeds c
    let scale = |c: u16| (u32::from(c) * alpha / u32::from(u16::MAX)) as u16;
    Rgba([scale(r), scale(g), scale(b), a])
}
