//! Blocked/free classification of single mask samples.

use super::{MaskSource, Sample};

/// Scaled intensity below which a cell counts as blocked.
pub const BLOCKED_THRESHOLD: u32 = 255 / 2;

/// Alpha-weighted intensity of a sample.
///
/// The RGB average is scaled by `alpha / 255` in integer arithmetic even
/// though alpha is a 16-bit sample, so any alpha below 255 drives the
/// intensity to zero and a fully opaque pixel is multiplied by 257.
#[inline]
#[must_use]
pub fn intensity(sample: Sample) -> u32 {
    let [r, g, b, a] = sample.0.map(u32::from);
    ((r + g + b) / 3) * (a / 255)
}

/// Whether a sample is an obstacle.
#[inline]
#[must_use]
pub fn classify(sample: Sample) -> bool {
    intensity(sample) < BLOCKED_THRESHOLD
}

/// Whether the cell at `(x, y)` is blocked. Depends only on that cell.
#[inline]
#[must_use]
pub fn is_blocked<M: MaskSource + ?Sized>(mask: &M, x: u32, y: u32) -> bool {
    classify(mask.sample(x, y))
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;
    use crate::mask::Mask;

    const OPAQUE: u16 = u16::MAX;

    #[test]
    fn test_threshold_value() {
        assert_eq!(BLOCKED_THRESHOLD, 127);
    }

    #[test]
    fn test_opaque_black_is_blocked() {
        assert_eq!(intensity(Rgba([0, 0, 0, OPAQUE])), 0);
        assert!(classify(Rgba([0, 0, 0, OPAQUE])));
    }

    #[test]
    fn test_opaque_white_is_free() {
        // 65535 * (65535 / 255) = 65535 * 257
        assert_eq!(intensity(Rgba([OPAQUE, OPAQUE, OPAQUE, OPAQUE])), 16_842_495);
        assert!(!classify(Rgba([OPAQUE, OPAQUE, OPAQUE, OPAQUE])));
    }

    #[test]
    fn test_smallest_opaque_average_is_free() {
        // Average of 1 scaled by 257 already clears the threshold.
        assert!(!classify(Rgba([1, 1, 1, OPAQUE])));
        assert!(!classify(Rgba([3, 0, 0, OPAQUE])));
        // Integer averaging floors (2 / 3) down to zero.
        assert!(classify(Rgba([2, 0, 0, OPAQUE])));
    }

    #[test]
    fn test_low_alpha_is_blocked_regardless_of_color() {
        assert!(classify(Rgba([OPAQUE, OPAQUE, OPAQUE, 254])));
        assert!(classify(Rgba([OPAQUE, OPAQUE, OPAQUE, 0])));
    }

    #[test]
    fn test_alpha_scale_boundary() {
        // alpha 255 scales by 1, so the average is compared directly.
        assert!(classify(Rgba([126, 126, 126, 255])));
        assert!(!classify(Rgba([127, 127, 127, 255])));
        // alpha 510 scales by 2.
        assert!(classify(Rgba([63, 63, 63, 510])));
        assert!(!classify(Rgba([64, 64, 64, 510])));
    }

    #[test]
    fn test_classification_is_local() {
        let base = Mask::from_fn(3, 3, |_, _| Rgba([OPAQUE; 4])).unwrap();
        let before = is_blocked(&base, 1, 1);

        for (u, v) in [(0, 0), (2, 1), (1, 2), (2, 2)] {
            let mutated = Mask::from_fn(3, 3, |x, y| {
                if (x, y) == (u, v) {
                    Rgba([0, 0, 0, OPAQUE])
                } else {
                    Rgba([OPAQUE; 4])
                }
            })
            .unwrap();
            assert!(is_blocked(&mutated, u, v));
            assert_eq!(is_blocked(&mutated, 1, 1), before);
        }
    }
}
