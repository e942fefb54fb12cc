//! # `maskoccupancy`
//!
//! Encode a blocked/free mask image into a dense Euclidean distance field.
//!
//! Every pixel is classified as blocked or free from its color, and every
//! free pixel is assigned the distance, in pixels, to the nearest blocked
//! pixel. The result is saved as a CSV matrix so that later occupancy
//! queries become a single lookup.
//!
//! ## Example
//!
//! ```no_run
//! use maskoccupancy::{Config, Pipeline};
//!
//! # fn main() -> maskoccupancy::Result<()> {
//! let pipeline = Pipeline::new(Config::default())?;
//!
//! let field = pipeline.process("mask.png", "maskOccupancy.csv")?;
//! println!("{}x{}", field.width(), field.height());
//! # Ok(())
//! # }
//! ```
//!
//! The core computation is also usable on in-memory masks:
//!
//! ```
//! use image::Rgba;
//! use maskoccupancy::{field, mask::Mask};
//!
//! let mask = Mask::from_fn(3, 1, |x, _| {
//!     if x == 0 { Rgba([0, 0, 0, u16::MAX]) } else { Rgba([u16::MAX; 4]) }
//! })?;
//! let distances = field::build(&mask);
//!
//! assert_eq!(distances.get(2, 0), Some(2.0));
//! # Ok::<(), maskoccupancy::Error>(())
//! ```

pub mod error;
pub mod field;
pub mod mask;
pub mod pipeline;

pub use error::{Error, Result};
pub use field::{DistanceField, DistanceFieldBuilder, ScanStrategy};
pub use mask::{Mask, MaskSource};
pub use pipeline::{Config, Pipeline};
