//! End-to-end mask encoding pipeline.

mod encoder;

pub use encoder::{Config, Pipeline};
