//! Custom error types for maskoccupancy.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the maskoccupancy library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or decode a mask image.
    #[error("failed to load mask from {path}: {source}")]
    MaskLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Mask has no cells to encode.
    #[error("mask dimensions {width}x{height} are empty")]
    EmptyMask { width: u32, height: u32 },

    /// Failed to create the output matrix file.
    #[error("failed to create output file {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed while writing rows to the output matrix file.
    #[error("failed to write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Failed to start the worker thread pool.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for maskoccupancy operations.
pub type Result<T> = std::result::Result<T, Error>;
