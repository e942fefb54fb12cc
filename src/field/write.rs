//! CSV matrix output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

use super::DistanceField;

/// Digits after the decimal point, matching `printf("%f")`.
pub const DEFAULT_PRECISION: usize = 6;

/// Write a distance field as comma-separated text.
///
/// Each column of the field (one X index) becomes one line, with one
/// fixed-point value per Y index. Lines end in `\n`; there is no header.
///
/// # Errors
///
/// Returns any error reported by `out`.
pub fn write_csv<W: Write>(field: &DistanceField, mut out: W, precision: usize) -> io::Result<()> {
    for column in field.columns() {
        for (y, value) in column.iter().enumerate() {
            if y > 0 {
                out.write_all(b",")?;
            }
            write!(out, "{value:.precision$}")?;
        }
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Save a distance field to a CSV file, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_csv<P: AsRef<Path>>(field: &DistanceField, path: P, precision: usize) -> Result<()> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|source| Error::OutputCreate {
        path: path.to_path_buf(),
        source,
    })?;

    write_csv(field, BufWriter::new(file), precision).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
