//! Distance fields and their text serialization.

mod builder;
mod write;

pub use builder::{build, DistanceFieldBuilder, ScanStrategy};
pub use write::{save_csv, write_csv, DEFAULT_PRECISION};

use ndarray::{Array2, ArrayView1, Axis};

/// Dense per-cell distance to the nearest blocked cell.
///
/// Indexed `[x, y]`: the first axis follows the mask width, so each
/// [`column`](Self::column) holds every Y value for one X.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceField {
    values: Array2<f64>,
}

impl DistanceField {
    /// Value stored for free cells when the mask has no blocked cell.
    #[must_use]
    pub fn sentinel(width: u32, height: u32) -> f64 {
        f64::from(width) * f64::from(height)
    }

    pub(crate) fn from_array(values: Array2<f64>) -> Self {
        Self { values }
    }

    /// Extent of the first axis.
    #[must_use]
    pub fn width(&self) -> usize {
        self.values.len_of(Axis(0))
    }

    /// Extent of the second axis.
    #[must_use]
    pub fn height(&self) -> usize {
        self.values.len_of(Axis(1))
    }

    /// Distance at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        self.values.get([x, y]).copied()
    }

    /// All values for one X index.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.width()`.
    #[must_use]
    pub fn column(&self, x: usize) -> ArrayView1<'_, f64> {
        self.values.index_axis(Axis(0), x)
    }

    /// Columns in X order.
    pub fn columns(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.values.axis_iter(Axis(0))
    }

    /// Borrow the underlying array.
    #[must_use]
    pub fn as_array(&self) -> &Array2<f64> {
        &self.values
    }

    /// Take ownership of the underlying array.
    #[must_use]
    pub fn into_array(self) -> Array2<f64> {
        self.values
    }
}
