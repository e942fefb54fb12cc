//! Exhaustive nearest-obstacle distance computation.

use ndarray::parallel::prelude::*;
use ndarray::{Array2, ArrayViewMut1, Axis};

use crate::mask::{is_blocked, MaskSource};

use super::DistanceField;

/// How free cells search for their nearest blocked cell.
///
/// Both strategies produce bit-identical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanStrategy {
    /// Rescan and reclassify the whole mask for every free cell.
    Exhaustive,
    /// Classify once, then measure free cells against the blocked-cell list.
    #[default]
    Obstacles,
}

/// Builds a [`DistanceField`] from any [`MaskSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceFieldBuilder {
    strategy: ScanStrategy,
    parallel: bool,
}

impl DistanceFieldBuilder {
    /// Sequential builder using [`ScanStrategy::Obstacles`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strategy: ScanStrategy::Obstacles,
            parallel: false,
        }
    }

    /// Select the scan strategy.
    #[must_use]
    pub const fn strategy(mut self, strategy: ScanStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Compute columns on the rayon thread pool.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Compute the distance field for `mask`.
    pub fn build<M: MaskSource + Sync + ?Sized>(&self, mask: &M) -> DistanceField {
        self.build_with_progress(mask, || {})
    }

    /// Compute the distance field, calling `on_column` once per finished
    /// column.
    pub fn build_with_progress<M, F>(&self, mask: &M, on_column: F) -> DistanceField
    where
        M: MaskSource + Sync + ?Sized,
        F: Fn() + Sync,
    {
        let (width, height) = (mask.width(), mask.height());
        let sentinel = DistanceField::sentinel(width, height);

        let obstacles = match self.strategy {
            ScanStrategy::Exhaustive => None,
            ScanStrategy::Obstacles => {
                let cells = collect_obstacles(mask);
                tracing::debug!("Collected {} blocked cells", cells.len());
                Some(cells)
            }
        };
        let scan = obstacles
            .as_deref()
            .map_or(Scan::Exhaustive, Scan::Obstacles);

        let mut values = Array2::<f64>::zeros((width as usize, height as usize));

        if self.parallel {
            values
                .axis_iter_mut(Axis(0))
                .into_par_iter()
                .enumerate()
                .for_each(|(x, column)| {
                    fill_column(mask, scan, x, column, sentinel);
                    on_column();
                });
        } else {
            for (x, column) in values.axis_iter_mut(Axis(0)).enumerate() {
                fill_column(mask, scan, x, column, sentinel);
                on_column();
            }
        }

        DistanceField::from_array(values)
    }
}

/// Compute the distance field with the default sequential builder.
pub fn build<M: MaskSource + Sync + ?Sized>(mask: &M) -> DistanceField {
    DistanceFieldBuilder::new().build(mask)
}

#[derive(Clone, Copy)]
enum Scan<'a> {
    Exhaustive,
    Obstacles(&'a [(u32, u32)]),
}

fn collect_obstacles<M: MaskSource + ?Sized>(mask: &M) -> Vec<(u32, u32)> {
    let mut cells = Vec::new();
    for u in 0..mask.width() {
        for v in 0..mask.height() {
            if is_blocked(mask, u, v) {
                cells.push((u, v));
            }
        }
    }
    cells
}

#[allow(clippy::cast_possible_truncation)]
fn fill_column<M: MaskSource + ?Sized>(
    mask: &M,
    scan: Scan<'_>,
    x: usize,
    mut column: ArrayViewMut1<'_, f64>,
    sentinel: f64,
) {
    // Safe: x indexes an axis whose length came from a u32 width
    let i = x as u32;
    for (y, value) in column.iter_mut().enumerate() {
        let j = y as u32;
        if is_blocked(mask, i, j) {
            *value = 0.0;
            continue;
        }

        let mut min_dist = sentinel;
        match scan {
            Scan::Obstacles(cells) => {
                for &(u, v) in cells {
                    min_dist = min_dist.min(distance(i, j, u, v));
                }
            }
            Scan::Exhaustive => {
                for u in 0..mask.width() {
                    for v in 0..mask.height() {
                        if !is_blocked(mask, u, v) {
                            continue;
                        }
                        min_dist = min_dist.min(distance(i, j, u, v));
                    }
                }
            }
        }
        *value = min_dist;
    }
}

/// Euclidean distance between two cells in grid units.
///
/// Squared offsets are summed exactly in integers before the root.
#[inline]
#[allow(clippy::cast_precision_loss)]
fn distance(i: u32, j: u32, u: u32, v: u32) -> f64 {
    let dx = i64::from(u) - i64::from(i);
    let dy = i64::from(v) - i64::from(j);
    ((dx * dx + dy * dy) as f64).sqrt()
}
