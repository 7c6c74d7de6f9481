//! Row access shared by matrices, views and vectors.

use crate::{errors::MatrixError, matrix::Matrix};
use std::fmt;

/// Read access to a row-major grid of `f64`.
///
/// Shapes are derived from the rows, they are never stored. See [`RowMajor::dim`] for the convention used on
/// degenerate grids.
pub trait RowMajor {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Row `index`, `None` past the last row.
    fn row(&self, index: usize) -> Option<&[f64]>;

    /// Iterate over the rows.
    fn rows(&self) -> Rows<'_, Self> {
        Rows { source: self, next: 0 }
    }

    /// Dimension `(rows, cols)`.
    ///
    /// A grid without rows is `(0, 0)`. A grid whose first row is empty reports one column: `[[]]` is `(1, 1)`.
    /// Existing callers rely on this, it is intentional.
    fn dim(&self) -> (usize, usize) {
        match self.row(0) {
            None => (0, 0),
            Some([]) => (self.row_count(), 1),
            Some(first) => (self.row_count(), first.len()),
        }
    }

    /// Whether both grids report the same [`RowMajor::dim`].
    fn dim_match<O: RowMajor + ?Sized>(&self, other: &O) -> bool {
        self.dim() == other.dim()
    }

    /// Exact element-wise equality.
    ///
    /// No tolerance is applied, round both sides first when comparing computed values. An empty row only equals
    /// another empty row.
    fn equal<O: RowMajor + ?Sized>(&self, other: &O) -> bool {
        if !self.dim_match(other) {
            return false;
        }
        let (_, cols) = self.dim();
        self.rows().zip(other.rows()).all(|(left, right)| {
            if left.is_empty() || right.is_empty() {
                return left.is_empty() && right.is_empty();
            }
            (0..cols).all(|col| matches!((left.get(col), right.get(col)), (Some(l), Some(r)) if l == r))
        })
    }

    /// Deep copy into an owned matrix, rows are copied as they are.
    fn to_matrix(&self) -> Matrix {
        Matrix::from_rows(self.rows().map(<[f64]>::to_vec).collect())
    }
}

/// Iterator over the rows of a [`RowMajor`].
pub struct Rows<'a, T: ?Sized> {
    source: &'a T,
    next: usize,
}

impl<'a, T: RowMajor + ?Sized> Iterator for Rows<'a, T> {
    type Item = &'a [f64];

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.source.row(self.next)?;
        self.next = self.next.saturating_add(1);
        Some(row)
    }
}

/// Read `row[col]` where `row` is row `index` of a grid `width` columns wide.
///
/// An empty row reads as zeros.
pub(crate) fn read(row: &[f64], index: usize, col: usize, width: usize) -> Result<f64, MatrixError> {
    if row.is_empty() {
        return Ok(0.0);
    }
    if row.len() != width {
        return Err(MatrixError::InconsistentShape { row: index, expected: width, found: row.len() });
    }
    row.get(col).copied().ok_or(MatrixError::OutOfBounds)
}

/// Copy `block` into `target` with its top left corner at `(row_start, col_start)`.
///
/// Nothing is written unless the whole block fits.
pub(crate) fn write_block<'t, B>(
    target: impl Iterator<Item = &'t mut [f64]>,
    target_dim: (usize, usize),
    block: &B,
    row_start: usize,
    col_start: usize,
) -> Result<(), MatrixError>
where
    B: RowMajor + ?Sized,
{
    let (rows, cols) = target_dim;
    let (block_rows, block_cols) = block.dim();
    let row_end = row_start.checked_add(block_rows).ok_or(MatrixError::OutOfBounds)?;
    let col_end = col_start.checked_add(block_cols).ok_or(MatrixError::OutOfBounds)?;
    if row_end > rows || col_end > cols {
        return Err(MatrixError::OutOfBounds);
    }

    let mut windows = Vec::with_capacity(block_rows);
    for (line, source) in target.skip(row_start).take(block_rows).zip(block.rows()) {
        let window = line.get_mut(col_start..).ok_or(MatrixError::OutOfBounds)?;
        if window.len() < source.len() {
            return Err(MatrixError::OutOfBounds);
        }
        windows.push((window, source));
    }
    for (window, source) in windows {
        window.iter_mut().zip(source).for_each(|(slot, value)| *slot = *value);
    }
    Ok(())
}

/// Human readable rendering: `||` when there are no rows, otherwise the dimension followed by one line per row.
pub(crate) fn format_rows<R: RowMajor + ?Sized>(grid: &R, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if grid.row_count() == 0 {
        return write!(f, "||");
    }
    let (rows, cols) = grid.dim();
    write!(f, "({rows},{cols})")?;
    for line in grid.rows() {
        write!(f, "\n[")?;
        for (col, value) in line.iter().enumerate() {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value:>4}")?;
        }
        write!(f, "]")?;
    }
    Ok(())
}
