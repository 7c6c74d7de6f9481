//! Sub-matrix views.
//!
//! A view is a window into the storage of its parent matrix: each of its rows is a slice of a parent row starting
//! at the window column. A [`MatrixViewMut`] writes straight into the parent, the borrow it holds keeps the parent
//! from being read or moved while the view is alive. Use [`RowMajor::to_matrix`] to detach a view.

use crate::{
    errors::MatrixError,
    matrix::{
        rows::{format_rows, write_block, RowMajor},
        Matrix,
    },
};
use std::{fmt, ops::Range};

/// Read-only window into a matrix.
#[derive(Clone, Debug)]
pub struct MatrixView<'a> {
    rows: Vec<&'a [f64]>,
}

/// Writable window into a matrix, writes are visible in the parent.
#[derive(Debug)]
pub struct MatrixViewMut<'a> {
    rows: Vec<&'a mut [f64]>,
}

/// Column range of the window, checked against the parent.
fn window(
    parent: &Matrix,
    row_start: usize,
    col_start: usize,
    row_count: usize,
    col_count: usize,
) -> Result<Range<usize>, MatrixError> {
    let row_end = row_start.checked_add(row_count).ok_or(MatrixError::OutOfBounds)?;
    let col_end = col_start.checked_add(col_count).ok_or(MatrixError::OutOfBounds)?;
    let width = parent.row(0).map_or(0, <[f64]>::len);
    if row_end > parent.row_count() || col_end > width {
        return Err(MatrixError::OutOfBounds);
    }
    Ok(col_start..col_end)
}

impl Matrix {
    /// Window of `row_count` rows by `col_count` columns starting at `(row_start, col_start)`.
    ///
    /// The view aliases this matrix, it does not copy.
    pub fn sub_matrix(
        &self,
        row_start: usize,
        col_start: usize,
        row_count: usize,
        col_count: usize,
    ) -> Result<MatrixView<'_>, MatrixError> {
        let cols = window(self, row_start, col_start, row_count, col_count)?;
        let rows: Vec<&[f64]> = self
            .rows
            .iter()
            .skip(row_start)
            .take(row_count)
            .map(|line| line.get(cols.clone()).ok_or(MatrixError::OutOfBounds))
            .collect::<Result<_, _>>()?;
        Ok(MatrixView { rows })
    }

    /// Writable window of `row_count` rows by `col_count` columns starting at `(row_start, col_start)`.
    ///
    /// Writes through the view mutate this matrix.
    pub fn sub_matrix_mut(
        &mut self,
        row_start: usize,
        col_start: usize,
        row_count: usize,
        col_count: usize,
    ) -> Result<MatrixViewMut<'_>, MatrixError> {
        let cols = window(self, row_start, col_start, row_count, col_count)?;
        let rows: Vec<&mut [f64]> = self
            .rows
            .iter_mut()
            .skip(row_start)
            .take(row_count)
            .map(|line| line.get_mut(cols.clone()).ok_or(MatrixError::OutOfBounds))
            .collect::<Result<_, _>>()?;
        Ok(MatrixViewMut { rows })
    }
}

impl<'a> MatrixView<'a> {
    /// Get the view entry `V[row,col]`.
    pub fn entry(&self, row: usize, col: usize) -> Result<&'a f64, MatrixError> {
        self.rows.get(row).copied().and_then(|line| line.get(col)).ok_or(MatrixError::OutOfBounds)
    }
}

impl MatrixViewMut<'_> {
    /// Get the view entry `V[row,col]`.
    pub fn entry(&self, row: usize, col: usize) -> Result<&f64, MatrixError> {
        self.rows.get(row).and_then(|line| line.get(col)).ok_or(MatrixError::OutOfBounds)
    }

    /// Get the view entry `V[row,col]`, writes land in the parent.
    pub fn entry_mut(&mut self, row: usize, col: usize) -> Result<&mut f64, MatrixError> {
        self.rows.get_mut(row).and_then(|line| line.get_mut(col)).ok_or(MatrixError::OutOfBounds)
    }

    /// Set the view entry `V[row,col]`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        *self.entry_mut(row, col)? = value;
        Ok(())
    }

    /// Set every entry of the window to `value`.
    pub fn fill(&mut self, value: f64) {
        self.rows.iter_mut().for_each(|line| line.fill(value));
    }

    /// Copy `block` into the window at `(row_start, col_start)`, see [`Matrix::set_sub_matrix`].
    pub fn set_sub_matrix<B: RowMajor + ?Sized>(
        &mut self,
        block: &B,
        row_start: usize,
        col_start: usize,
    ) -> Result<&mut Self, MatrixError> {
        let dim = self.dim();
        write_block(self.rows.iter_mut().map(|line| &mut **line), dim, block, row_start, col_start)?;
        Ok(self)
    }
}

impl RowMajor for MatrixView<'_> {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).copied()
    }
}

impl RowMajor for MatrixViewMut<'_> {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(|line| &**line)
    }
}

impl fmt::Display for MatrixView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_rows(self, f)
    }
}

impl fmt::Display for MatrixViewMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_rows(self, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::matrix;
    use rstest::rstest;

    fn parent() -> Matrix {
        matrix![[1, 2, 42, 21], [12, 52, 32, 21], [3, 22, 22, 1], [4, 23, 12, 1]]
    }

    #[rstest]
    #[case((0, 0, 1, 1), matrix![[1]])]
    #[case((0, 0, 2, 2), matrix![[1, 2], [12, 52]])]
    #[case((0, 1, 2, 2), matrix![[2, 42], [52, 32]])]
    #[case((1, 0, 3, 2), matrix![[12, 52], [3, 22], [4, 23]])]
    #[case((1, 1, 3, 3), matrix![[52, 32, 21], [22, 22, 1], [23, 12, 1]])]
    #[case((4, 4, 0, 0), matrix![])]
    fn sub_matrix(
        #[case] window: (usize, usize, usize, usize),
        #[case] expected: Matrix,
    ) -> Result<(), MatrixError> {
        let parent = parent();
        let (row, col, rows, cols) = window;
        let view = parent.sub_matrix(row, col, rows, cols)?;
        assert!(view.equal(&expected), "unexpected sub matrix at ({row},{col}) of size ({rows},{cols})\n{view}");
        Ok(())
    }

    #[rstest]
    #[case((5, 0, 0, 0))]
    #[case((0, 3, 1, 2))]
    #[case((2, 0, 3, 1))]
    #[case((usize::MAX, 0, 2, 1))]
    #[case((0, 1, 1, usize::MAX))]
    fn sub_matrix_out_of_bounds(#[case] window: (usize, usize, usize, usize)) {
        let mut parent = parent();
        let (row, col, rows, cols) = window;
        assert_eq!(parent.sub_matrix(row, col, rows, cols).err(), Some(MatrixError::OutOfBounds));
        assert_eq!(parent.sub_matrix_mut(row, col, rows, cols).err(), Some(MatrixError::OutOfBounds));
    }

    #[test]
    fn sub_matrix_of_empty() {
        let empty = matrix![];
        assert_eq!(empty.sub_matrix(0, 0, 0, 0).map(|view| view.dim()), Ok((0, 0)));
        assert_eq!(empty.sub_matrix(0, 0, 0, 1).err(), Some(MatrixError::OutOfBounds));
    }

    #[test]
    fn writes_reach_parent() -> Result<(), MatrixError> {
        let mut parent = parent();
        let mut view = parent.sub_matrix_mut(1, 1, 2, 2)?;
        view.set(0, 0, -1.0)?;
        view.set_sub_matrix(&matrix![[7, 8]], 1, 0)?;
        assert_eq!(view.entry(1, 1), Ok(&8.0));
        assert_eq!(parent, matrix![[1, 2, 42, 21], [12, -1, 32, 21], [3, 7, 8, 1], [4, 23, 12, 1]]);
        Ok(())
    }

    #[test]
    fn fill_reaches_parent() -> Result<(), MatrixError> {
        let mut parent = Matrix::new(3, 4);
        parent.sub_matrix_mut(0, 2, 3, 2)?.fill(1.0);
        assert_eq!(parent, matrix![[0, 0, 1, 1], [0, 0, 1, 1], [0, 0, 1, 1]]);
        Ok(())
    }

    #[test]
    fn view_overflow() -> Result<(), MatrixError> {
        let mut parent = Matrix::new(3, 3);
        let mut view = parent.sub_matrix_mut(1, 1, 2, 2)?;
        assert_eq!(view.set_sub_matrix(&Matrix::eye(2), 1, 0).err(), Some(MatrixError::OutOfBounds));
        assert_eq!(view.set(2, 0, 1.0), Err(MatrixError::OutOfBounds));
        assert_eq!(parent, Matrix::new(3, 3));
        Ok(())
    }

    #[test]
    fn detached_copy() -> Result<(), MatrixError> {
        let mut parent = parent();
        let copy = parent.sub_matrix(0, 0, 1, 2)?.to_matrix();
        parent.set(0, 0, 100.0)?;
        assert_eq!(copy, matrix![[1, 2]]);
        Ok(())
    }
}
