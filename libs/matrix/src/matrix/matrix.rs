//! Matrix.

use crate::{
    errors::MatrixError,
    matrix::rows::{format_rows, write_block, RowMajor},
    validate::{validate_rows, Validate},
};
use std::fmt;

/// Dense row-major matrix of `f64`.
///
/// Rows are stored separately and are not required to agree on their length: a matrix built from literal rows
/// is only known to be rectangular once [`Validate::validate`] succeeded. Operations reading a row of the wrong
/// length fail with [`MatrixError::InconsistentShape`].
#[derive(Clone, Debug, Default)]
pub struct Matrix {
    /// Rows.
    pub(crate) rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// Zero matrix of `nrows` rows by `ncols` columns.
    pub fn new(nrows: usize, ncols: usize) -> Matrix {
        Matrix { rows: vec![vec![0.0; ncols]; nrows] }
    }

    /// Matrix from literal rows.
    ///
    /// The rows are taken as they are, call [`Validate::validate`] before trusting the shape.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix { rows }
    }

    /// Identity matrix of size `n`.
    pub fn eye(n: usize) -> Matrix {
        let mut m = Matrix::new(n, n);
        for (i, line) in m.rows.iter_mut().enumerate() {
            if let Some(value) = line.get_mut(i) {
                *value = 1.0;
            }
        }
        m
    }

    /// Identity matrix with the dimension of this one, the values of this matrix are not used.
    pub fn identity(&self) -> Result<Matrix, MatrixError> {
        let (rows, cols) = self.dim();
        if rows != cols {
            return Err(MatrixError::NotSquare { rows, cols });
        }
        Ok(Matrix::eye(rows))
    }

    /// Returns the rows consuming the matrix.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }

    /// Get the matrix entry `M[row,col]`.
    pub fn entry(&self, row: usize, col: usize) -> Result<&f64, MatrixError> {
        self.rows.get(row).and_then(|line| line.get(col)).ok_or(MatrixError::OutOfBounds)
    }

    /// Get the matrix entry `M[row,col]`.
    pub fn entry_mut(&mut self, row: usize, col: usize) -> Result<&mut f64, MatrixError> {
        self.rows.get_mut(row).and_then(|line| line.get_mut(col)).ok_or(MatrixError::OutOfBounds)
    }

    /// Set the matrix entry `M[row,col]`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        *self.entry_mut(row, col)? = value;
        Ok(())
    }

    /// Copy of this matrix with `extra_rows` more rows and `extra_cols` more columns, all set to 0.
    ///
    /// Rows are copied into the top left block up to the width reported by [`RowMajor::dim`]. `extend(0, 0)` is
    /// an independent copy.
    pub fn extend(&self, extra_rows: usize, extra_cols: usize) -> Matrix {
        let (rows, cols) = self.dim();
        let mut out = Matrix::new(rows.saturating_add(extra_rows), cols.saturating_add(extra_cols));
        for (line, out_line) in self.rows.iter().zip(out.rows.iter_mut()) {
            out_line.iter_mut().zip(line.iter().take(cols)).for_each(|(slot, value)| *slot = *value);
        }
        out
    }

    /// Same as [`Matrix::extend`], an absent source yields a zero matrix of the extra size.
    pub fn extended(source: Option<&Matrix>, extra_rows: usize, extra_cols: usize) -> Matrix {
        match source {
            Some(matrix) => matrix.extend(extra_rows, extra_cols),
            None => Matrix::new(extra_rows, extra_cols),
        }
    }

    /// Independent copy, never aliases this matrix.
    pub fn copy(&self) -> Matrix {
        self.extend(0, 0)
    }

    /// Copy `block` into this matrix with its top left corner at `(row_start, col_start)`.
    ///
    /// Fails with [`MatrixError::OutOfBounds`] when the block overflows this matrix, in which case nothing is
    /// written. Returns this matrix so calls can be chained.
    pub fn set_sub_matrix<B: RowMajor + ?Sized>(
        &mut self,
        block: &B,
        row_start: usize,
        col_start: usize,
    ) -> Result<&mut Self, MatrixError> {
        let dim = self.dim();
        write_block(self.rows.iter_mut().map(Vec::as_mut_slice), dim, block, row_start, col_start)?;
        Ok(self)
    }
}

impl RowMajor for Matrix {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }
}

impl Validate for Matrix {
    fn validate(&self) -> Result<(), MatrixError> {
        validate_rows(self)
    }
}

impl From<Vec<Vec<f64>>> for Matrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Matrix::from_rows(rows)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_rows(self, f)
    }
}
