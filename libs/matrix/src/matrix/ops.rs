//! Matrix Operations

use crate::{
    errors::MatrixError,
    matrix::{
        rows::{read, RowMajor},
        Matrix,
    },
    validate::Validate,
    vector::Vector,
};
use std::ops::{Add, Mul, Sub};
use tracing::{debug, trace};

impl Matrix {
    /// Element-wise combination of two matrices of the same dimension, empty rows of `self` are left at zero.
    fn zip_with(&self, other: &Matrix, op: impl Fn(f64, f64) -> f64) -> Result<Matrix, MatrixError> {
        if !self.dim_match(other) {
            return Err(MatrixError::DimMismatch { left: self.dim(), right: other.dim() });
        }
        let (nrows, ncols) = self.dim();
        let mut out = Matrix::new(nrows, ncols);
        for (i, out_line) in out.rows.iter_mut().enumerate() {
            let line = self.row(i).unwrap_or_default();
            if line.is_empty() {
                continue;
            }
            let other_line = other.row(i).unwrap_or_default();
            for (j, slot) in out_line.iter_mut().enumerate() {
                *slot = op(read(line, i, j, ncols)?, read(other_line, i, j, ncols)?);
            }
        }
        Ok(out)
    }

    /// Sum of two matrices of the same dimension.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, |left, right| left + right)
    }

    /// Difference of two matrices of the same dimension.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, |left, right| left - right)
    }

    /// Naive matrix multiplication, A: MxK * B: KxN -> C: MxN, O(KMN).
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        let (nrows, inner) = self.dim();
        let (other_rows, ncols) = other.dim();
        if inner != other_rows {
            return Err(MatrixError::DimMismatch { left: self.dim(), right: other.dim() });
        }
        let mut out = Matrix::new(nrows, ncols);
        for (i, out_line) in out.rows.iter_mut().enumerate() {
            let line = self.row(i).unwrap_or_default();
            if line.is_empty() {
                continue;
            }
            for (j, slot) in out_line.iter_mut().enumerate() {
                let mut sum = 0.0;
                for (k, right) in other.rows().enumerate() {
                    sum += read(line, i, k, inner)? * read(right, k, j, ncols)?;
                }
                *slot = sum;
            }
        }
        Ok(out)
    }

    /// Product with a column vector.
    pub fn mul_v(&self, vector: &Vector) -> Result<Vector, MatrixError> {
        Vector::try_from(self.mul(vector.as_matrix())?)
    }

    /// Every element multiplied by `factor`.
    ///
    /// Empty rows become zero rows, the other rows keep their length.
    pub fn scale(&self, factor: f64) -> Matrix {
        let (_, ncols) = self.dim();
        let rows = self
            .rows
            .iter()
            .map(|line| {
                if line.is_empty() {
                    vec![0.0; ncols]
                } else {
                    line.iter().map(|value| value * factor).collect()
                }
            })
            .collect();
        Matrix { rows }
    }

    /// Transposed copy, `T[j][i] = M[i][j]`.
    pub fn transpose(&self) -> Result<Matrix, MatrixError> {
        let (nrows, ncols) = self.dim();
        let mut out = Matrix::new(ncols, nrows);
        for (i, line) in self.rows.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            for (j, out_line) in out.rows.iter_mut().enumerate() {
                let slot = out_line.get_mut(i).ok_or(MatrixError::OutOfBounds)?;
                *slot = read(line, i, j, ncols)?;
            }
        }
        Ok(out)
    }

    /// Multiplies row `row` by `factor` in place.
    pub fn scale_row(&mut self, row: usize, factor: f64) -> Result<(), MatrixError> {
        let line = self.rows.get_mut(row).ok_or(MatrixError::OutOfBounds)?;
        line.iter_mut().for_each(|value| *value *= factor);
        Ok(())
    }

    /// Adds row `source` multiplied by `factor` to row `target` in place.
    ///
    /// Rows of different lengths are combined up to the shorter one.
    pub fn add_scaled_row(&mut self, target: usize, source: usize, factor: f64) -> Result<(), MatrixError> {
        if target >= self.rows.len() || source >= self.rows.len() {
            return Err(MatrixError::OutOfBounds);
        }
        if target == source {
            let line = self.rows.get_mut(target).ok_or(MatrixError::OutOfBounds)?;
            line.iter_mut().for_each(|value| *value += *value * factor);
            return Ok(());
        }
        let (low, high) = self.rows.split_at_mut(target.max(source));
        let (target_line, source_line) =
            if target < source { (low.get_mut(target), high.first()) } else { (high.first_mut(), low.get(source)) };
        let (Some(target_line), Some(source_line)) = (target_line, source_line) else {
            return Err(MatrixError::OutOfBounds);
        };
        for (value, source_value) in target_line.iter_mut().zip(source_line) {
            *value += source_value * factor;
        }
        Ok(())
    }

    /// Inverse of the matrix using Gauss-Jordan elimination with partial pivoting, O(N^3).
    ///
    /// The elimination runs on `[A | I]`. For every column the pivot is the first row, at or below the diagonal,
    /// whose absolute value beats every row scanned before it. An exactly zero pivot makes the matrix singular.
    /// Empty rows read as zeros here, so `[[]]` is singular.
    ///
    /// ```
    /// use matrix_lib::{matrix, Matrix};
    ///
    /// # fn test() -> anyhow::Result<()> {
    /// let m = matrix![[1, 3, 3], [1, 4, 3], [1, 3, 4]];
    /// let inverse = m.inverse()?;
    /// assert_eq!(inverse, matrix![[7, -3, -3], [-1, 1, 0], [-1, 0, 1]]);
    /// assert_eq!(inverse.mul(&m)?, Matrix::eye(3));
    /// # Ok(())
    /// # }
    /// # test().unwrap();
    /// ```
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        self.validate()?;
        let (nrows, ncols) = self.dim();
        if nrows != ncols {
            return Err(MatrixError::NotSquare { rows: nrows, cols: ncols });
        }
        let n = nrows;
        let mut augmented = self.extend(0, n);
        augmented.set_sub_matrix(&Matrix::eye(n), 0, n)?;

        for i in 0..n {
            let mut pivot_row = i;
            for k in i..n {
                if augmented.entry(k, i)?.abs() > augmented.entry(pivot_row, i)?.abs() {
                    pivot_row = k;
                }
            }
            if pivot_row != i {
                trace!(column = i, from = pivot_row, "swapping pivot row");
                augmented.rows.swap(i, pivot_row);
            }

            let pivot = *augmented.entry(i, i)?;
            if pivot == 0.0 {
                debug!(column = i, "no pivot found, matrix is singular");
                return Err(MatrixError::Singular { column: i });
            }
            augmented.scale_row(i, 1.0 / pivot)?;

            for k in (0..n).filter(|k| *k != i) {
                let factor = *augmented.entry(k, i)?;
                augmented.add_scaled_row(k, i, -factor)?;
            }
        }
        Ok(augmented.sub_matrix(0, n, n, n)?.to_matrix())
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn add(self, other: &Matrix) -> Result<Matrix, MatrixError> {
        Matrix::add(self, other)
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn sub(self, other: &Matrix) -> Result<Matrix, MatrixError> {
        Matrix::sub(self, other)
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, other: &Matrix) -> Result<Matrix, MatrixError> {
        Matrix::mul(self, other)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, factor: f64) -> Matrix {
        self.scale(factor)
    }
}
