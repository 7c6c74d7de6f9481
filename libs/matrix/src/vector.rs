//! Column vector.

use crate::{
    errors::MatrixError,
    matrix::{rows::format_rows, Matrix, RowMajor},
    validate::Validate,
};
use std::fmt;

/// A matrix with exactly one column.
///
/// Conversions from [`Matrix`] go through [`TryFrom`] and validate the shape, conversions back are free.
#[derive(Clone, Debug, Default)]
pub struct Vector(Matrix);

impl Vector {
    /// Zero vector of `n` elements.
    pub fn new(n: usize) -> Vector {
        Vector(Matrix::new(n, 1))
    }

    /// Vector holding a copy of `row`, element `i` of the row becomes element `i` of the vector.
    pub fn from_row(row: &[f64]) -> Vector {
        Vector(Matrix::from_rows(row.iter().map(|value| vec![*value]).collect()))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.row_count()
    }

    /// Whether the vector has no element.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element `index`.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.row(index).map(|line| line.first().copied().unwrap_or(0.0))
    }

    /// Set element `index`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), MatrixError> {
        self.0.set(index, 0, value)
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.rows().map(|line| line.first().copied().unwrap_or(0.0))
    }

    /// The underlying `n x 1` matrix.
    pub fn as_matrix(&self) -> &Matrix {
        &self.0
    }

    /// Returns the underlying `n x 1` matrix consuming the vector.
    pub fn into_matrix(self) -> Matrix {
        self.0
    }

    /// Sum of the elements, 0 for an empty vector.
    pub fn sum(&self) -> f64 {
        self.iter().fold(0.0, |sum, value| sum + value)
    }

    /// Transposed copy, a `1 x n` matrix.
    pub fn transpose(&self) -> Result<Matrix, MatrixError> {
        self.0.transpose()
    }

    /// Every element multiplied by `factor`.
    pub fn scale(&self, factor: f64) -> Vector {
        Vector(self.0.scale(factor))
    }

    /// Difference of two vectors of the same length.
    pub fn sub_v(&self, other: &Vector) -> Result<Vector, MatrixError> {
        Ok(Vector(self.0.sub(&other.0)?))
    }

    /// Sum of two vectors of the same length.
    pub fn add_v(&self, other: &Vector) -> Result<Vector, MatrixError> {
        Ok(Vector(self.0.add(&other.0)?))
    }
}

impl RowMajor for Vector {
    fn row_count(&self) -> usize {
        self.0.row_count()
    }

    fn row(&self, index: usize) -> Option<&[f64]> {
        self.0.row(index)
    }
}

impl Validate for Vector {
    fn validate(&self) -> Result<(), MatrixError> {
        self.0.validate()?;
        match self.0.dim() {
            (0, _) | (_, 1) => Ok(()),
            (_, cols) => Err(MatrixError::NotAVector { cols }),
        }
    }
}

impl TryFrom<Matrix> for Vector {
    type Error = MatrixError;

    fn try_from(matrix: Matrix) -> Result<Self, Self::Error> {
        let vector = Vector(matrix);
        vector.validate()?;
        Ok(vector)
    }
}

impl From<Vector> for Matrix {
    fn from(vector: Vector) -> Self {
        vector.0
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.0.equal(&other.0)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_rows(self, f)
    }
}
