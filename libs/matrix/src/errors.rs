//! Crate errors.

use thiserror::Error;

/// Matrix Error.
///
/// All variants are contract violations or genuinely singular input, an operation that returns one of them has
/// not produced any partial result.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum MatrixError {
    /// The matrix was never allocated.
    #[error("matrix not initialized")]
    Uninitialized,

    /// A row length differs from the first row length.
    #[error("row {row} has {found} columns, expected {expected}")]
    InconsistentShape {
        /// Offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// The operands have incompatible shapes.
    #[error("dimension mismatch: {left:?} vs {right:?}")]
    DimMismatch {
        /// Shape of the left operand.
        left: (usize, usize),
        /// Shape of the right operand.
        right: (usize, usize),
    },

    /// Identity or inversion on a non square matrix.
    #[error("matrix of dimension ({rows},{cols}) is not square")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Index out of bounds.
    #[error("index out of bound")]
    OutOfBounds,

    /// The matrix does not have exactly one column.
    #[error("a vector has exactly one column, got {cols}")]
    NotAVector {
        /// Number of columns found.
        cols: usize,
    },

    /// Non-invertible, singular matrix.
    #[error("singular matrix can't be inverted, no pivot found for column {column}")]
    Singular {
        /// Column for which elimination found no pivot.
        column: usize,
    },
}
