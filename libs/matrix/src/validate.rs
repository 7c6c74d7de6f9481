//! Shape validation.

use crate::{errors::MatrixError, matrix::RowMajor};
use tracing::debug;

/// Shape check for values built outside of the allocating constructors.
pub trait Validate {
    /// Returns an error describing the first violated shape invariant.
    fn validate(&self) -> Result<(), MatrixError>;
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self) -> Result<(), MatrixError> {
        (**self).validate()
    }
}

/// `None` stands for a matrix that was never allocated.
impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), MatrixError> {
        match self {
            Some(inner) => inner.validate(),
            None => Err(MatrixError::Uninitialized),
        }
    }
}

/// Every row must be as long as the first one. A grid without rows is valid.
pub(crate) fn validate_rows<R: RowMajor + ?Sized>(grid: &R) -> Result<(), MatrixError> {
    let Some(first) = grid.row(0) else {
        return Ok(());
    };
    let expected = first.len();
    for (row, line) in grid.rows().enumerate() {
        if line.len() != expected {
            debug!(row, expected, found = line.len(), "rejecting matrix with inconsistent rows");
            return Err(MatrixError::InconsistentShape { row, expected, found: line.len() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{matrix, matrix::Matrix, vector::Vector};

    #[test]
    fn absent_matrix() {
        let absent: Option<Matrix> = None;
        assert_eq!(absent.validate(), Err(MatrixError::Uninitialized));
        let absent: Option<&Vector> = None;
        assert_eq!(absent.validate(), Err(MatrixError::Uninitialized));
    }

    #[test]
    fn present_matrix() {
        let m = matrix![[1, 2], [3, 4]];
        assert_eq!(Some(&m).validate(), Ok(()));
        assert_eq!(Some(matrix![]).validate(), Ok(()));
    }

    #[test]
    fn present_ragged_matrix() {
        let m = matrix![[1, 2], [3]];
        assert_eq!(Some(&m).validate(), Err(MatrixError::InconsistentShape { row: 1, expected: 2, found: 1 }));
    }

    #[test]
    fn empty_first_row() {
        let m = matrix![[], [1]];
        assert_eq!(m.validate(), Err(MatrixError::InconsistentShape { row: 1, expected: 0, found: 1 }));
        assert_eq!(matrix![[], []].validate(), Ok(()));
    }
}
