//! Literal construction macros.

/// Builds a [`Matrix`](crate::matrix::Matrix) from literal rows, every element is cast to `f64`.
///
/// The rows are not validated.
///
/// ```
/// use matrix_lib::{matrix, RowMajor};
///
/// # fn test() -> anyhow::Result<()> {
/// let m = matrix![[1, 3, 3], [1, 4, 3]];
/// assert_eq!(m.dim(), (2, 3));
/// assert_eq!(m.entry(1, 1)?, &4.0);
/// # Ok(())
/// # }
/// # test().unwrap();
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($value:expr),* $(,)?]),* $(,)?) => {
        $crate::matrix::Matrix::from_rows(vec![$(vec![$(($value) as f64),*]),*])
    };
}

/// Builds a [`Vector`](crate::vector::Vector) from literal elements, every element is cast to `f64`.
///
/// ```
/// use matrix_lib::{matrix, vector};
///
/// # fn test() -> anyhow::Result<()> {
/// let v = vector![1, 2, 3];
/// assert_eq!(v.sum(), 6.0);
/// assert_eq!(matrix![[1, 0, 0], [0, 2, 0], [0, 0, 1]].mul_v(&v)?, vector![1, 4, 3]);
/// # Ok(())
/// # }
/// # test().unwrap();
/// ```
#[macro_export]
macro_rules! vector {
    ($($value:expr),* $(,)?) => {
        $crate::vector::Vector::from_row(&[$(($value) as f64),*])
    };
}
