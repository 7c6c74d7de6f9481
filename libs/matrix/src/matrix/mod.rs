//! Matrix operations.

pub mod matrix;
pub mod ops;
pub mod rows;
pub mod view;

pub use matrix::Matrix;
pub use rows::{RowMajor, Rows};
pub use view::{MatrixView, MatrixViewMut};
