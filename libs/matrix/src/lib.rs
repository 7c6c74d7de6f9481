//! Dense row-major matrix and column vector algebra over `f64`.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod errors;
pub mod macros;
pub mod matrix;
pub mod validate;
pub mod vector;

pub use errors::MatrixError;
pub use matrix::{Matrix, MatrixView, MatrixViewMut, RowMajor};
pub use validate::Validate;
pub use vector::Vector;
