//! # Linear algebra primitives
//!
//! Upper triangular square matrices, stored row by row. Each row only holds the values on and to
//! the right of the diagonal.
use log::trace;

pub use error::MatrixError;
pub use matrix::TriangularMatrix;
pub use vector::Row;

pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector;

/// Largest side length of a matrix, and largest logical length of a row.
///
/// Valid indices are therefore always smaller than this value.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Check that a side length or row length is in the range `1..=MAX_MATRIX_SIZE`.
pub(crate) fn validate_size(size: usize) -> Result<(), MatrixError> {
    if size == 0 || size > MAX_MATRIX_SIZE {
        trace!("rejecting size {} outside of 1..={}", size, MAX_MATRIX_SIZE);
        Err(MatrixError::InvalidSize { size })
    } else {
        Ok(())
    }
}
