//! # Error reporting for triangular data structures
//!
//! All checks happen before any value is written, so an operation that returns one of these
//! errors has left its operands unchanged.
use std::error::Error;
use std::fmt;

use crate::data::linear_algebra::MAX_MATRIX_SIZE;

/// A `MatrixError` is created when a size or an index does not fit the shape of a matrix or row.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MatrixError {
    /// A matrix side length or row length is zero or larger than `MAX_MATRIX_SIZE`.
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// An element outside of the stored upper triangle was addressed.
    ///
    /// This includes positions below the diagonal, so `row > column`. The `row` is absent when the
    /// error originates from a bare `Row`; the `column` is absent when a whole row was requested.
    IndexOutOfRange {
        #[allow(missing_docs)]
        row: Option<usize>,
        #[allow(missing_docs)]
        column: Option<usize>,
        /// Side length of the matrix, or logical length of the row.
        size: usize,
    },
    /// Two operands of an elementwise operation differ in size.
    ///
    /// Also used when the rows passed to `TriangularMatrix::from_rows` don't have the expected
    /// lengths, in which case `left` is the expected and `right` the actual length.
    SizeMismatch {
        #[allow(missing_docs)]
        left: usize,
        #[allow(missing_docs)]
        right: usize,
    },
    /// Two rows of equal length don't start at the same column.
    StartIndexMismatch {
        #[allow(missing_docs)]
        left: usize,
        #[allow(missing_docs)]
        right: usize,
    },
}

impl MatrixError {
    /// Attach the row of a matrix to an index error raised by one of its rows.
    pub(crate) fn in_row(self, row: usize) -> Self {
        match self {
            MatrixError::IndexOutOfRange { row: None, column, size } => {
                MatrixError::IndexOutOfRange { row: Some(row), column, size }
            },
            other => other,
        }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::InvalidSize { size } => write!(
                f, "InvalidSize: {} is not in the range 1..={}", size, MAX_MATRIX_SIZE,
            ),
            MatrixError::IndexOutOfRange { row: Some(row), column: Some(column), size } => write!(
                f, "IndexOutOfRange: ({}, {}) is not in the upper triangle of a matrix of size {}",
                row, column, size,
            ),
            MatrixError::IndexOutOfRange { row: Some(row), column: None, size } => write!(
                f, "IndexOutOfRange: row {} does not exist in a matrix of size {}", row, size,
            ),
            MatrixError::IndexOutOfRange { row: None, column: Some(column), size } => write!(
                f, "IndexOutOfRange: column {} is not stored in a row of length {}", column, size,
            ),
            MatrixError::IndexOutOfRange { row: None, column: None, size } => write!(
                f, "IndexOutOfRange: no index given for size {}", size,
            ),
            MatrixError::SizeMismatch { left, right } => write!(
                f, "SizeMismatch: sizes {} and {} differ", left, right,
            ),
            MatrixError::StartIndexMismatch { left, right } => write!(
                f, "StartIndexMismatch: rows start at columns {} and {}", left, right,
            ),
        }
    }
}

impl Error for MatrixError {}
