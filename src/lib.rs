//! # Upper triangular matrices
//!
//! A square matrix container that only stores the values on and above the diagonal. Matrices are
//! values: they are created with a size, copied, assigned, compared, added and subtracted, and every
//! size or index that doesn't fit is reported as a `MatrixError` before anything is changed.
#![warn(missing_docs)]

pub mod data;
