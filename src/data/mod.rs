//! # Storing of triangular matrices in memory
//!
//! This module provides the data structures used to represent upper triangular matrices and their
//! rows.

pub mod linear_algebra;
