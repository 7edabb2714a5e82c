//! # Traits for elements of triangular data structures
//!
//! Rows and matrices need their elements to be comparable, clonable and printable. Arithmetic is
//! required per operation through the bounds of `std::ops`, so that containers of e.g. exact
//! rationals can be built and compared without being added.
use std::fmt::{Debug, Display};

/// Element of a `Row` or `TriangularMatrix` type.
///
/// This is an alias for the traits that are needed to derive a few practical traits for the
/// aforementioned types. Automatically implemented for all types satisfying the trait's bounds.
pub trait Element:
    PartialEq +
    Clone +
    Display +
    Debug
{}
impl<T: PartialEq + Clone + Display + Debug> Element for T {}
