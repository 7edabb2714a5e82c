//! # Rows of a triangular matrix
//!
//! A row has a logical length, but only stores the values from its start index onwards. For row
//! `i` of a matrix of size `n`, the length is `n` and the start index is `i`, so `n - i` values are
//! kept in memory.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::Iter;

use itertools::Itertools;
use log::trace;

use crate::data::linear_algebra::error::MatrixError;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::validate_size;

/// Uses a `Vec` as underlying data structure. Length and start index are fixed at creation.
///
/// Columns are addressed with their logical index, that is, the first stored value lives at
/// column `start_index`.
#[derive(Debug, Eq, PartialEq)]
pub struct Row<T> {
    data: Vec<T>,
    len: usize,
    start_index: usize,
}

impl<T: Element> Row<T> {
    /// Create a row with all stored values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all stored elements of this row are equal to.
    /// * `len`: Logical length of the row.
    /// * `start_index`: First column that is stored.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `len` is zero or too large, `IndexOutOfRange` if `start_index` is not a
    /// column of the row.
    pub fn constant(value: T, len: usize, start_index: usize) -> Result<Self, MatrixError> {
        validate_size(len)?;
        if start_index >= len {
            return Err(MatrixError::IndexOutOfRange { row: None, column: Some(start_index), size: len });
        }

        Ok(Self::from_parts(vec![value; len - start_index], len, start_index))
    }

    /// Create a row with all stored values equal to the default value of `T`.
    ///
    /// See `Row::constant` for the failure cases.
    pub fn new(len: usize, start_index: usize) -> Result<Self, MatrixError>
    where
        T: Default,
    {
        Self::constant(T::default(), len, start_index)
    }

    /// Wrap already validated data.
    pub(crate) fn from_parts(data: Vec<T>, len: usize, start_index: usize) -> Self {
        debug_assert!(start_index < len);
        debug_assert_eq!(data.len(), len - start_index);

        Self { data, len, start_index }
    }

    /// Logical length of this row, including the columns that are not stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this row has length zero, which can't happen for a row that was constructed
    /// successfully.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First column that is stored.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Number of values kept in memory.
    pub fn nr_stored(&self) -> usize {
        self.data.len()
    }

    /// Translate a logical column into a position in the data.
    fn offset(&self, column: usize) -> Result<usize, MatrixError> {
        if column < self.start_index || column >= self.len {
            Err(MatrixError::IndexOutOfRange { row: None, column: Some(column), size: self.len })
        } else {
            Ok(column - self.start_index)
        }
    }

    /// Get the value at a column.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if the column is before the start index or not smaller than the length.
    pub fn get(&self, column: usize) -> Result<&T, MatrixError> {
        self.offset(column).map(|i| &self.data[i])
    }

    /// Get a mutable reference to the value at a column.
    ///
    /// Fails in the same cases as `Row::get`.
    pub fn get_mut(&mut self, column: usize) -> Result<&mut T, MatrixError> {
        let i = self.offset(column)?;
        Ok(&mut self.data[i])
    }

    /// Set the value at a column, failing in the same cases as `Row::get`.
    pub fn set(&mut self, column: usize, value: T) -> Result<(), MatrixError> {
        *self.get_mut(column)? = value;
        Ok(())
    }

    /// Iterate over the stored values.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate over the stored values together with their column.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &T)> {
        (self.start_index..).zip(self.data.iter())
    }

    /// Both rows need to have the same shape for an elementwise operation.
    fn check_same_shape(&self, other: &Self) -> Result<(), MatrixError> {
        if self.len != other.len {
            trace!("rows of lengths {} and {} can't be combined", self.len, other.len);
            Err(MatrixError::SizeMismatch { left: self.len, right: other.len })
        } else if self.start_index != other.start_index {
            trace!("rows starting at {} and {} can't be combined", self.start_index, other.start_index);
            Err(MatrixError::StartIndexMismatch { left: self.start_index, right: other.start_index })
        } else {
            Ok(())
        }
    }

    /// Combine two rows of equal shape value by value.
    fn zip_with<F>(&self, other: &Self, mut operation: F) -> Result<Self, MatrixError>
    where
        F: FnMut(&T, &T) -> T,
    {
        self.check_same_shape(other)?;

        let data = self.data.iter()
            .zip_eq(other.data.iter())
            .map(|(left, right)| operation(left, right))
            .collect();

        Ok(Self::from_parts(data, self.len, self.start_index))
    }

    /// Create a row of the same shape by applying an operation to each stored value.
    fn map<F>(&self, operation: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        Self::from_parts(self.data.iter().map(operation).collect(), self.len, self.start_index)
    }

    /// Elementwise sum with another row.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the lengths differ, `StartIndexMismatch` if the start indices differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, MatrixError>
    where
        T: Add<Output = T>,
    {
        self.zip_with(other, |left, right| left.clone() + right.clone())
    }

    /// Elementwise difference with another row, failing in the same cases as `Row::try_add`.
    pub fn try_sub(&self, other: &Self) -> Result<Self, MatrixError>
    where
        T: Sub<Output = T>,
    {
        self.zip_with(other, |left, right| left.clone() - right.clone())
    }

    /// Add a scalar to every stored value.
    pub fn add_scalar(&self, value: &T) -> Self
    where
        T: Add<Output = T>,
    {
        self.map(|v| v.clone() + value.clone())
    }

    /// Subtract a scalar from every stored value.
    pub fn sub_scalar(&self, value: &T) -> Self
    where
        T: Sub<Output = T>,
    {
        self.map(|v| v.clone() - value.clone())
    }

    /// Multiply every stored value with a scalar.
    pub fn mul_scalar(&self, factor: &T) -> Self
    where
        T: Mul<Output = T>,
    {
        self.map(|v| v.clone() * factor.clone())
    }
}

impl<T: Clone> Clone for Row<T> {
    fn clone(&self) -> Self {
        Self { data: self.data.clone(), len: self.len, start_index: self.start_index }
    }

    fn clone_from(&mut self, source: &Self) {
        // Reuses the allocation of `data` where possible
        self.data.clone_from(&source.data);
        self.len = source.len;
        self.start_index = source.start_index;
    }
}

/// # Panics
///
/// When the column is not stored by this row, with the message of the `IndexOutOfRange` error.
impl<T: Element> Index<usize> for Row<T> {
    type Output = T;

    fn index(&self, column: usize) -> &Self::Output {
        match self.get(column) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Element> IndexMut<usize> for Row<T> {
    fn index_mut(&mut self, column: usize) -> &mut Self::Output {
        match self.get_mut(column) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

/// Columns are separated by tabs, columns that are not stored are left blank.
impl<T: Element> Display for Row<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for _ in 0..self.start_index {
            write!(f, "\t")?;
        }
        write!(f, "{}", self.data.iter().join("\t"))
    }
}
