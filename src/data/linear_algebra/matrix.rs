//! # Upper triangular matrices
//!
//! A square matrix of which only the upper triangle, the diagonal included, is stored. Positions
//! below the diagonal are not zero, they don't exist: reading or writing them is an error.
//!
//! The matrix is a plain value. Cloning copies all rows, assigning replaces both the size and the
//! values of the target, and arithmetic produces a new matrix without touching the operands.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::Iter;

use itertools::Itertools;
use log::{debug, trace};
use num_traits::{One, Zero};

use crate::data::linear_algebra::error::MatrixError;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::validate_size;
use crate::data::linear_algebra::vector::Row;

/// Uses a `Vec` of rows of decreasing length as underlying data structure. Dimensions are fixed at
/// creation, but change on assignment.
///
/// Row `i` has start index `i`, so it holds the `size - i` values of columns `i..size`. Rows can
/// be read, but values are only written through the matrix, so the shape of a row never changes:
///
/// ```compile_fail
/// use triangular::data::linear_algebra::{Row, TriangularMatrix};
///
/// let mut matrix = TriangularMatrix::<i32>::new(3).unwrap();
/// matrix[0] = Row::new(10, 5).unwrap();
/// ```
///
/// ```compile_fail
/// use triangular::data::linear_algebra::{Row, TriangularMatrix};
///
/// let mut matrix = TriangularMatrix::<i32>::new(3).unwrap();
/// matrix.row_mut(0).unwrap().clone_from(&Row::new(10, 5).unwrap());
/// ```
///
/// Single values are written with a `(row, column)` pair instead:
///
/// ```
/// use triangular::data::linear_algebra::TriangularMatrix;
///
/// let mut matrix = TriangularMatrix::<i32>::new(5).unwrap();
/// matrix[(1, 4)] = 3;
/// assert_eq!(matrix[1][4], 3);
/// ```
#[derive(Debug, Eq, PartialEq)]
pub struct TriangularMatrix<T> {
    rows: Vec<Row<T>>,
    size: usize,
}

impl<T: Element> TriangularMatrix<T> {
    /// Create a matrix with all stored values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements in the upper triangle are equal to.
    /// * `size`: Side length of the matrix.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `size` is zero or larger than `MAX_MATRIX_SIZE`.
    pub fn constant(value: T, size: usize) -> Result<Self, MatrixError> {
        validate_size(size)?;

        let rows = (0..size)
            .map(|i| Row::from_parts(vec![value.clone(); size - i], size, i))
            .collect();

        Ok(Self { rows, size })
    }

    /// Create a matrix with all stored values equal to the default value of `T`.
    ///
    /// Fails in the same cases as `TriangularMatrix::constant`.
    pub fn new(size: usize) -> Result<Self, MatrixError>
    where
        T: Default,
    {
        Self::constant(T::default(), size)
    }

    /// Create a matrix of zeros.
    pub fn zeros(size: usize) -> Result<Self, MatrixError>
    where
        T: Zero,
    {
        Self::constant(T::zero(), size)
    }

    /// Create an identity matrix: ones on the diagonal, zeros elsewhere.
    pub fn identity(size: usize) -> Result<Self, MatrixError>
    where
        T: Zero + One,
    {
        let mut matrix = Self::zeros(size)?;
        for (i, row) in matrix.rows.iter_mut().enumerate() {
            row.set(i, T::one())?;
        }

        Ok(matrix)
    }

    /// Create a matrix from the stored values of each row.
    ///
    /// # Arguments
    ///
    /// * `data`: For each row `i`, the values of columns `i..n`, where `n` is the number of rows.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if the number of rows is not a valid size, `SizeMismatch` with the expected
    /// and actual length if a row doesn't have the right number of values.
    pub fn from_rows(data: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let size = data.len();
        validate_size(size)?;
        if let Some((i, row)) = data.iter().enumerate().find(|(i, row)| row.len() != size - i) {
            return Err(MatrixError::SizeMismatch { left: size - i, right: row.len() });
        }

        let rows = data.into_iter()
            .enumerate()
            .map(|(i, values)| Row::from_parts(values, size, i))
            .collect();

        Ok(Self { rows, size })
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of values kept in memory, which is `size * (size + 1) / 2`.
    pub fn nr_stored(&self) -> usize {
        self.size * (self.size + 1) / 2
    }

    /// Get row `i`, which stores columns `i..size`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i` is not smaller than the size.
    pub fn row(&self, i: usize) -> Result<&Row<T>, MatrixError> {
        self.rows.get(i)
            .ok_or(MatrixError::IndexOutOfRange { row: Some(i), column: None, size: self.size })
    }

    /// Iterate over the rows, from the longest to the shortest.
    pub fn rows(&self) -> Iter<'_, Row<T>> {
        self.rows.iter()
    }

    /// Whether (`row`, `column`) lies in the upper triangle of this matrix.
    fn check_index(&self, row: usize, column: usize) -> Result<(), MatrixError> {
        if row <= column && column < self.size {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfRange { row: Some(row), column: Some(column), size: self.size })
        }
    }

    /// Get the value at coordinate (`row`, `column`).
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if either index is not smaller than the size, or if `row > column`.
    pub fn get(&self, row: usize, column: usize) -> Result<&T, MatrixError> {
        self.check_index(row, column)?;

        self.rows[row].get(column).map_err(|error| error.in_row(row))
    }

    /// Get a mutable reference to the value at coordinate (`row`, `column`).
    ///
    /// Fails in the same cases as `TriangularMatrix::get`.
    pub fn get_mut(&mut self, row: usize, column: usize) -> Result<&mut T, MatrixError> {
        self.check_index(row, column)?;

        self.rows[row].get_mut(column).map_err(|error| error.in_row(row))
    }

    /// Set the value at coordinate (`row`, `column`) to `value`.
    ///
    /// Fails in the same cases as `TriangularMatrix::get`, in which case nothing is written.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<(), MatrixError> {
        *self.get_mut(row, column)? = value;
        Ok(())
    }

    /// Iterate over all stored values with their coordinates, row by row.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.rows.iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter_indexed().map(move |(j, value)| (i, j, value)))
    }

    /// Replace the size and all values of this matrix with those of another one.
    ///
    /// The sizes don't need to match; afterwards, this matrix has the size of `other`.
    pub fn assign(&mut self, other: &Self) {
        self.clone_from(other);
    }

    fn check_same_size(&self, other: &Self) -> Result<(), MatrixError> {
        if self.size == other.size {
            Ok(())
        } else {
            trace!("matrices of sizes {} and {} can't be combined", self.size, other.size);
            Err(MatrixError::SizeMismatch { left: self.size, right: other.size })
        }
    }

    /// Combine the rows of two matrices of equal size.
    fn zip_rows<F>(&self, other: &Self, operation: F) -> Result<Self, MatrixError>
    where
        F: FnMut((&Row<T>, &Row<T>)) -> Result<Row<T>, MatrixError>,
    {
        self.check_same_size(other)?;

        let rows = self.rows.iter()
            .zip_eq(other.rows.iter())
            .map(operation)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows, size: self.size })
    }

    /// Elementwise sum of two matrices.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` with both sizes if the sizes differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, MatrixError>
    where
        T: Add<Output = T>,
    {
        self.zip_rows(other, |(left, right)| left.try_add(right))
    }

    /// Elementwise difference of two matrices, failing in the same cases as
    /// `TriangularMatrix::try_add`.
    pub fn try_sub(&self, other: &Self) -> Result<Self, MatrixError>
    where
        T: Sub<Output = T>,
    {
        self.zip_rows(other, |(left, right)| left.try_sub(right))
    }

    /// Multiply every stored value with a scalar.
    pub fn mul_scalar(&self, factor: &T) -> Self
    where
        T: Mul<Output = T>,
    {
        let rows = self.rows.iter().map(|row| row.mul_scalar(factor)).collect();

        Self { rows, size: self.size }
    }
}

impl<T: Clone> Clone for TriangularMatrix<T> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone(), size: self.size }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.size != source.size {
            debug!("assignment changes matrix size from {} to {}", self.size, source.size);
        }

        // Row by row, reusing allocations of rows that are kept
        self.rows.clone_from(&source.rows);
        self.size = source.size;
    }
}

/// # Panics
///
/// When the row doesn't exist, with the message of the `IndexOutOfRange` error.
impl<T: Element> Index<usize> for TriangularMatrix<T> {
    type Output = Row<T>;

    fn index(&self, i: usize) -> &Self::Output {
        match self.row(i) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

/// # Panics
///
/// When the position is not in the upper triangle, with the message of the `IndexOutOfRange`
/// error.
impl<T: Element> Index<(usize, usize)> for TriangularMatrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        match self.get(row, column) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Element> IndexMut<(usize, usize)> for TriangularMatrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        match self.get_mut(row, column) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Element + Add<Output = T>> Add for &TriangularMatrix<T> {
    type Output = Result<TriangularMatrix<T>, MatrixError>;

    fn add(self, other: Self) -> Self::Output {
        self.try_add(other)
    }
}

impl<T: Element + Sub<Output = T>> Sub for &TriangularMatrix<T> {
    type Output = Result<TriangularMatrix<T>, MatrixError>;

    fn sub(self, other: Self) -> Self::Output {
        self.try_sub(other)
    }
}

impl<T: Element> Display for TriangularMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
