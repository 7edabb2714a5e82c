use triangular::data::linear_algebra::{MAX_MATRIX_SIZE, MatrixError, TriangularMatrix};

use super::filled;

#[test]
fn can_create_matrix_with_positive_length() {
    assert!(TriangularMatrix::<i32>::new(5).is_ok());
}

#[test]
fn cant_create_too_large_matrix() {
    assert_eq!(
        TriangularMatrix::<i32>::new(MAX_MATRIX_SIZE + 1),
        Err(MatrixError::InvalidSize { size: MAX_MATRIX_SIZE + 1 }),
    );
}

#[test]
fn cant_create_matrix_with_zero_length() {
    // Sizes are unsigned, so zero is the only length below one that can be passed
    assert_eq!(TriangularMatrix::<i32>::new(0), Err(MatrixError::InvalidSize { size: 0 }));
}

#[test]
fn copied_matrix_is_equal_to_source_one() {
    let matrix = filled(5, |i, j| i + j);
    let copy = matrix.clone();
    assert_eq!(matrix, copy);
}

#[test]
fn copied_matrix_has_its_own_memory() {
    let mut matrix = filled(5, |i, j| i + j);
    let copy = matrix.clone();
    for i in 0..5 {
        for j in i..5 {
            matrix[(i, j)] = i as i32 - j as i32;
        }
    }

    assert_ne!(matrix, copy);
    assert_eq!(copy, filled(5, |i, j| i + j));
}

#[test]
fn can_get_size() {
    assert_eq!(TriangularMatrix::<i32>::new(5).unwrap().size(), 5);
}

#[test]
fn can_set_and_get_element() {
    let mut matrix = TriangularMatrix::<i32>::new(5).unwrap();
    matrix[(1, 4)] = 3;
    assert_eq!(matrix[1][4], 3);
    assert_eq!(matrix[(1, 4)], 3);
    assert_eq!(matrix.get(1, 4), Ok(&3));
}

#[test]
fn cant_set_element_with_too_large_index() {
    let mut matrix = TriangularMatrix::<i32>::new(5).unwrap();
    assert!(matrix.set(1, MAX_MATRIX_SIZE + 1, 3).is_err());
    assert!(matrix.set(MAX_MATRIX_SIZE + 1, 1, 3).is_err());
    assert!(matrix.set(5, 5, 3).is_err());
    assert_eq!(matrix, TriangularMatrix::new(5).unwrap());
}

#[test]
#[should_panic]
fn panics_when_indexing_with_too_large_index() {
    let mut matrix = TriangularMatrix::<i32>::new(5).unwrap();
    matrix[(1, MAX_MATRIX_SIZE + 1)] = 3;
}

#[test]
fn cant_set_element_below_diagonal() {
    let mut matrix = TriangularMatrix::<i32>::new(5).unwrap();
    assert_eq!(
        matrix.set(4, 1, 3),
        Err(MatrixError::IndexOutOfRange { row: Some(4), column: Some(1), size: 5 }),
    );
}

#[test]
#[should_panic]
fn panics_when_indexing_below_diagonal() {
    let mut matrix = TriangularMatrix::<i32>::new(5).unwrap();
    matrix[(4, 1)] = 3;
}

#[test]
#[should_panic]
fn panics_when_reading_below_diagonal() {
    let matrix = TriangularMatrix::<i32>::new(5).unwrap();
    let _value = matrix[4][1];
}

#[test]
fn cant_address_column_past_size_on_any_row() {
    let matrix = TriangularMatrix::<i32>::new(3).unwrap();
    for i in 0..3 {
        assert_eq!(
            matrix.get(i, 9),
            Err(MatrixError::IndexOutOfRange { row: Some(i), column: Some(9), size: 3 }),
        );
    }
    assert_eq!(
        matrix.get(3, 3),
        Err(MatrixError::IndexOutOfRange { row: Some(3), column: Some(3), size: 3 }),
    );
}

#[test]
fn can_assign_matrix_to_itself() {
    let mut matrix = filled(5, |i, j| i * j);
    matrix = matrix.clone();
    assert_eq!(matrix, filled(5, |i, j| i * j));

    let copy = matrix.clone();
    matrix.assign(&copy);
    assert_eq!(matrix, copy);
}

#[test]
fn can_assign_matrices_of_equal_size() {
    let mut matrix = filled(5, |i, j| i + j);
    let other = filled(5, |i, j| i - j);
    matrix.assign(&other);
    assert_eq!(matrix, other);
}

#[test]
fn assign_operator_changes_matrix_size() {
    let matrix = TriangularMatrix::<i32>::new(5).unwrap();
    let mut other = TriangularMatrix::<i32>::new(7).unwrap();
    other.clone_from(&matrix);
    assert_eq!(other.size(), 5);
}

#[test]
fn can_assign_matrices_of_different_size() {
    let mut matrix = filled(5, |i, j| i + j);
    let other = filled(7, |i, j| i - j);
    matrix.assign(&other);
    assert_eq!(matrix, other);
    assert_eq!(matrix.size(), 7);
    assert_eq!(matrix[6][6], 0);
}

#[test]
fn compare_equal_matrices_return_true() {
    assert_eq!(filled(5, |i, j| i + j), filled(5, |i, j| i + j));
}

#[test]
fn compare_matrix_with_itself_return_true() {
    let matrix = TriangularMatrix::<i32>::new(5).unwrap();
    assert_eq!(matrix, matrix);
}

#[test]
fn matrices_with_different_size_are_not_equal() {
    assert_ne!(TriangularMatrix::<i32>::new(5).unwrap(), TriangularMatrix::<i32>::new(7).unwrap());
}

#[test]
fn can_add_matrices_with_equal_size() {
    let matrix = filled(5, |i, _| i);
    let other = filled(5, |_, j| j);
    assert_eq!(&matrix + &other, Ok(filled(5, |i, j| i + j)));
}

#[test]
fn cant_add_matrices_with_not_equal_size() {
    let matrix = TriangularMatrix::<i32>::new(5).unwrap();
    let other = TriangularMatrix::<i32>::new(7).unwrap();
    assert_eq!(&matrix + &other, Err(MatrixError::SizeMismatch { left: 5, right: 7 }));
}

#[test]
fn can_subtract_matrices_with_equal_size() {
    let matrix = filled(5, |i, _| i);
    let other = filled(5, |_, j| j);
    assert_eq!(&matrix - &other, Ok(filled(5, |i, j| i - j)));
}

#[test]
fn cant_subtract_matrices_with_not_equal_size() {
    let matrix = TriangularMatrix::<i32>::new(5).unwrap();
    let other = TriangularMatrix::<i32>::new(7).unwrap();
    assert!((&matrix - &other).is_err());
    assert!((&other - &matrix).is_err());
}

#[test]
fn errors_can_be_propagated() {
    fn sum_of_differences(
        a: &TriangularMatrix<i32>,
        b: &TriangularMatrix<i32>,
    ) -> Result<TriangularMatrix<i32>, MatrixError> {
        let difference = (a - b)?;
        &difference + &difference
    }

    let a = filled(3, |i, j| i + j);
    let b = filled(3, |i, _| i);
    assert_eq!(sum_of_differences(&a, &b), Ok(filled(3, |_, j| 2 * j)));
    assert!(sum_of_differences(&a, &filled(4, |_, _| 0)).is_err());
}
