pub(crate) use super::*;

fn mat2() -> Matrix<f64> {
    Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("rows are equally sized")
}

#[test]
fn test_from_rows() {
    let m = mat2();
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_from_rows_empty_error() {
    let result = Matrix::<f64>::from_rows(vec![]);
    assert!(matches!(result, Err(LinealError::InvalidShape { .. })));
}

#[test]
fn test_from_rows_empty_first_row_error() {
    let result = Matrix::<f64>::from_rows(vec![vec![]]);
    assert!(matches!(result, Err(LinealError::InvalidShape { .. })));
}

#[test]
fn test_from_rows_ragged_error() {
    let result = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
    assert!(matches!(result, Err(LinealError::InvalidShape { .. })));
}

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.get(1, 2), 6.0);
}

#[test]
fn test_from_vec_length_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]);
    assert!(matches!(result, Err(LinealError::InvalidShape { .. })));
}

#[test]
fn test_from_vec_zero_dimension_error() {
    let result = Matrix::<f64>::from_vec(0, 3, vec![]);
    assert!(matches!(result, Err(LinealError::InvalidShape { .. })));
}

#[test]
fn test_row() {
    let m = mat2();
    let row = m.row(1).expect("index 1 is in range");
    assert_eq!(row.as_slice(), &[3.0, 4.0]);
    assert!(matches!(
        m.row(2),
        Err(LinealError::IndexOutOfRange { index: 2, len: 2 })
    ));
}

#[test]
fn test_index_returns_row_slice() {
    let m = mat2();
    assert_eq!(&m[0], &[1.0, 2.0]);
    assert_eq!(&m[1], &[3.0, 4.0]);
}

#[test]
fn test_column() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let col = m.column(1);
    assert_eq!(col.as_slice(), &[2.0, 5.0]);
}

#[test]
fn test_add() {
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]])
        .expect("rows are equally sized");
    let sum = mat2().add(&b).expect("both matrices are 2x2");
    assert_eq!(sum.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
}

#[test]
fn test_add_dimension_mismatch() {
    let b = Matrix::zeros(3, 2);
    assert!(matches!(
        mat2().add(&b),
        Err(LinealError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_sub_recovers_addend() {
    let a = mat2();
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]])
        .expect("rows are equally sized");
    let back = a
        .add(&b)
        .and_then(|sum| sum.sub(&b))
        .expect("shapes stay 2x2 throughout");
    assert_eq!(back, a);
}

#[test]
fn test_matmul() {
    // [[1,2],[3,4]] * [[1,2,3],[4,5,6]] = [[9,12,15],[19,26,33]]
    let b = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
        .expect("rows are equally sized");
    let c = mat2().matmul(&b).expect("inner dimensions match: 2x2 * 2x3");
    assert_eq!(c.shape(), (2, 3));
    assert_eq!(c.as_slice(), &[9.0, 12.0, 15.0, 19.0, 26.0, 33.0]);
}

#[test]
fn test_matmul_dimension_mismatch() {
    let b = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
        .expect("rows are equally sized");
    assert!(matches!(
        b.matmul(&mat2()),
        Err(LinealError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_matvec() {
    let v = Vector::from_slice(&[1.0, 2.0]).expect("test data is non-empty");
    let result = mat2().matvec(&v).expect("matrix columns match vector length");
    // [1*1+2*2, 3*1+4*2]
    assert_eq!(result.as_slice(), &[5.0, 11.0]);
}

#[test]
fn test_matvec_dimension_mismatch() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0]).expect("test data is non-empty");
    assert!(matches!(
        mat2().matvec(&v),
        Err(LinealError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_mul_scalar_both_orders() {
    let m = mat2();
    let left = &m * 2.0;
    let right = 2.0 * &m;
    assert_eq!(left.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
    assert_eq!(left, right);
}

#[test]
fn test_transpose() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.get(0, 1), 4.0);
    assert_eq!(t.transpose(), m);
}

#[test]
fn test_reshape() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
        .expect("rows are equally sized");
    let r = m.reshape(3, 2).expect("element counts match: 6 = 6");
    assert_eq!(r.shape(), (3, 2));
    assert_eq!(&r[0], &[1.0, 2.0]);
    assert_eq!(&r[1], &[3.0, 4.0]);
    assert_eq!(&r[2], &[5.0, 6.0]);
}

#[test]
fn test_reshape_roundtrip() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let back = m
        .reshape(6, 1)
        .and_then(|r| r.reshape(2, 3))
        .expect("element counts match throughout");
    assert_eq!(back, m);
}

#[test]
fn test_reshape_incompatible_size() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
        .expect("rows are equally sized");
    assert!(matches!(
        m.reshape(2, 2),
        Err(LinealError::IncompatibleSize {
            expected: 6,
            actual: 4
        })
    ));
}

#[test]
fn test_reshape_zero_dimension() {
    assert!(matches!(
        mat2().reshape(0, 4),
        Err(LinealError::InvalidShape { .. })
    ));
}

#[test]
fn test_inverse() {
    // [[1,2],[3,4]]^-1 = [[-2,1],[1.5,-0.5]]
    let inv = mat2().inverse().expect("matrix is invertible");
    let expected = [-2.0, 1.0, 1.5, -0.5];
    for (got, want) in inv.as_slice().iter().zip(expected.iter()) {
        assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
    }
}

#[test]
fn test_inverse_times_original_is_identity() {
    let m = mat2();
    let product = m
        .matmul(&m.inverse().expect("matrix is invertible"))
        .expect("shapes are compatible: 2x2 * 2x2");
    let eye = Matrix::eye(2);
    for (got, want) in product.as_slice().iter().zip(eye.as_slice().iter()) {
        assert!((got - want).abs() < 1e-9);
    }
}

#[test]
fn test_inverse_singular() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]])
        .expect("rows are equally sized");
    assert!(matches!(m.inverse(), Err(LinealError::Singular { .. })));
}

#[test]
fn test_inverse_not_square() {
    let m = Matrix::zeros(2, 3);
    assert!(matches!(
        m.inverse(),
        Err(LinealError::NotSquare { rows: 2, cols: 3 })
    ));
}

#[test]
fn test_mean_rows_and_columns() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
        .expect("rows are equally sized");
    let row_means = m.mean(Axis::Row).expect("matrix is non-empty");
    assert_eq!(row_means.as_slice(), &[2.0, 5.0]);
    let col_means = m.mean(Axis::Column).expect("matrix is non-empty");
    assert_eq!(col_means.as_slice(), &[2.5, 3.5, 4.5]);
}

#[test]
fn test_eye() {
    let m = Matrix::eye(3);
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(m.get(i, j), if i == j { 1.0 } else { 0.0 });
        }
    }
}

#[test]
fn test_display() {
    assert_eq!(mat2().to_string(), "Matrix([[1.0, 2.0], [3.0, 4.0]])");
}
