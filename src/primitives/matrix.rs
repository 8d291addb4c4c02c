//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{LinealError, Result};
use crate::ops::{self, Axis};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, Mul};

/// A rectangular matrix of floating-point values (row-major storage).
///
/// At least one row and one column; all rows have the same length. The
/// shape is validated at construction and immutable afterwards. Every
/// operation returns a new `Matrix`; heavy numeric work is delegated to
/// the stateless kernel in [`crate::ops`].
///
/// # Examples
///
/// ```
/// use lineal::primitives::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
///     .expect("rows are non-empty and equally sized");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` if `rows` is empty, the first row is
    /// empty, or any row's length differs from the first row's length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        if n_rows == 0 {
            return Err(LinealError::invalid_shape("matrix must have at least one row"));
        }
        let n_cols = rows[0].len();
        if n_cols == 0 {
            return Err(LinealError::invalid_shape(
                "matrix must have at least one column",
            ));
        }
        if rows.iter().any(|row| row.len() != n_cols) {
            return Err(LinealError::invalid_shape(
                "all rows must have the same number of columns",
            ));
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Creates a matrix from flat row-major data.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` if either dimension is zero or the data
    /// length doesn't equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LinealError::invalid_shape("matrix must not be empty"));
        }
        if data.len() != rows * cols {
            return Err(LinealError::invalid_shape(format!(
                "data length {} does not match shape {rows}x{cols}",
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col]
    }

    /// Checked row access.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is outside `[0, rows)`.
    pub fn row(&self, index: usize) -> Result<Vector<T>> {
        if index >= self.rows {
            return Err(LinealError::IndexOutOfRange {
                index,
                len: self.rows,
            });
        }
        let start = index * self.cols;
        Ok(Vector::from_raw(self.data[start..start + self.cols].to_vec()))
    }

    /// Returns a column as a Vector.
    ///
    /// # Panics
    ///
    /// Panics if `col_idx` is out of bounds.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector<T> {
        assert!(col_idx < self.cols, "index out of bounds");
        let data = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Vector::from_raw(data)
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f64> {
    /// Creates a matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix must not be empty");
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless `self.cols == other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        let data = ops::mat_mul(&self.data, self.shape(), &other.data, other.shape())?;
        Ok(Self {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Matrix-vector multiplication.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless `self.cols == vec.len()`.
    pub fn matvec(&self, vec: &Vector<f64>) -> Result<Vector<f64>> {
        let data = ops::mat_vec_mul(&self.data, self.shape(), vec.as_slice())?;
        Ok(Vector::from_raw(data))
    }

    /// Multiplies each element by a scalar.
    ///
    /// Also available through `Mul` in both orders: `&m * k` and `k * &m`.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            data: ops::transpose(&self.data, self.shape()),
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Reshapes to a new grid, preserving elements in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` if either target dimension is zero and
    /// `IncompatibleSize` if the element counts differ.
    pub fn reshape(&self, new_rows: usize, new_cols: usize) -> Result<Self> {
        let data = ops::reshape(&self.data, self.shape(), (new_rows, new_cols))?;
        Ok(Self {
            data,
            rows: new_rows,
            cols: new_cols,
        })
    }

    /// Inverse via Gauss-Jordan elimination (no row pivoting).
    ///
    /// A zero on the diagonal at elimination time is reported singular
    /// even when reordering rows would make the matrix invertible; see
    /// [`ops::inverse`] for the exact algorithm.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` if `rows != cols` and `Singular` when a
    /// pivot magnitude falls below [`ops::PIVOT_TOLERANCE`].
    pub fn inverse(&self) -> Result<Self> {
        let data = ops::inverse(&self.data, self.shape())?;
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Arithmetic mean along an axis.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidShape` from the kernel; unreachable for a
    /// constructed matrix, which is never empty.
    pub fn mean(&self, axis: Axis) -> Result<Vector<f64>> {
        let data = ops::mean(&self.data, self.shape(), axis)?;
        Ok(Vector::from_raw(data))
    }

    fn check_shape(&self, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinealError::dimension_mismatch(
                format!("{}x{}", self.rows, self.cols),
                format!("{}x{}", other.rows, other.cols),
            ));
        }
        Ok(())
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &[T] {
        let start = index * self.cols;
        &self.data[start..start + self.cols]
    }
}

impl Mul<f64> for &Matrix<f64> {
    type Output = Matrix<f64>;

    fn mul(self, scalar: f64) -> Matrix<f64> {
        self.mul_scalar(scalar)
    }
}

impl Mul<&Matrix<f64>> for f64 {
    type Output = Matrix<f64>;

    fn mul(self, matrix: &Matrix<f64>) -> Matrix<f64> {
        matrix.mul_scalar(self)
    }
}

impl<T: fmt::Debug> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<&[T]> = self.data.chunks(self.cols).collect();
        write!(f, "Matrix({rows:?})")
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
