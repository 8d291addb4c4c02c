//! Stateless numeric kernel over raw row-major data.
//!
//! Free functions operating on flat `&[f64]` slices plus explicit
//! `(rows, cols)` shapes, with no dependency on the value types in
//! [`crate::primitives`]. Each function enforces the same dimension
//! contracts as the corresponding `Matrix` method, so the kernel is
//! independently testable and reusable over borrowed storage.

use crate::error::{LinealError, Result};

/// Reduction axis for [`mean`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Per-row reduction; result length equals the row count.
    Row,
    /// Per-column reduction; result length equals the column count.
    Column,
}

/// Pivot magnitudes below this are treated as zero during elimination.
pub const PIVOT_TOLERANCE: f64 = 1e-10;

fn check_grid(data: &[f64], (rows, cols): (usize, usize)) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(LinealError::invalid_shape("matrix must not be empty"));
    }
    if data.len() != rows * cols {
        return Err(LinealError::invalid_shape(format!(
            "data length {} does not match shape {rows}x{cols}",
            data.len()
        )));
    }
    Ok(())
}

/// Matrix-vector product `y = A * x` over raw row-major data.
///
/// # Errors
///
/// Returns `InvalidShape` for an empty matrix and `DimensionMismatch`
/// when the column count differs from the vector length.
pub fn mat_vec_mul(a: &[f64], shape: (usize, usize), x: &[f64]) -> Result<Vec<f64>> {
    check_grid(a, shape)?;
    let (_, cols) = shape;
    if cols != x.len() {
        return Err(LinealError::dimension_mismatch(
            format!("vector of length {cols}"),
            format!("length {}", x.len()),
        ));
    }
    Ok(a.chunks_exact(cols)
        .map(|row| row.iter().zip(x).map(|(r, v)| r * v).sum())
        .collect())
}

/// Matrix-matrix product `C = A * B` over raw row-major data.
///
/// # Errors
///
/// Returns `InvalidShape` for an empty operand and `DimensionMismatch`
/// when the inner dimensions differ.
pub fn mat_mul(
    a: &[f64],
    a_shape: (usize, usize),
    b: &[f64],
    b_shape: (usize, usize),
) -> Result<Vec<f64>> {
    check_grid(a, a_shape)?;
    check_grid(b, b_shape)?;
    let (m, k) = a_shape;
    let (b_rows, n) = b_shape;
    if k != b_rows {
        return Err(LinealError::dimension_mismatch(
            format!("right-hand side with {k} rows"),
            format!("{b_rows} rows"),
        ));
    }

    let mut c = vec![0.0; m * n];
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                sum += a[i * k + p] * b[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
    Ok(c)
}

/// Transpose of a row-major grid: element `(j, i)` of the result is
/// element `(i, j)` of the input.
#[must_use]
pub fn transpose(a: &[f64], (rows, cols): (usize, usize)) -> Vec<f64> {
    let mut t = vec![0.0; a.len()];
    for i in 0..rows {
        for j in 0..cols {
            t[j * rows + i] = a[i * cols + j];
        }
    }
    t
}

/// Inverse via Gauss-Jordan elimination with no row pivoting.
///
/// Builds the augmented grid `[A | I]` and for each row scales the
/// diagonal pivot to 1, then eliminates that column from every other
/// row. A pivot with magnitude below [`PIVOT_TOLERANCE`] at the time
/// its row is processed fails as singular; no row swapping is
/// attempted, so a matrix invertible only after a row permutation is
/// still reported singular.
///
/// # Errors
///
/// Returns `InvalidShape` for an empty matrix, `NotSquare` when
/// `rows != cols`, and `Singular` on a near-zero pivot.
pub fn inverse(a: &[f64], shape: (usize, usize)) -> Result<Vec<f64>> {
    check_grid(a, shape)?;
    let (rows, cols) = shape;
    if rows != cols {
        return Err(LinealError::NotSquare { rows, cols });
    }

    let n = rows;
    let w = 2 * n;
    let mut aug = vec![0.0; n * w];
    for i in 0..n {
        aug[i * w..i * w + n].copy_from_slice(&a[i * n..(i + 1) * n]);
        aug[i * w + n + i] = 1.0;
    }

    for i in 0..n {
        let pivot = aug[i * w + i];
        if pivot.abs() < PIVOT_TOLERANCE {
            return Err(LinealError::Singular { pivot });
        }
        for j in 0..w {
            aug[i * w + j] /= pivot;
        }
        for k in 0..n {
            if k == i {
                continue;
            }
            let factor = aug[k * w + i];
            for j in 0..w {
                aug[k * w + j] -= factor * aug[i * w + j];
            }
        }
    }

    // Right half of the augmented grid is the inverse.
    let mut inv = vec![0.0; n * n];
    for i in 0..n {
        inv[i * n..(i + 1) * n].copy_from_slice(&aug[i * w + n..i * w + w]);
    }
    Ok(inv)
}

/// Reshape validation for row-major data.
///
/// Flattening and refilling in row-major order leaves flat storage
/// unchanged, so on success this returns a copy of the data; the value
/// of this function is the shape contract it enforces.
///
/// # Errors
///
/// Returns `InvalidShape` for an empty source or a zero target
/// dimension, and `IncompatibleSize` when the element counts differ.
pub fn reshape(
    a: &[f64],
    shape: (usize, usize),
    new_shape: (usize, usize),
) -> Result<Vec<f64>> {
    check_grid(a, shape)?;
    let (new_rows, new_cols) = new_shape;
    if new_rows == 0 || new_cols == 0 {
        return Err(LinealError::invalid_shape(
            "reshape target dimensions must be positive",
        ));
    }
    if shape.0 * shape.1 != new_rows * new_cols {
        return Err(LinealError::IncompatibleSize {
            expected: shape.0 * shape.1,
            actual: new_rows * new_cols,
        });
    }
    Ok(a.to_vec())
}

/// Arithmetic mean along an axis.
///
/// `Axis::Row` yields one mean per row (length = rows); `Axis::Column`
/// yields one mean per column (length = cols).
///
/// # Errors
///
/// Returns `InvalidShape` for an empty matrix.
pub fn mean(a: &[f64], shape: (usize, usize), axis: Axis) -> Result<Vec<f64>> {
    check_grid(a, shape)?;
    let (rows, cols) = shape;
    let out = match axis {
        Axis::Row => a
            .chunks_exact(cols)
            .map(|row| row.iter().sum::<f64>() / cols as f64)
            .collect(),
        Axis::Column => {
            let mut sums = vec![0.0; cols];
            for row in a.chunks_exact(cols) {
                for (s, v) in sums.iter_mut().zip(row) {
                    *s += v;
                }
            }
            sums.iter().map(|s| s / rows as f64).collect()
        }
    };
    Ok(out)
}

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
