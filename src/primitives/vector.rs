//! Vector type for 1D numeric data.

use crate::error::{LinealError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, Mul};

/// A fixed-length vector of floating-point values.
///
/// Never empty: the length is validated at construction and fixed for
/// the lifetime of the value. Every operation returns a new `Vector`;
/// no operation mutates the receiver.
///
/// # Examples
///
/// ```
/// use lineal::primitives::Vector;
///
/// let v = Vector::from_slice(&[1.0, 2.0, 3.0]).expect("input is non-empty");
/// assert_eq!(v.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Copy> Vector<T> {
    /// Creates a new vector from owned data.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` if `data` is empty.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        if data.is_empty() {
            return Err(LinealError::invalid_shape("vector must not be empty"));
        }
        Ok(Self { data })
    }

    /// Creates a new vector by copying a slice.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` if `data` is empty.
    pub fn from_slice(data: &[T]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    /// Internal constructor for data whose non-emptiness is structurally
    /// guaranteed by the caller.
    pub(crate) fn from_raw(data: Vec<T>) -> Self {
        debug_assert!(!data.is_empty(), "Vector invariant: never empty");
        Self { data }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: construction rejects empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked element access.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is outside `[0, len)`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| LinealError::IndexOutOfRange {
                index,
                len: self.data.len(),
            })
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns a copy of the underlying data.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl Vector<f64> {
    /// Creates a vector of zeros.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        assert!(n > 0, "vector must not be empty");
        Self { data: vec![0.0; n] }
    }

    /// Creates a vector of ones.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn ones(n: usize) -> Self {
        assert!(n > 0, "vector must not be empty");
        Self { data: vec![1.0; n] }
    }

    /// Adds another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_len(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self { data })
    }

    /// Subtracts another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if lengths differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_len(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self { data })
    }

    /// Multiplies each element by a scalar.
    ///
    /// Also available through `Mul` in both orders: `&v * k` and `k * &v`.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
        }
    }

    /// Flips the sign of every element.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            data: self.data.iter().map(|x| -x).collect(),
        }
    }

    /// Dot product: sum of element-wise products.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if lengths differ.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.check_len(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Euclidean norm. The zero vector has norm `0.0`; this never fails.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Scales the vector to unit norm.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` if the norm is exactly zero.
    pub fn normalize(&self) -> Result<Self> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(LinealError::degenerate("cannot normalize the zero vector"));
        }
        Ok(self.mul_scalar(1.0 / norm))
    }

    /// Orthogonal projection of `self` onto `other`:
    /// `(dot(self, other) / dot(other, other)) * other`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if lengths differ, then
    /// `DegenerateInput` if `other` is the zero vector.
    pub fn project_onto(&self, other: &Self) -> Result<Self> {
        self.check_len(other)?;
        let denom = other.dot(other)?;
        if denom == 0.0 {
            return Err(LinealError::degenerate(
                "cannot project onto the zero vector",
            ));
        }
        Ok(other.mul_scalar(self.dot(other)? / denom))
    }

    /// Angle between `self` and `other` in radians:
    /// `acos(dot / (norm(self) * norm(other)))`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if lengths differ, then
    /// `DegenerateInput` if either vector has zero norm.
    pub fn angle_with(&self, other: &Self) -> Result<f64> {
        self.check_len(other)?;
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return Err(LinealError::degenerate(
                "angle with the zero vector is undefined",
            ));
        }
        Ok((self.dot(other)? / denom).acos())
    }

    /// Sum of all elements.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Arithmetic mean of all elements.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.sum() / self.data.len() as f64
    }

    fn check_len(&self, other: &Self) -> Result<()> {
        if self.data.len() != other.data.len() {
            return Err(LinealError::dimension_mismatch(
                format!("length {}", self.data.len()),
                format!("length {}", other.data.len()),
            ));
        }
        Ok(())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl Mul<f64> for &Vector<f64> {
    type Output = Vector<f64>;

    fn mul(self, scalar: f64) -> Vector<f64> {
        self.mul_scalar(scalar)
    }
}

impl Mul<&Vector<f64>> for f64 {
    type Output = Vector<f64>;

    fn mul(self, vector: &Vector<f64>) -> Vector<f64> {
        vector.mul_scalar(self)
    }
}

impl<T: fmt::Debug> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({:?})", self.data)
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
