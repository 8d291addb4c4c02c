//! Dynamic multiplication over tagged operands.
//!
//! Multiplication in this library is heterogeneous: a matrix combines
//! with a scalar, a vector, or another matrix, each yielding a different
//! result kind. [`Operand`] makes that dispatch a closed enum instead of
//! runtime type inspection; kind pairs with no defined product fail with
//! a typed error rather than being silently accepted.

use super::{Matrix, Vector};
use crate::error::{LinealError, Result};
use serde::{Deserialize, Serialize};

/// A multiplication operand: scalar, vector, or matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// A real scalar.
    Scalar(f64),
    /// A vector value.
    Vector(Vector<f64>),
    /// A matrix value.
    Matrix(Matrix<f64>),
}

impl Operand {
    /// Name of this operand's kind, used in error context.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "scalar",
            Operand::Vector(_) => "vector",
            Operand::Matrix(_) => "matrix",
        }
    }

    /// Multiplies two operands, dispatching on their kinds.
    ///
    /// Supported products: scalar x scalar, scalar x vector (both
    /// orders), scalar x matrix (both orders), matrix x vector, and
    /// matrix x matrix.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperand` for any other kind pair (vector x
    /// vector, vector x matrix) and propagates `DimensionMismatch` from
    /// the underlying product.
    pub fn mul(&self, rhs: &Operand) -> Result<Operand> {
        match (self, rhs) {
            (Operand::Scalar(a), Operand::Scalar(b)) => Ok(Operand::Scalar(a * b)),
            (Operand::Scalar(k), Operand::Vector(v)) | (Operand::Vector(v), Operand::Scalar(k)) => {
                Ok(Operand::Vector(v.mul_scalar(*k)))
            }
            (Operand::Scalar(k), Operand::Matrix(m)) | (Operand::Matrix(m), Operand::Scalar(k)) => {
                Ok(Operand::Matrix(m.mul_scalar(*k)))
            }
            (Operand::Matrix(m), Operand::Vector(v)) => Ok(Operand::Vector(m.matvec(v)?)),
            (Operand::Matrix(a), Operand::Matrix(b)) => Ok(Operand::Matrix(a.matmul(b)?)),
            _ => Err(LinealError::UnsupportedOperand {
                lhs: self.kind().to_string(),
                rhs: rhs.kind().to_string(),
            }),
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<Vector<f64>> for Operand {
    fn from(value: Vector<f64>) -> Self {
        Operand::Vector(value)
    }
}

impl From<Matrix<f64>> for Operand {
    fn from(value: Matrix<f64>) -> Self {
        Operand::Matrix(value)
    }
}
