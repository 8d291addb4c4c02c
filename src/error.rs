//! Error types for Lineal operations.
//!
//! Every failure is deterministic given the same input and is surfaced
//! directly to the caller as a typed error; nothing is retried or
//! silently recovered.

use std::fmt;

/// Main error type for Lineal operations.
///
/// Provides detailed context about failures including dimension mismatches,
/// singular matrices, out-of-range indices, and degenerate inputs.
///
/// # Examples
///
/// ```
/// use lineal::error::LinealError;
///
/// let err = LinealError::DimensionMismatch {
///     expected: "2x2".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum LinealError {
    /// Construction or reshape produced an impossible shape: empty vector,
    /// empty matrix, ragged rows, or a zero target dimension.
    InvalidShape {
        /// What made the shape invalid
        message: String,
    },

    /// Operand dimensions are incompatible for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Reshape target holds a different number of elements than the source.
    IncompatibleSize {
        /// Element count of the source
        expected: usize,
        /// Element count of the requested shape
        actual: usize,
    },

    /// Index outside the valid range of a vector or matrix row access.
    IndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Number of valid positions
        len: usize,
    },

    /// Multiplication attempted between operand kinds with no defined product.
    UnsupportedOperand {
        /// Kind of the left-hand operand
        lhs: String,
        /// Kind of the right-hand operand
        rhs: String,
    },

    /// Geometric operation on an input with no defined result (zero vector).
    DegenerateInput {
        /// What made the input degenerate
        message: String,
    },

    /// Inversion attempted on a non-square matrix.
    NotSquare {
        /// Row count of the matrix
        rows: usize,
        /// Column count of the matrix
        cols: usize,
    },

    /// Matrix is singular (elimination hit a near-zero pivot).
    Singular {
        /// Pivot value that fell below tolerance
        pivot: f64,
    },
}

impl fmt::Display for LinealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinealError::InvalidShape { message } => {
                write!(f, "Invalid shape: {message}")
            }
            LinealError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            LinealError::IncompatibleSize { expected, actual } => {
                write!(
                    f,
                    "Incompatible size: reshape target has {actual} elements, source has {expected}"
                )
            }
            LinealError::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range (len={len})")
            }
            LinealError::UnsupportedOperand { lhs, rhs } => {
                write!(
                    f,
                    "Unsupported operand kinds for multiplication: {lhs} * {rhs}"
                )
            }
            LinealError::DegenerateInput { message } => {
                write!(f, "Degenerate input: {message}")
            }
            LinealError::NotSquare { rows, cols } => {
                write!(
                    f,
                    "Matrix is {rows}x{cols}, inversion requires a square matrix"
                )
            }
            LinealError::Singular { pivot } => {
                write!(f, "Singular matrix detected: pivot = {pivot}, cannot invert")
            }
        }
    }
}

impl std::error::Error for LinealError {}

impl LinealError {
    /// Create an invalid shape error with descriptive context
    #[must_use]
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape {
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error from two shape descriptions
    #[must_use]
    pub fn dimension_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a degenerate input error with descriptive context
    #[must_use]
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateInput {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, LinealError>;
