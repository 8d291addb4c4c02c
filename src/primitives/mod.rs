//! Core value types (Vector, Matrix) and operand dispatch.
//!
//! Both types are validated at construction and immutable afterwards;
//! every operation allocates a fresh result. Numeric heavy lifting lives
//! in [`crate::ops`].

mod matrix;
mod operand;
mod vector;

pub use matrix::Matrix;
pub use operand::Operand;
pub use vector::Vector;
