//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use lineal::prelude::*;
//! ```

pub use crate::error::LinealError;
pub use crate::ops::Axis;
pub use crate::primitives::{Matrix, Operand, Vector};
