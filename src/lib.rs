//! Lineal: dense linear algebra value types in pure Rust.
//!
//! Lineal provides fixed-shape [`primitives::Vector`] and
//! [`primitives::Matrix`] value types with arithmetic, geometric, and
//! structural operations, backed by a stateless numeric kernel
//! ([`ops`]) over raw row-major data. All values are immutable after
//! validated construction, all failures are typed
//! ([`error::LinealError`]), and all computation is synchronous and
//! deterministic.
//!
//! # Quick Start
//!
//! ```
//! use lineal::prelude::*;
//!
//! let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
//! let inv = a.inverse()?;
//! let product = a.matmul(&inv)?;
//!
//! // A * A^-1 is the identity within floating-point tolerance.
//! for i in 0..2 {
//!     for j in 0..2 {
//!         let expected = if i == j { 1.0 } else { 0.0 };
//!         assert!((product.get(i, j) - expected).abs() < 1e-9);
//!     }
//! }
//! # Ok::<(), lineal::error::LinealError>(())
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: core Vector and Matrix types plus operand dispatch
//! - [`ops`]: stateless numeric kernel over raw row-major slices
//! - [`error`]: typed error taxonomy and `Result` alias
//!
//! # Scope
//!
//! Dense storage only: no sparse representations, no higher-rank
//! tensors, and no decompositions beyond Gauss-Jordan inversion.

pub mod error;
pub mod ops;
pub mod prelude;
pub mod primitives;
