//! `densela-core`: dense matrix and vector arithmetic over a generic scalar
//! field.
//!
//! Provides row-major [`Matrix`] and [`Vector`] types and an arithmetic engine
//! (products, transpose-fused products, Kronecker products, element-wise and
//! pointwise operations, trace, p-norm normalization) written once against the
//! [`Scalar`] trait and instantiated for `f32`, `f64`, `Complex<f32>` and
//! `Complex<f64>`.
//!
//! # Design
//!
//! - Every operation validates operand shapes before its first write, so a
//!   failed call never leaves a partial result behind.
//! - Operations come in three forms: allocating (`multiply`), into a
//!   caller-supplied buffer (`multiply_into`), and in place (`multiply_in_place`)
//!   for the case where the result buffer is also the left input. Where the
//!   right operand is the destination of a non-commutative operation, the
//!   `_into_right` forms (`multiply_into_right`) cover it.
//! - Storage sizes are checked, so extents whose element count would overflow
//!   fail with [`CoreError::InvalidShape`] instead of wrapping.
//! - Random construction takes any [`ScalarSource`](random::ScalarSource);
//!   the engine never owns a generator.
//!
//! ```
//! use densela_core::prelude::*;
//!
//! let a = Matrix::<f64>::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! let b = Matrix::<f64>::identity(2).unwrap();
//! assert_eq!(a.multiply(&b).unwrap(), a);
//! assert_eq!(a.trace().unwrap(), 5.0);
//! ```

pub mod checked;
pub mod dtype;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod random;
pub mod validate;
pub mod vector;

// Re-export key types at crate root for convenience.
pub use dtype::{Real, Scalar};
pub use error::{CoreError, Result};
pub use matrix::Matrix;
pub use vector::Vector;

/// Items intended for glob-import: `use densela_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{Real, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::matrix::Matrix;
    pub use crate::random::{RandSource, Rng, ScalarSource};
    pub use crate::vector::Vector;
}
