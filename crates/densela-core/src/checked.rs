//! Entry points for operands that may be missing.
//!
//! Callers that hold `Option<&Matrix<T>>` operands (deserialized requests,
//! lazily built caches) go through these functions instead of the methods on
//! [`Matrix`]. Every operand is checked for presence first, and a missing one
//! fails with [`CoreError::NullArgument`](crate::CoreError::NullArgument)
//! before any shape check runs. Present operands are then handed to the
//! matching engine method unchanged.
//!
//! ```
//! use densela_core::{checked, CoreError, Matrix};
//!
//! let m = Matrix::<f64>::identity(2).unwrap();
//! let err = checked::add(Some(&m), None).unwrap_err();
//! assert!(matches!(err, CoreError::NullArgument { operand: "right" }));
//! ```

use crate::Scalar;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::validate::{require, require_mut};
use crate::vector::Vector;

/// `left + right`.
pub fn add<T: Scalar>(left: Option<&Matrix<T>>, right: Option<&Matrix<T>>) -> Result<Matrix<T>> {
    let left = require(left, "left")?;
    let right = require(right, "right")?;
    left.add(right)
}

/// `left - right`.
pub fn subtract<T: Scalar>(
    left: Option<&Matrix<T>>,
    right: Option<&Matrix<T>>,
) -> Result<Matrix<T>> {
    let left = require(left, "left")?;
    let right = require(right, "right")?;
    left.subtract(right)
}

/// `left * right`.
pub fn multiply<T: Scalar>(
    left: Option<&Matrix<T>>,
    right: Option<&Matrix<T>>,
) -> Result<Matrix<T>> {
    let left = require(left, "left")?;
    let right = require(right, "right")?;
    left.multiply(right)
}

/// Write `matrix * x` into `y`.
pub fn multiply_vector_into<T: Scalar>(
    matrix: Option<&Matrix<T>>,
    x: Option<&Vector<T>>,
    y: Option<&mut Vector<T>>,
) -> Result<()> {
    let matrix = require(matrix, "matrix")?;
    let x = require(x, "x")?;
    let y = require_mut(y, "y")?;
    matrix.multiply_vector_into(x, y)
}

/// Write `s * matrix` into `result`.
pub fn scalar_multiply_into<T: Scalar>(
    matrix: Option<&Matrix<T>>,
    s: T,
    result: Option<&mut Matrix<T>>,
) -> Result<()> {
    let matrix = require(matrix, "matrix")?;
    let result = require_mut(result, "result")?;
    matrix.scalar_multiply_into(s, result)
}

/// Write `-matrix` into `result`.
pub fn negate_into<T: Scalar>(
    matrix: Option<&Matrix<T>>,
    result: Option<&mut Matrix<T>>,
) -> Result<()> {
    let matrix = require(matrix, "matrix")?;
    let result = require_mut(result, "result")?;
    matrix.negate_into(result)
}

/// Element-wise `left[i,j] * right[i,j]`.
pub fn pointwise_multiply<T: Scalar>(
    left: Option<&Matrix<T>>,
    right: Option<&Matrix<T>>,
) -> Result<Matrix<T>> {
    let left = require(left, "left")?;
    let right = require(right, "right")?;
    left.pointwise_multiply(right)
}

/// Element-wise product written into `result`.
pub fn pointwise_multiply_into<T: Scalar>(
    left: Option<&Matrix<T>>,
    right: Option<&Matrix<T>>,
    result: Option<&mut Matrix<T>>,
) -> Result<()> {
    let left = require(left, "left")?;
    let right = require(right, "right")?;
    let result = require_mut(result, "result")?;
    left.pointwise_multiply_into(right, result)
}

/// Element-wise `left[i,j] / right[i,j]`.
pub fn pointwise_divide<T: Scalar>(
    left: Option<&Matrix<T>>,
    right: Option<&Matrix<T>>,
) -> Result<Matrix<T>> {
    let left = require(left, "left")?;
    let right = require(right, "right")?;
    left.pointwise_divide(right)
}

/// Element-wise quotient written into `result`.
pub fn pointwise_divide_into<T: Scalar>(
    left: Option<&Matrix<T>>,
    right: Option<&Matrix<T>>,
    result: Option<&mut Matrix<T>>,
) -> Result<()> {
    let left = require(left, "left")?;
    let right = require(right, "right")?;
    let result = require_mut(result, "result")?;
    left.pointwise_divide_into(right, result)
}
