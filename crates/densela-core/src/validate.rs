//! Shape validation shared by every engine operation.
//!
//! Each check is a pure function of operand dimensions. Engine routines call
//! them before touching any result buffer, so a failing call never leaves a
//! partial write behind.

use crate::error::{CoreError, Result};

/// Unwrap an operand that may be absent.
pub fn require<'a, T: ?Sized>(operand: Option<&'a T>, name: &'static str) -> Result<&'a T> {
    operand.ok_or(CoreError::NullArgument { operand: name })
}

/// Mutable counterpart of [`require`].
pub fn require_mut<'a, T: ?Sized>(
    operand: Option<&'a mut T>,
    name: &'static str,
) -> Result<&'a mut T> {
    operand.ok_or(CoreError::NullArgument { operand: name })
}

/// Two matrix shapes must be identical (multiplicative / structural kind).
pub fn same_shape(op: &'static str, expected: (usize, usize), got: (usize, usize)) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(CoreError::ShapeMismatch {
            op,
            expected: vec![expected.0, expected.1],
            got: vec![got.0, got.1],
        })
    }
}

/// Two matrix shapes must be identical (additive kind).
pub fn same_range(op: &'static str, expected: (usize, usize), got: (usize, usize)) -> Result<()> {
    if expected.0 != got.0 || expected.1 != got.1 {
        return Err(CoreError::RangeMismatch {
            op,
            expected: vec![expected.0, expected.1],
            got: vec![got.0, got.1],
        });
    }
    Ok(())
}

/// Two vector lengths must agree (additive kind).
pub fn same_len_range(op: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(CoreError::RangeMismatch {
            op,
            expected: vec![expected],
            got: vec![got],
        });
    }
    Ok(())
}

/// An inner extent shared by two operands must agree.
pub fn inner_dims(op: &'static str, left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(CoreError::ShapeMismatch {
            op,
            expected: vec![left],
            got: vec![right],
        })
    }
}

/// A vector must have exactly `expected` elements.
pub fn vector_len(op: &'static str, expected: usize, got: usize) -> Result<()> {
    inner_dims(op, expected, got)
}

/// A matrix must be square.
pub fn square(op: &'static str, shape: (usize, usize)) -> Result<()> {
    if shape.0 == shape.1 {
        Ok(())
    } else {
        Err(CoreError::ShapeMismatch {
            op,
            expected: vec![shape.0, shape.0],
            got: vec![shape.0, shape.1],
        })
    }
}

/// Every requested extent must be at least one.
pub fn positive_dims(dims: &[usize]) -> Result<()> {
    if dims.iter().any(|&d| d == 0) {
        return Err(CoreError::InvalidParameter {
            reason: "dimensions must be greater than zero",
        });
    }
    Ok(())
}

/// `rows * cols` for a buffer of `T`, failing instead of wrapping.
///
/// The count must fit in `usize` and the buffer in `isize::MAX` bytes, so
/// every matrix keeps exactly `rows * cols` elements.
pub fn element_count<T>(rows: usize, cols: usize) -> Result<usize> {
    let too_large = || CoreError::InvalidShape {
        shape: vec![rows, cols],
        reason: "element count exceeds the address space",
    };
    let count = rows.checked_mul(cols).ok_or_else(too_large)?;
    let bytes = count
        .checked_mul(core::mem::size_of::<T>())
        .ok_or_else(too_large)?;
    if bytes > isize::MAX.unsigned_abs() {
        return Err(too_large());
    }
    Ok(count)
}

/// Result shape of `left ⊗ right`, checked like [`element_count`].
pub fn kronecker_shape<T>(left: (usize, usize), right: (usize, usize)) -> Result<(usize, usize)> {
    let too_large = || CoreError::InvalidShape {
        shape: vec![left.0, left.1, right.0, right.1],
        reason: "Kronecker product extents overflow",
    };
    let rows = left.0.checked_mul(right.0).ok_or_else(too_large)?;
    let cols = left.1.checked_mul(right.1).ok_or_else(too_large)?;
    element_count::<T>(rows, cols)?;
    Ok((rows, cols))
}

/// A p-norm order must satisfy `p >= 1` (NaN is rejected).
pub fn norm_order<R: crate::Real>(p: R) -> Result<()> {
    if p >= R::one() {
        Ok(())
    } else {
        Err(CoreError::InvalidParameter {
            reason: "norm order p must be >= 1",
        })
    }
}
