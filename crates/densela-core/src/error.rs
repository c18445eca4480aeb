/// All errors returned by `densela-core`.
///
/// Shape faults come in two kinds: [`ShapeMismatch`](Self::ShapeMismatch) for
/// multiplicative and structural operations, and
/// [`RangeMismatch`](Self::RangeMismatch) for `add` / `subtract`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A required operand or result buffer is absent.
    #[error("missing required argument `{operand}`")]
    NullArgument { operand: &'static str },

    /// Operand dimensions are incompatible for a multiplicative or
    /// structural operation.
    #[error("{op}: shape mismatch, expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        op: &'static str,
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// Operand dimensions are incompatible for an additive operation.
    #[error("{op}: range mismatch, expected {expected:?}, got {got:?}")]
    RangeMismatch {
        op: &'static str,
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A scalar parameter is outside its domain.
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: &'static str },

    /// Raw data cannot be laid out in the requested shape.
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape {
        shape: Vec<usize>,
        reason: &'static str,
    },

    /// An element index is out of bounds.
    #[error("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },
}

/// Convenience alias used throughout `densela-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
