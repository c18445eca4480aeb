//! The arithmetic engine.
//!
//! All routines are implemented from scratch over the [`Scalar`](crate::Scalar)
//! trait, once for every scalar kind:
//!
//! | Group | Operations | Complexity |
//! |-------|-----------|------------|
//! | L2 | [`gemv`], `multiply_vector` | O(n^2) |
//! | L3 | [`gemm`], `multiply`, `transpose_and_multiply`, `transpose_this_and_multiply` | O(n^3) |
//! | Structural | `kronecker_product` | O(output) |
//! | Norms | `normalize_columns`, `normalize_rows`, `column_norms`, `row_norms` | O(n^2) |
//!
//! The element-wise operations (add, subtract, negate, pointwise, trace)
//! live next to the [`Matrix`](crate::Matrix) type itself.
//!
//! Every into-result routine validates shapes before the first write.
//! In-place routines (the aliased case, where the result buffer is also an
//! input) buffer each output row, column or vector before overwriting it.

pub mod blas;
mod normalize;
mod product;

#[cfg(test)]
mod tests_properties;

pub use blas::{gemm, gemv};
