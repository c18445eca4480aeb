//! # Densela
//!
//! Dense matrix and vector arithmetic over real and complex scalars.
//!
//! One `use densela::prelude::*;` gives you the [`Matrix`](densela_core::Matrix)
//! and [`Vector`](densela_core::Vector) types, the scalar traits, the error
//! type, and the random scalar sources.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Matrices, vectors, the arithmetic engine |

pub use densela_core as core;

/// Glob-import convenience: `use densela::prelude::*;`
pub mod prelude {
    pub use densela_core::prelude::*;
}
