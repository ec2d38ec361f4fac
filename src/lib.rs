//! `blockmat` - Dense matrix container with cache-blocked multiply and
//! transpose kernels.
//!
//! This crate provides:
//! - A generic `Matrix<T>` type with a flat row-major buffer
//! - A `MatmulKernel` trait for pluggable multiply strategies
//! - A `BlockedKernel` using cache blocking and loop unrolling, configurable
//!   through `TilePolicy`
//! - A `NaiveKernel` reference implementation for validation and speedup
//!   measurement
//! - A tiled transpose kernel
//!
//! Everything is single-threaded. Distinct row blocks of the blocked kernel
//! write disjoint output regions and only read the operands, so the tiling
//! structure is amenable to parallel execution, but no such guarantee is
//! made here.

pub mod blocked;
pub mod element;
pub mod error;
pub mod kernel;
pub mod matrix;
pub mod naive;
pub mod transpose;

// Re-export primary types at the crate root for convenience.
pub use blocked::{BlockedKernel, TilePolicy};
pub use element::Element;
pub use error::{MatrixError, Result};
pub use kernel::MatmulKernel;
pub use matrix::Matrix;
pub use naive::NaiveKernel;
pub use transpose::transpose_blocked;
