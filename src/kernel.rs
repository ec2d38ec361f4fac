use std::fmt::Debug;

use crate::element::Element;
use crate::error::{MatrixError, Result};

/// Trait for pluggable matrix-multiplication kernels.
///
/// Kernels work on raw row-major slices: `a` is [m, k], `b` is [k, n], and
/// the result is an owned [m, n] buffer. Shape preconditions (non-empty
/// operands, compatible inner dimensions) are checked by the caller; the
/// kernel itself only validates that the slice lengths agree with the given
/// dimensions.
///
/// Per-cell sums must be accumulated in ascending reduction order so that
/// every kernel produces bit-identical output for a given element type. For
/// integers that makes all kernels interchangeable; for floats, equivalence
/// with any *other* summation order is not guaranteed, since floating-point
/// addition is not associative.
pub trait MatmulKernel<T: Element>: Send + Sync + Debug {
    /// Returns the name of this kernel (e.g., "naive", "blocked").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    ///
    /// - `a`: row-major data of shape [m, k]
    /// - `b`: row-major data of shape [k, n]
    /// - Returns: row-major data of shape [m, n]
    fn matmul(&self, a: &[T], b: &[T], m: usize, k: usize, n: usize) -> Result<Vec<T>>;
}

/// Shared slice-length validation for kernel implementations.
pub(crate) fn check_operands<T>(
    a: &[T],
    b: &[T],
    m: usize,
    k: usize,
    n: usize,
) -> Result<()> {
    if a.len() != m * k {
        return Err(MatrixError::ShapeMismatch {
            rows: m,
            cols: k,
            len: a.len(),
        });
    }
    if b.len() != k * n {
        return Err(MatrixError::ShapeMismatch {
            rows: k,
            cols: n,
            len: b.len(),
        });
    }
    Ok(())
}
