use crate::element::Element;
use crate::error::Result;
use crate::kernel::{check_operands, MatmulKernel};

/// Unblocked reference kernel.
///
/// Plain triple loop, one full dot product per output cell. Intended for
/// validating the blocked kernel and for measuring its speedup, not for
/// production use on large matrices. Accumulates each cell in ascending
/// reduction order, the same order the blocked kernel uses.
#[derive(Debug, Clone, Default)]
pub struct NaiveKernel;

impl NaiveKernel {
    pub fn new() -> Self {
        NaiveKernel
    }
}

impl<T: Element> MatmulKernel<T> for NaiveKernel {
    fn name(&self) -> &str {
        "naive"
    }

    fn matmul(&self, a: &[T], b: &[T], m: usize, k: usize, n: usize) -> Result<Vec<T>> {
        check_operands(a, b, m, k, n)?;

        let mut c = vec![T::zero(); m * n];
        for i in 0..m {
            for j in 0..n {
                let mut acc = T::zero();
                for p in 0..k {
                    acc = acc + a[i * k + p] * b[p * n + j];
                }
                c[i * n + j] = acc;
            }
        }
        Ok(c)
    }
}
