use crate::element::Element;
use crate::error::Result;
use crate::kernel::{check_operands, MatmulKernel};

/// Upper bound on `TilePolicy::unroll`; local accumulator tiles are
/// stack-allocated at this size.
pub const MAX_UNROLL: usize = 8;

/// Tiling parameters for the blocked kernel.
///
/// Correctness holds for any valid parameter choice, including the
/// degenerate `unroll = 1`; only throughput depends on the values. The
/// defaults are tuned so that one row block of A and C plus one reduction
/// block of B fit comfortably in cache on common hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePolicy {
    /// Rows of A/C processed per outer block.
    pub row_block: usize,
    /// Span of the shared dimension processed per reduction block.
    pub reduction_block: usize,
    /// Side length of the unrolled output tile (1..=MAX_UNROLL).
    pub unroll: usize,
}

impl TilePolicy {
    /// Create a policy, clamping each parameter to its valid range.
    pub fn new(row_block: usize, reduction_block: usize, unroll: usize) -> Self {
        TilePolicy {
            row_block: row_block.max(1),
            reduction_block: reduction_block.max(1),
            unroll: unroll.clamp(1, MAX_UNROLL),
        }
    }
}

impl Default for TilePolicy {
    fn default() -> Self {
        TilePolicy {
            row_block: 64,
            reduction_block: 64,
            unroll: 4,
        }
    }
}

/// Cache-blocked, loop-unrolled GEMM kernel.
///
/// The iteration space is tiled three ways: output rows in chunks of
/// `row_block`, the shared dimension in chunks of `reduction_block`, and
/// within one (row block, reduction block) pair, output cells in
/// `unroll × unroll` tiles with one local accumulator per cell. Because the
/// same output cell is revisited once per reduction block, partial sums are
/// carried across blocks: the first block seeds each accumulator with zero,
/// every later block seeds it by reading back the value already stored in C.
///
/// Dimensions that do not divide evenly fall back to narrower tile variants:
/// `u×1` for a leftover column strip, `1×u` for a leftover row strip, and a
/// scalar dot product for the final corner. Every variant clamps the
/// reduction range to `min(kk + reduction_block, k)` so the carry invariant
/// holds in the last, partial block too.
#[derive(Debug, Clone, Default)]
pub struct BlockedKernel {
    policy: TilePolicy,
}

impl BlockedKernel {
    pub fn new() -> Self {
        BlockedKernel::default()
    }

    pub fn with_policy(policy: TilePolicy) -> Self {
        BlockedKernel { policy }
    }

    pub fn policy(&self) -> TilePolicy {
        self.policy
    }
}

impl<T: Element> MatmulKernel<T> for BlockedKernel {
    fn name(&self) -> &str {
        "blocked"
    }

    fn matmul(&self, a: &[T], b: &[T], m: usize, k: usize, n: usize) -> Result<Vec<T>> {
        check_operands(a, b, m, k, n)?;

        // Fields are public, so clamp here as well as in `TilePolicy::new`:
        // any policy value must yield a correct (if slow) multiply.
        let row_block = self.policy.row_block.max(1);
        let reduction_block = self.policy.reduction_block.max(1);
        let u = self.policy.unroll.clamp(1, MAX_UNROLL);

        let mut c = vec![T::zero(); m * n];
        let j_main = n / u * u;

        for ii in (0..m).step_by(row_block) {
            let i_end = (ii + row_block).min(m);
            let i_main = ii + (i_end - ii) / u * u;

            for kk in (0..k).step_by(reduction_block) {
                let k_end = (kk + reduction_block).min(k);
                // First reduction block seeds accumulators with zero; later
                // blocks read back the partial result stored in C.
                let first = kk == 0;

                for i in (ii..i_main).step_by(u) {
                    for j in (0..j_main).step_by(u) {
                        tile_full(a, b, &mut c, i, j, kk, k_end, k, n, u, first);
                    }
                    for j in j_main..n {
                        tile_rows(a, b, &mut c, i, j, kk, k_end, k, n, u, first);
                    }
                }
                for i in i_main..i_end {
                    for j in (0..j_main).step_by(u) {
                        tile_cols(a, b, &mut c, i, j, kk, k_end, k, n, u, first);
                    }
                    for j in j_main..n {
                        let mut acc = if first { T::zero() } else { c[i * n + j] };
                        for p in kk..k_end {
                            acc = acc + a[i * k + p] * b[p * n + j];
                        }
                        c[i * n + j] = acc;
                    }
                }
            }
        }
        Ok(c)
    }
}

/// Full `u×u` output tile for one reduction block.
///
/// Each loaded element of A is reused across `u` accumulators before the
/// next reduction index is touched, which amortizes loads and keeps `u*u`
/// independent sum chains live for the optimizer.
#[allow(clippy::too_many_arguments)]
fn tile_full<T: Element>(
    a: &[T],
    b: &[T],
    c: &mut [T],
    i: usize,
    j: usize,
    kk: usize,
    k_end: usize,
    k: usize,
    n: usize,
    u: usize,
    first: bool,
) {
    let mut acc = [[T::zero(); MAX_UNROLL]; MAX_UNROLL];
    if !first {
        for ti in 0..u {
            for tj in 0..u {
                acc[ti][tj] = c[(i + ti) * n + j + tj];
            }
        }
    }
    for p in kk..k_end {
        for ti in 0..u {
            let a_ip = a[(i + ti) * k + p];
            let b_row = &b[p * n + j..p * n + j + u];
            for tj in 0..u {
                acc[ti][tj] = acc[ti][tj] + a_ip * b_row[tj];
            }
        }
    }
    for ti in 0..u {
        for tj in 0..u {
            c[(i + ti) * n + j + tj] = acc[ti][tj];
        }
    }
}

/// `u×1` variant: full row-unroll, single output column.
#[allow(clippy::too_many_arguments)]
fn tile_rows<T: Element>(
    a: &[T],
    b: &[T],
    c: &mut [T],
    i: usize,
    j: usize,
    kk: usize,
    k_end: usize,
    k: usize,
    n: usize,
    u: usize,
    first: bool,
) {
    let mut acc = [T::zero(); MAX_UNROLL];
    if !first {
        for ti in 0..u {
            acc[ti] = c[(i + ti) * n + j];
        }
    }
    for p in kk..k_end {
        let b_pj = b[p * n + j];
        for ti in 0..u {
            acc[ti] = acc[ti] + a[(i + ti) * k + p] * b_pj;
        }
    }
    for ti in 0..u {
        c[(i + ti) * n + j] = acc[ti];
    }
}

/// `1×u` variant: single output row, full column-unroll.
#[allow(clippy::too_many_arguments)]
fn tile_cols<T: Element>(
    a: &[T],
    b: &[T],
    c: &mut [T],
    i: usize,
    j: usize,
    kk: usize,
    k_end: usize,
    k: usize,
    n: usize,
    u: usize,
    first: bool,
) {
    let mut acc = [T::zero(); MAX_UNROLL];
    if !first {
        acc[..u].copy_from_slice(&c[i * n + j..i * n + j + u]);
    }
    for p in kk..k_end {
        let a_ip = a[i * k + p];
        let b_row = &b[p * n + j..p * n + j + u];
        for tj in 0..u {
            acc[tj] = acc[tj] + a_ip * b_row[tj];
        }
    }
    c[i * n + j..i * n + j + u].copy_from_slice(&acc[..u]);
}
