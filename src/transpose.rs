//! Tiled transpose kernel.
//!
//! Walks the source in `PAIR × PAIR` tiles so that the four scalar copies of
//! one inner step amortize index arithmetic and touch both the row-major
//! read side and the strided write side with better locality than a plain
//! element-at-a-time loop.

/// Tile side length. Correctness does not depend on the value, only
/// throughput does; the unrolled bodies below are written for 2.
const PAIR: usize = 2;

/// Transpose `src` (rows × cols, row-major) into `dst` (cols × rows,
/// row-major): `dst[j * rows + i] = src[i * cols + j]`.
///
/// # Panics
/// Panics if `src.len()` or `dst.len()` is shorter than `rows * cols`.
pub fn transpose_blocked<T: Copy>(src: &[T], dst: &mut [T], rows: usize, cols: usize) {
    assert!(src.len() >= rows * cols);
    assert!(dst.len() >= rows * cols);

    let r_main = rows / PAIR * PAIR;
    let c_main = cols / PAIR * PAIR;

    for i in (0..r_main).step_by(PAIR) {
        // 2×2 tiles over the bulk of this row pair.
        for j in (0..c_main).step_by(PAIR) {
            dst[j * rows + i] = src[i * cols + j];
            dst[j * rows + i + 1] = src[(i + 1) * cols + j];
            dst[(j + 1) * rows + i] = src[i * cols + j + 1];
            dst[(j + 1) * rows + i + 1] = src[(i + 1) * cols + j + 1];
        }
        // Leftover column: 2×1 strip.
        for j in c_main..cols {
            dst[j * rows + i] = src[i * cols + j];
            dst[j * rows + i + 1] = src[(i + 1) * cols + j];
        }
    }
    for i in r_main..rows {
        // Leftover row: 1×2 strips, then the final scalar corner.
        for j in (0..c_main).step_by(PAIR) {
            dst[j * rows + i] = src[i * cols + j];
            dst[(j + 1) * rows + i] = src[i * cols + j + 1];
        }
        for j in c_main..cols {
            dst[j * rows + i] = src[i * cols + j];
        }
    }
}
