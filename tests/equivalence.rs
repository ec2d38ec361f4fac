//! Randomized equivalence suite: the blocked kernel must agree with the
//! naive reference on every cell, for shapes that land exactly on block
//! boundaries, shapes that divide evenly without aligning, and shapes one
//! short of a boundary.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use blockmat::{BlockedKernel, Matrix, NaiveKernel, TilePolicy};

fn rng() -> StdRng {
    StdRng::seed_from_u64(451)
}

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<i64> {
    let data = (0..rows * cols).map(|_| rng.gen_range(1..10_000)).collect();
    Matrix::from_vec(rows, cols, data).unwrap()
}

fn assert_blocked_matches_naive(policy: TilePolicy, m: usize, k: usize, n: usize) {
    let mut rng = rng();
    let a = random_matrix(&mut rng, m, k);
    let b = random_matrix(&mut rng, k, n);
    let blocked = a.matmul(&b, &BlockedKernel::with_policy(policy)).unwrap();
    let naive = a.matmul(&b, &NaiveKernel::new()).unwrap();
    assert_eq!(blocked, naive, "policy {:?} on {}x{}x{}", policy, m, k, n);
}

#[test]
fn blocked_matches_naive_on_random_shapes() {
    let mut rng = rng();
    for _ in 0..10 {
        let m = rng.gen_range(1..=100);
        let k = rng.gen_range(1..=100);
        let n = rng.gen_range(1..=100);
        assert_blocked_matches_naive(TilePolicy::default(), m, k, n);
    }
}

#[test]
fn blocked_matches_naive_on_boundary_shapes() {
    let policy = TilePolicy::new(16, 16, 4);
    // Exactly block-aligned.
    assert_blocked_matches_naive(policy, 16, 16, 16);
    assert_blocked_matches_naive(policy, 32, 16, 48);
    // Evenly divisible by the unroll width but not block-aligned.
    assert_blocked_matches_naive(policy, 8, 24, 8);
    assert_blocked_matches_naive(policy, 24, 8, 40);
    // One less than an even multiple of the block/unroll size.
    assert_blocked_matches_naive(policy, 15, 15, 15);
    assert_blocked_matches_naive(policy, 31, 15, 3);
    assert_blocked_matches_naive(policy, 3, 31, 15);
}

#[test]
fn blocked_matches_naive_across_policies() {
    for policy in [
        TilePolicy::new(1, 1, 1),
        TilePolicy::new(2, 3, 2),
        TilePolicy::new(7, 5, 3),
        TilePolicy::new(64, 32, 8),
        TilePolicy::default(),
    ] {
        assert_blocked_matches_naive(policy, 33, 29, 41);
    }
}

#[test]
fn blocked_matches_naive_on_unaligned_rectangle() {
    // 101 and 37 and 53 do not align to any block or unroll constant.
    assert_blocked_matches_naive(TilePolicy::default(), 101, 37, 53);
}

#[test]
fn transpose_involution_on_random_shapes() {
    let mut rng = rng();
    for _ in 0..10 {
        let rows = rng.gen_range(1..=100);
        let cols = rng.gen_range(1..=100);
        let m = random_matrix(&mut rng, rows, cols);
        let t = m.transpose().unwrap();
        assert_eq!(t.shape(0).unwrap(), m.shape(1).unwrap());
        assert_eq!(t.shape(1).unwrap(), m.shape(0).unwrap());
        assert_eq!(t.transpose().unwrap(), m);
    }
}

#[test]
fn transpose_of_symmetric_matrix_is_itself() {
    let mut rng = rng();
    let dim = rng.gen_range(2..=60);
    let mut m = Matrix::<i64>::zeros(dim, dim);
    for i in 0..dim {
        m.set(i, i, rng.gen_range(1..10_000)).unwrap();
        for j in (i + 1)..dim {
            let elem = rng.gen_range(1..10_000);
            m.set(i, j, elem).unwrap();
            m.set(j, i, elem).unwrap();
        }
    }
    assert_eq!(m.transpose().unwrap(), m);
}

#[test]
fn float_blocked_matches_naive_bit_exactly() {
    // Both kernels accumulate each cell in the same ascending reduction
    // order, so even floating-point results compare equal. Equivalence with
    // any other summation order is *not* guaranteed.
    let mut rng = rng();
    let (m, k, n) = (37, 53, 29);
    let a_data: Vec<f64> = (0..m * k).map(|_| rng.gen_range(0.0..1.0)).collect();
    let b_data: Vec<f64> = (0..k * n).map(|_| rng.gen_range(0.0..1.0)).collect();
    let a = Matrix::from_vec(m, k, a_data).unwrap();
    let b = Matrix::from_vec(k, n, b_data).unwrap();
    let blocked = a.matmul(&b, &BlockedKernel::new()).unwrap();
    let naive = a.matmul(&b, &NaiveKernel::new()).unwrap();
    assert_eq!(blocked, naive);
}

#[test]
fn float_products_stay_close_across_policies() {
    use approx::assert_relative_eq;

    let mut rng = rng();
    let (m, k, n) = (24, 31, 18);
    let a_data: Vec<f64> = (0..m * k).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let b_data: Vec<f64> = (0..k * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let a = Matrix::from_vec(m, k, a_data).unwrap();
    let b = Matrix::from_vec(k, n, b_data).unwrap();

    let reference = a.matmul(&b, &NaiveKernel::new()).unwrap();
    for policy in [TilePolicy::new(4, 8, 2), TilePolicy::new(16, 4, 8)] {
        let c = a.matmul(&b, &BlockedKernel::with_policy(policy)).unwrap();
        for (x, y) in c.as_slice().iter().zip(reference.as_slice()) {
            assert_relative_eq!(*x, *y, max_relative = 1e-12);
        }
    }
}
