//! Common test utilities
#![allow(dead_code)]

use numat::dtype::Complex128;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator so randomized tests are reproducible
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Random row-major matrix where roughly `density` of the elements are non-zero
///
/// At least one element is non-zero.
pub fn random_sparse_rows(rng: &mut StdRng, rows: usize, cols: usize, density: f64) -> Vec<Vec<f64>> {
    let mut out: Vec<Vec<f64>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.random_bool(density) {
                        rng.random_range(-10.0..10.0)
                    } else {
                        0.0
                    }
                })
                .collect()
        })
        .collect();
    if out.iter().flatten().all(|&v| v == 0.0) {
        let r = rng.random_range(0..rows);
        let c = rng.random_range(0..cols);
        out[r][c] = 1.0;
    }
    out
}

/// Random complex row-major matrix split into real and imaginary parts
pub fn random_split_rows(
    rng: &mut StdRng,
    rows: usize,
    cols: usize,
    density: f64,
) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let re = random_sparse_rows(rng, rows, cols, density);
    let im = random_sparse_rows(rng, rows, cols, density);
    (re, im)
}

/// Complex rows built from separate parts
pub fn zip_rows(re: &[Vec<f64>], im: &[Vec<f64>]) -> Vec<Vec<Complex128>> {
    re.iter()
        .zip(im)
        .map(|(r, i)| {
            r.iter()
                .zip(i)
                .map(|(&re, &im)| Complex128::new(re, im))
                .collect()
        })
        .collect()
}
