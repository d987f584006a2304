//! Integration tests for shape and domain conversions

mod common;

use common::{assert_allclose_f64, random_sparse_rows, random_split_rows, seeded_rng, zip_rows};
use numat::prelude::*;

#[test]
fn test_dense_sparse_round_trip_random() {
    let mut rng = seeded_rng(0x5eed);
    for (rows, cols) in [(1, 1), (1, 7), (7, 1), (5, 5), (12, 9)] {
        for density in [0.05, 0.3, 0.9] {
            let data = random_sparse_rows(&mut rng, rows, cols, density);
            let dense = DenseMatrix::from_rows(&data).unwrap();
            let sparse = CscMatrix::from_rows(&data).unwrap();

            assert_eq!(sparse.to_dense(), dense, "{rows}x{cols} at {density}");
            assert_eq!(dense.to_sparse().unwrap(), sparse);
            assert_eq!(
                sparse.nnz(),
                numat::validate::count_nonzero(&data),
                "{rows}x{cols} at {density}"
            );
        }
    }
}

#[test]
fn test_complex_dense_sparse_round_trip_random() {
    let mut rng = seeded_rng(42);
    let (re, im) = random_split_rows(&mut rng, 8, 6, 0.25);
    let sparse = CscMatrix::<Complex128>::from_split_rows(&re, &im).unwrap();
    let dense = DenseMatrix::<Complex128>::from_split_rows(&re, &im).unwrap();
    assert_eq!(sparse.to_dense(), dense);

    let from_elems = DenseMatrix::from_rows(&zip_rows(&re, &im)).unwrap();
    assert_eq!(from_elems, dense);
    assert_eq!(from_elems.to_sparse().unwrap(), sparse);
}

#[test]
fn test_diagonal_to_dense_positions() {
    let d = DiagonalMatrix::with_dims(&[1.0, 2.0, 3.0], 4, 3).unwrap();
    let dense = d.to_dense();
    for r in 0..4 {
        for c in 0..3 {
            let expected = if r == c { (r + 1) as f64 } else { 0.0 };
            assert_eq!(dense.get(r, c), Some(expected), "({r}, {c})");
        }
    }
}

#[test]
fn test_complex_diagonal_to_dense() {
    let d = DiagonalMatrix::<Complex128>::from_split(&[1.0, 2.0], &[-1.0, 0.5]).unwrap();
    let dense = d.to_dense();
    assert_eq!(
        dense.raw(),
        &[1.0, -1.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.5]
    );
}

#[test]
fn test_promotion_is_idempotent_and_zero_imaginary() {
    let mut rng = seeded_rng(7);
    let data = random_sparse_rows(&mut rng, 4, 5, 0.5);
    let real = Matrix::from(CscMatrix::from_rows(&data).unwrap());
    let once = real.to_complex();
    let twice = once.to_complex();
    assert_eq!(once, twice);

    let imag: Vec<f64> = once.raw().iter().skip(1).step_by(2).copied().collect();
    assert!(imag.iter().all(|&v| v == 0.0));
    let re: Vec<f64> = once.raw().iter().step_by(2).copied().collect();
    assert_allclose_f64(&re, real.raw(), 0.0, 0.0, "real parts survive promotion");
}

#[test]
fn test_dense_of_dense_is_equal_copy() {
    let m = Matrix::from(DenseMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap());
    assert_eq!(m.to_dense(), m);
}

#[test]
fn test_real_view_of_complex_is_rejected() {
    let z = Matrix::from(DiagonalMatrix::<Complex128>::from_real(&[1.0]).unwrap());
    assert!(matches!(
        z.to_real_dense(),
        Err(Error::DomainDemotion { .. })
    ));
    assert_eq!(
        z.to_complex_dense(),
        DenseMatrix::<Complex128>::from_real_rows(&[[1.0]]).unwrap()
    );
}
