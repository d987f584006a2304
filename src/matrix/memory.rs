//! Buffer layout helpers shared by the matrix constructors
//!
//! Callers validate shapes first; these helpers only move data.

use crate::dtype::{Complex128, Element};

/// Transpose validated row-major input into a column-major buffer
///
/// `dst[col * rows + row] = src[row][col]`
pub(crate) fn pack_col_major<T: Copy, R: AsRef<[T]>>(src: &[R], rows: usize, cols: usize) -> Vec<T> {
    let mut dst = Vec::with_capacity(rows * cols);
    for c in 0..cols {
        dst.extend(src.iter().map(|row| row.as_ref()[c]));
    }
    dst
}

/// Pair up equal-length real and imaginary parts
pub(crate) fn zip_complex(re: &[f64], im: &[f64]) -> Vec<Complex128> {
    re.iter()
        .zip(im)
        .map(|(&re, &im)| Complex128::new(re, im))
        .collect()
}

/// Promote every element to the complex domain
pub(crate) fn promote_all<T: Element>(data: &[T]) -> Vec<Complex128> {
    data.iter().map(|v| v.promote()).collect()
}

/// Copy at most `len` values, zero-filling up to `len`
pub(crate) fn fit_to<T: Element>(values: &[T], len: usize) -> Vec<T> {
    let mut out: Vec<T> = values.iter().take(len).copied().collect();
    out.resize(len, T::zero());
    out
}
