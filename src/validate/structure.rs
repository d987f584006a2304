//! Triangular, Hessenberg and band-structure checks on square input

use super::dims;
use crate::error::{Error, Result};
use num_traits::Zero;

/// Order of a square, non-ragged input
fn square_order<T, R: AsRef<[T]>>(rows: &[R]) -> Result<usize> {
    let (nrows, ncols) = dims("matrix", rows)?;
    if nrows != ncols {
        return Err(Error::invalid_argument(
            "matrix",
            format!("must be square, got {nrows}x{ncols}"),
        ));
    }
    Ok(nrows)
}

/// True if every element outside the closure's accepted region is zero
fn zero_outside<T: Zero, R: AsRef<[T]>>(
    rows: &[R],
    keep: impl Fn(usize, usize) -> bool,
) -> Result<bool> {
    square_order(rows)?;
    Ok(rows.iter().enumerate().all(|(i, row)| {
        row.as_ref()
            .iter()
            .enumerate()
            .all(|(j, v)| keep(i, j) || v.is_zero())
    }))
}

fn require<'a, R>(rows: &'a [R], holds: bool, what: &str) -> Result<&'a [R]> {
    if holds {
        Ok(rows)
    } else {
        Err(Error::invalid_argument("matrix", format!("is not {what}")))
    }
}

/// True if everything below the main diagonal is zero
pub fn is_upper_triangular<T: Zero, R: AsRef<[T]>>(rows: &[R]) -> Result<bool> {
    zero_outside(rows, |i, j| i <= j)
}

/// True if everything above the main diagonal is zero
pub fn is_lower_triangular<T: Zero, R: AsRef<[T]>>(rows: &[R]) -> Result<bool> {
    zero_outside(rows, |i, j| j <= i)
}

/// True if everything below the first subdiagonal is zero
pub fn is_upper_hessenberg<T: Zero, R: AsRef<[T]>>(rows: &[R]) -> Result<bool> {
    zero_outside(rows, |i, j| i <= j + 1)
}

/// True if everything above the first superdiagonal is zero
pub fn is_lower_hessenberg<T: Zero, R: AsRef<[T]>>(rows: &[R]) -> Result<bool> {
    zero_outside(rows, |i, j| j <= i + 1)
}

/// True if only the main, first sub- and first superdiagonal may be non-zero
///
/// Any 1x1 input qualifies.
pub fn is_tridiagonal<T: Zero, R: AsRef<[T]>>(rows: &[R]) -> Result<bool> {
    zero_outside(rows, |i, j| i.abs_diff(j) <= 1)
}

/// True if the non-zeros lie within a centred band `bandwidth` diagonals wide
///
/// `bandwidth` must be odd, at least 1, and at most `2n - 1` for an `n×n` input;
/// 1 means diagonal, 3 tridiagonal, 5 pentadiagonal and so on.
pub fn is_banded<T: Zero, R: AsRef<[T]>>(rows: &[R], bandwidth: i64) -> Result<bool> {
    let n = square_order(rows)?;
    let max = 2 * n - 1;
    if bandwidth < 1 || bandwidth % 2 == 0 || bandwidth as u64 > max as u64 {
        return Err(Error::InvalidBandwidth {
            bandwidth,
            order: n,
            max,
        });
    }
    let half = ((bandwidth - 1) / 2) as usize;
    zero_outside(rows, |i, j| i.abs_diff(j) <= half)
}

/// Return the input if it is upper triangular, an error otherwise
pub fn check_is_upper_triangular<T: Zero, R: AsRef<[T]>>(rows: &[R]) -> Result<&[R]> {
    require(rows, is_upper_triangular(rows)?, "upper triangular")
}

/// Return the input if it is lower triangular, an error otherwise
pub fn check_is_lower_triangular<T: Zero, R: AsRef<[T]>>(rows: &[R]) -> Result<&[R]> {
    require(rows, is_lower_triangular(rows)?, "lower triangular")
}

/// Return the input if it is upper Hessenberg, an error otherwise
pub fn check_is_upper_hessenberg<T: Zero, R: AsRef<[T]>>(rows: &[R]) -> Result<&[R]> {
    require(rows, is_upper_hessenberg(rows)?, "upper Hessenberg")
}

/// Return the input if it is lower Hessenberg, an error otherwise
pub fn check_is_lower_hessenberg<T: Zero, R: AsRef<[T]>>(rows: &[R]) -> Result<&[R]> {
    require(rows, is_lower_hessenberg(rows)?, "lower Hessenberg")
}

/// Return the input if it is tridiagonal, an error otherwise
pub fn check_is_tridiagonal<T: Zero, R: AsRef<[T]>>(rows: &[R]) -> Result<&[R]> {
    require(rows, is_tridiagonal(rows)?, "tridiagonal")
}

/// Return the input if it is banded with the given bandwidth, an error otherwise
pub fn check_is_banded<T: Zero, R: AsRef<[T]>>(rows: &[R], bandwidth: i64) -> Result<&[R]> {
    require(rows, is_banded(rows, bandwidth)?, "banded")
}

/// Copy of a square input with the strict lower triangle zeroed
pub fn remove_lower_triangle<T: Zero + Copy, R: AsRef<[T]>>(rows: &[R]) -> Result<Vec<Vec<T>>> {
    square_order(rows)?;
    Ok(rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.as_ref()
                .iter()
                .enumerate()
                .map(|(j, &v)| if j < i { T::zero() } else { v })
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAGGED: [&[f64]; 2] = [&[1.0, 2.0], &[3.0, 4.0, 5.0]];

    fn trid() -> Vec<[f64; 7]> {
        vec![
            [1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [3.0, 4.0, 5.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 6.0, 7.0, 8.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 9.0, 10.0, 11.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 12.0, 13.0, 14.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 15.0, 16.0, 17.0],
            [0.0, 0.0, 0.0, 0.0, 0.0, 18.0, 19.0],
        ]
    }

    fn diag4() -> [[f64; 4]; 4] {
        [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 3.0, 0.0],
            [0.0, 0.0, 0.0, 4.0],
        ]
    }

    #[test]
    fn test_triangular() {
        let ut = [[1.0, 2.0, 3.0], [0.0, 4.0, 5.0], [0.0, 0.0, 6.0]];
        let not_ut = [[1.0, 2.0, 3.0], [0.0, 4.0, 5.0], [0.0, 1.0, 6.0]];
        assert!(is_upper_triangular(&ut).unwrap());
        assert!(!is_upper_triangular(&not_ut).unwrap());
        assert_eq!(check_is_upper_triangular(&ut).unwrap(), &ut[..]);
        assert!(check_is_upper_triangular(&not_ut).is_err());

        let lt = [[1.0, 0.0, 0.0], [2.0, 3.0, 0.0], [4.0, 5.0, 6.0]];
        let not_lt = [[1.0, 1.0, 0.0], [2.0, 3.0, 0.0], [4.0, 5.0, 6.0]];
        assert!(is_lower_triangular(&lt).unwrap());
        assert!(!is_lower_triangular(&not_lt).unwrap());
        assert!(check_is_lower_triangular(&lt).is_ok());
        assert!(check_is_lower_triangular(&not_lt).is_err());
    }

    #[test]
    fn test_hessenberg() {
        let uh = [
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [0.0, 9.0, 10.0, 11.0],
            [0.0, 0.0, 12.0, 13.0],
        ];
        let not_uh = [
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [1.0, 9.0, 10.0, 11.0],
            [0.0, 0.0, 12.0, 13.0],
        ];
        assert!(is_upper_hessenberg(&uh).unwrap());
        assert!(!is_upper_hessenberg(&not_uh).unwrap());
        assert!(check_is_upper_hessenberg(&not_uh).is_err());

        let lh = [
            [1.0, 2.0, 0.0, 0.0],
            [3.0, 4.0, 5.0, 0.0],
            [6.0, 7.0, 8.0, 9.0],
            [10.0, 11.0, 12.0, 13.0],
        ];
        let not_lh = [
            [1.0, 2.0, 0.0, 1.0],
            [3.0, 4.0, 5.0, 0.0],
            [6.0, 7.0, 8.0, 9.0],
            [10.0, 11.0, 12.0, 13.0],
        ];
        assert!(is_lower_hessenberg(&lh).unwrap());
        assert!(!is_lower_hessenberg(&not_lh).unwrap());
        assert!(check_is_lower_hessenberg(&lh).is_ok());
    }

    #[test]
    fn test_ragged_input_rejected() {
        assert!(is_upper_triangular(&RAGGED).is_err());
        assert!(is_lower_triangular(&RAGGED).is_err());
        assert!(is_upper_hessenberg(&RAGGED).is_err());
        assert!(is_lower_hessenberg(&RAGGED).is_err());
        assert!(is_tridiagonal(&RAGGED).is_err());
        assert!(is_banded(&RAGGED, 3).is_err());
        assert!(remove_lower_triangle(&RAGGED).is_err());
    }

    #[test]
    fn test_tridiagonal() {
        let t = trid();
        assert!(is_tridiagonal(&t).unwrap());
        assert!(check_is_tridiagonal(&t).is_ok());

        let mut escaped = trid();
        escaped[0][2] = 1.0;
        assert!(!is_tridiagonal(&escaped).unwrap());

        let mut lhs = trid();
        lhs[2][0] = -1.0;
        assert!(!is_tridiagonal(&lhs).unwrap());

        let mut rhs = trid();
        rhs[2][4] = -1.0;
        assert!(!is_tridiagonal(&rhs).unwrap());

        let mut last = trid();
        last[6][4] = -1.0;
        assert!(!is_tridiagonal(&last).unwrap());
        assert!(check_is_tridiagonal(&last).is_err());
    }

    #[test]
    fn test_tridiagonal_single_element() {
        assert!(is_tridiagonal(&[[5.0]]).unwrap());
        assert!(check_is_tridiagonal(&[[0.0]]).is_ok());

        let two = [[1.0, 2.0], [3.0, 4.0]];
        assert!(is_tridiagonal(&two).unwrap());
    }

    #[test]
    fn test_banded() {
        assert!(is_banded(&diag4(), 1).unwrap());
        let mut not_diag = diag4();
        not_diag[0][1] = 1.0;
        assert!(!is_banded(&not_diag, 1).unwrap());

        assert!(is_banded(&trid(), 3).unwrap());
        let mut not_trid = trid();
        not_trid[1][3] = 1.0;
        assert!(!is_banded(&not_trid, 3).unwrap());
        assert!(is_banded(&not_trid, 5).unwrap());
        assert!(check_is_banded(&not_trid, 3).is_err());
    }

    #[test]
    fn test_bad_bandwidth() {
        let d = diag4();
        for bw in [0, 2, 6, -1, 11, 27] {
            assert!(
                matches!(is_banded(&d, bw), Err(Error::InvalidBandwidth { .. })),
                "bandwidth {bw} should be rejected"
            );
        }
        assert!(is_banded(&d, 7).unwrap());
    }

    #[test]
    fn test_remove_lower_triangle() {
        let a = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let expected = vec![
            vec![1.0, 2.0, 3.0],
            vec![0.0, 5.0, 6.0],
            vec![0.0, 0.0, 9.0],
        ];
        assert_eq!(remove_lower_triangle(&a).unwrap(), expected);

        let not_square = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert!(remove_lower_triangle(&not_square).is_err());
    }
}
