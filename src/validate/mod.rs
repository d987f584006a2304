//! Shape validators for raw rectangular input
//!
//! Pure functions over row-major 2-D input given as a slice of rows
//! (`&[Vec<T>]`, `&[[T; N]]`, `&[&[T]]`, ...). Every matrix constructor that
//! accepts 2-D input goes through [`dims`] before touching the data.

mod structure;

pub use structure::{
    check_is_banded, check_is_lower_hessenberg, check_is_lower_triangular,
    check_is_tridiagonal, check_is_upper_hessenberg, check_is_upper_triangular, is_banded,
    is_lower_hessenberg, is_lower_triangular, is_tridiagonal, is_upper_hessenberg,
    is_upper_triangular, remove_lower_triangle,
};

use crate::error::{Error, Result};
use num_traits::Zero;

/// Returns true if the rows are not all the same length
///
/// Empty input is not ragged.
pub fn is_ragged<T, R: AsRef<[T]>>(rows: &[R]) -> bool {
    first_ragged_row(rows).is_some()
}

/// Returns true if the input is non-ragged with as many rows as columns
pub fn is_square<T, R: AsRef<[T]>>(rows: &[R]) -> bool {
    match rows.first() {
        Some(first) => !is_ragged(rows) && first.as_ref().len() == rows.len(),
        None => false,
    }
}

/// Total number of elements over all rows, ragged or not
pub fn element_count<T, R: AsRef<[T]>>(rows: &[R]) -> usize {
    rows.iter().map(|r| r.as_ref().len()).sum()
}

/// Number of non-zero elements in a 1-D slice
pub fn count_nonzero_in<T: Zero>(values: &[T]) -> usize {
    values.iter().filter(|v| !v.is_zero()).count()
}

/// Number of non-zero elements over all rows
pub fn count_nonzero<T: Zero, R: AsRef<[T]>>(rows: &[R]) -> usize {
    rows.iter().map(|r| count_nonzero_in(r.as_ref())).sum()
}

/// Returns true if the non-zero entries of `values` form a single contiguous run
///
/// A slice with no non-zero entries trivially qualifies.
pub fn has_contiguous_entries<T: Zero>(values: &[T]) -> bool {
    let Some(start) = values.iter().position(|v| !v.is_zero()) else {
        return true;
    };
    let end = values
        .iter()
        .rposition(|v| !v.is_zero())
        .unwrap_or(start);
    values[start..=end].iter().all(|v| !v.is_zero())
}

/// Validate 2-D input and return its `(rows, cols)`
///
/// Rejects empty input, zero-length rows and ragged input.
pub fn dims<T, R: AsRef<[T]>>(arg: &'static str, rows: &[R]) -> Result<(usize, usize)> {
    let Some(first) = rows.first() else {
        return Err(Error::InvalidDimension {
            arg,
            dim: "rows",
            value: 0,
        });
    };
    if let Some((row, got)) = first_ragged_row(rows) {
        return Err(Error::Ragged {
            arg,
            row,
            expected: first.as_ref().len(),
            got,
        });
    }
    let ncols = first.as_ref().len();
    if ncols == 0 {
        return Err(Error::InvalidDimension {
            arg,
            dim: "columns",
            value: 0,
        });
    }
    Ok((rows.len(), ncols))
}

/// Validate two 2-D inputs that must share a shape, returning that shape
pub fn paired_dims<T, R: AsRef<[T]>>(
    arg_a: &'static str,
    a: &[R],
    arg_b: &'static str,
    b: &[R],
) -> Result<(usize, usize)> {
    let (rows, cols) = dims(arg_a, a)?;
    let (rows_b, cols_b) = dims(arg_b, b)?;
    if rows_b != rows {
        return Err(Error::invalid_argument(
            arg_b,
            format!("number of rows ({rows_b}) does not match number of rows in '{arg_a}' ({rows})"),
        ));
    }
    if cols_b != cols {
        return Err(Error::invalid_argument(
            arg_b,
            format!(
                "number of columns ({cols_b}) does not match number of columns in '{arg_a}' ({cols})"
            ),
        ));
    }
    Ok((rows, cols))
}

fn first_ragged_row<T, R: AsRef<[T]>>(rows: &[R]) -> Option<(usize, usize)> {
    let ncols = rows.first()?.as_ref().len();
    rows.iter()
        .map(|r| r.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len != ncols)
}
