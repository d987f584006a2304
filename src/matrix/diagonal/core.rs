//! Core diagonal implementation: struct, creation, getters

use crate::dtype::{Complex128, Element};
use crate::error::{Error, Result, check_dims};
use crate::matrix::format::{MatrixStorage, Shape, fmt_rows};
use crate::matrix::memory::{fit_to, zip_complex};

/// Diagonal matrix storing only its leading diagonal run
///
/// Entries past the stored run, and every off-diagonal entry, are zero.
#[derive(Debug, Clone)]
pub struct DiagonalMatrix<T: Element> {
    pub(crate) data: Vec<T>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl<T: Element> DiagonalMatrix<T> {
    /// Square matrix with `values` on the diagonal
    pub fn new(values: &[T]) -> Result<Self> {
        let n = values.len();
        check_dims("diagonal", n, n)?;
        Ok(Self {
            data: values.to_vec(),
            rows: n,
            cols: n,
        })
    }

    /// `rows x cols` matrix with `values` along the leading diagonal
    ///
    /// Exactly `min(rows, cols)` values are stored: extra values are dropped
    /// and missing ones are zero.
    pub fn with_dims(values: &[T], rows: usize, cols: usize) -> Result<Self> {
        check_dims("diagonal", rows, cols)?;
        Ok(Self {
            data: fit_to(values, rows.min(cols)),
            rows,
            cols,
        })
    }

    /// `rows x cols` matrix that is zero apart from `value` at (0, 0)
    ///
    /// Only `value` is stored, so the result is not structurally equal (`==`) to
    /// the same matrix built by [`with_dims`](Self::with_dims), which stores
    /// `min(rows, cols)` values. Use [`Matrix::maths_eq`](crate::matrix::Matrix::maths_eq)
    /// to compare them.
    pub fn scalar_at_origin(value: T, rows: usize, cols: usize) -> Result<Self> {
        check_dims("diagonal", rows, cols)?;
        Ok(Self {
            data: vec![value],
            rows,
            cols,
        })
    }

    /// 1x1 matrix
    pub fn scalar(value: T) -> Self {
        Self {
            data: vec![value],
            rows: 1,
            cols: 1,
        }
    }

    /// Element at (row, col), or `None` outside the matrix
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        if row != col {
            return Some(T::zero());
        }
        Some(self.data.get(row).copied().unwrap_or_else(T::zero))
    }
}

impl DiagonalMatrix<Complex128> {
    /// Square complex matrix from real diagonal values
    pub fn from_real(values: &[f64]) -> Result<Self> {
        Ok(DiagonalMatrix::<f64>::new(values)?.to_complex())
    }

    /// `rows x cols` complex matrix from real diagonal values
    pub fn from_real_with_dims(values: &[f64], rows: usize, cols: usize) -> Result<Self> {
        Ok(DiagonalMatrix::<f64>::with_dims(values, rows, cols)?.to_complex())
    }

    /// Square complex matrix from separate real and imaginary diagonals
    pub fn from_split(re: &[f64], im: &[f64]) -> Result<Self> {
        if im.len() != re.len() {
            return Err(Error::length_mismatch("imag", re.len(), im.len()));
        }
        Self::new(&zip_complex(re, im))
    }

    /// `rows x cols` complex matrix from separate real and imaginary diagonals
    pub fn from_split_with_dims(re: &[f64], im: &[f64], rows: usize, cols: usize) -> Result<Self> {
        if im.len() != re.len() {
            return Err(Error::length_mismatch("imag", re.len(), im.len()));
        }
        Self::with_dims(&zip_complex(re, im), rows, cols)
    }
}

impl<T: Element> MatrixStorage for DiagonalMatrix<T> {
    type Elem = T;

    fn shape(&self) -> Shape {
        Shape::Diagonal
    }

    fn dims(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T: Element> std::fmt::Display for DiagonalMatrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_rows(f, self.dims(), |r, c| self.get(r, c).unwrap_or_else(T::zero))
    }
}
