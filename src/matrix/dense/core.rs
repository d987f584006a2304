//! Core dense implementation: struct, creation, getters

use crate::dtype::{Complex128, Element};
use crate::error::{Error, Result, check_dims};
use crate::matrix::format::{MatrixStorage, Shape, fmt_rows};
use crate::matrix::memory::{pack_col_major, zip_complex};
use crate::validate;

/// Dense matrix stored as one column-major buffer
#[derive(Debug, Clone)]
pub struct DenseMatrix<T: Element> {
    pub(crate) data: Vec<T>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl<T: Element> DenseMatrix<T> {
    /// Create a dense matrix from row-major 2-D input
    ///
    /// The input must be non-empty and non-ragged.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let (nrows, ncols) = validate::dims("data", rows)?;
        Ok(Self {
            data: pack_col_major(rows, nrows, ncols),
            rows: nrows,
            cols: ncols,
        })
    }

    /// Create a dense matrix from a column-major buffer
    pub fn from_col_major(data: &[T], rows: usize, cols: usize) -> Result<Self> {
        let n = check_dims("data", rows, cols)?;
        if data.len() != n {
            return Err(Error::length_mismatch("data", n, data.len()));
        }
        Ok(Self {
            data: data.to_vec(),
            rows,
            cols,
        })
    }

    /// Create a 1x1 matrix
    pub fn scalar(value: T) -> Self {
        Self {
            data: vec![value],
            rows: 1,
            cols: 1,
        }
    }

    /// Create a 1xn row vector
    pub fn row_vector(values: &[T]) -> Result<Self> {
        Self::from_col_major(values, 1, values.len())
    }

    /// All-zero matrix of already validated dimensions
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Element at (row, col), or `None` outside the matrix
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[col * self.rows + row])
    }

    /// Returns true if every element is zero
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|v| v.is_zero())
    }
}

/// 1 for any non-zero (including `NaN`), 0 otherwise
#[inline]
fn truth(v: f64) -> f64 {
    if v != 0.0 { 1.0 } else { 0.0 }
}

impl DenseMatrix<f64> {
    /// Create a logical matrix from row-major 2-D input
    ///
    /// Every non-zero element is stored as `1.0` and every zero as `0.0`.
    pub fn logical_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let mut m = Self::from_rows(rows)?;
        m.data.iter_mut().for_each(|v| *v = truth(*v));
        Ok(m)
    }

    /// Create a logical matrix from a column-major buffer
    pub fn logical_from_col_major(data: &[f64], rows: usize, cols: usize) -> Result<Self> {
        let mut m = Self::from_col_major(data, rows, cols)?;
        m.data.iter_mut().for_each(|v| *v = truth(*v));
        Ok(m)
    }
}

impl DenseMatrix<Complex128> {
    /// Create a complex matrix from real row-major input, imaginary parts zero
    pub fn from_real_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let real = DenseMatrix::<f64>::from_rows(rows)?;
        Ok(real.to_complex())
    }

    /// Create a complex matrix from separate real and imaginary row-major input
    pub fn from_split_rows<R: AsRef<[f64]>>(re: &[R], im: &[R]) -> Result<Self> {
        let (rows, cols) = validate::paired_dims("real", re, "imag", im)?;
        let re = pack_col_major(re, rows, cols);
        let im = pack_col_major(im, rows, cols);
        Ok(Self {
            data: zip_complex(&re, &im),
            rows,
            cols,
        })
    }

    /// Create a complex matrix from a column-major `f64` buffer
    ///
    /// A buffer of `rows * cols` values is taken as the real parts; a buffer of
    /// `2 * rows * cols` values is taken as interleaved `[re, im, ...]` pairs.
    pub fn from_interleaved(data: &[f64], rows: usize, cols: usize) -> Result<Self> {
        let n = check_dims("data", rows, cols)?;
        let interleaved = n.checked_mul(2);
        let data = if data.len() == n {
            data.iter().map(|&re| Complex128::from(re)).collect()
        } else if Some(data.len()) == interleaved {
            Complex128::from_raw("data", data)?
        } else {
            return Err(Error::length_mismatch(
                "data",
                interleaved.unwrap_or(usize::MAX),
                data.len(),
            ));
        };
        Ok(Self { data, rows, cols })
    }

    /// Create a complex matrix from separate column-major real and imaginary buffers
    pub fn from_split(re: &[f64], im: &[f64], rows: usize, cols: usize) -> Result<Self> {
        let n = check_dims("real", rows, cols)?;
        if re.len() != n {
            return Err(Error::length_mismatch("real", n, re.len()));
        }
        if im.len() != n {
            return Err(Error::length_mismatch("imag", n, im.len()));
        }
        Ok(Self {
            data: zip_complex(re, im),
            rows,
            cols,
        })
    }
}

impl<T: Element> MatrixStorage for DenseMatrix<T> {
    type Elem = T;

    fn shape(&self) -> Shape {
        Shape::Dense
    }

    fn dims(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T: Element> std::fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_rows(f, self.dims(), |r, c| self.data[c * self.rows + r])
    }
}
