//! Core CSC implementation: struct, creation, getters

use log::debug;

use crate::dtype::{Complex128, Element};
use crate::error::{Error, Result, check_dims};
use crate::matrix::format::{MatrixStorage, Shape, fmt_rows};
use crate::matrix::memory::zip_complex;
use crate::validate;

/// CSC (Compressed Sparse Column) sparse matrix
///
/// The entries of column `c` are `values[col_ptrs[c]..col_ptrs[c + 1]]`, with
/// their rows in the matching run of `row_indices`. At least one stored value
/// is non-zero.
#[derive(Debug, Clone)]
pub struct CscMatrix<T: Element> {
    pub(crate) col_ptrs: Vec<i64>,
    pub(crate) row_indices: Vec<i64>,
    pub(crate) values: Vec<T>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) max_col_entries: usize,
}

impl<T: Element> CscMatrix<T> {
    /// Compress row-major 2-D input, keeping only the non-zero elements
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let (nrows, ncols) = validate::dims("data", rows)?;
        Self::compress("data", nrows, ncols, |r, c| rows[r].as_ref()[c])
    }

    /// Column-major sweep over a logical matrix of validated dimensions
    ///
    /// Non-zeros are counted first so every buffer is allocated at its final size.
    pub(crate) fn compress(
        arg: &'static str,
        rows: usize,
        cols: usize,
        at: impl Fn(usize, usize) -> T,
    ) -> Result<Self> {
        let mut nnz = 0;
        let mut max_col_entries = 0;
        for c in 0..cols {
            let in_col = (0..rows).filter(|&r| !at(r, c).is_zero()).count();
            nnz += in_col;
            max_col_entries = max_col_entries.max(in_col);
        }
        if nnz == 0 {
            return Err(Error::AllZero { arg });
        }

        let mut col_ptrs = Vec::with_capacity(cols + 1);
        let mut row_indices = Vec::with_capacity(nnz);
        let mut values = Vec::with_capacity(nnz);
        for c in 0..cols {
            col_ptrs.push(values.len() as i64);
            for r in 0..rows {
                let v = at(r, c);
                if !v.is_zero() {
                    row_indices.push(r as i64);
                    values.push(v);
                }
            }
        }
        col_ptrs.push(nnz as i64);

        debug!(
            "compressed {rows}x{cols} {} matrix to CSC: nnz={nnz}, max column entries={max_col_entries}",
            T::DOMAIN
        );

        Ok(Self {
            col_ptrs,
            row_indices,
            values,
            rows,
            cols,
            max_col_entries,
        })
    }

    /// Create a CSC matrix from its component buffers
    ///
    /// Checks, in order: positive dimensions, `col_ptrs` length, `row_indices`
    /// length, `col_ptrs` starting at 0 and ascending, `col_ptrs[cols] == nnz`,
    /// every row index in `[0, rows)` and unique within its column, and at least
    /// one non-zero value. Row indices within a column need not be sorted.
    pub fn from_csc(
        col_ptrs: &[i64],
        row_indices: &[i64],
        values: &[T],
        rows: usize,
        cols: usize,
    ) -> Result<Self> {
        check_dims("dims", rows, cols)?;

        if col_ptrs.len().checked_sub(1) != Some(cols) {
            return Err(Error::length_mismatch(
                "col_ptrs",
                cols.saturating_add(1),
                col_ptrs.len(),
            ));
        }
        if row_indices.len() != values.len() {
            return Err(Error::length_mismatch(
                "row_indices",
                values.len(),
                row_indices.len(),
            ));
        }

        let nnz = values.len();
        if col_ptrs[0] > 0 {
            return Err(Error::invalid_argument(
                "col_ptrs",
                format!("first entry must be 0, got {}", col_ptrs[0]),
            ));
        }
        let mut max_col_entries = 0;
        let mut prev = 0;
        for (position, &value) in col_ptrs.iter().enumerate() {
            if value < prev {
                return Err(Error::NonAscending {
                    arg: "col_ptrs",
                    position,
                    value,
                });
            }
            if position > 0 {
                max_col_entries = max_col_entries.max((value - prev) as usize);
            }
            prev = value;
        }
        if col_ptrs[cols] != nnz as i64 {
            return Err(Error::invalid_argument(
                "col_ptrs",
                format!(
                    "last entry must equal the number of stored values ({nnz}), got {}",
                    col_ptrs[cols]
                ),
            ));
        }

        for (position, &value) in row_indices.iter().enumerate() {
            if value < 0 || value as u64 >= rows as u64 {
                return Err(Error::IndexOutOfBounds {
                    arg: "row_indices",
                    position,
                    value,
                    bound: rows,
                });
            }
        }

        let mut in_col = Vec::with_capacity(max_col_entries);
        for c in 0..cols {
            in_col.clear();
            let range = col_ptrs[c] as usize..col_ptrs[c + 1] as usize;
            in_col.extend_from_slice(&row_indices[range]);
            in_col.sort_unstable();
            if let Some(pair) = in_col.windows(2).find(|pair| pair[0] == pair[1]) {
                return Err(Error::invalid_argument(
                    "row_indices",
                    format!("row {} appears more than once in column {c}", pair[0]),
                ));
            }
        }

        if validate::count_nonzero_in(values) == 0 {
            return Err(Error::AllZero { arg: "values" });
        }

        Ok(Self {
            col_ptrs: col_ptrs.to_vec(),
            row_indices: row_indices.to_vec(),
            values: values.to_vec(),
            rows,
            cols,
            max_col_entries,
        })
    }

    /// Returns the column pointers
    pub fn col_ptrs(&self) -> &[i64] {
        &self.col_ptrs
    }

    /// Returns the row indices
    pub fn row_indices(&self) -> &[i64] {
        &self.row_indices
    }

    /// Returns the stored values
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the number of stored entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the largest number of entries stored in any one column
    #[inline]
    pub fn max_col_entries(&self) -> usize {
        self.max_col_entries
    }

    /// Positions of column `col`'s entries in `row_indices` and `values`
    pub(crate) fn col_range(&self, col: usize) -> std::ops::Range<usize> {
        self.col_ptrs[col] as usize..self.col_ptrs[col + 1] as usize
    }

    /// Element at (row, col), or `None` outside the matrix
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let range = self.col_range(col);
        let found = self.row_indices[range.clone()]
            .iter()
            .position(|&r| r as usize == row)
            .map(|i| self.values[range.start + i]);
        Some(found.unwrap_or_else(T::zero))
    }
}

impl CscMatrix<Complex128> {
    /// Compress real row-major input into a complex matrix, imaginary parts zero
    pub fn from_real_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        Ok(CscMatrix::<f64>::from_rows(rows)?.to_complex())
    }

    /// Compress separate real and imaginary row-major input
    ///
    /// An element is stored if either of its parts is non-zero.
    pub fn from_split_rows<R: AsRef<[f64]>>(re: &[R], im: &[R]) -> Result<Self> {
        let (rows, cols) = validate::paired_dims("real", re, "imag", im)?;
        Self::compress("real", rows, cols, |r, c| {
            Complex128::new(re[r].as_ref()[c], im[r].as_ref()[c])
        })
    }

    /// Create a complex CSC matrix with interleaved `[re, im, ...]` values
    pub fn from_interleaved(
        col_ptrs: &[i64],
        row_indices: &[i64],
        values: &[f64],
        rows: usize,
        cols: usize,
    ) -> Result<Self> {
        check_dims("dims", rows, cols)?;
        if values.len() != 2 * row_indices.len() {
            return Err(Error::length_mismatch(
                "values",
                2 * row_indices.len(),
                values.len(),
            ));
        }
        let values = Complex128::from_raw("values", values)?;
        Self::from_csc(col_ptrs, row_indices, &values, rows, cols)
    }

    /// Create a complex CSC matrix with separate real and imaginary values
    pub fn from_split(
        col_ptrs: &[i64],
        row_indices: &[i64],
        re: &[f64],
        im: &[f64],
        rows: usize,
        cols: usize,
    ) -> Result<Self> {
        check_dims("dims", rows, cols)?;
        if im.len() != re.len() {
            return Err(Error::length_mismatch("imag", re.len(), im.len()));
        }
        if row_indices.len() != re.len() {
            return Err(Error::length_mismatch(
                "row_indices",
                re.len(),
                row_indices.len(),
            ));
        }
        Self::from_csc(col_ptrs, row_indices, &zip_complex(re, im), rows, cols)
    }
}

impl<T: Element> MatrixStorage for CscMatrix<T> {
    type Elem = T;

    fn shape(&self) -> Shape {
        Shape::Sparse
    }

    fn dims(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    fn data(&self) -> &[T] {
        &self.values
    }

    fn memory_usage(&self) -> usize {
        let ptr_size = (self.cols + 1) * std::mem::size_of::<i64>();
        let index_size = self.nnz() * std::mem::size_of::<i64>();
        let value_size = std::mem::size_of_val(self.values.as_slice());
        ptr_size + index_size + value_size
    }
}

impl<T: Element> std::fmt::Display for CscMatrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_rows(f, self.dims(), |r, c| self.get(r, c).unwrap_or_else(T::zero))
    }
}
