//! Dense conversion: to_complex, to_sparse

use super::DenseMatrix;
use crate::dtype::{Complex128, Element};
use crate::error::Result;
use crate::matrix::memory::promote_all;
use crate::matrix::sparse::CscMatrix;

impl<T: Element> DenseMatrix<T> {
    /// Copy into the complex domain with zero imaginary parts
    ///
    /// A complex matrix converts to an equal copy of itself.
    pub fn to_complex(&self) -> DenseMatrix<Complex128> {
        DenseMatrix {
            data: promote_all(&self.data),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Dense view of a dense matrix: an equal copy
    pub fn to_dense(&self) -> DenseMatrix<T> {
        self.clone()
    }

    /// Compress into CSC storage
    ///
    /// Fails for an all-zero matrix, which has no sparse representation.
    pub fn to_sparse(&self) -> Result<CscMatrix<T>> {
        let rows = self.rows;
        CscMatrix::compress("data", rows, self.cols, |r, c| self.data[c * rows + r])
    }
}
