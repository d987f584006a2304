//! Diagonal conversion: to_dense, to_complex

use super::DiagonalMatrix;
use crate::dtype::{Complex128, Element};
use crate::matrix::dense::DenseMatrix;
use crate::matrix::memory::promote_all;

impl<T: Element> DiagonalMatrix<T> {
    /// Expand into a dense column-major matrix
    ///
    /// Stored value `k` lands at element index `k * (rows + 1)`.
    pub fn to_dense(&self) -> DenseMatrix<T> {
        let mut dense = DenseMatrix::zeroed(self.rows, self.cols);
        let stride = self.rows + 1;
        for (k, &v) in self.data.iter().enumerate() {
            dense.data[k * stride] = v;
        }
        dense
    }

    /// Copy into the complex domain with zero imaginary parts
    pub fn to_complex(&self) -> DiagonalMatrix<Complex128> {
        DiagonalMatrix {
            data: promote_all(&self.data),
            rows: self.rows,
            cols: self.cols,
        }
    }
}
