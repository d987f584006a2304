//! CSC conversion: to_dense, to_complex

use super::CscMatrix;
use crate::dtype::{Complex128, Element};
use crate::matrix::dense::DenseMatrix;
use crate::matrix::memory::promote_all;

impl<T: Element> CscMatrix<T> {
    /// Expand into a dense column-major matrix
    ///
    /// Entry `i` of column `c` lands at `row_indices[i] + c * rows`.
    pub fn to_dense(&self) -> DenseMatrix<T> {
        let mut dense = DenseMatrix::zeroed(self.rows, self.cols);
        for c in 0..self.cols {
            for i in self.col_range(c) {
                dense.data[self.row_indices[i] as usize + c * self.rows] = self.values[i];
            }
        }
        dense
    }

    /// Copy into the complex domain, keeping the sparsity pattern
    pub fn to_complex(&self) -> CscMatrix<Complex128> {
        CscMatrix {
            col_ptrs: self.col_ptrs.clone(),
            row_indices: self.row_indices.clone(),
            values: promote_all(&self.values),
            rows: self.rows,
            cols: self.cols,
            max_col_entries: self.max_col_entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::format::MatrixStorage;

    #[test]
    fn test_to_dense() {
        let csc = CscMatrix::from_csc(
            &[0, 2, 4, 7, 7],
            &[0, 1, 0, 2, 1, 2, 3],
            &[1.0, 3.0, 2.0, 5.0, 4.0, 6.0, 7.0],
            4,
            4,
        )
        .unwrap();
        let dense = csc.to_dense();
        let expected = DenseMatrix::from_rows(&[
            [1.0, 2.0, 0.0, 0.0],
            [3.0, 0.0, 4.0, 0.0],
            [0.0, 5.0, 6.0, 0.0],
            [0.0, 0.0, 7.0, 0.0],
        ])
        .unwrap();
        assert_eq!(dense, expected);
    }

    #[test]
    fn test_to_complex() {
        let csc = CscMatrix::from_rows(&[[0.0, 3.0], [-1.0, 0.0]]).unwrap();
        let z = csc.to_complex();
        assert_eq!(z.col_ptrs(), csc.col_ptrs());
        assert_eq!(z.row_indices(), csc.row_indices());
        assert_eq!(z.raw(), &[-1.0, 0.0, 3.0, 0.0]);
        assert_eq!(z.to_complex(), z);
        assert_eq!(z.to_dense(), csc.to_dense().to_complex());
    }
}
