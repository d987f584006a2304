//! Structural, fuzzy and mathematical equality
//!
//! - Structural (`==`, `Hash`): same shape, domain and dims, and bit-identical
//!   buffers. `0.0` and `-0.0` differ; a `NaN` equals the same `NaN` payload.
//! - Fuzzy ([`FuzzyEq`]): the same structure with raw values compared under a
//!   [`Tolerance`].
//! - Mathematical ([`Matrix::maths_eq`]): both sides promoted to dense in their
//!   common domain, then compared fuzzily.

use std::hash::{Hash, Hasher};

use log::trace;

use super::{CscMatrix, DenseMatrix, DiagonalMatrix, Matrix, MatrixStorage};
use crate::dtype::{Element, bits_of};
use crate::fuzzy::Tolerance;

/// Tolerance-bounded equality between values of the same type
pub trait FuzzyEq {
    /// Compare under an explicit tolerance
    fn fuzzy_eq_with(&self, other: &Self, tol: Tolerance) -> bool;

    /// Compare under the default tolerance
    #[inline]
    fn fuzzy_eq(&self, other: &Self) -> bool {
        self.fuzzy_eq_with(other, Tolerance::default())
    }
}

impl<T: Element> PartialEq for DenseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dims() == other.dims() && bits_of(&self.data) == bits_of(&other.data)
    }
}

impl<T: Element> Eq for DenseMatrix<T> {}

impl<T: Element> Hash for DenseMatrix<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dims().hash(state);
        bits_of(&self.data).hash(state);
    }
}

impl<T: Element> FuzzyEq for DenseMatrix<T> {
    fn fuzzy_eq_with(&self, other: &Self, tol: Tolerance) -> bool {
        self.dims() == other.dims() && tol.all_close(self.raw(), other.raw())
    }
}

impl<T: Element> PartialEq for DiagonalMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dims() == other.dims() && bits_of(&self.data) == bits_of(&other.data)
    }
}

impl<T: Element> Eq for DiagonalMatrix<T> {}

impl<T: Element> Hash for DiagonalMatrix<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dims().hash(state);
        bits_of(&self.data).hash(state);
    }
}

impl<T: Element> FuzzyEq for DiagonalMatrix<T> {
    fn fuzzy_eq_with(&self, other: &Self, tol: Tolerance) -> bool {
        self.dims() == other.dims() && tol.all_close(self.raw(), other.raw())
    }
}

impl<T: Element> PartialEq for CscMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dims() == other.dims()
            && self.col_ptrs == other.col_ptrs
            && self.row_indices == other.row_indices
            && bits_of(&self.values) == bits_of(&other.values)
    }
}

impl<T: Element> Eq for CscMatrix<T> {}

impl<T: Element> Hash for CscMatrix<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dims().hash(state);
        self.col_ptrs.hash(state);
        self.row_indices.hash(state);
        bits_of(&self.values).hash(state);
    }
}

impl<T: Element> FuzzyEq for CscMatrix<T> {
    fn fuzzy_eq_with(&self, other: &Self, tol: Tolerance) -> bool {
        self.dims() == other.dims()
            && self.col_ptrs == other.col_ptrs
            && self.row_indices == other.row_indices
            && tol.all_close(self.raw(), other.raw())
    }
}

impl FuzzyEq for Matrix {
    fn fuzzy_eq_with(&self, other: &Self, tol: Tolerance) -> bool {
        use Matrix::*;
        match (self, other) {
            (RealDense(a), RealDense(b)) => a.fuzzy_eq_with(b, tol),
            (ComplexDense(a), ComplexDense(b)) => a.fuzzy_eq_with(b, tol),
            (RealDiagonal(a), RealDiagonal(b)) => a.fuzzy_eq_with(b, tol),
            (ComplexDiagonal(a), ComplexDiagonal(b)) => a.fuzzy_eq_with(b, tol),
            (RealSparse(a), RealSparse(b)) => a.fuzzy_eq_with(b, tol),
            (ComplexSparse(a), ComplexSparse(b)) => a.fuzzy_eq_with(b, tol),
            _ => false,
        }
    }
}

impl Matrix {
    /// Mathematical equality under the default tolerance
    ///
    /// Ignores storage shape and domain: a real diagonal `[5]` equals a complex
    /// dense `[5 + 0i]`.
    pub fn maths_eq(&self, other: &Matrix) -> bool {
        self.maths_eq_with(other, Tolerance::default())
    }

    /// Mathematical equality under an explicit tolerance
    pub fn maths_eq_with(&self, other: &Matrix, tol: Tolerance) -> bool {
        if self.dims() != other.dims() {
            return false;
        }
        let domain = self.domain().common(other.domain());
        trace!(
            "comparing {} {} with {} {} as dense {domain}",
            self.domain(),
            self.shape(),
            other.domain(),
            other.shape()
        );
        if domain.is_complex() {
            return self
                .to_complex_dense()
                .fuzzy_eq_with(&other.to_complex_dense(), tol);
        }
        match (self.to_real_dense(), other.to_real_dense()) {
            (Ok(a), Ok(b)) => a.fuzzy_eq_with(&b, tol),
            _ => false,
        }
    }
}
