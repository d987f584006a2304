//! Matrix storage shapes and the closed `Matrix` sum type
//!
//! Three storage shapes, each generic over its element type:
//!
//! - [`DenseMatrix`]: every element, column-major
//! - [`DiagonalMatrix`]: the leading diagonal only
//! - [`CscMatrix`]: compressed sparse column
//!
//! [`Matrix`] closes over {dense, diagonal, sparse} x {real, complex} for code
//! that handles any matrix at runtime.

mod dense;
mod diagonal;
mod equality;
mod format;
pub(crate) mod memory;
mod sparse;

pub use dense::DenseMatrix;
pub use diagonal::DiagonalMatrix;
pub use equality::FuzzyEq;
pub use format::{MatrixStorage, Shape};
pub use sparse::CscMatrix;

use crate::dtype::{Complex128, Domain};
use crate::error::{Error, Result};

/// Real dense matrix
pub type RealDenseMatrix = DenseMatrix<f64>;
/// Complex dense matrix
pub type ComplexDenseMatrix = DenseMatrix<Complex128>;
/// Real diagonal matrix
pub type RealDiagonalMatrix = DiagonalMatrix<f64>;
/// Complex diagonal matrix
pub type ComplexDiagonalMatrix = DiagonalMatrix<Complex128>;
/// Real CSC matrix
pub type RealSparseMatrix = CscMatrix<f64>;
/// Complex CSC matrix
pub type ComplexSparseMatrix = CscMatrix<Complex128>;

/// Any matrix: one variant per storage shape and domain
///
/// `==` is structural, so operands in different variants never compare equal;
/// use [`Matrix::maths_eq`] to compare values across variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Matrix {
    /// Real dense
    RealDense(DenseMatrix<f64>),
    /// Complex dense
    ComplexDense(DenseMatrix<Complex128>),
    /// Real diagonal
    RealDiagonal(DiagonalMatrix<f64>),
    /// Complex diagonal
    ComplexDiagonal(DiagonalMatrix<Complex128>),
    /// Real CSC
    RealSparse(CscMatrix<f64>),
    /// Complex CSC
    ComplexSparse(CscMatrix<Complex128>),
}

/// Evaluate `$body` with `$m` bound to the concrete matrix of any variant
macro_rules! dispatch_matrix {
    ($matrix:expr, $m:ident => $body:expr) => {
        match $matrix {
            Matrix::RealDense($m) => $body,
            Matrix::ComplexDense($m) => $body,
            Matrix::RealDiagonal($m) => $body,
            Matrix::ComplexDiagonal($m) => $body,
            Matrix::RealSparse($m) => $body,
            Matrix::ComplexSparse($m) => $body,
        }
    };
}

impl Matrix {
    /// Returns the numeric domain
    pub fn domain(&self) -> Domain {
        dispatch_matrix!(self, m => m.domain())
    }

    /// Returns the storage shape
    pub fn shape(&self) -> Shape {
        dispatch_matrix!(self, m => m.shape())
    }

    /// Returns the dimensions as [rows, cols]
    pub fn dims(&self) -> [usize; 2] {
        dispatch_matrix!(self, m => m.dims())
    }

    /// Returns the number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.dims()[0]
    }

    /// Returns the number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.dims()[1]
    }

    /// Returns the stored values as raw `f64` words
    ///
    /// Complex values are interleaved `[re, im, ...]`.
    pub fn raw(&self) -> &[f64] {
        dispatch_matrix!(self, m => m.raw())
    }

    /// Returns the memory usage in bytes (approximate)
    pub fn memory_usage(&self) -> usize {
        dispatch_matrix!(self, m => m.memory_usage())
    }

    /// Dense copy in the same domain
    pub fn to_dense(&self) -> Matrix {
        match self {
            Matrix::RealDense(m) => Matrix::RealDense(m.to_dense()),
            Matrix::RealDiagonal(m) => Matrix::RealDense(m.to_dense()),
            Matrix::RealSparse(m) => Matrix::RealDense(m.to_dense()),
            Matrix::ComplexDense(m) => Matrix::ComplexDense(m.to_dense()),
            Matrix::ComplexDiagonal(m) => Matrix::ComplexDense(m.to_dense()),
            Matrix::ComplexSparse(m) => Matrix::ComplexDense(m.to_dense()),
        }
    }

    /// Complex copy in the same storage shape
    pub fn to_complex(&self) -> Matrix {
        match self {
            Matrix::RealDense(m) => Matrix::ComplexDense(m.to_complex()),
            Matrix::ComplexDense(m) => Matrix::ComplexDense(m.to_complex()),
            Matrix::RealDiagonal(m) => Matrix::ComplexDiagonal(m.to_complex()),
            Matrix::ComplexDiagonal(m) => Matrix::ComplexDiagonal(m.to_complex()),
            Matrix::RealSparse(m) => Matrix::ComplexSparse(m.to_complex()),
            Matrix::ComplexSparse(m) => Matrix::ComplexSparse(m.to_complex()),
        }
    }

    /// Dense complex copy of any matrix
    pub fn to_complex_dense(&self) -> DenseMatrix<Complex128> {
        dispatch_matrix!(self, m => m.to_dense().to_complex())
    }

    /// Dense real copy of a real matrix
    ///
    /// Complex matrices are never narrowed implicitly and return
    /// [`Error::DomainDemotion`].
    pub fn to_real_dense(&self) -> Result<DenseMatrix<f64>> {
        match self {
            Matrix::RealDense(m) => Ok(m.to_dense()),
            Matrix::RealDiagonal(m) => Ok(m.to_dense()),
            Matrix::RealSparse(m) => Ok(m.to_dense()),
            Matrix::ComplexDense(_) | Matrix::ComplexDiagonal(_) | Matrix::ComplexSparse(_) => {
                Err(Error::DomainDemotion {
                    from: Domain::Complex,
                    to: Domain::Real,
                })
            }
        }
    }

    /// Fails with [`Error::NonConformant`] unless both operands have the same dimensions
    pub fn ensure_conformant(&self, other: &Matrix) -> Result<()> {
        if self.dims() != other.dims() {
            return Err(Error::NonConformant {
                lhs: self.dims(),
                rhs: other.dims(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        dispatch_matrix!(self, m => std::fmt::Display::fmt(m, f))
    }
}

macro_rules! impl_from_storage {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Matrix {
                fn from(m: $ty) -> Self {
                    Matrix::$variant(m)
                }
            }
        )*
    };
}

impl_from_storage! {
    DenseMatrix<f64> => RealDense,
    DenseMatrix<Complex128> => ComplexDense,
    DiagonalMatrix<f64> => RealDiagonal,
    DiagonalMatrix<Complex128> => ComplexDiagonal,
    CscMatrix<f64> => RealSparse,
    CscMatrix<Complex128> => ComplexSparse,
}
