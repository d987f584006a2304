//! # numat
//!
//! **Storage and type layer for real and complex matrices.**
//!
//! numat defines how matrices sit in memory, validates them at construction,
//! converts between representations, and judges equality across them. The
//! buffers it hands out use the layouts native numeric backends expect.
//!
//! ## Features
//!
//! - **Dense**: one column-major buffer
//! - **Diagonal**: only the leading diagonal is stored
//! - **Sparse**: CSC (Compressed Sparse Column) with `i64` indices
//! - **Domains**: `f64` and [`Complex128`](dtype::Complex128), stored as
//!   interleaved `[re, im, ...]` words
//! - **Equality**: structural (`==`), fuzzy ([`FuzzyEq`](matrix::FuzzyEq)) and
//!   mathematical ([`Matrix::maths_eq`](matrix::Matrix::maths_eq))
//!
//! ## Quick Start
//!
//! ```rust
//! use numat::prelude::*;
//!
//! let dense = DenseMatrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
//! assert_eq!(dense.raw(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
//!
//! let sparse = dense.to_sparse()?;
//! assert_eq!(sparse.to_dense(), dense);
//!
//! let real = Matrix::from(DenseMatrix::scalar(5.0));
//! let complex = Matrix::from(DenseMatrix::scalar(Complex128::new(5.0, 0.0)));
//! assert_ne!(real, complex);
//! assert!(real.maths_eq(&complex));
//! # Ok::<(), numat::error::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod dtype;
pub mod error;
pub mod fuzzy;
pub mod matrix;
pub mod validate;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{Complex128, Domain, Element};
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::fuzzy::Tolerance;
    pub use crate::matrix::{
        CscMatrix, DenseMatrix, DiagonalMatrix, FuzzyEq, Matrix, MatrixStorage, Shape,
    };
}
