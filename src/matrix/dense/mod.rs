//! Dense column-major storage

mod conversion;
mod core;

pub use core::DenseMatrix;
