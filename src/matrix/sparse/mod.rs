//! CSC (Compressed Sparse Column) storage

mod conversion;
mod core;

pub use core::CscMatrix;
