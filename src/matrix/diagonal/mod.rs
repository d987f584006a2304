//! Diagonal storage

mod conversion;
mod core;

pub use core::DiagonalMatrix;
