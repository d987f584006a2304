//! Storage shape definitions and the common storage trait

use crate::dtype::{Domain, Element};

/// Matrix storage shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Every element stored, column-major
    ///
    /// Storage: O(rows * cols)
    Dense,

    /// Only the leading diagonal stored
    ///
    /// Storage: O(min(rows, cols))
    Diagonal,

    /// Compressed Sparse Column (CSC)
    ///
    /// Column pointers + row indices + values.
    /// Storage: O(2 * nnz + cols + 1)
    Sparse,
}

impl Shape {
    /// Returns the shape name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Dense => "dense",
            Shape::Diagonal => "diagonal",
            Shape::Sparse => "sparse",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Trait shared by every matrix storage
///
/// `data()` is the stored element run and `raw()` its `f64` view, which is the
/// buffer handed to native numeric code.
pub trait MatrixStorage {
    /// Element type of the stored values
    type Elem: Element;

    /// Returns the storage shape
    fn shape(&self) -> Shape;

    /// Returns the dimensions as [rows, cols]
    fn dims(&self) -> [usize; 2];

    /// Returns the number of rows
    #[inline]
    fn rows(&self) -> usize {
        self.dims()[0]
    }

    /// Returns the number of columns
    #[inline]
    fn cols(&self) -> usize {
        self.dims()[1]
    }

    /// Returns the numeric domain
    #[inline]
    fn domain(&self) -> Domain {
        Self::Elem::DOMAIN
    }

    /// Returns the stored values
    fn data(&self) -> &[Self::Elem];

    /// Returns the stored values as raw `f64` words
    #[inline]
    fn raw(&self) -> &[f64] {
        Self::Elem::as_raw(self.data())
    }

    /// Returns the memory usage in bytes (approximate)
    fn memory_usage(&self) -> usize {
        std::mem::size_of_val(self.data())
    }
}

/// Write the logical matrix row by row, one bracketed row per line
pub(crate) fn fmt_rows<T: Element>(
    f: &mut std::fmt::Formatter<'_>,
    dims: [usize; 2],
    at: impl Fn(usize, usize) -> T,
) -> std::fmt::Result {
    let [rows, cols] = dims;
    for r in 0..rows {
        if r > 0 {
            writeln!(f)?;
        }
        write!(f, "[")?;
        for c in 0..cols {
            if c > 0 {
                write!(f, ", ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{:.*}", p, at(r, c))?,
                None => write!(f, "{}", at(r, c))?,
            }
        }
        write!(f, "]")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_display() {
        assert_eq!(Shape::Dense.to_string(), "dense");
        assert_eq!(Shape::Diagonal.to_string(), "diagonal");
        assert_eq!(Shape::Sparse.to_string(), "sparse");
    }
}
