//! Error types for numat

use crate::dtype::Domain;
use thiserror::Error;

/// Result type alias using numat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classes of failure, independent of the concrete variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Structurally impossible or inconsistent input
    IllegalArgument,
    /// Two operands whose dimensions do not agree
    NonConformance,
}

/// Errors that can occur while constructing or converting matrices
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid argument provided to a constructor
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Non-positive row or column count
    #[error("Illegal number of {dim} specified for '{arg}'. Value given was {value}")]
    InvalidDimension {
        /// The argument name
        arg: &'static str,
        /// "rows" or "columns"
        dim: &'static str,
        /// The rejected value
        value: usize,
    },

    /// A 2-D input whose rows differ in length
    #[error("'{arg}' is ragged: row 0 has {expected} elements, row {row} has {got}")]
    Ragged {
        /// The argument name
        arg: &'static str,
        /// Index of the first offending row
        row: usize,
        /// Length of row 0
        expected: usize,
        /// Length of the offending row
        got: usize,
    },

    /// A buffer whose length does not commute with the declared shape
    #[error("Length of '{arg}' does not commute with the declared shape: expected {expected}, got {got}")]
    LengthMismatch {
        /// The argument name
        arg: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// An index outside its permitted range
    #[error("Illegal value in '{arg}' at position {position}: {value} is outside [0, {bound})")]
    IndexOutOfBounds {
        /// The argument name
        arg: &'static str,
        /// Position of the offending entry
        position: usize,
        /// The offending value
        value: i64,
        /// Exclusive upper bound
        bound: usize,
    },

    /// A pointer array that decreases or starts below zero
    #[error("Illegal value in '{arg}' at position {position}: {value} must be non-negative and ascending")]
    NonAscending {
        /// The argument name
        arg: &'static str,
        /// Position of the offending entry
        position: usize,
        /// The offending value
        value: i64,
    },

    /// Sparse content without a single non-zero value
    #[error("'{arg}' has no non-zero values. Blank sparse matrices are not allowed")]
    AllZero {
        /// The argument name
        arg: &'static str,
    },

    /// Attempt to view complex data as real
    #[error("Cannot convert {from} space type to {to} space")]
    DomainDemotion {
        /// Domain of the source
        from: Domain,
        /// Requested domain
        to: Domain,
    },

    /// Bandwidth that cannot describe a band structure of the given order
    #[error("Invalid bandwidth {bandwidth} for a matrix of order {order}: must be odd, positive and at most {max}")]
    InvalidBandwidth {
        /// The rejected bandwidth
        bandwidth: i64,
        /// Order of the square input
        order: usize,
        /// Largest meaningful bandwidth
        max: usize,
    },

    /// Operands whose dimensions do not agree
    #[error("Non-conformant operands: {lhs:?} vs {rhs:?}")]
    NonConformant {
        /// Left-hand side [rows, cols]
        lhs: [usize; 2],
        /// Right-hand side [rows, cols]
        rhs: [usize; 2],
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a length mismatch error
    pub fn length_mismatch(arg: &'static str, expected: usize, got: usize) -> Self {
        Self::LengthMismatch { arg, expected, got }
    }

    /// Which class of failure this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NonConformant { .. } => ErrorKind::NonConformance,
            _ => ErrorKind::IllegalArgument,
        }
    }

    /// Returns true for every construction or conversion failure
    #[inline]
    pub fn is_illegal_argument(&self) -> bool {
        self.kind() == ErrorKind::IllegalArgument
    }
}

/// Reject zero row or column counts, returning the logical element count
///
/// The count must also fit in a `usize`.
pub(crate) fn check_dims(arg: &'static str, rows: usize, cols: usize) -> Result<usize> {
    if rows < 1 {
        return Err(Error::InvalidDimension {
            arg,
            dim: "rows",
            value: rows,
        });
    }
    if cols < 1 {
        return Err(Error::InvalidDimension {
            arg,
            dim: "columns",
            value: cols,
        });
    }
    rows.checked_mul(cols).ok_or_else(|| {
        Error::invalid_argument(arg, format!("{rows}x{cols} elements overflow usize"))
    })
}
