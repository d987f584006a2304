//! Numeric domains for numat matrices
//!
//! A matrix is either real (`f64` elements) or complex ([`Complex128`]
//! elements). The [`Domain`] enum is the runtime tag, and [`Element`] connects
//! the two element types to it.

pub mod complex;
mod element;

pub use complex::Complex128;
pub use element::Element;
pub(crate) use element::bits_of;

use std::fmt;

/// Numeric domain of a matrix
///
/// Promotion only ever goes from `Real` to `Complex`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    /// Entries are real numbers
    Real,
    /// Entries are complex numbers, stored interleaved
    Complex,
}

impl Domain {
    /// Returns true for the complex domain
    #[inline]
    pub fn is_complex(self) -> bool {
        matches!(self, Domain::Complex)
    }

    /// Smallest domain able to hold values of both `self` and `other`
    #[inline]
    pub fn common(self, other: Domain) -> Domain {
        self.max(other)
    }

    /// Returns the domain name as a string
    pub fn name(self) -> &'static str {
        match self {
            Domain::Real => "real",
            Domain::Complex => "complex",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
