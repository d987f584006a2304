//! Tolerance-bounded comparison of floating point values
//!
//! A pair of values is considered equal when their difference is within an
//! absolute bound, or within a bound relative to the larger magnitude:
//!
//! ```text
//! |a - b| <= abs  ||  |a - b| <= rel * max(|a|, |b|)
//! ```
//!
//! `NaN` never compares equal to anything. An infinity only compares equal to
//! the identical infinity.

/// Machine epsilon used to derive the default tolerances
pub const EPS: f64 = f64::EPSILON;

/// Default absolute and relative tolerance
pub const DEFAULT_TOLERANCE: f64 = 10.0 * EPS;

/// Absolute and relative error bounds for fuzzy comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Maximum absolute difference
    pub abs: f64,
    /// Maximum difference relative to the larger magnitude
    pub rel: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            abs: DEFAULT_TOLERANCE,
            rel: DEFAULT_TOLERANCE,
        }
    }
}

impl Tolerance {
    /// Create a tolerance from explicit bounds
    #[inline]
    pub const fn new(abs: f64, rel: f64) -> Self {
        Self { abs, rel }
    }

    /// Purely absolute tolerance
    #[inline]
    pub const fn absolute(abs: f64) -> Self {
        Self { abs, rel: 0.0 }
    }

    /// Purely relative tolerance
    #[inline]
    pub const fn relative(rel: f64) -> Self {
        Self { abs: 0.0, rel }
    }

    /// Compare two values under this tolerance
    #[inline]
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return false;
        }
        // identical values, including infinities of the same sign
        if a == b {
            return true;
        }
        if a.is_infinite() || b.is_infinite() {
            return false;
        }
        let diff = (a - b).abs();
        if diff <= self.abs {
            return true;
        }
        diff <= self.rel * a.abs().max(b.abs())
    }

    /// Compare two slices element-wise; slices of different length never match
    pub fn all_close(&self, a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.is_close(x, y))
    }
}

/// Compare two values under the default tolerance
#[inline]
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    Tolerance::default().is_close(a, b)
}

/// Compare two slices under the default tolerance
#[inline]
pub fn fuzzy_eq_slice(a: &[f64], b: &[f64]) -> bool {
    Tolerance::default().all_close(a, b)
}
