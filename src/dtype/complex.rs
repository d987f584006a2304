//! Complex element type for the complex matrix domain
//!
//! # Storage Format
//!
//! Complex numbers are stored in interleaved format (re, im, re, im...).
//! `Complex128` is `#[repr(C)]` and `Pod`, so a `&[Complex128]` can be viewed as
//! a `&[f64]` of twice the length without copying. That view is the buffer
//! handed to native kernels.
//!
//! # Examples
//!
//! ```
//! use numat::dtype::Complex128;
//!
//! let z = Complex128::new(3.0, 4.0);
//! assert_eq!(z.magnitude(), 5.0);
//!
//! let raw: &[f64] = bytemuck::cast_slice(std::slice::from_ref(&z));
//! assert_eq!(raw, &[3.0, 4.0]);
//! ```

use bytemuck::{Pod, Zeroable};
use num_traits::Zero;
use std::fmt;
use std::ops::Add;

/// 128-bit complex number with f64 real and imaginary parts
///
/// Memory layout: f64 × 2, interleaved format.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Complex128 {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex128 {
    /// Zero complex number
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// One (real unit)
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Imaginary unit i
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Create a new complex number
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Magnitude (absolute value): |z| = sqrt(re² + im²)
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Complex conjugate: conj(a + bi) = a - bi
    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
}

impl Add for Complex128 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Zero for Complex128 {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    /// Zero when both components are zero (either sign)
    #[inline]
    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl fmt::Display for Complex128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im.is_sign_negative() { '-' } else { '+' };
        match f.precision() {
            Some(p) => write!(f, "{:.*} {} {:.*}i", p, self.re, sign, p, self.im.abs()),
            None => write!(f, "{} {} {}i", self.re, sign, self.im.abs()),
        }
    }
}

impl From<f64> for Complex128 {
    #[inline]
    fn from(re: f64) -> Self {
        Self { re, im: 0.0 }
    }
}

impl From<(f64, f64)> for Complex128 {
    #[inline]
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}
