//! Element trait for mapping Rust types to a matrix domain

use super::{Complex128, Domain};
use crate::error::{Error, Result};
use bytemuck::{Pod, Zeroable};
use num_traits::Zero;
use std::fmt;

/// Trait for types that can be elements of a matrix
///
/// Implemented for `f64` (real domain) and [`Complex128`] (complex domain).
///
/// # Bounds
/// - `Pod + Zeroable` - the element buffer can be reinterpreted as `f64` words
///   without copying (bytemuck)
/// - `Zero` - zero fill and the non-zero test used by sparse compression
/// - `Display` - pretty printing
pub trait Element:
    Copy
    + Clone
    + Send
    + Sync
    + Pod
    + Zeroable
    + Zero
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + 'static
{
    /// The domain this element type belongs to
    const DOMAIN: Domain;

    /// Number of `f64` words one element occupies in the raw view
    const WIDTH: usize;

    /// Promote to the complex domain (imaginary part zero for reals)
    fn promote(self) -> Complex128;

    /// View an element buffer as raw `f64` words
    #[inline]
    fn as_raw(data: &[Self]) -> &[f64] {
        bytemuck::cast_slice(data)
    }

    /// Copy raw `f64` words into an element buffer
    ///
    /// For complex elements the input must be interleaved and of even length.
    fn from_raw(arg: &'static str, raw: &[f64]) -> Result<Vec<Self>> {
        if raw.len() % Self::WIDTH != 0 {
            return Err(Error::invalid_argument(
                arg,
                format!(
                    "interleaved {} data must have a length divisible by {}, got {}",
                    Self::DOMAIN,
                    Self::WIDTH,
                    raw.len()
                ),
            ));
        }
        bytemuck::try_cast_slice::<f64, Self>(raw)
            .map(<[Self]>::to_vec)
            .map_err(|e| Error::invalid_argument(arg, e.to_string()))
    }
}

impl Element for f64 {
    const DOMAIN: Domain = Domain::Real;
    const WIDTH: usize = 1;

    #[inline]
    fn promote(self) -> Complex128 {
        Complex128::from(self)
    }
}

impl Element for Complex128 {
    const DOMAIN: Domain = Domain::Complex;
    const WIDTH: usize = 2;

    #[inline]
    fn promote(self) -> Complex128 {
        self
    }
}

/// Bit patterns of an element buffer, one `u64` per raw `f64` word
#[inline]
pub(crate) fn bits_of<T: Element>(data: &[T]) -> &[u64] {
    bytemuck::cast_slice(T::as_raw(data))
}
