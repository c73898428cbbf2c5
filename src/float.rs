use std::fmt::{Debug, Display};

use num_traits::{Float as NumFloat, FloatConst, FromPrimitive};

/// Primitive floating-point element type of a [`DualValue`](crate::DualValue).
///
/// Implemented for `f32` and `f64` only; the dual type itself is not a `Float`
/// because its derivative vector is heap allocated.
pub trait Float:
    NumFloat + FloatConst + FromPrimitive + Copy + Send + Sync + Default + Debug + Display + 'static
{
    /// Convert an `i32` exponent into this float type.
    #[inline]
    fn from_exponent(n: i32) -> Self {
        Self::from_i32(n).unwrap_or_else(Self::nan)
    }
}

impl Float for f32 {}
impl Float for f64 {}
