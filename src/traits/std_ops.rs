use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::dual_value::DualValue;
use crate::float::Float;

// ──────────────────────────────────────────────
//  DualValue<F> ⊕ DualValue<F>
// ──────────────────────────────────────────────

// Each binary operator is generated for the four owned/borrowed operand
// combinations. All of them go through the checked method and panic on a
// derivative shape violation.
macro_rules! impl_dual_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<'a, 'b, F: Float> $trait<&'b DualValue<F>> for &'a DualValue<F> {
            type Output = DualValue<F>;
            #[inline]
            fn $method(self, rhs: &'b DualValue<F>) -> DualValue<F> {
                self.$checked(rhs).unwrap_or_else(|e| {
                    panic!("DualValue::{}: {}", stringify!($method), e)
                })
            }
        }

        impl<F: Float> $trait for DualValue<F> {
            type Output = DualValue<F>;
            #[inline]
            fn $method(self, rhs: DualValue<F>) -> DualValue<F> {
                (&self).$method(&rhs)
            }
        }

        impl<'b, F: Float> $trait<&'b DualValue<F>> for DualValue<F> {
            type Output = DualValue<F>;
            #[inline]
            fn $method(self, rhs: &'b DualValue<F>) -> DualValue<F> {
                (&self).$method(rhs)
            }
        }

        impl<'a, F: Float> $trait<DualValue<F>> for &'a DualValue<F> {
            type Output = DualValue<F>;
            #[inline]
            fn $method(self, rhs: DualValue<F>) -> DualValue<F> {
                self.$method(&rhs)
            }
        }
    };
}

impl_dual_binop!(Add, add, checked_add);
impl_dual_binop!(Sub, sub, checked_sub);
impl_dual_binop!(Mul, mul, checked_mul);
impl_dual_binop!(Div, div, checked_div);

impl<F: Float> Neg for &DualValue<F> {
    type Output = DualValue<F>;
    #[inline]
    fn neg(self) -> DualValue<F> {
        self.scale(-F::one())
    }
}

impl<F: Float> Neg for DualValue<F> {
    type Output = DualValue<F>;
    #[inline]
    fn neg(self) -> DualValue<F> {
        -&self
    }
}

macro_rules! impl_dual_assign {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<F: Float> $trait for DualValue<F> {
            #[inline]
            fn $method(&mut self, rhs: DualValue<F>) {
                *self = &*self $op &rhs;
            }
        }

        impl<'b, F: Float> $trait<&'b DualValue<F>> for DualValue<F> {
            #[inline]
            fn $method(&mut self, rhs: &'b DualValue<F>) {
                *self = &*self $op rhs;
            }
        }
    };
}

impl_dual_assign!(AddAssign, add_assign, +);
impl_dual_assign!(SubAssign, sub_assign, -);
impl_dual_assign!(MulAssign, mul_assign, *);
impl_dual_assign!(DivAssign, div_assign, /);

// ──────────────────────────────────────────────
//  Mixed ops: DualValue<F> with primitive floats
// ──────────────────────────────────────────────

// Generated for f32 and f64 because `impl Add<DualValue<F>> for F` is not
// allowed for a generic `F`.
macro_rules! impl_dual_scalar_ops {
    ($f:ty) => {
        impl Add<$f> for &DualValue<$f> {
            type Output = DualValue<$f>;
            #[inline]
            fn add(self, rhs: $f) -> DualValue<$f> {
                self.offset(rhs)
            }
        }

        impl Add<$f> for DualValue<$f> {
            type Output = DualValue<$f>;
            #[inline]
            fn add(self, rhs: $f) -> DualValue<$f> {
                DualValue {
                    value: self.value + rhs,
                    derivative: self.derivative,
                }
            }
        }

        impl Add<&DualValue<$f>> for $f {
            type Output = DualValue<$f>;
            #[inline]
            fn add(self, rhs: &DualValue<$f>) -> DualValue<$f> {
                rhs.offset(self)
            }
        }

        impl Add<DualValue<$f>> for $f {
            type Output = DualValue<$f>;
            #[inline]
            fn add(self, rhs: DualValue<$f>) -> DualValue<$f> {
                rhs + self
            }
        }

        impl Sub<$f> for &DualValue<$f> {
            type Output = DualValue<$f>;
            #[inline]
            fn sub(self, rhs: $f) -> DualValue<$f> {
                self.offset(-rhs)
            }
        }

        impl Sub<$f> for DualValue<$f> {
            type Output = DualValue<$f>;
            #[inline]
            fn sub(self, rhs: $f) -> DualValue<$f> {
                DualValue {
                    value: self.value - rhs,
                    derivative: self.derivative,
                }
            }
        }

        impl Sub<&DualValue<$f>> for $f {
            type Output = DualValue<$f>;
            #[inline]
            fn sub(self, rhs: &DualValue<$f>) -> DualValue<$f> {
                rhs.subtract_from(self)
            }
        }

        impl Sub<DualValue<$f>> for $f {
            type Output = DualValue<$f>;
            #[inline]
            fn sub(self, rhs: DualValue<$f>) -> DualValue<$f> {
                rhs.subtract_from(self)
            }
        }

        impl Mul<$f> for &DualValue<$f> {
            type Output = DualValue<$f>;
            #[inline]
            fn mul(self, rhs: $f) -> DualValue<$f> {
                self.scale(rhs)
            }
        }

        impl Mul<$f> for DualValue<$f> {
            type Output = DualValue<$f>;
            #[inline]
            fn mul(self, rhs: $f) -> DualValue<$f> {
                self.scale(rhs)
            }
        }

        impl Mul<&DualValue<$f>> for $f {
            type Output = DualValue<$f>;
            #[inline]
            fn mul(self, rhs: &DualValue<$f>) -> DualValue<$f> {
                rhs.scale(self)
            }
        }

        impl Mul<DualValue<$f>> for $f {
            type Output = DualValue<$f>;
            #[inline]
            fn mul(self, rhs: DualValue<$f>) -> DualValue<$f> {
                rhs.scale(self)
            }
        }

        impl Div<$f> for &DualValue<$f> {
            type Output = DualValue<$f>;
            #[inline]
            fn div(self, rhs: $f) -> DualValue<$f> {
                self.scale(1.0 / rhs)
            }
        }

        impl Div<$f> for DualValue<$f> {
            type Output = DualValue<$f>;
            #[inline]
            fn div(self, rhs: $f) -> DualValue<$f> {
                self.scale(1.0 / rhs)
            }
        }

        impl Div<&DualValue<$f>> for $f {
            type Output = DualValue<$f>;
            #[inline]
            fn div(self, rhs: &DualValue<$f>) -> DualValue<$f> {
                rhs.recip().scale(self)
            }
        }

        impl Div<DualValue<$f>> for $f {
            type Output = DualValue<$f>;
            #[inline]
            fn div(self, rhs: DualValue<$f>) -> DualValue<$f> {
                rhs.recip().scale(self)
            }
        }

        impl AddAssign<$f> for DualValue<$f> {
            #[inline]
            fn add_assign(&mut self, rhs: $f) {
                self.value += rhs;
            }
        }

        impl SubAssign<$f> for DualValue<$f> {
            #[inline]
            fn sub_assign(&mut self, rhs: $f) {
                self.value -= rhs;
            }
        }

        impl MulAssign<$f> for DualValue<$f> {
            #[inline]
            fn mul_assign(&mut self, rhs: $f) {
                *self = self.scale(rhs);
            }
        }

        impl DivAssign<$f> for DualValue<$f> {
            #[inline]
            fn div_assign(&mut self, rhs: $f) {
                *self = self.scale(1.0 / rhs);
            }
        }
    };
}

impl_dual_scalar_ops!(f32);
impl_dual_scalar_ops!(f64);

// ──────────────────────────────────────────────
//  Comparisons: primal value only
// ──────────────────────────────────────────────

impl<F: Float> PartialEq for DualValue<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<F: Float> PartialOrd for DualValue<F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}
