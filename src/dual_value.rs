//! Dual numbers carrying a full derivative vector.
//!
//! A [`DualValue`] holds one real value together with its partial derivatives
//! with respect to every independent variable of the current evaluation point.
//! Arithmetic propagates the derivative vector by the chain rule, so the
//! derivative of any expression built from seeded variables is exact.

use std::fmt::{self, Display};

use crate::error::AdError;
use crate::Float;

/// Forward-mode dual number with one tangent lane per independent variable.
///
/// `derivative` is `None` when the value was created without sensitivity
/// information. Such a value may be combined with plain reals and with other
/// absent values, but mixing it with a value that has a derivative is a
/// contract error ([`AdError::AbsentDerivative`]).
///
/// # Panics
///
/// The `std::ops` operators panic when the operands violate the derivative
/// contract: an absent derivative combined with a present one, or derivative
/// vectors of different lengths. Use [`checked_add`](DualValue::checked_add),
/// [`checked_sub`](DualValue::checked_sub), [`checked_mul`](DualValue::checked_mul)
/// or [`checked_div`](DualValue::checked_div) to get the [`AdError`] instead.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualValue<F: Float> {
    /// Primal value.
    pub value: F,
    /// Partial derivatives, one per independent variable.
    pub derivative: Option<Vec<F>>,
}

impl<F: Float> Display for DualValue<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if let Some(d) = &self.derivative {
            for (i, e) in d.iter().enumerate() {
                write!(f, " + {}\u{03b5}{}", e, i)?;
            }
        }
        Ok(())
    }
}

impl<F: Float> From<F> for DualValue<F> {
    #[inline]
    fn from(value: F) -> Self {
        DualValue::constant(value)
    }
}

impl<F: Float> DualValue<F> {
    /// Create a dual value with an explicit derivative vector.
    #[inline]
    pub fn new(value: F, derivative: Vec<F>) -> Self {
        DualValue {
            value,
            derivative: Some(derivative),
        }
    }

    /// Create a value with no derivative information.
    #[inline]
    pub fn constant(value: F) -> Self {
        DualValue {
            value,
            derivative: None,
        }
    }

    /// Create a constant over `n` variables: all partial derivatives are zero.
    #[inline]
    pub fn with_zero_derivative(value: F, n: usize) -> Self {
        DualValue::new(value, vec![F::zero(); n])
    }

    /// Create the `index`-th of `n` independent variables (one-hot derivative).
    #[inline]
    pub fn seeded(value: F, index: usize, n: usize) -> Self {
        debug_assert!(index < n, "seed index {} out of range for {} variables", index, n);
        DualValue::new(
            value,
            (0..n)
                .map(|k| if k == index { F::one() } else { F::zero() })
                .collect(),
        )
    }

    /// Borrow the derivative vector, if present.
    #[inline]
    pub fn derivative(&self) -> Option<&[F]> {
        self.derivative.as_deref()
    }

    /// Number of independent variables this value is differentiated against.
    #[inline]
    pub fn num_variables(&self) -> Option<usize> {
        self.derivative.as_ref().map(Vec::len)
    }

    /// Strict comparison: equal values *and* equal derivative vectors.
    ///
    /// `==` compares values only; use this when sensitivities matter too.
    pub fn same_sensitivity(&self, other: &Self) -> bool {
        self.value == other.value && self.derivative == other.derivative
    }

    /// Apply the chain rule: given `f(value)` and `f'(value)`, produce the dual result.
    #[inline]
    fn chain(&self, f_val: F, f_deriv: F) -> Self {
        DualValue {
            value: f_val,
            derivative: self
                .derivative
                .as_ref()
                .map(|d| d.iter().map(|&e| e * f_deriv).collect()),
        }
    }

    /// Combine two derivative vectors lane by lane.
    fn zip_derivatives(
        &self,
        other: &Self,
        op: impl Fn(F, F) -> F,
    ) -> Result<Option<Vec<F>>, AdError> {
        match (&self.derivative, &other.derivative) {
            (Some(a), Some(b)) => {
                if a.len() != b.len() {
                    return Err(AdError::ShapeMismatch {
                        expected: a.len(),
                        found: b.len(),
                    });
                }
                Ok(Some(a.iter().zip(b).map(|(&x, &y)| op(x, y)).collect()))
            }
            (None, None) => Ok(None),
            _ => Err(AdError::AbsentDerivative),
        }
    }

    // ── Checked arithmetic ──

    /// `self + rhs`, reporting mismatched derivative shapes.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, AdError> {
        Ok(DualValue {
            value: self.value + rhs.value,
            derivative: self.zip_derivatives(rhs, |a, b| a + b)?,
        })
    }

    /// `self - rhs`, reporting mismatched derivative shapes.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, AdError> {
        Ok(DualValue {
            value: self.value - rhs.value,
            derivative: self.zip_derivatives(rhs, |a, b| a - b)?,
        })
    }

    /// `self * rhs` (product rule), reporting mismatched derivative shapes.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, AdError> {
        let (a, b) = (self.value, rhs.value);
        Ok(DualValue {
            value: a * b,
            derivative: self.zip_derivatives(rhs, |da, db| da * b + db * a)?,
        })
    }

    /// `self / rhs` (quotient rule), reporting mismatched derivative shapes.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, AdError> {
        let (a, b) = (self.value, rhs.value);
        let inv = F::one() / b;
        Ok(DualValue {
            value: a * inv,
            derivative: self.zip_derivatives(rhs, |da, db| (da * b - a * db) * inv * inv)?,
        })
    }

    // ── Scalar arithmetic ──

    /// Add a plain real; the derivative is unchanged.
    #[inline]
    pub fn offset(&self, c: F) -> Self {
        DualValue {
            value: self.value + c,
            derivative: self.derivative.clone(),
        }
    }

    /// Multiply by a plain real.
    #[inline]
    pub fn scale(&self, c: F) -> Self {
        self.chain(self.value * c, c)
    }

    /// `c - self` for a plain real `c`.
    #[inline]
    pub fn subtract_from(&self, c: F) -> Self {
        self.chain(c - self.value, -F::one())
    }

    // ── Powers ──

    /// `self^p` for a real exponent by the general power rule
    /// `d(x^p) = p·x^(p-1)·dx`.
    ///
    /// `p == 0` yields exactly `1` with a zero derivative of the same length.
    /// Negative bases with non-integer `p` give `NaN`, as `powf` does.
    pub fn powf(&self, p: F) -> Self {
        if p == F::zero() {
            return DualValue {
                value: F::one(),
                derivative: self.derivative.as_ref().map(|d| vec![F::zero(); d.len()]),
            };
        }
        let x = self.value;
        self.chain(x.powf(p), p * x.powf(p - F::one()))
    }

    /// `self^n` for an integer exponent; same rule as [`powf`](Self::powf).
    #[inline]
    pub fn powi(&self, n: i32) -> Self {
        self.powf(F::from_exponent(n))
    }

    #[inline]
    pub fn recip(&self) -> Self {
        self.powf(-F::one())
    }

    #[inline]
    pub fn sqrt(&self) -> Self {
        self.powf(F::one() / (F::one() + F::one()))
    }

    // ── Exp/Log ──

    #[inline]
    pub fn exp(&self) -> Self {
        let e = self.value.exp();
        self.chain(e, e)
    }

    #[inline]
    pub fn ln(&self) -> Self {
        self.chain(self.value.ln(), F::one() / self.value)
    }

    // ── Trig ──

    #[inline]
    pub fn sin(&self) -> Self {
        self.chain(self.value.sin(), self.value.cos())
    }

    #[inline]
    pub fn cos(&self) -> Self {
        self.chain(self.value.cos(), -self.value.sin())
    }

    #[inline]
    pub fn tan(&self) -> Self {
        let c = self.value.cos();
        self.chain(self.value.tan(), F::one() / (c * c))
    }

    #[inline]
    pub fn tanh(&self) -> Self {
        let t = self.value.tanh();
        self.chain(t, F::one() - t * t)
    }

    // ── Misc ──

    /// Absolute value; the derivative at zero is taken as zero.
    #[inline]
    pub fn abs(&self) -> Self {
        let s = if self.value == F::zero() {
            F::zero()
        } else {
            self.value.signum()
        };
        self.chain(self.value.abs(), s)
    }
}
