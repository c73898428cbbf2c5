//! Seeding of independent variables.

use std::ops::Index;

use crate::dual_value::DualValue;
use crate::error::AdError;
use crate::Float;

/// The `N` independent variables of one evaluation point.
///
/// After [`set_point`](VariableSet::set_point), element `i` has the point's
/// `i`-th coordinate as value and the standard basis vector `e_i` as
/// derivative. Expressions built from these elements through ordinary
/// arithmetic therefore carry their full gradient.
///
/// ```
/// use zapnad::VariableSet;
///
/// let mut vars = VariableSet::new(2);
/// vars.set_point(&[3.0, 1.0]).unwrap();
/// let f = &vars[0] * &vars[1];
/// assert_eq!(f.value, 3.0);
/// assert_eq!(f.derivative(), Some(&[1.0, 3.0][..]));
/// ```
#[derive(Clone, Debug)]
pub struct VariableSet<F: Float> {
    elements: Vec<DualValue<F>>,
}

impl<F: Float> VariableSet<F> {
    /// Allocate `count` placeholder variables.
    ///
    /// Placeholders have a `NaN` value and no derivative until a point is set.
    pub fn new(count: usize) -> Self {
        VariableSet {
            elements: vec![DualValue::constant(F::nan()); count],
        }
    }

    /// Create a set already seeded at `point`.
    pub fn at(point: &[F]) -> Self {
        let mut vars = VariableSet::new(point.len());
        for (i, &x) in point.iter().enumerate() {
            vars.elements[i] = DualValue::seeded(x, i, point.len());
        }
        vars
    }

    /// Bind the variables to `point`, re-seeding every derivative.
    ///
    /// Fails with [`AdError::ShapeMismatch`] if `point.len() != self.len()`;
    /// the set is left untouched in that case.
    pub fn set_point(&mut self, point: &[F]) -> Result<&[DualValue<F>], AdError> {
        let n = self.elements.len();
        if point.len() != n {
            return Err(AdError::ShapeMismatch {
                expected: n,
                found: point.len(),
            });
        }
        for (i, (slot, &x)) in self.elements.iter_mut().zip(point).enumerate() {
            *slot = DualValue::seeded(x, i, n);
        }
        Ok(&self.elements)
    }

    /// Number of variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[DualValue<F>] {
        &self.elements
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, DualValue<F>> {
        self.elements.iter()
    }
}

impl<F: Float> Index<usize> for VariableSet<F> {
    type Output = DualValue<F>;

    #[inline]
    fn index(&self, index: usize) -> &DualValue<F> {
        &self.elements[index]
    }
}

impl<'a, F: Float> IntoIterator for &'a VariableSet<F> {
    type Item = &'a DualValue<F>;
    type IntoIter = std::slice::Iter<'a, DualValue<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
