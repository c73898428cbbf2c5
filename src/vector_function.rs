//! Assembly of value vectors and Jacobians from several expressions.

use crate::dual_value::DualValue;
use crate::error::AdError;
use crate::Float;

/// An ordered list of `M` expressions over one [`VariableSet`](crate::VariableSet).
///
/// Holds only the derived expressions, not the variables they came from. All
/// expressions are expected to share one seed point; this is checked only as
/// far as derivative lengths go.
#[derive(Clone, Debug, Default)]
pub struct VectorFunction<F: Float> {
    expressions: Vec<DualValue<F>>,
}

impl<F: Float> VectorFunction<F> {
    pub fn new(expressions: Vec<DualValue<F>>) -> Self {
        VectorFunction { expressions }
    }

    /// Number of expressions (`M`).
    #[inline]
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    #[inline]
    pub fn expressions(&self) -> &[DualValue<F>] {
        &self.expressions
    }

    /// The value of each expression, in order.
    pub fn values(&self) -> Vec<F> {
        self.expressions.iter().map(|e| e.value).collect()
    }

    /// The `M × N` Jacobian: row `i` is the derivative of expression `i`.
    ///
    /// Fails with [`AdError::IncompatibleJacobianRows`] when rows differ in
    /// length and [`AdError::AbsentDerivative`] when an expression carries no
    /// derivative.
    pub fn jacobian(&self) -> Result<Vec<Vec<F>>, AdError> {
        let mut jac = Vec::with_capacity(self.expressions.len());
        let mut width = None;
        for (row, expr) in self.expressions.iter().enumerate() {
            let d = expr.derivative().ok_or(AdError::AbsentDerivative)?;
            let expected = *width.get_or_insert(d.len());
            if d.len() != expected {
                return Err(AdError::IncompatibleJacobianRows {
                    row,
                    expected,
                    found: d.len(),
                });
            }
            jac.push(d.to_vec());
        }
        Ok(jac)
    }

    /// Consume the function, returning `(values, jacobian)`.
    pub fn into_parts(self) -> Result<(Vec<F>, Vec<Vec<F>>), AdError> {
        let jac = self.jacobian()?;
        Ok((self.values(), jac))
    }
}

impl<F: Float> FromIterator<DualValue<F>> for VectorFunction<F> {
    fn from_iter<I: IntoIterator<Item = DualValue<F>>>(iter: I) -> Self {
        VectorFunction::new(iter.into_iter().collect())
    }
}
