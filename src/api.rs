use crate::dual_value::DualValue;
use crate::error::AdError;
use crate::variables::VariableSet;
use crate::vector_function::VectorFunction;
use crate::Float;

/// A scalar expression of the point's variables.
pub type ScalarFn<'a, F> = &'a dyn Fn(&[DualValue<F>]) -> DualValue<F>;

/// Evaluate `M` scalar functions at `point` and return `(values, J)`.
///
/// A fresh [`VariableSet`] is seeded at `point`, each function is evaluated on
/// its elements, and the results are assembled into a [`VectorFunction`].
/// `J[i][j] = ∂f_i/∂x_j`, exact up to floating-point rounding.
///
/// # Panics
///
/// Errors from the assembled outputs come back as `Err`, but a function whose
/// operators mix an absent derivative with a seeded one (for instance
/// `&v[0] + &DualValue::constant(1.0)`) or mix derivative lengths panics
/// inside the operator, before the `Result` is built. Build such terms with
/// [`DualValue::with_zero_derivative`] or combine them through the
/// `checked_*` methods to avoid the panic.
///
/// ```
/// use zapnad::{auto_diff, DualValue};
///
/// let f = |v: &[DualValue<f64>]| &v[0] * &v[1];
/// let (values, jac) = auto_diff(&[&f], &[3.0, 1.0]).unwrap();
/// assert_eq!(values, vec![3.0]);
/// assert_eq!(jac, vec![vec![1.0, 3.0]]);
/// ```
pub fn auto_diff<F: Float>(
    functions: &[ScalarFn<'_, F>],
    point: &[F],
) -> Result<(Vec<F>, Vec<Vec<F>>), AdError> {
    let mut vars = VariableSet::new(point.len());
    let inputs = vars.set_point(point)?;
    let function: VectorFunction<F> = functions.iter().map(|f| f(inputs)).collect();
    assemble(function, point.len())
}

/// Compute the full Jacobian of a vector-valued `f : R^n → R^m`.
///
/// Returns `(f(x), J)` where `J[i][j] = ∂f_i/∂x_j`. Panics under the same
/// conditions as [`auto_diff`].
pub fn jacobian<F: Float>(
    f: impl Fn(&[DualValue<F>]) -> Vec<DualValue<F>>,
    point: &[F],
) -> Result<(Vec<F>, Vec<Vec<F>>), AdError> {
    let mut vars = VariableSet::new(point.len());
    let outputs = f(vars.set_point(point)?);
    assemble(VectorFunction::new(outputs), point.len())
}

/// Value and gradient of a scalar `f : R^n → R`.
///
/// # Panics
///
/// As with [`auto_diff`], derivative contract violations inside `f` panic in
/// the operator instead of returning `Err`.
///
/// ```
/// let (value, grad) = zapnad::gradient(|x| &x[0] * &x[0] + &x[1] * &x[1], &[3.0, 4.0]).unwrap();
/// assert_eq!(value, 25.0);
/// assert_eq!(grad, vec![6.0, 8.0]);
/// ```
pub fn gradient<F: Float>(
    f: impl Fn(&[DualValue<F>]) -> DualValue<F>,
    point: &[F],
) -> Result<(F, Vec<F>), AdError> {
    let mut vars = VariableSet::new(point.len());
    let output = f(vars.set_point(point)?);
    let grad = output.derivative.ok_or(AdError::AbsentDerivative)?;
    if grad.len() != point.len() {
        return Err(AdError::ShapeMismatch {
            expected: point.len(),
            found: grad.len(),
        });
    }
    Ok((output.value, grad))
}

/// Split a vector function into `(values, J)`, checking that every row spans
/// all `n` variables.
pub(crate) fn assemble<F: Float>(
    function: VectorFunction<F>,
    n: usize,
) -> Result<(Vec<F>, Vec<Vec<F>>), AdError> {
    let (values, jac) = function.into_parts()?;
    if let Some(row) = jac.iter().find(|row| row.len() != n) {
        return Err(AdError::ShapeMismatch {
            expected: n,
            found: row.len(),
        });
    }
    Ok((values, jac))
}
