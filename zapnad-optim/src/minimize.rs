use zapnad::{DualValue, Float};

use crate::error::OptimError;
use crate::objective::DualObjective;
use crate::result::OptimResult;
use crate::solvers::adagrad::{adagrad, AdagradConfig};
use crate::solvers::gradient_descent::{gradient_descent, GradientDescentConfig};
use crate::solvers::momentum::{momentum, MomentumConfig};

/// Solver selection with its configuration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method<F> {
    GradientDescent(GradientDescentConfig<F>),
    Momentum(MomentumConfig<F>),
    Adagrad(AdagradConfig<F>),
}

/// Minimize a closure over dual values starting from `x0`.
///
/// Gradients come from forward-mode differentiation of `f`; the number of
/// variables is taken from `x0`.
///
/// ```
/// use zapnad::DualValue;
/// use zapnad_optim::{minimize, Method, MomentumConfig, Point};
///
/// let f = |v: &[DualValue<f64>]| v[0].powi(2) + v[1].powi(2);
/// let result = minimize(f, &[1.0, 1.0], &Method::Momentum(MomentumConfig::default())).unwrap();
/// let (value, point) = result.into_pair();
/// assert!(value.abs() < 1e-3);
/// assert!(matches!(point, Point::Vector(ref x) if x.len() == 2));
/// ```
pub fn minimize<F, G>(f: G, x0: &[F], method: &Method<F>) -> Result<OptimResult<F>, OptimError>
where
    F: Float,
    G: Fn(&[DualValue<F>]) -> DualValue<F>,
{
    let mut obj = DualObjective::new(x0.len(), f);
    match method {
        Method::GradientDescent(config) => gradient_descent(&mut obj, x0, config),
        Method::Momentum(config) => momentum(&mut obj, x0, config),
        Method::Adagrad(config) => adagrad(&mut obj, x0, config),
    }
}
