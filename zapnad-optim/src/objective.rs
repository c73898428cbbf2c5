use std::marker::PhantomData;

use zapnad::{AdError, DualValue, Float};

/// Trait for optimization objectives.
///
/// Implementors provide function evaluation and gradient computation.
/// Methods take `&mut self` to allow caching, eval counting, and internal buffers.
pub trait Objective<F: Float> {
    /// Number of input variables.
    fn dim(&self) -> usize;

    /// Evaluate the objective and its gradient at `x`.
    ///
    /// Returns `(f(x), ∇f(x))`.
    fn eval_grad(&mut self, x: &[F]) -> Result<(F, Vec<F>), AdError>;
}

/// Adapter differentiating a closure over [`DualValue`]s in forward mode.
///
/// ```
/// use zapnad::DualValue;
/// use zapnad_optim::{DualObjective, Objective};
///
/// let mut obj = DualObjective::new(2, |v: &[DualValue<f64>]| &v[0] * &v[0] + &v[1] * &v[1]);
/// let (f, g) = obj.eval_grad(&[1.0, 2.0]).unwrap();
/// assert_eq!(f, 5.0);
/// assert_eq!(g, vec![2.0, 4.0]);
/// ```
pub struct DualObjective<F, G> {
    f: G,
    dim: usize,
    func_evals: usize,
    _float: PhantomData<F>,
}

impl<F, G> DualObjective<F, G>
where
    F: Float,
    G: Fn(&[DualValue<F>]) -> DualValue<F>,
{
    /// Wrap `f`, a function of `dim` variables.
    pub fn new(dim: usize, f: G) -> Self {
        DualObjective {
            f,
            dim,
            func_evals: 0,
            _float: PhantomData,
        }
    }

    /// Number of function evaluations performed so far.
    pub fn func_evals(&self) -> usize {
        self.func_evals
    }
}

impl<F, G> Objective<F> for DualObjective<F, G>
where
    F: Float,
    G: Fn(&[DualValue<F>]) -> DualValue<F>,
{
    fn dim(&self) -> usize {
        self.dim
    }

    fn eval_grad(&mut self, x: &[F]) -> Result<(F, Vec<F>), AdError> {
        self.func_evals += 1;
        zapnad::gradient(&self.f, x)
    }
}
