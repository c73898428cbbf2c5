use zapnad::Float;

use super::{check_learning_rate, descend, StepRule};
use crate::convergence::ConvergenceParams;
use crate::error::OptimError;
use crate::objective::Objective;
use crate::result::OptimResult;

/// Configuration for momentum-accelerated gradient descent.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MomentumConfig<F> {
    /// Step length multiplier applied to the velocity (default: 0.1).
    pub learning_rate: F,
    /// Decay of the velocity average, in `[0, 1)` (default: 0.9).
    pub beta: F,
    /// Convergence parameters.
    pub convergence: ConvergenceParams<F>,
}

impl Default for MomentumConfig<f64> {
    fn default() -> Self {
        MomentumConfig {
            learning_rate: 0.1,
            beta: 0.9,
            convergence: ConvergenceParams::default(),
        }
    }
}

impl Default for MomentumConfig<f32> {
    fn default() -> Self {
        MomentumConfig {
            learning_rate: 0.1,
            beta: 0.9,
            convergence: ConvergenceParams::default(),
        }
    }
}

/// Exponential moving average of past gradients.
struct Velocity<F> {
    learning_rate: F,
    beta: F,
    v: Vec<F>,
}

impl<F: Float> StepRule<F> for Velocity<F> {
    fn step(&mut self, grad: &[F], step: &mut [F]) {
        let keep = F::one() - self.beta;
        for ((v, s), &g) in self.v.iter_mut().zip(step.iter_mut()).zip(grad) {
            *v = self.beta * *v + keep * g;
            *s = self.learning_rate * *v;
        }
    }
}

/// Momentum descent: `v ← β·v + (1−β)·∇f(x)`, `x ← x − lr·v`, with `v₀ = 0`.
pub fn momentum<F: Float, O: Objective<F>>(
    obj: &mut O,
    x0: &[F],
    config: &MomentumConfig<F>,
) -> Result<OptimResult<F>, OptimError> {
    check_learning_rate(config.learning_rate)?;
    if !(config.beta >= F::zero() && config.beta < F::one()) {
        return Err(OptimError::InvalidConfig(format!(
            "momentum beta must lie in [0, 1), got {}",
            config.beta
        )));
    }
    let mut rule = Velocity {
        learning_rate: config.learning_rate,
        beta: config.beta,
        v: vec![F::zero(); x0.len()],
    };
    descend(obj, x0, &config.convergence, &mut rule)
}
