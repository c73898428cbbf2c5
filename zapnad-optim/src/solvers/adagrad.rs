use zapnad::Float;

use super::{check_learning_rate, descend, StepRule};
use crate::convergence::ConvergenceParams;
use crate::error::OptimError;
use crate::objective::Objective;
use crate::result::OptimResult;

/// Configuration for AdaGrad.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdagradConfig<F> {
    /// Base step length (default: 0.5).
    pub learning_rate: F,
    /// Smoothing term added to the root of the accumulator (default: 1e-8).
    pub epsilon: F,
    /// Convergence parameters.
    pub convergence: ConvergenceParams<F>,
}

impl Default for AdagradConfig<f64> {
    fn default() -> Self {
        AdagradConfig {
            learning_rate: 0.5,
            epsilon: 1e-8,
            convergence: ConvergenceParams::default(),
        }
    }
}

impl Default for AdagradConfig<f32> {
    fn default() -> Self {
        AdagradConfig {
            learning_rate: 0.5,
            epsilon: 1e-6,
            convergence: ConvergenceParams::default(),
        }
    }
}

/// Per-coordinate sum of squared gradients.
struct Accumulator<F> {
    learning_rate: F,
    epsilon: F,
    sum_sq: Vec<F>,
}

impl<F: Float> StepRule<F> for Accumulator<F> {
    fn step(&mut self, grad: &[F], step: &mut [F]) {
        for ((acc, s), &g) in self.sum_sq.iter_mut().zip(step.iter_mut()).zip(grad) {
            *acc = *acc + g * g;
            *s = self.learning_rate * g / (acc.sqrt() + self.epsilon);
        }
    }
}

/// AdaGrad: `G ← G + g⊙g`, `x ← x − lr·g ⊘ (√G + ε)`.
pub fn adagrad<F: Float, O: Objective<F>>(
    obj: &mut O,
    x0: &[F],
    config: &AdagradConfig<F>,
) -> Result<OptimResult<F>, OptimError> {
    check_learning_rate(config.learning_rate)?;
    if !(config.epsilon > F::zero()) {
        return Err(OptimError::InvalidConfig(format!(
            "adagrad epsilon must be positive, got {}",
            config.epsilon
        )));
    }
    let mut rule = Accumulator {
        learning_rate: config.learning_rate,
        epsilon: config.epsilon,
        sum_sq: vec![F::zero(); x0.len()],
    };
    descend(obj, x0, &config.convergence, &mut rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::TerminationReason;

    /// f(x) = 0.5 * (a*x0^2 + b*x1^2).
    struct Scaled {
        a: f64,
        b: f64,
    }

    impl Objective<f64> for Scaled {
        fn dim(&self) -> usize {
            2
        }

        fn eval_grad(&mut self, x: &[f64]) -> Result<(f64, Vec<f64>), zapnad::AdError> {
            let f = 0.5 * (self.a * x[0] * x[0] + self.b * x[1] * x[1]);
            Ok((f, vec![self.a * x[0], self.b * x[1]]))
        }
    }

    #[test]
    fn first_step_is_scale_free() {
        // After one step every coordinate moves by lr·g/|g| ≈ lr, whatever its scale.
        let config = AdagradConfig {
            convergence: ConvergenceParams {
                max_iter: 1,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut obj = Scaled { a: 100.0, b: 0.01 };
        let result = adagrad(&mut obj, &[1.0, 1.0], &config).unwrap();
        assert!((result.x[0] - 0.5).abs() < 1e-6);
        assert!((result.x[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn adagrad_badly_scaled() {
        let mut obj = Scaled { a: 100.0, b: 0.01 };
        let result = adagrad(&mut obj, &[1.0, 1.0], &AdagradConfig::default()).unwrap();
        assert_eq!(result.termination, TerminationReason::GradientNorm);
        assert!(result.x[0].abs() < 1e-6, "x = {:?}", result.x);
    }

    #[test]
    fn adagrad_rejects_zero_epsilon() {
        let config = AdagradConfig {
            epsilon: 0.0,
            ..Default::default()
        };
        let mut obj = Scaled { a: 1.0, b: 1.0 };
        let err = adagrad(&mut obj, &[1.0, 1.0], &config).unwrap_err();
        assert!(matches!(err, OptimError::InvalidConfig(_)));
    }
}
