use zapnad::Float;

use super::{check_learning_rate, descend, StepRule};
use crate::convergence::ConvergenceParams;
use crate::error::OptimError;
use crate::objective::Objective;
use crate::result::OptimResult;

/// Configuration for plain gradient descent.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientDescentConfig<F> {
    /// Fixed step length multiplier (default: 0.1).
    pub learning_rate: F,
    /// Convergence parameters.
    pub convergence: ConvergenceParams<F>,
}

impl Default for GradientDescentConfig<f64> {
    fn default() -> Self {
        GradientDescentConfig {
            learning_rate: 0.1,
            convergence: ConvergenceParams::default(),
        }
    }
}

impl Default for GradientDescentConfig<f32> {
    fn default() -> Self {
        GradientDescentConfig {
            learning_rate: 0.1,
            convergence: ConvergenceParams::default(),
        }
    }
}

struct FixedStep<F> {
    learning_rate: F,
}

impl<F: Float> StepRule<F> for FixedStep<F> {
    fn step(&mut self, grad: &[F], step: &mut [F]) {
        for (s, &g) in step.iter_mut().zip(grad) {
            *s = self.learning_rate * g;
        }
    }
}

/// Gradient descent: `x ← x − lr·∇f(x)`.
pub fn gradient_descent<F: Float, O: Objective<F>>(
    obj: &mut O,
    x0: &[F],
    config: &GradientDescentConfig<F>,
) -> Result<OptimResult<F>, OptimError> {
    check_learning_rate(config.learning_rate)?;
    let mut rule = FixedStep {
        learning_rate: config.learning_rate,
    };
    descend(obj, x0, &config.convergence, &mut rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::TerminationReason;

    /// f(x) = sum(x_i^2), analytic gradient.
    struct SumOfSquares(usize);

    impl Objective<f64> for SumOfSquares {
        fn dim(&self) -> usize {
            self.0
        }

        fn eval_grad(&mut self, x: &[f64]) -> Result<(f64, Vec<f64>), zapnad::AdError> {
            let f = x.iter().map(|&xi| xi * xi).sum();
            Ok((f, x.iter().map(|&xi| 2.0 * xi).collect()))
        }
    }

    #[test]
    fn gd_contracts_by_fixed_factor() {
        // x_{k+1} = (1 - 2·lr)·x_k = 0.8·x_k
        let config = GradientDescentConfig {
            convergence: ConvergenceParams {
                max_iter: 1,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = gradient_descent(&mut SumOfSquares(1), &[1.0], &config).unwrap();
        assert_eq!(result.termination, TerminationReason::MaxIterations);
        assert!((result.x[0] - 0.8).abs() < 1e-15);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.func_evals, 2);
    }

    #[test]
    fn gd_sum_of_squares() {
        let config = GradientDescentConfig::default();
        let result = gradient_descent(&mut SumOfSquares(3), &[1.0, -2.0, 0.5], &config).unwrap();
        assert_eq!(result.termination, TerminationReason::GradientNorm);
        assert!(result.gradient_norm < 1e-8);
        for xi in &result.x {
            assert!(xi.abs() < 1e-8, "x = {:?}", result.x);
        }
    }

    #[test]
    fn gd_rejects_bad_learning_rate() {
        let config = GradientDescentConfig {
            learning_rate: 0.0,
            ..Default::default()
        };
        let err = gradient_descent(&mut SumOfSquares(1), &[1.0], &config).unwrap_err();
        assert!(matches!(err, OptimError::InvalidConfig(_)));
    }
}
