pub mod adagrad;
pub mod gradient_descent;
pub mod momentum;

use zapnad::Float;

use crate::convergence::{norm, ConvergenceParams};
use crate::error::OptimError;
use crate::objective::Objective;
use crate::result::{OptimResult, TerminationReason};

/// Per-solver update rule driven by [`descend`].
pub(crate) trait StepRule<F> {
    /// Write the displacement to subtract from the current point, given the
    /// gradient there. Called once per iteration, in order.
    fn step(&mut self, grad: &[F], step: &mut [F]);
}

/// Lowest-objective iterate seen so far.
struct Iterate<F> {
    x: Vec<F>,
    value: F,
    gradient: Vec<F>,
    gradient_norm: F,
}

impl<F: Float> Iterate<F> {
    fn finish(
        self,
        iterations: usize,
        func_evals: usize,
        termination: TerminationReason,
    ) -> OptimResult<F> {
        OptimResult {
            x: self.x,
            value: self.value,
            gradient: self.gradient,
            gradient_norm: self.gradient_norm,
            iterations,
            func_evals,
            termination,
        }
    }
}

pub(crate) fn check_learning_rate<F: Float>(learning_rate: F) -> Result<(), OptimError> {
    if learning_rate > F::zero() && learning_rate.is_finite() {
        Ok(())
    } else {
        Err(OptimError::InvalidConfig(format!(
            "learning rate must be positive and finite, got {}",
            learning_rate
        )))
    }
}

/// First-order descent loop shared by all solvers.
///
/// Evaluates the gradient at the current point, asks `rule` for a step,
/// updates the point and repeats until the gradient norm or the step norm
/// drops below tolerance. When `max_iter` updates pass without convergence,
/// the iterate with the lowest objective value is returned.
pub(crate) fn descend<F, O, R>(
    obj: &mut O,
    x0: &[F],
    convergence: &ConvergenceParams<F>,
    rule: &mut R,
) -> Result<OptimResult<F>, OptimError>
where
    F: Float,
    O: Objective<F>,
    R: StepRule<F>,
{
    let n = obj.dim();
    if x0.len() != n {
        return Err(OptimError::DimensionMismatch {
            expected: n,
            found: x0.len(),
        });
    }
    if convergence.max_iter == 0 {
        return Err(OptimError::InvalidConfig(
            "max_iter must be at least 1".to_string(),
        ));
    }

    let mut x = x0.to_vec();
    let (mut f_val, mut grad) = obj.eval_grad(&x)?;
    let mut func_evals = 1usize;
    let mut grad_norm = norm(&grad);

    let current = |x: &[F], value: F, gradient: &[F], gradient_norm: F| Iterate {
        x: x.to_vec(),
        value,
        gradient: gradient.to_vec(),
        gradient_norm,
    };

    if !f_val.is_finite() || !grad_norm.is_finite() {
        return Ok(current(&x, f_val, &grad, grad_norm).finish(
            0,
            func_evals,
            TerminationReason::NumericalError,
        ));
    }
    if grad_norm < convergence.grad_tol {
        return Ok(current(&x, f_val, &grad, grad_norm).finish(
            0,
            func_evals,
            TerminationReason::GradientNorm,
        ));
    }

    let mut best = current(&x, f_val, &grad, grad_norm);
    let mut step = vec![F::zero(); n];

    for iter in 0..convergence.max_iter {
        rule.step(&grad, &mut step);
        for (xi, &si) in x.iter_mut().zip(&step) {
            *xi = *xi - si;
        }

        (f_val, grad) = obj.eval_grad(&x)?;
        func_evals += 1;
        grad_norm = norm(&grad);

        if !f_val.is_finite() || !grad_norm.is_finite() {
            return Ok(best.finish(iter + 1, func_evals, TerminationReason::NumericalError));
        }
        if f_val < best.value {
            best = current(&x, f_val, &grad, grad_norm);
        }

        if grad_norm < convergence.grad_tol {
            return Ok(current(&x, f_val, &grad, grad_norm).finish(
                iter + 1,
                func_evals,
                TerminationReason::GradientNorm,
            ));
        }
        if norm(&step) < convergence.step_tol {
            return Ok(current(&x, f_val, &grad, grad_norm).finish(
                iter + 1,
                func_evals,
                TerminationReason::StepSize,
            ));
        }
    }

    Ok(best.finish(
        convergence.max_iter,
        func_evals,
        TerminationReason::MaxIterations,
    ))
}
