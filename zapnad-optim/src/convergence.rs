use num_traits::Float;

/// Parameters controlling convergence checks.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceParams<F> {
    /// Maximum number of iterations (default: 10_000).
    pub max_iter: usize,
    /// Gradient norm tolerance: stop when `||g|| < grad_tol` (default: 1e-8).
    pub grad_tol: F,
    /// Step size tolerance: stop when `||x_{k+1} - x_k|| < step_tol` (default: 1e-12).
    pub step_tol: F,
}

impl Default for ConvergenceParams<f64> {
    fn default() -> Self {
        ConvergenceParams {
            max_iter: 10_000,
            grad_tol: 1e-8,
            step_tol: 1e-12,
        }
    }
}

impl Default for ConvergenceParams<f32> {
    fn default() -> Self {
        ConvergenceParams {
            max_iter: 10_000,
            grad_tol: 1e-5,
            step_tol: 1e-7,
        }
    }
}

/// Compute the L2 norm of a vector.
pub fn norm<F: Float>(v: &[F]) -> F {
    v.iter().fold(F::zero(), |s, &x| s + x * x).sqrt()
}
