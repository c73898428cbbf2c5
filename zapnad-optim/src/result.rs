use std::fmt;

/// Result of an optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimResult<F> {
    /// Solution point.
    pub x: Vec<F>,
    /// Objective value at the solution.
    pub value: F,
    /// Gradient at the solution.
    pub gradient: Vec<F>,
    /// Norm of the gradient at the solution.
    pub gradient_norm: F,
    /// Number of update steps performed.
    pub iterations: usize,
    /// Total number of objective/gradient evaluations.
    pub func_evals: usize,
    /// Reason for termination.
    pub termination: TerminationReason,
}

impl<F: Copy> OptimResult<F> {
    /// The solution shaped like the caller's input: a scalar for one variable.
    pub fn point(&self) -> Point<F> {
        match self.x.as_slice() {
            [x] => Point::Scalar(*x),
            xs => Point::Vector(xs.to_vec()),
        }
    }

    /// `(final_value, final_point)`.
    pub fn into_pair(self) -> (F, Point<F>) {
        let point = self.point();
        (self.value, point)
    }

    /// Whether a tolerance was met, as opposed to the run being cut short.
    pub fn converged(&self) -> bool {
        matches!(
            self.termination,
            TerminationReason::GradientNorm | TerminationReason::StepSize
        )
    }
}

/// A solution point: a bare scalar for univariate objectives.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Point<F> {
    Scalar(F),
    Vector(Vec<F>),
}

impl<F: Copy> Point<F> {
    pub fn to_vec(&self) -> Vec<F> {
        match self {
            Point::Scalar(x) => vec![*x],
            Point::Vector(xs) => xs.clone(),
        }
    }
}

/// Why the optimizer stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationReason {
    /// Gradient norm fell below tolerance.
    GradientNorm,
    /// Step size fell below tolerance.
    StepSize,
    /// Reached the maximum number of iterations; the best iterate is returned.
    MaxIterations,
    /// The objective or its gradient became non-finite.
    NumericalError,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::GradientNorm => write!(f, "gradient norm below tolerance"),
            TerminationReason::StepSize => write!(f, "step size below tolerance"),
            TerminationReason::MaxIterations => write!(f, "maximum iterations reached"),
            TerminationReason::NumericalError => write!(f, "numerical error"),
        }
    }
}
