use thiserror::Error;
use zapnad::AdError;

/// Errors reported before or during an optimization run.
///
/// Hitting the iteration cap is not an error; see
/// [`TerminationReason::MaxIterations`](crate::TerminationReason::MaxIterations).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimError {
    /// The objective could not be differentiated at an iterate.
    #[error(transparent)]
    Ad(#[from] AdError),

    #[error("initial point has {found} coordinates, objective expects {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
