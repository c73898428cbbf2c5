use thiserror::Error;

/// Contract violations reported by the differentiation layer.
///
/// Floating-point edge cases (division by zero, `0^-1`, ...) are never
/// reported here; they propagate as `inf`/`NaN` like ordinary arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdError {
    /// A point or derivative vector has the wrong number of components.
    #[error("shape mismatch: expected {expected} components, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// Rows assembled into one Jacobian do not share a common length.
    #[error("incompatible jacobian rows: row {row} has {found} columns, expected {expected}")]
    IncompatibleJacobianRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A value without derivative information was combined with one that has it,
    /// or was assembled into a Jacobian.
    #[error("derivative is absent: value was created without sensitivity information")]
    AbsentDerivative,
}
