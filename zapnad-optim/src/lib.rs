//! First-order optimizers driven by exact forward-mode gradients.
//!
//! Each solver minimizes an [`Objective`]; [`DualObjective`] adapts any
//! closure over [`zapnad::DualValue`]s, and [`minimize`] does that in one call.

pub mod convergence;
pub mod error;
pub mod minimize;
pub mod objective;
pub mod result;
pub mod solvers;

pub use convergence::ConvergenceParams;
pub use error::OptimError;
pub use minimize::{minimize, Method};
pub use objective::{DualObjective, Objective};
pub use result::{OptimResult, Point, TerminationReason};
pub use solvers::adagrad::{adagrad, AdagradConfig};
pub use solvers::gradient_descent::{gradient_descent, GradientDescentConfig};
pub use solvers::momentum::{momentum, MomentumConfig};
