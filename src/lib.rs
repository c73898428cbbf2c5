//! Forward-mode automatic differentiation with exact Jacobians.
//!
//! Independent variables are seeded as [`DualValue`]s carrying one-hot
//! derivative vectors; ordinary arithmetic on them propagates the full
//! gradient by the chain rule. [`auto_diff`] wraps the whole cycle: seed a
//! [`VariableSet`] at a point, evaluate the functions, and assemble a
//! [`VectorFunction`] into `(values, jacobian)`.

pub mod api;
pub mod dual_value;
pub mod error;
pub mod float;
pub mod variables;
pub mod vector_function;
mod traits;

#[cfg(feature = "ndarray")]
pub mod ndarray_support;
#[cfg(feature = "parallel")]
pub mod parallel;

pub use api::{auto_diff, gradient, jacobian, ScalarFn};
pub use dual_value::DualValue;
pub use error::AdError;
pub use float::Float;
pub use variables::VariableSet;
pub use vector_function::VectorFunction;

#[cfg(feature = "parallel")]
pub use parallel::auto_diff_par;

/// Dual values over `f64`.
pub type DualValue64 = DualValue<f64>;
/// Dual values over `f32`.
pub type DualValue32 = DualValue<f32>;
