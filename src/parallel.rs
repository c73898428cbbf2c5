//! Evaluation of independent functions on rayon worker threads.

use rayon::prelude::*;

use crate::api::assemble;
use crate::dual_value::DualValue;
use crate::error::AdError;
use crate::variables::VariableSet;
use crate::vector_function::VectorFunction;
use crate::Float;

/// A scalar expression that can be shared across threads.
pub type SyncScalarFn<'a, F> = &'a (dyn Fn(&[DualValue<F>]) -> DualValue<F> + Sync);

/// Parallel [`auto_diff`](crate::auto_diff): the functions are evaluated
/// concurrently, each worker seeding its own [`VariableSet`].
///
/// Results are identical to the serial version.
pub fn auto_diff_par<F: Float>(
    functions: &[SyncScalarFn<'_, F>],
    point: &[F],
) -> Result<(Vec<F>, Vec<Vec<F>>), AdError> {
    let expressions: Vec<DualValue<F>> = functions
        .par_iter()
        .map_init(|| VariableSet::at(point), |vars, f| f(vars.as_slice()))
        .collect();
    assemble(VectorFunction::new(expressions), point.len())
}
