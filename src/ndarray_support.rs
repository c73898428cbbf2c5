//! ndarray adapters for the differentiation entry points.
//!
//! Thin wrappers accepting `Array1<F>` and returning `Array1<F>` / `Array2<F>`.

use ndarray::{Array1, Array2};

use crate::api::{self, ScalarFn};
use crate::dual_value::DualValue;
use crate::error::AdError;
use crate::Float;

/// [`auto_diff`](crate::auto_diff) returning `(values, J)` as ndarray types.
pub fn auto_diff_ndarray<F: Float>(
    functions: &[ScalarFn<'_, F>],
    point: &Array1<F>,
) -> Result<(Array1<F>, Array2<F>), AdError> {
    let (values, jac) = api::auto_diff(functions, &point.to_vec())?;
    Ok((Array1::from_vec(values), to_array2(&jac, point.len())))
}

/// Value and gradient of a scalar function, with the gradient as `Array1`.
pub fn gradient_ndarray<F: Float>(
    f: impl Fn(&[DualValue<F>]) -> DualValue<F>,
    point: &Array1<F>,
) -> Result<(F, Array1<F>), AdError> {
    let (value, grad) = api::gradient(f, &point.to_vec())?;
    Ok((value, Array1::from_vec(grad)))
}

// Rows were already checked to span all `n` columns.
fn to_array2<F: Float>(jac: &[Vec<F>], n: usize) -> Array2<F> {
    Array2::from_shape_fn((jac.len(), n), |(i, j)| jac[i][j])
}
