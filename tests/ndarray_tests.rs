#![cfg(feature = "ndarray")]

use ndarray::array;
use zapnad::ndarray_support::{auto_diff_ndarray, gradient_ndarray};
use zapnad::{DualValue, ScalarFn};

type D = DualValue<f64>;

fn product(x: &[D]) -> D {
    &x[0] * &x[1]
}

fn square(x: &[D]) -> D {
    x[1].powi(2)
}

#[test]
fn auto_diff_ndarray_shape() {
    let functions: [ScalarFn<'_, f64>; 2] = [&product, &square];
    let (values, jac) = auto_diff_ndarray(&functions, &array![3.0, 2.0]).unwrap();

    assert_eq!(values, array![6.0, 4.0]);
    assert_eq!(jac.dim(), (2, 2));
    assert_eq!(jac, array![[2.0, 3.0], [0.0, 4.0]]);
}

#[test]
fn gradient_ndarray_product() {
    let (value, grad) = gradient_ndarray(product, &array![3.0, 2.0]).unwrap();
    assert_eq!(value, 6.0);
    assert_eq!(grad, array![2.0, 3.0]);
}
