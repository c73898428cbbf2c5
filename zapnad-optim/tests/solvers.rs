use approx::assert_abs_diff_eq;
use zapnad::{AdError, DualValue};
use zapnad_optim::{
    adagrad, gradient_descent, minimize, momentum, AdagradConfig, ConvergenceParams,
    DualObjective, GradientDescentConfig, Method, MomentumConfig, Objective, OptimError,
    OptimResult, Point, TerminationReason,
};

type D = DualValue<f64>;

// ============================================================
// Test objectives
// ============================================================

/// f1(v) = v0^2. Minimum at 0, value 0.
fn f1(v: &[D]) -> D {
    v[0].powi(2)
}

/// f2(v) = v0^2 + v1^2. Minimum at origin, value 0.
fn f2(v: &[D]) -> D {
    v[0].powi(2) + v[1].powi(2)
}

/// Shifted quadratic with minimum at (1, -2), value 3.
fn shifted(v: &[D]) -> D {
    (&v[0] - 1.0).powi(2) + 4.0 * (&v[1] + 2.0).powi(2) + 3.0
}

fn methods() -> Vec<(&'static str, Method<f64>)> {
    vec![
        ("gradient_descent", Method::GradientDescent(GradientDescentConfig::default())),
        ("momentum", Method::Momentum(MomentumConfig::default())),
        ("adagrad", Method::Adagrad(AdagradConfig::default())),
    ]
}

fn assert_at_origin(name: &str, result: &OptimResult<f64>) {
    assert!(result.converged(), "{}: {}", name, result.termination);
    assert_abs_diff_eq!(result.value, 0.0, epsilon = 1e-3);
    for xi in &result.x {
        assert_abs_diff_eq!(*xi, 0.0, epsilon = 1e-3);
    }
}

// ============================================================
// Univariate / bivariate convergence
// ============================================================

#[test]
fn univariate_all_methods() {
    for (name, method) in methods() {
        let result = minimize(f1, &[1.0], &method).unwrap();
        assert_at_origin(name, &result);
        let (value, point) = result.into_pair();
        assert_abs_diff_eq!(value, 0.0, epsilon = 1e-3);
        match point {
            Point::Scalar(x) => assert_abs_diff_eq!(x, 0.0, epsilon = 1e-3),
            Point::Vector(x) => panic!("{}: expected a scalar point, got {:?}", name, x),
        }
    }
}

#[test]
fn bivariate_all_methods() {
    for (name, method) in methods() {
        let result = minimize(f2, &[1.0, 1.0], &method).unwrap();
        assert_at_origin(name, &result);
        match result.point() {
            Point::Vector(x) => {
                assert_abs_diff_eq!(x[0], 0.0, epsilon = 1e-3);
                assert_abs_diff_eq!(x[1], 0.0, epsilon = 1e-3);
            }
            Point::Scalar(x) => panic!("{}: expected a vector point, got {}", name, x),
        }
    }
}

#[test]
fn methods_agree_on_minimizer() {
    let results: Vec<_> = methods()
        .into_iter()
        .map(|(_, m)| minimize(shifted, &[-3.0, 5.0], &m).unwrap())
        .collect();
    for r in &results {
        assert!(r.converged(), "{}", r.termination);
        assert_abs_diff_eq!(r.x[0], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.x[1], -2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.value, 3.0, epsilon = 1e-10);
    }
}

#[test]
fn gradient_descent_tight_tolerance() {
    let mut obj = DualObjective::new(2, f2);
    let result = gradient_descent(&mut obj, &[1.0, 1.0], &GradientDescentConfig::default()).unwrap();
    assert_eq!(result.termination, TerminationReason::GradientNorm);
    assert!(result.gradient_norm < 1e-8);
    assert_eq!(result.func_evals, obj.func_evals());
    assert_eq!(result.func_evals, result.iterations + 1);
}

// ============================================================
// Termination
// ============================================================

#[test]
fn already_at_minimum() {
    for (name, method) in methods() {
        let result = minimize(f2, &[0.0, 0.0], &method).unwrap();
        assert_eq!(result.termination, TerminationReason::GradientNorm, "{}", name);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.func_evals, 1);
    }
}

#[test]
fn max_iterations_returns_best_point() {
    let convergence = ConvergenceParams {
        max_iter: 3,
        ..Default::default()
    };
    let config = GradientDescentConfig {
        convergence,
        ..Default::default()
    };
    let mut obj = DualObjective::new(1, f1);
    let result = gradient_descent(&mut obj, &[1.0], &config).unwrap();
    assert_eq!(result.termination, TerminationReason::MaxIterations);
    assert!(!result.converged());
    assert_eq!(result.iterations, 3);
    assert_abs_diff_eq!(result.x[0], 0.512, epsilon = 1e-12);
}

#[test]
fn max_iterations_keeps_lowest_iterate() {
    // lr = 1.5 overshoots: x_{k+1} = -2·x_k, so the start is the best point.
    let config = GradientDescentConfig {
        learning_rate: 1.5,
        convergence: ConvergenceParams {
            max_iter: 4,
            ..Default::default()
        },
    };
    let result = gradient_descent(&mut DualObjective::new(1, f1), &[1.0], &config).unwrap();
    assert_eq!(result.termination, TerminationReason::MaxIterations);
    assert_eq!(result.x, vec![1.0]);
    assert_eq!(result.value, 1.0);
}

#[test]
fn divergence_is_numerical_error() {
    let config = GradientDescentConfig {
        learning_rate: 1e150,
        ..Default::default()
    };
    let f = |v: &[D]| v[0].powi(4);
    let result = gradient_descent(&mut DualObjective::new(1, f), &[1.0], &config).unwrap();
    assert_eq!(result.termination, TerminationReason::NumericalError);
    assert_eq!(result.x, vec![1.0]);
}

// ============================================================
// Errors
// ============================================================

#[test]
fn dimension_mismatch() {
    let mut obj = DualObjective::new(2, f2);
    let err = momentum(&mut obj, &[1.0], &MomentumConfig::default()).unwrap_err();
    assert_eq!(
        err,
        OptimError::DimensionMismatch {
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn zero_max_iter_is_invalid() {
    let config = AdagradConfig {
        convergence: ConvergenceParams {
            max_iter: 0,
            ..Default::default()
        },
        ..Default::default()
    };
    let err = adagrad(&mut DualObjective::new(1, f1), &[1.0], &config).unwrap_err();
    assert!(matches!(err, OptimError::InvalidConfig(_)));
}

#[test]
fn constant_objective_reports_absent_derivative() {
    let f = |_: &[D]| DualValue::constant(1.0);
    let err = minimize(f, &[1.0], &Method::GradientDescent(Default::default())).unwrap_err();
    assert_eq!(err, OptimError::Ad(AdError::AbsentDerivative));
}

// ============================================================
// Custom objectives
// ============================================================

/// Analytic-gradient objective: f(x) = sum(x_i^4) / 4.
struct Quartic;

impl Objective<f64> for Quartic {
    fn dim(&self) -> usize {
        3
    }

    fn eval_grad(&mut self, x: &[f64]) -> Result<(f64, Vec<f64>), AdError> {
        let f = x.iter().map(|xi| xi.powi(4)).sum::<f64>() / 4.0;
        Ok((f, x.iter().map(|xi| xi.powi(3)).collect()))
    }
}

#[test]
fn adagrad_custom_objective() {
    let config = AdagradConfig {
        convergence: ConvergenceParams {
            grad_tol: 1e-4,
            ..Default::default()
        },
        ..Default::default()
    };
    let result = adagrad(&mut Quartic, &[1.0, -0.5, 0.25], &config).unwrap();
    assert!(result.converged(), "{}", result.termination);
    assert!(result.value < 1e-4);
}

#[test]
fn single_precision_momentum() {
    let f = |v: &[DualValue<f32>]| v[0].powi(2) + v[1].powi(2);
    let config = MomentumConfig {
        convergence: ConvergenceParams {
            step_tol: 0.0,
            ..Default::default()
        },
        ..Default::default()
    };
    let result = momentum(&mut DualObjective::new(2, f), &[1.0_f32, -1.0], &config).unwrap();
    assert!(result.converged(), "{}", result.termination);
    assert!(result.x[0].abs() < 1e-3 && result.x[1].abs() < 1e-3);
}
