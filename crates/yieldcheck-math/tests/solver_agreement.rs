//! Newton-Raphson and bisection must agree on well-behaved roots.
//!
//! | Function                         | Root                |
//! |----------------------------------|---------------------|
//! | x^2 - 2                          | sqrt(2)             |
//! | 5-year annual bond price at 97   | ~5.706% yield       |
//! | (1 + x/2)^-20 - 0.6              | 2 * (0.6^-0.05 - 1) |

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use yieldcheck_math::prelude::*;

fn bond_price(y: f64) -> f64 {
    (1..=5).map(|t| 5.0 / (1.0 + y).powi(t)).sum::<f64>() + 100.0 / (1.0 + y).powi(5)
}

fn bond_price_dy(y: f64) -> f64 {
    (1..=5)
        .map(|t| -f64::from(t) * 5.0 / (1.0 + y).powi(t + 1))
        .sum::<f64>()
        - 500.0 / (1.0 + y).powi(6)
}

#[test]
fn test_sqrt_two() {
    let config = SolverConfig::new(1e-12, 200);
    let newton = newton_raphson(|x| x * x - 2.0, |x| 2.0 * x, 1.0, &config).unwrap();
    let bisect = bisection(|x| x * x - 2.0, 0.0, 2.0, &config).unwrap();

    assert!(newton.converged);
    assert!(bisect.converged);
    assert_abs_diff_eq!(newton.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    assert_abs_diff_eq!(bisect.root, newton.root, epsilon = 1e-10);
    // Quadratic convergence needs far fewer evaluations.
    assert!(newton.iterations() < bisect.iterations());
}

#[test]
fn test_bond_yield() {
    let config = SolverConfig::default();
    let f = |y: f64| bond_price(y) - 97.0;

    let newton = newton_raphson_bounded(f, bond_price_dy, 0.05, Some(-1.0), &config).unwrap();
    let bisect = bisection(f, 0.0, 0.2, &config).unwrap();

    assert!(newton.converged);
    assert!(bisect.converged);
    assert_abs_diff_eq!(newton.root, bisect.root, epsilon = 1e-6);
    assert!(newton.root > 0.05);
    assert!(f(newton.root).abs() < config.tolerance);
}

#[test]
fn test_step_log_ends_at_root() {
    let config = SolverConfig::new(1e-10, 50);
    let result = newton_raphson(|x| x * x - 2.0, |x| 2.0 * x, 1.0, &config).unwrap();

    let last = result.steps.last().unwrap();
    assert_eq!(last.guess, result.root);
    assert_eq!(last.error, result.residual);
    assert_eq!(result.steps[0].guess, 1.0);
}

#[test]
fn test_floor_keeps_iterates_valid() {
    let config = SolverConfig::default();
    let target: f64 = 0.6;
    let f = |x: f64| (1.0 + x / 2.0).powf(-20.0) - target;
    let df = |x: f64| -10.0 * (1.0 + x / 2.0).powf(-21.0);

    // A wild first guess would overshoot below -2 without the floor.
    let result = newton_raphson_bounded(f, df, -1.9, Some(-2.0), &config).unwrap();

    assert!(result.steps.iter().all(|s| s.guess > -2.0));
    if result.converged {
        assert_abs_diff_eq!(result.root, 2.0 * (target.powf(-0.05) - 1.0), epsilon = 1e-6);
    }
}

proptest! {
    #[test]
    fn prop_linear_roots_agree(slope in 0.5f64..10.0, root in -5.0f64..5.0) {
        let config = SolverConfig::new(1e-9, 200);
        let f = |x: f64| slope * (x - root);

        let newton = newton_raphson(f, |_| slope, 0.0, &config).unwrap();
        let bisect = bisection(f, -10.0, 10.0, &config).unwrap();

        prop_assert!(newton.converged);
        prop_assert!(bisect.converged);
        prop_assert!((newton.root - bisect.root).abs() < 1e-8);
    }
}
