//! Newton-Raphson root-finding algorithm.

use log::debug;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult, SolverStep};

/// Derivatives smaller than this stop the iteration.
const MIN_DERIVATIVE: f64 = 1e-15;

/// Maximum number of times a step is halved to stay above the floor.
const MAX_STEP_HALVINGS: u32 = 60;

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)` and stops once
/// `|f(x)| < tolerance`. A vanishing or non-finite derivative, or running
/// out of iterations, yields `converged = false` with the last iterate.
///
/// # Example
///
/// ```rust
/// use yieldcheck_math::solvers::{newton_raphson, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
///
/// # Errors
///
/// Returns `MathError::InvalidInput` for an invalid config or a non-finite
/// initial guess.
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    newton_raphson_bounded(f, df, initial_guess, None, config)
}

/// Newton-Raphson that keeps every iterate strictly above `floor`.
///
/// A step that would land on or below the floor is halved until it does
/// not. Periodic discounting uses this with `floor = -m`, where
/// `(1 + y/m)` stops being a valid discount base.
///
/// # Errors
///
/// Returns `MathError::InvalidInput` for an invalid config, a non-finite
/// initial guess, or an initial guess that is not above the floor.
pub fn newton_raphson_bounded<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    floor: Option<f64>,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    config.validate()?;
    if !initial_guess.is_finite() {
        return Err(MathError::invalid_input(format!(
            "initial guess must be finite, got {initial_guess}"
        )));
    }
    if let Some(floor) = floor {
        if initial_guess <= floor {
            return Err(MathError::invalid_input(format!(
                "initial guess {initial_guess} is not above the floor {floor}"
            )));
        }
    }

    let mut x = initial_guess;
    let mut steps = config.step_log();

    for _ in 0..config.max_iterations {
        let fx = f(x);
        steps.push(SolverStep { guess: x, error: fx });

        if fx.abs() < config.tolerance {
            debug!("newton: converged at {x} after {} evaluations", steps.len());
            return Ok(SolverResult {
                root: x,
                residual: fx,
                converged: true,
                steps,
            });
        }

        let dfx = df(x);
        if !fx.is_finite() || !dfx.is_finite() || dfx.abs() < MIN_DERIVATIVE {
            debug!("newton: stopped at {x}, f = {fx}, f' = {dfx}");
            return Ok(SolverResult {
                root: x,
                residual: fx,
                converged: false,
                steps,
            });
        }

        let mut step = fx / dfx;
        if let Some(floor) = floor {
            let mut halvings = 0;
            while x - step <= floor && halvings < MAX_STEP_HALVINGS {
                step /= 2.0;
                halvings += 1;
            }
            if x - step <= floor {
                return Ok(SolverResult {
                    root: x,
                    residual: fx,
                    converged: false,
                    steps,
                });
            }
        }
        x -= step;
    }

    debug!("newton: iteration cap {} reached at {x}", config.max_iterations);
    Ok(SolverResult {
        root: x,
        residual: f(x),
        converged: false,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();

        assert!(result.converged);
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert!(result.iterations() < 10);
    }

    #[test]
    fn test_steps_log_every_evaluation() {
        let f = |x: f64| x * x * x - 27.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 2.0, &SolverConfig::default()).unwrap();

        assert_eq!(result.steps[0].guess, 2.0);
        assert_eq!(result.steps[0].error, -19.0);
        let last = result.steps.last().unwrap();
        assert_eq!(last.guess, result.root);
        assert_eq!(last.error, result.residual);
    }

    #[test]
    fn test_zero_derivative_is_not_converged() {
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;

        let result = newton_raphson(f, df, 0.0, &SolverConfig::default()).unwrap();

        assert!(!result.converged);
        assert_eq!(result.root, 0.0);
        assert_eq!(result.iterations(), 1);
    }

    #[test]
    fn test_iteration_cap_keeps_last_estimate() {
        // No real root; Newton wanders without converging.
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;
        let config = SolverConfig::default().with_max_iterations(7);

        let result = newton_raphson(f, df, 0.5, &config).unwrap();

        assert!(!result.converged);
        assert_eq!(result.iterations(), 7);
        assert!(result.root.is_finite());
    }

    #[test]
    fn test_floor_halves_steps() {
        // Root at 0.5; the first full step from 3.0 would overshoot below 0.
        let f = |x: f64| x.ln() + 0.693_147_180_559_945_3;
        let df = |x: f64| 1.0 / x;

        let result = newton_raphson_bounded(f, df, 3.0, Some(0.0), &SolverConfig::default()).unwrap();

        assert!(result.converged);
        assert_relative_eq!(result.root, 0.5, epsilon = 1e-9);
        assert!(result.steps.iter().all(|s| s.guess > 0.0));
    }

    #[test]
    fn test_invalid_inputs() {
        let f = |x: f64| x;
        let df = |_: f64| 1.0;
        let config = SolverConfig::default();

        assert!(newton_raphson(f, df, f64::NAN, &config).is_err());
        assert!(newton_raphson_bounded(f, df, -1.0, Some(-1.0), &config).is_err());
        assert!(newton_raphson(f, df, 1.0, &SolverConfig::new(-1.0, 10)).is_err());
    }
}
