//! Bisection root-finding algorithm.

use log::debug;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult, SolverStep};

/// Bisection root-finding algorithm.
///
/// Repeatedly halves `[a, b]`, keeping the half whose endpoints straddle
/// the root. Each midpoint evaluation is logged. Running out of iterations
/// returns the last midpoint with `converged = false`.
///
/// # Example
///
/// ```rust
/// use yieldcheck_math::solvers::{bisection, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!(result.converged);
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
///
/// # Errors
///
/// Returns `MathError::InvalidBracket` if `f(a)` and `f(b)` have the same
/// sign, and `MathError::InvalidInput` for an invalid config.
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    let mut lo = a.min(b);
    let mut hi = a.max(b);
    let mut f_lo = f(lo);
    let f_hi = f(hi);

    if f_lo.is_nan() || f_hi.is_nan() || f_lo * f_hi > 0.0 {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    for (x, fx) in [(lo, f_lo), (hi, f_hi)] {
        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                residual: fx,
                converged: true,
                steps: vec![SolverStep { guess: x, error: fx }],
            });
        }
    }

    let mut steps = config.step_log();
    let mut mid = (lo + hi) / 2.0;
    let mut f_mid = f_lo;

    for _ in 0..config.max_iterations {
        mid = (lo + hi) / 2.0;
        f_mid = f(mid);
        steps.push(SolverStep {
            guess: mid,
            error: f_mid,
        });

        if f_mid.abs() < config.tolerance {
            debug!("bisection: converged at {mid} after {} evaluations", steps.len());
            return Ok(SolverResult {
                root: mid,
                residual: f_mid,
                converged: true,
                steps,
            });
        }

        if f_lo * f_mid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    debug!("bisection: iteration cap {} reached at {mid}", config.max_iterations);
    Ok(SolverResult {
        root: mid,
        residual: f_mid,
        converged: false,
        steps,
    })
}
