//! Linear interpolation with flat extrapolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Linear interpolation between data points.
///
/// Outside the data range the nearest end value is returned (flat
/// extrapolation). A single point gives a constant function. Querying an
/// existing node returns its y value exactly.
///
/// # Example
///
/// ```rust
/// use yieldcheck_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(vec![1.0, 2.0, 5.0], vec![0.03, 0.035, 0.04]).unwrap();
///
/// assert!((interp.interpolate(3.5) - 0.0375).abs() < 1e-15);
/// assert_eq!(interp.interpolate(0.25), 0.03);
/// assert_eq!(interp.interpolate(30.0), 0.04);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// - `MathError::InsufficientData` if there are no points
    /// - `MathError::InvalidInput` if lengths differ, a value is not finite,
    ///   or x values are not strictly increasing
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.is_empty() {
            return Err(MathError::insufficient_data(1, 0));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if let Some(bad) = xs.iter().chain(&ys).find(|v| !v.is_finite()) {
            return Err(MathError::invalid_input(format!("non-finite value: {bad}")));
        }
        if let Some(w) = xs.windows(2).find(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(format!(
                "x values must be strictly increasing: {} then {}",
                w[0], w[1]
            )));
        }

        Ok(Self { xs, ys })
    }

    /// The x values.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The y values.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> f64 {
        let last = self.xs.len() - 1;

        if x.is_nan() {
            return f64::NAN;
        }
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[last] {
            return self.ys[last];
        }

        // xs[0] < x < xs[last] here, so the upper index is in 1..=last.
        let upper = self.xs.partition_point(|&node| node < x);
        if self.xs[upper] == x {
            return self.ys[upper];
        }

        let (x0, x1) = (self.xs[upper - 1], self.xs[upper]);
        let (y0, y1) = (self.ys[upper - 1], self.ys[upper]);
        y0 + (x - x0) / (x1 - x0) * (y1 - y0)
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
