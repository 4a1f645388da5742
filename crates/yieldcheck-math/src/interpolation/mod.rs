//! Interpolation methods for benchmark curves.
//!
//! - [`LinearInterpolator`]: linear between nodes, flat beyond the end nodes

mod linear;

pub use linear::LinearInterpolator;

/// Trait for one-dimensional interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at `x`.
    fn interpolate(&self, x: f64) -> f64;

    /// Returns the smallest x value of the data.
    fn min_x(&self) -> f64;

    /// Returns the largest x value of the data.
    fn max_x(&self) -> f64;

    /// Returns true if `x` lies within `[min_x, max_x]`.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}
