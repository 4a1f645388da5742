//! # yieldcheck Curves
//!
//! Benchmark (government) yield curves given as `(tenor_years, rate)`
//! points, and the rate interpolation used for Z-spread and G-spread.
//!
//! Rates are read by linear interpolation between the bracketing points.
//! Beyond the first or last tenor the curve is **flat**: the nearest end
//! point's rate is returned. A curve with a single point is flat
//! everywhere.
//!
//! ## Quick Start
//!
//! ```rust
//! use yieldcheck_curves::prelude::*;
//!
//! let curve = BenchmarkCurve::from_tenors_rates(&[1.0, 2.0, 5.0], &[0.030, 0.035, 0.040]).unwrap();
//!
//! assert_eq!(curve.rate_at(2.0), 0.035);
//! assert!((curve.rate_at(3.5) - 0.0375).abs() < 1e-12);
//! assert_eq!(curve.rate_at(30.0), 0.040);
//!
//! let err = interpolate_rate(&[], &[], 2.0).unwrap_err();
//! assert_eq!(err, CurveError::EmptyCurve);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod benchmark;
pub mod error;
pub mod point;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::benchmark::{interpolate_rate, BenchmarkCurve, CurveRecord};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::point::CurvePoint;
}

pub use benchmark::{interpolate_rate, BenchmarkCurve, CurveRecord};
pub use error::{CurveError, CurveResult};
pub use point::CurvePoint;
