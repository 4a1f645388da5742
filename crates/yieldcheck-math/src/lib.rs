//! # yieldcheck Math
//!
//! Numerical building blocks for the yieldcheck analytics:
//!
//! - **Solvers**: traced Newton-Raphson with an optional lower bound, and
//!   bisection for bracketed fallbacks
//! - **Interpolation**: linear interpolation with flat extrapolation
//!
//! Solvers report non-convergence as data (`converged = false`) and keep
//! every `(guess, error)` pair they evaluated, so callers can show the
//! iteration log next to the result.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod interpolation;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{Interpolator, LinearInterpolator};
    pub use crate::solvers::{
        bisection, newton_raphson, newton_raphson_bounded, SolverConfig, SolverResult, SolverStep,
    };
}

pub use error::{MathError, MathResult};
