//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;
use yieldcheck_analytics::AnalyticsError;
use yieldcheck_curves::CurveError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A request file is not valid JSON for the expected shape.
    #[error("Invalid request file {}: {source}", .path.display())]
    Request {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },

    /// A configuration file is not valid TOML for the expected shape.
    #[error("Invalid config file {}: {source}", .path.display())]
    ConfigFile {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },

    /// The benchmark curve in the request is unusable.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Analytics error outside a single bond (e.g. an invalid config).
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
