//! CLI command implementations.

pub mod analyze;
pub mod cashflows;
pub mod config;

pub use analyze::AnalyzeArgs;
pub use cashflows::CashflowsArgs;
pub use config::ConfigArgs;
