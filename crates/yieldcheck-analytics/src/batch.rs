//! Batch analytics over many bonds.
//!
//! Each request is analyzed independently; one failure never aborts the
//! batch. With the `parallel` feature the requests are spread over the
//! rayon thread pool, and output order always matches input order.

use log::warn;
use serde::Serialize;
use yieldcheck_bonds::types::Bond;
use yieldcheck_core::types::Date;
use yieldcheck_curves::BenchmarkCurve;

use crate::calculator::{BondAnalysis, BondCalculator};
use crate::config::CalculationConfig;

/// One bond to analyze.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    /// The bond.
    pub bond: &'a Bond,
    /// Observed clean price.
    pub clean_price: f64,
    /// Benchmark curve for the spreads.
    pub curve: &'a BenchmarkCurve,
    /// Valuation date.
    pub valuation_date: Date,
}

impl<'a> AnalysisRequest<'a> {
    /// Creates a request.
    #[must_use]
    pub fn new(bond: &'a Bond, clean_price: f64, curve: &'a BenchmarkCurve, valuation_date: Date) -> Self {
        Self {
            bond,
            clean_price,
            curve,
            valuation_date,
        }
    }
}

/// Outcome of one request in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    /// All solvers converged.
    Ok(Box<BondAnalysis>),
    /// Computed, but the yield or Z-spread solver hit its iteration cap.
    NotConverged(Box<BondAnalysis>),
    /// The bond could not be analyzed.
    Failed {
        /// ISIN of the bond.
        isin: String,
        /// Error message.
        error: String,
    },
}

impl BatchOutcome {
    /// ISIN of the bond this outcome is for.
    #[must_use]
    pub fn isin(&self) -> &str {
        match self {
            BatchOutcome::Ok(analysis) | BatchOutcome::NotConverged(analysis) => &analysis.isin,
            BatchOutcome::Failed { isin, .. } => isin,
        }
    }

    /// The analysis, if one was produced.
    #[must_use]
    pub fn analysis(&self) -> Option<&BondAnalysis> {
        match self {
            BatchOutcome::Ok(analysis) | BatchOutcome::NotConverged(analysis) => Some(analysis),
            BatchOutcome::Failed { .. } => None,
        }
    }

    /// True for [`BatchOutcome::Ok`].
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, BatchOutcome::Ok(_))
    }

    /// True for [`BatchOutcome::Failed`].
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, BatchOutcome::Failed { .. })
    }
}

fn run_one(calculator: &BondCalculator, request: &AnalysisRequest<'_>) -> BatchOutcome {
    match calculator.analyze(
        request.bond,
        request.clean_price,
        request.curve,
        request.valuation_date,
    ) {
        Ok(analysis) if analysis.is_converged() => BatchOutcome::Ok(Box::new(analysis)),
        Ok(analysis) => {
            warn!("{}: solver did not converge, result flagged", analysis.isin);
            BatchOutcome::NotConverged(Box::new(analysis))
        }
        Err(err) => {
            warn!("{}: skipped: {err}", request.bond.isin());
            BatchOutcome::Failed {
                isin: request.bond.isin().to_string(),
                error: err.to_string(),
            }
        }
    }
}

/// Analyzes every request, returning one outcome per request in order.
pub fn analyze_batch(requests: &[AnalysisRequest<'_>], config: &CalculationConfig) -> Vec<BatchOutcome> {
    map_requests(&BondCalculator::new(*config), requests)
}

#[cfg(feature = "parallel")]
fn map_requests(calculator: &BondCalculator, requests: &[AnalysisRequest<'_>]) -> Vec<BatchOutcome> {
    use rayon::prelude::*;
    requests.par_iter().map(|r| run_one(calculator, r)).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_requests(calculator: &BondCalculator, requests: &[AnalysisRequest<'_>]) -> Vec<BatchOutcome> {
    requests.iter().map(|r| run_one(calculator, r)).collect()
}

/// Counts of each outcome kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Converged analyses.
    pub ok: usize,
    /// Analyses flagged as not converged.
    pub not_converged: usize,
    /// Failed requests.
    pub failed: usize,
}

impl BatchSummary {
    /// Tallies a batch.
    #[must_use]
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        outcomes.iter().fold(Self::default(), |mut summary, outcome| {
            match outcome {
                BatchOutcome::Ok(_) => summary.ok += 1,
                BatchOutcome::NotConverged(_) => summary.not_converged += 1,
                BatchOutcome::Failed { .. } => summary.failed += 1,
            }
            summary
        })
    }
}
