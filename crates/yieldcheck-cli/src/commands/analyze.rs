//! Analyze command implementation.
//!
//! Runs the full pipeline (cashflows, YTM, Z-spread, G-spread) for every
//! bond in a request file. Bonds that cannot be analyzed are reported in
//! place; they do not stop the run.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;
use yieldcheck_analytics::batch::{analyze_batch, AnalysisRequest, BatchOutcome, BatchSummary};
use yieldcheck_analytics::calculator::BondCalculator;

use crate::cli::OutputFormat;
use crate::output::{format_bps, format_percent, print_header, print_json, print_success, print_table, print_warning};
use crate::request::{load_config, LoadedBond, RequestFile};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Request file (JSON): valuation date, curve, bonds and prices
    #[arg(short, long, env = "YIELDCHECK_REQUEST")]
    pub request: PathBuf,

    /// Calculation config (TOML). Defaults apply when omitted.
    #[arg(short, long, env = "YIELDCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also compute yield-to-worst for callable bonds
    #[arg(long)]
    pub worst: bool,
}

/// Table row for one bond.
#[derive(Debug, Tabled)]
struct AnalysisRow {
    #[tabled(rename = "ISIN")]
    isin: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "YTM")]
    ytm: String,
    #[tabled(rename = "Z-Spread (bp)")]
    zspread: String,
    #[tabled(rename = "G-Spread (bp)")]
    gspread: String,
    #[tabled(rename = "YTW")]
    ytw: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// JSON report.
#[derive(Debug, Serialize)]
struct Report<'a> {
    summary: BatchSummary,
    outcomes: &'a [BatchOutcome],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    yield_to_worst: Vec<WorstRow>,
}

#[derive(Debug, Serialize)]
struct WorstRow {
    /// Position of the bond in the request file.
    record: usize,
    isin: String,
    #[serde(flatten)]
    result: yieldcheck_analytics::calculator::WorkoutYield,
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let request = RequestFile::load(&args.request)?;
    let curve = request.curve()?;
    let loaded = request.bonds();

    let requests: Vec<AnalysisRequest<'_>> = loaded
        .iter()
        .filter_map(|bond| match bond {
            LoadedBond::Ready(priced) => Some(AnalysisRequest::new(
                &priced.bond,
                priced.clean_price,
                &curve,
                priced.valuation_date,
            )),
            LoadedBond::Rejected { .. } => None,
        })
        .collect();
    info!("analyzing {} of {} bonds", requests.len(), loaded.len());

    // Merge batch results back into record order.
    let mut analyzed = analyze_batch(&requests, &config).into_iter();
    let outcomes: Vec<BatchOutcome> = loaded
        .iter()
        .filter_map(|bond| match bond {
            LoadedBond::Ready(_) => analyzed.next(),
            LoadedBond::Rejected { isin, error } => Some(BatchOutcome::Failed {
                isin: isin.clone(),
                error: error.clone(),
            }),
        })
        .collect();

    // One slot per record, so duplicate ISINs keep their own result.
    let worst: Vec<Option<WorstRow>> = if args.worst {
        yield_to_worst(&loaded, BondCalculator::new(config))
    } else {
        loaded.iter().map(|_| None).collect()
    };

    let summary = BatchSummary::from_outcomes(&outcomes);
    match format {
        OutputFormat::Table => {
            print_header("Bond Analytics");
            let rows: Vec<AnalysisRow> = outcomes
                .iter()
                .zip(&worst)
                .map(|(outcome, worst)| row(outcome, worst.as_ref()))
                .collect();
            print_table(&rows);
        }
        OutputFormat::Json => print_json(&Report {
            summary,
            outcomes: &outcomes,
            yield_to_worst: worst.into_iter().flatten().collect(),
        })?,
    }

    if !quiet {
        let message = format!(
            "{} analyzed, {} not converged, {} failed",
            summary.ok, summary.not_converged, summary.failed
        );
        if summary.failed + summary.not_converged == 0 {
            print_success(&message);
        } else {
            print_warning(&message);
        }
    }
    Ok(())
}

fn yield_to_worst(loaded: &[LoadedBond], calculator: BondCalculator) -> Vec<Option<WorstRow>> {
    loaded
        .iter()
        .enumerate()
        .map(|(record, bond)| match bond {
            LoadedBond::Ready(priced) if priced.bond.call_schedule().is_some() => {
                match calculator.yield_to_worst(&priced.bond, priced.clean_price, priced.valuation_date) {
                    Ok(result) => Some(WorstRow {
                        record,
                        isin: priced.bond.isin().to_string(),
                        result,
                    }),
                    Err(err) => {
                        tracing::warn!("{}: yield-to-worst failed: {err}", priced.bond.isin());
                        None
                    }
                }
            }
            _ => None,
        })
        .collect()
}

fn row(outcome: &BatchOutcome, worst: Option<&WorstRow>) -> AnalysisRow {
    let ytw = worst
        .map(|w| format!("{} ({})", format_percent(w.result.result.ytm), w.result.workout_date))
        .unwrap_or_default();

    match outcome {
        BatchOutcome::Ok(a) | BatchOutcome::NotConverged(a) => AnalysisRow {
            isin: a.isin.clone(),
            price: format!("{:.4}", a.clean_price),
            ytm: format_percent(a.ytm.ytm),
            zspread: format_bps(a.zspread.as_bps()),
            gspread: format_bps(a.gspread.as_bps()),
            ytw,
            status: if outcome.is_ok() {
                "ok".to_string()
            } else {
                "not converged".to_string()
            },
        },
        BatchOutcome::Failed { isin, error } => AnalysisRow {
            isin: isin.clone(),
            price: String::new(),
            ytm: String::new(),
            zspread: String::new(),
            gspread: String::new(),
            ytw,
            status: format!("failed: {error}"),
        },
    }
}
