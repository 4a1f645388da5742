//! Cashflows command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use yieldcheck_bonds::generate_cashflows;
use yieldcheck_core::types::{CashFlow, Date};

use crate::cli::OutputFormat;
use crate::output::{print_header, print_json, print_table, print_warning};
use crate::request::{LoadedBond, RequestFile};

/// Arguments for the cashflows command.
#[derive(Args, Debug)]
pub struct CashflowsArgs {
    /// Request file (JSON)
    #[arg(short, long, env = "YIELDCHECK_REQUEST")]
    pub request: PathBuf,

    /// Only show this ISIN
    #[arg(short, long)]
    pub isin: Option<String>,
}

#[derive(Debug, Tabled)]
struct CashflowRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time (y)")]
    time: String,
    #[tabled(rename = "Coupon")]
    coupon: String,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Total")]
    total: String,
}

impl From<&CashFlow> for CashflowRow {
    fn from(cf: &CashFlow) -> Self {
        Self {
            date: cf.date().to_string(),
            time: format!("{:.6}", cf.time_years()),
            coupon: cf.coupon_amount().round_dp(6).to_string(),
            principal: cf.principal_amount().round_dp(6).to_string(),
            total: cf.total().round_dp(6).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum BondCashflows {
    Ok {
        isin: String,
        valuation_date: Date,
        cashflows: Vec<CashFlow>,
    },
    Failed {
        isin: String,
        error: String,
    },
}

/// Execute the cashflows command.
pub fn execute(args: CashflowsArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let request = RequestFile::load(&args.request)?;

    let schedules: Vec<BondCashflows> = request
        .bonds()
        .into_iter()
        .filter(|bond| {
            args.isin.as_deref().map_or(true, |wanted| match bond {
                LoadedBond::Ready(priced) => priced.bond.isin() == wanted,
                LoadedBond::Rejected { isin, .. } => isin == wanted,
            })
        })
        .map(|bond| match bond {
            LoadedBond::Ready(priced) => match generate_cashflows(&priced.bond, priced.valuation_date) {
                Ok(cashflows) => BondCashflows::Ok {
                    isin: priced.bond.isin().to_string(),
                    valuation_date: priced.valuation_date,
                    cashflows,
                },
                Err(err) => BondCashflows::Failed {
                    isin: priced.bond.isin().to_string(),
                    error: err.to_string(),
                },
            },
            LoadedBond::Rejected { isin, error } => BondCashflows::Failed { isin, error },
        })
        .collect();

    if let Some(isin) = &args.isin {
        if schedules.is_empty() && !quiet {
            print_warning(&format!("No bond with ISIN {isin}"));
        }
    }

    match format {
        OutputFormat::Json => print_json(&schedules)?,
        OutputFormat::Table => {
            for schedule in &schedules {
                match schedule {
                    BondCashflows::Ok {
                        isin,
                        valuation_date,
                        cashflows,
                    } => {
                        print_header(&format!("{isin} (valued {valuation_date})"));
                        let rows: Vec<CashflowRow> = cashflows.iter().map(CashflowRow::from).collect();
                        print_table(&rows);
                    }
                    BondCashflows::Failed { isin, error } => {
                        print_header(isin);
                        print_warning(error);
                    }
                }
            }
        }
    }
    Ok(())
}
