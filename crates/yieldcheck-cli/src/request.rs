//! Request and configuration files.
//!
//! A request file is JSON:
//!
//! ```json
//! {
//!   "valuation_date": "2025-06-30",
//!   "curve": { "tenors": [1.0, 5.0], "rates": [0.04, 0.045] },
//!   "bonds": [ { "isin": "...", "coupon_rate": 4.25, "day_basis": "30/360", ... } ],
//!   "prices": [ { "isin": "...", "date": "2025-06-30", "clean_price": 100.875 } ]
//! }
//! ```
//!
//! `valuation_date` is optional; without it each bond is valued on the date
//! of its latest price.

use std::path::Path;

use serde::Deserialize;
use yieldcheck_analytics::config::CalculationConfig;
use yieldcheck_bonds::types::{Bond, BondRecord, PriceObservation};
use yieldcheck_core::types::Date;
use yieldcheck_curves::{BenchmarkCurve, CurveRecord};

use crate::error::{CliError, CliResult};

/// Contents of a request file.
#[derive(Debug, Deserialize)]
pub struct RequestFile {
    /// Valuation date applied to every bond.
    #[serde(default)]
    pub valuation_date: Option<Date>,
    /// Benchmark curve.
    pub curve: CurveRecord,
    /// Bond reference and schedule records.
    pub bonds: Vec<BondRecord>,
    /// Observed clean prices.
    #[serde(default)]
    pub prices: Vec<PriceObservation>,
}

/// A bond ready to analyze.
#[derive(Debug)]
pub struct PricedBond {
    pub bond: Bond,
    pub clean_price: f64,
    pub valuation_date: Date,
}

/// One bond record after loading: priced, or the reason it cannot be.
#[derive(Debug)]
pub enum LoadedBond {
    Ready(PricedBond),
    Rejected { isin: String, error: String },
}

impl RequestFile {
    /// Reads and parses a request file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| CliError::Request {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the benchmark curve. Curve problems are fatal for the request.
    pub fn curve(&self) -> CliResult<BenchmarkCurve> {
        Ok(BenchmarkCurve::try_from(self.curve.clone())?)
    }

    /// Validates every bond record and pairs it with its price.
    ///
    /// Record order is preserved; a bad record becomes
    /// [`LoadedBond::Rejected`] rather than failing the whole request.
    pub fn bonds(&self) -> Vec<LoadedBond> {
        self.bonds.iter().map(|record| self.load_bond(record)).collect()
    }

    fn load_bond(&self, record: &BondRecord) -> LoadedBond {
        let isin = record.isin.clone();
        let bond = match Bond::try_from(record.clone()) {
            Ok(bond) => bond,
            Err(err) => {
                return LoadedBond::Rejected {
                    isin,
                    error: err.to_string(),
                }
            }
        };

        match self.price_for(&isin) {
            Some(price) => match price.validate() {
                Ok(()) => LoadedBond::Ready(PricedBond {
                    bond,
                    clean_price: price.clean_price,
                    valuation_date: self.valuation_date.unwrap_or(price.date),
                }),
                Err(err) => LoadedBond::Rejected {
                    isin,
                    error: err.to_string(),
                },
            },
            None => LoadedBond::Rejected {
                error: match self.valuation_date {
                    Some(date) => format!("No price for {isin} on or before {date}"),
                    None => format!("No price for {isin}"),
                },
                isin,
            },
        }
    }

    /// Latest price for `isin`, not after the valuation date when one is set.
    fn price_for(&self, isin: &str) -> Option<&PriceObservation> {
        self.prices
            .iter()
            .filter(|p| p.isin == isin)
            .filter(|p| self.valuation_date.map_or(true, |v| p.date <= v))
            .max_by_key(|p| p.date)
    }
}

/// Loads a TOML calculation config, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> CliResult<CalculationConfig> {
    let config = match path {
        None => CalculationConfig::default(),
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            toml::from_str(&raw).map_err(|source| CliError::ConfigFile {
                path: path.to_path_buf(),
                source,
            })?
        }
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> RequestFile {
        serde_json::from_str(json).unwrap()
    }

    const BOND: &str = r#"{
        "isin": "US0000000AA1",
        "coupon_rate": 4.25,
        "day_basis": "30/360",
        "coupon_frequency": 2,
        "issue_date": "2020-09-15",
        "maturity_date": "2030-09-15"
    }"#;

    #[test]
    fn test_latest_price_on_or_before_valuation() {
        let req = request(&format!(
            r#"{{
                "valuation_date": "2025-06-30",
                "curve": {{ "tenors": [1.0], "rates": [0.04] }},
                "bonds": [{BOND}],
                "prices": [
                    {{ "isin": "US0000000AA1", "date": "2025-06-27", "clean_price": 99.5 }},
                    {{ "isin": "US0000000AA1", "date": "2025-06-30", "clean_price": 100.0 }},
                    {{ "isin": "US0000000AA1", "date": "2025-07-01", "clean_price": 101.0 }}
                ]
            }}"#
        ));
        let loaded = req.bonds();
        match &loaded[0] {
            LoadedBond::Ready(priced) => {
                assert_eq!(priced.clean_price, 100.0);
                assert_eq!(priced.valuation_date, Date::from_ymd(2025, 6, 30).unwrap());
            }
            other => panic!("expected a priced bond, got {other:?}"),
        }
    }

    #[test]
    fn test_valuation_defaults_to_price_date() {
        let req = request(&format!(
            r#"{{
                "curve": {{ "tenors": [1.0], "rates": [0.04] }},
                "bonds": [{BOND}],
                "prices": [{{ "isin": "US0000000AA1", "date": "2025-05-02", "clean_price": 98.0 }}]
            }}"#
        ));
        match &req.bonds()[0] {
            LoadedBond::Ready(priced) => {
                assert_eq!(priced.valuation_date, Date::from_ymd(2025, 5, 2).unwrap());
            }
            other => panic!("expected a priced bond, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_records_are_rejected_individually() {
        let req = request(&format!(
            r#"{{
                "curve": {{ "tenors": [1.0], "rates": [0.04] }},
                "bonds": [
                    {BOND},
                    {{
                        "isin": "US0000000BB2",
                        "coupon_rate": 5,
                        "day_basis": "NL/365",
                        "issue_date": "2020-01-01",
                        "maturity_date": "2030-01-01"
                    }}
                ],
                "prices": []
            }}"#
        ));
        let loaded = req.bonds();
        assert_eq!(loaded.len(), 2);
        match &loaded[0] {
            LoadedBond::Rejected { error, .. } => assert_eq!(error, "No price for US0000000AA1"),
            other => panic!("expected rejection, got {other:?}"),
        }
        match &loaded[1] {
            LoadedBond::Rejected { error, .. } => {
                assert_eq!(error, "Unknown day count basis: 'NL/365'");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_curve_is_fatal() {
        let req = request(r#"{ "curve": { "tenors": [], "rates": [] }, "bonds": [] }"#);
        assert!(matches!(
            req.curve(),
            Err(CliError::Curve(yieldcheck_curves::CurveError::EmptyCurve))
        ));
    }

    #[test]
    fn test_default_config_without_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config, CalculationConfig::default());
    }
}
