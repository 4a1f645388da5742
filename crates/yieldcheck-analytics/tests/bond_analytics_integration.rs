//! Integration test: cashflows, YTM, Z-spread and G-spread for a small
//! mixed portfolio loaded from records.
//!
//! Valuation date: June 30, 2025
//!
//! | ISIN         | Coupon | Freq | Basis   | Maturity   | Price   | Notes           |
//! |--------------|--------|------|---------|------------|---------|-----------------|
//! | US0000000AA1 | 4.25%  | 2    | 30/360  | 2030-09-15 | 100.875 |                 |
//! | XS0000000BB2 | 3.00%  | 1    | ACT/ACT | 2028-03-01 | 97.40   | EUR             |
//! | US0000000CC3 | 6.50%  | 2    | 30/360  | 2034-02-01 | 107.10  | callable        |
//! | US0000000DD4 | 0.00%  | 0    | ACT/365 | 2029-05-15 | 85.20   | zero coupon     |
//! | US0000000EE5 | 5.00%  | 2    | 30/360  | 2025-06-01 | 100.00  | already matured |

use approx::assert_relative_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde::Deserialize;
use yieldcheck_analytics::prelude::*;
use yieldcheck_analytics::pricing::price_from_yield;
use yieldcheck_bonds::prelude::*;
use yieldcheck_core::prelude::*;
use yieldcheck_curves::prelude::*;

const PORTFOLIO_FILE: &str = "tests/fixtures/portfolio.json";

#[derive(Debug, Deserialize)]
struct Portfolio {
    valuation_date: Date,
    curve: CurveRecord,
    bonds: Vec<BondRecord>,
    prices: Vec<PriceObservation>,
}

struct Loaded {
    valuation_date: Date,
    curve: BenchmarkCurve,
    bonds: Vec<Bond>,
    prices: Vec<PriceObservation>,
}

fn load() -> Loaded {
    let raw = std::fs::read_to_string(PORTFOLIO_FILE)
        .unwrap_or_else(|e| panic!("Failed to read {PORTFOLIO_FILE}: {e}"));
    let portfolio: Portfolio = serde_json::from_str(&raw).expect("portfolio is valid JSON");

    Loaded {
        valuation_date: portfolio.valuation_date,
        curve: BenchmarkCurve::try_from(portfolio.curve).expect("valid curve"),
        bonds: portfolio
            .bonds
            .into_iter()
            .map(|r| Bond::try_from(r).expect("valid bond record"))
            .collect(),
        prices: portfolio.prices,
    }
}

fn price_of(loaded: &Loaded, isin: &str) -> f64 {
    loaded
        .prices
        .iter()
        .find(|p| p.isin == isin)
        .map(|p| p.clean_price)
        .unwrap_or_else(|| panic!("no price for {isin}"))
}

fn bond<'a>(loaded: &'a Loaded, isin: &str) -> &'a Bond {
    loaded.bonds.iter().find(|b| b.isin() == isin).unwrap()
}

#[test]
fn test_batch_over_portfolio() {
    let loaded = load();
    let requests: Vec<_> = loaded
        .bonds
        .iter()
        .map(|b| AnalysisRequest::new(b, price_of(&loaded, b.isin()), &loaded.curve, loaded.valuation_date))
        .collect();

    let outcomes = analyze_batch(&requests, &CalculationConfig::default());
    assert_eq!(outcomes.len(), 5);

    for (outcome, request) in outcomes.iter().zip(&requests) {
        assert_eq!(outcome.isin(), request.bond.isin());
    }

    let summary = BatchSummary::from_outcomes(&outcomes);
    assert_eq!(summary, BatchSummary { ok: 4, not_converged: 0, failed: 1 });

    match &outcomes[4] {
        BatchOutcome::Failed { error, .. } => assert!(error.contains("No cashflows")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn test_every_analysis_reprices() {
    let loaded = load();
    let calculator = BondCalculator::default();

    for b in loaded.bonds.iter().filter(|b| b.is_alive_on(loaded.valuation_date)) {
        let price = price_of(&loaded, b.isin());
        let analysis = calculator.analyze(b, price, &loaded.curve, loaded.valuation_date).unwrap();

        assert!(analysis.is_converged(), "{}", b.isin());
        assert!(analysis.cashflows.iter().all(|cf| cf.time_years() > 0.0));

        let pv = price_from_yield(&analysis.cashflows, analysis.ytm.ytm, analysis.compounding);
        assert_relative_eq!(pv, price, epsilon = 1e-6);

        let z_pv = price_with_zspread(
            &analysis.cashflows,
            &loaded.curve,
            analysis.zspread.spread,
            analysis.compounding,
        );
        assert_relative_eq!(z_pv, price, epsilon = 1e-6);

        let govt = loaded.curve.rate_at(analysis.maturity_years);
        assert_eq!(analysis.gspread.govt_rate, Some(govt));
        assert_eq!(analysis.gspread.spread, analysis.ytm.ytm - govt);
    }
}

#[test]
fn test_zero_coupon_closed_form() {
    let loaded = load();
    let zero = bond(&loaded, "US0000000DD4");
    let analysis = BondCalculator::default()
        .analyze(zero, 85.20, &loaded.curve, loaded.valuation_date)
        .unwrap();

    assert_eq!(analysis.cashflows.len(), 1);
    assert_eq!(analysis.compounding, Compounding::Annual);
    // Seeded at the fallback guess, not the 0% coupon.
    assert_eq!(analysis.ytm.iterations[0].guess, 0.05);

    let t = analysis.maturity_years;
    let expected = (100.0_f64 / 85.20).powf(1.0 / t) - 1.0;
    assert_relative_eq!(analysis.ytm.ytm, expected, epsilon = 1e-8);
}

#[test]
fn test_premium_callable_yield_to_worst() {
    let loaded = load();
    let callable = bond(&loaded, "US0000000CC3");
    let calculator = BondCalculator::default();

    let ytw = calculator
        .yield_to_worst(callable, 107.10, loaded.valuation_date)
        .unwrap();
    let ytm = calculator
        .analyze(callable, 107.10, &loaded.curve, loaded.valuation_date)
        .unwrap()
        .ytm;

    assert!(ytw.result.converged);
    assert!(ytw.result.ytm <= ytm.ytm);
    assert!(ytw.workout_date < callable.maturity_date());
}

#[test]
fn test_par_bond_two_years_annual() {
    let bond = Bond::builder()
        .isin("US0000000PAR")
        .coupon_rate(Decimal::from(5))
        .frequency(Frequency::Annual)
        .day_count(DayCountConvention::Act365Fixed)
        .issue_date(Date::from_ymd(2023, 1, 1).unwrap())
        .maturity_date(Date::from_ymd(2027, 1, 1).unwrap())
        .build()
        .unwrap();
    let flows = generate_cashflows(&bond, Date::from_ymd(2025, 1, 1).unwrap()).unwrap();

    let result = calculate_ytm(100.0, &flows, Compounding::Annual).unwrap();
    assert!(result.converged);
    assert_relative_eq!(result.ytm, 0.05, epsilon = 1e-6);
}

#[test]
fn test_flat_curve_zspread_matches_ytm_spread() {
    let loaded = load();
    let b = bond(&loaded, "US0000000AA1");
    let flows = generate_cashflows(b, loaded.valuation_date).unwrap();
    let price = price_of(&loaded, b.isin());

    let ytm = calculate_ytm(price, &flows, Compounding::SemiAnnual).unwrap();
    let z = calculate_zspread(price, &flows, &[2.0], &[0.0375], Compounding::SemiAnnual).unwrap();
    assert_relative_eq!(z.spread, ytm.ytm - 0.0375, epsilon = 1e-7);
}

#[test]
fn test_fatal_errors_surface_verbatim() {
    let loaded = load();
    let b = bond(&loaded, "US0000000AA1");
    let flows = generate_cashflows(b, loaded.valuation_date).unwrap();

    let err = calculate_zspread(100.0, &flows, &[], &[], Compounding::SemiAnnual).unwrap_err();
    assert_eq!(err, AnalyticsError::Curve(CurveError::EmptyCurve));

    let err = calculate_gspread(0.05, 5.0, &[], &[]).unwrap_err();
    assert_eq!(err, AnalyticsError::Curve(CurveError::EmptyCurve));

    let matured = bond(&loaded, "US0000000EE5");
    let err = BondCalculator::default()
        .analyze(matured, 100.0, &loaded.curve, loaded.valuation_date)
        .unwrap_err();
    assert!(matches!(err, AnalyticsError::Bond(BondError::NoCashflows { .. })));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_ytm_round_trip(
        coupon_bp in 0u32..1200,
        years in 1i32..30,
        periods in prop::sample::select(vec![1u32, 2, 4, 12]),
        price in 60.0f64..140.0,
    ) {
        let bond = Bond::builder()
            .isin("XS0000000PRP")
            .coupon_rate(Decimal::new(i64::from(coupon_bp), 2))
            .frequency(Frequency::from_periods(periods).unwrap())
            .day_count(DayCountConvention::Act365Fixed)
            .issue_date(Date::from_ymd(2020, 1, 15).unwrap())
            .maturity_date(Date::from_ymd(2025 + years, 1, 15).unwrap())
            .build()
            .unwrap();
        let valuation = Date::from_ymd(2025, 3, 1).unwrap();
        let flows = generate_cashflows(&bond, valuation).unwrap();
        let compounding = Compounding::from(bond.frequency());

        let result = YieldSolver::new()
            .with_initial_guess(f64::from(coupon_bp) / 10_000.0)
            .solve(price, &flows, compounding)
            .unwrap();

        prop_assert!(result.converged);
        let pv = price_from_yield(&flows, result.ytm, compounding);
        prop_assert!((pv - price).abs() < 1e-6);
    }
}
