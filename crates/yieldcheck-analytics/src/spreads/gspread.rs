//! G-spread (government spread).

use yieldcheck_curves::BenchmarkCurve;

use super::{SpreadResult, SpreadType};
use crate::error::{AnalyticsError, AnalyticsResult};

/// G-spread from parallel tenor and rate slices.
///
/// `G = ytm - r(maturity_years)`, with `r` linearly interpolated and flat
/// beyond the curve ends.
///
/// # Errors
///
/// - `CurveError::EmptyCurve` / `InvalidCurve` for bad curve data
/// - `CurveError::InvalidTenor` if `maturity_years` is not finite
/// - `AnalyticsError::InvalidInput` if `ytm` is not finite
pub fn calculate_gspread(
    ytm: f64,
    maturity_years: f64,
    tenors: &[f64],
    rates: &[f64],
) -> AnalyticsResult<SpreadResult> {
    let curve = BenchmarkCurve::from_tenors_rates(tenors, rates)?;
    gspread_from_curve(ytm, maturity_years, &curve)
}

/// G-spread against an already built benchmark curve.
///
/// # Errors
///
/// See [`calculate_gspread`].
pub fn gspread_from_curve(
    ytm: f64,
    maturity_years: f64,
    curve: &BenchmarkCurve,
) -> AnalyticsResult<SpreadResult> {
    if !ytm.is_finite() {
        return Err(AnalyticsError::invalid_input(format!("ytm must be finite, got {ytm}")));
    }
    let govt_rate = curve.try_rate_at(maturity_years)?;

    Ok(SpreadResult {
        spread_type: SpreadType::GSpread,
        spread: ytm - govt_rate,
        converged: true,
        govt_rate: Some(govt_rate),
        iterations: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use yieldcheck_curves::CurveError;

    const TENORS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];
    const RATES: [f64; 4] = [0.040, 0.042, 0.045, 0.047];

    #[test]
    fn test_interpolated_benchmark() {
        let result = calculate_gspread(0.055, 3.5, &TENORS, &RATES).unwrap();
        // 2y..5y: 0.042 + 1.5 / 3 * 0.003
        assert_relative_eq!(result.govt_rate.unwrap(), 0.0435, epsilon = 1e-12);
        assert_relative_eq!(result.spread, 0.055 - 0.0435, epsilon = 1e-12);
        assert_relative_eq!(result.as_bps(), 115.0, epsilon = 1e-8);
        assert!(result.converged);
        assert!(result.iterations.is_empty());
        assert_eq!(result.spread_type, SpreadType::GSpread);
    }

    #[test]
    fn test_exact_tenor_and_flat_ends() {
        let at_node = calculate_gspread(0.05, 5.0, &TENORS, &RATES).unwrap();
        assert_eq!(at_node.govt_rate, Some(0.045));

        let short = calculate_gspread(0.05, 0.25, &TENORS, &RATES).unwrap();
        assert_eq!(short.govt_rate, Some(0.040));

        let long = calculate_gspread(0.05, 30.0, &TENORS, &RATES).unwrap();
        assert_eq!(long.govt_rate, Some(0.047));
    }

    #[test]
    fn test_negative_spread() {
        let result = calculate_gspread(0.03, 2.0, &TENORS, &RATES).unwrap();
        assert!(result.spread < 0.0);
    }

    #[test]
    fn test_empty_curve() {
        let err = calculate_gspread(0.05, 5.0, &[], &[]).unwrap_err();
        assert_eq!(err, AnalyticsError::Curve(CurveError::EmptyCurve));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            calculate_gspread(f64::NAN, 5.0, &TENORS, &RATES),
            Err(AnalyticsError::InvalidInput(_))
        ));
        assert!(matches!(
            calculate_gspread(0.05, f64::NAN, &TENORS, &RATES),
            Err(AnalyticsError::Curve(CurveError::InvalidTenor { .. }))
        ));
        assert!(matches!(
            calculate_gspread(0.05, 5.0, &TENORS, &RATES[..3]),
            Err(AnalyticsError::Curve(CurveError::InvalidCurve { .. }))
        ));
    }
}
