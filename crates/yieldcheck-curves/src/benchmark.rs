//! Benchmark yield curve.

use serde::{Deserialize, Serialize};
use yieldcheck_core::types::Date;
use yieldcheck_math::interpolation::{Interpolator, LinearInterpolator};

use crate::error::{CurveError, CurveResult};
use crate::point::CurvePoint;

/// A benchmark (government) yield curve with strictly increasing tenors.
///
/// Rates between points are linearly interpolated. Outside
/// `[first tenor, last tenor]` the curve is flat at the nearest end
/// point's rate; a one-point curve is flat everywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkCurve {
    interpolator: LinearInterpolator,
    currency: Option<String>,
    as_of: Option<Date>,
}

impl BenchmarkCurve {
    /// Builds a curve from points, which must already be ordered by tenor.
    ///
    /// # Errors
    ///
    /// - `CurveError::EmptyCurve` if `points` is empty
    /// - `CurveError::InvalidCurve` for non-finite values or tenors that are
    ///   not strictly increasing
    pub fn new(points: &[CurvePoint]) -> CurveResult<Self> {
        let tenors = points.iter().map(|p| p.tenor_years).collect();
        let rates = points.iter().map(|p| p.rate).collect();
        Self::build(tenors, rates)
    }

    /// Builds a curve from parallel tenor and rate slices.
    ///
    /// # Errors
    ///
    /// As [`BenchmarkCurve::new`], plus `CurveError::InvalidCurve` if the
    /// slices differ in length.
    pub fn from_tenors_rates(tenors: &[f64], rates: &[f64]) -> CurveResult<Self> {
        if tenors.len() != rates.len() {
            return Err(CurveError::invalid_curve(format!(
                "{} tenors but {} rates",
                tenors.len(),
                rates.len()
            )));
        }
        Self::build(tenors.to_vec(), rates.to_vec())
    }

    fn build(tenors: Vec<f64>, rates: Vec<f64>) -> CurveResult<Self> {
        Ok(Self {
            interpolator: LinearInterpolator::new(tenors, rates)?,
            currency: None,
            as_of: None,
        })
    }

    /// Tags the curve with its currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Tags the curve with its observation date.
    #[must_use]
    pub fn with_as_of(mut self, as_of: Date) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Rate at `tenor_years`, flat beyond the end points.
    ///
    /// An exact tenor match returns the stored rate unchanged.
    pub fn rate_at(&self, tenor_years: f64) -> f64 {
        self.interpolator.interpolate(tenor_years)
    }

    /// Rate at `tenor_years`, rejecting non-finite tenors.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidTenor` if `tenor_years` is NaN or infinite.
    pub fn try_rate_at(&self, tenor_years: f64) -> CurveResult<f64> {
        if !tenor_years.is_finite() {
            return Err(CurveError::InvalidTenor { tenor: tenor_years });
        }
        Ok(self.rate_at(tenor_years))
    }

    /// True if `tenor_years` is read by extrapolation rather than interpolation.
    pub fn is_extrapolated(&self, tenor_years: f64) -> bool {
        !self.interpolator.in_range(tenor_years)
    }

    /// Tenors in years.
    pub fn tenors(&self) -> &[f64] {
        self.interpolator.xs()
    }

    /// Rates in decimal.
    pub fn rates(&self) -> &[f64] {
        self.interpolator.ys()
    }

    /// Iterates the curve points in tenor order.
    pub fn points(&self) -> impl Iterator<Item = CurvePoint> + '_ {
        self.tenors()
            .iter()
            .zip(self.rates())
            .map(|(&t, &r)| CurvePoint::new(t, r))
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.tenors().len()
    }

    /// Always false; construction rejects empty curves.
    pub fn is_empty(&self) -> bool {
        self.tenors().is_empty()
    }

    /// Lowest rate on the curve.
    pub fn min_rate(&self) -> f64 {
        self.rates().iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Currency tag, if any.
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Observation date, if any.
    pub fn as_of(&self) -> Option<Date> {
        self.as_of
    }
}

/// Serialized form of a benchmark curve as supplied by data loaders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurveRecord {
    /// Tenors in years.
    pub tenors: Vec<f64>,
    /// Rates in decimal.
    pub rates: Vec<f64>,
    /// Curve currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Observation date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<Date>,
}

impl TryFrom<CurveRecord> for BenchmarkCurve {
    type Error = CurveError;

    fn try_from(record: CurveRecord) -> CurveResult<Self> {
        let mut curve = BenchmarkCurve::from_tenors_rates(&record.tenors, &record.rates)?;
        curve.currency = record.currency;
        curve.as_of = record.as_of;
        Ok(curve)
    }
}

impl From<&BenchmarkCurve> for CurveRecord {
    fn from(curve: &BenchmarkCurve) -> Self {
        Self {
            tenors: curve.tenors().to_vec(),
            rates: curve.rates().to_vec(),
            currency: curve.currency.clone(),
            as_of: curve.as_of,
        }
    }
}

/// Interpolates a rate at `tenor_years` from parallel tenor and rate slices.
///
/// Linear between the bracketing points, flat outside the tenor range.
///
/// # Errors
///
/// - `CurveError::EmptyCurve` if both slices are empty
/// - `CurveError::InvalidCurve` for mismatched lengths, non-finite values or
///   tenors that are not strictly increasing
/// - `CurveError::InvalidTenor` if `tenor_years` is not finite
pub fn interpolate_rate(tenors: &[f64], rates: &[f64], tenor_years: f64) -> CurveResult<f64> {
    BenchmarkCurve::from_tenors_rates(tenors, rates)?.try_rate_at(tenor_years)
}
