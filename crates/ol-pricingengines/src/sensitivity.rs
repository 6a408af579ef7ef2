//! Greeks over a grid of maturities.
//!
//! The sweep keeps spot, strike, rate and volatility fixed and re-evaluates
//! the call-side Delta and Theta at evenly spaced day counts between one day
//! and the full maturity.

use crate::greeks::call_greeks;
use ol_core::{ensure, MarketInputs, PricingDefaults, Rate, Real, Result, Size, Time, Volatility};
use tracing::{debug, trace};

/// One sample of the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityPoint {
    /// Days to maturity. Not necessarily integral.
    pub day: Real,
    /// Call Delta at that maturity.
    pub delta: Real,
    /// Call Theta (per day) at that maturity.
    pub theta: Real,
}

/// Sweep result, ascending in `day`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensitivitySeries {
    points: Vec<SensitivityPoint>,
}

impl SensitivitySeries {
    /// All points in ascending day order.
    pub fn points(&self) -> &[SensitivityPoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> Size {
        self.points.len()
    }

    /// `true` if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Day counts.
    pub fn days(&self) -> Vec<Real> {
        self.points.iter().map(|p| p.day).collect()
    }

    /// Deltas, parallel to [`days`](Self::days).
    pub fn deltas(&self) -> Vec<Real> {
        self.points.iter().map(|p| p.delta).collect()
    }

    /// Thetas, parallel to [`days`](Self::days).
    pub fn thetas(&self) -> Vec<Real> {
        self.points.iter().map(|p| p.theta).collect()
    }
}

impl IntoIterator for SensitivitySeries {
    type Item = SensitivityPoint;
    type IntoIter = std::vec::IntoIter<SensitivityPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

/// `n` evenly spaced values from `start` to `end`, both inclusive.
fn linspace(start: Real, end: Real, n: Size) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as Real;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + i as Real * step })
                .collect()
        }
    }
}

/// Delta and Theta at `defaults.sweep_points` maturities from one day to
/// `trunc(T · days_per_year)` days.
///
/// # Errors
/// [`Error::InvalidInput`](ol_core::Error::InvalidInput) if the market is
/// invalid or the maturity is shorter than one day.
pub fn sensitivity_analysis_with(
    market: &MarketInputs,
    defaults: &PricingDefaults,
) -> Result<SensitivitySeries> {
    market.validate()?;
    defaults.validate()?;

    let max_day = (market.maturity * defaults.days_per_year).trunc();
    ensure!(
        max_day >= 1.0,
        "maturity {} is shorter than one day",
        market.maturity
    );

    let points = linspace(1.0, max_day, defaults.sweep_points)
        .into_iter()
        .map(|day| {
            let sample = market.with_maturity(day / defaults.days_per_year)?;
            let g = call_greeks(&sample, defaults)?;
            trace!(day, delta = g.delta, theta = g.theta, "sweep point");
            Ok(SensitivityPoint {
                day,
                delta: g.delta,
                theta: g.theta,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(points = points.len(), max_day, "sensitivity sweep complete");
    Ok(SensitivitySeries { points })
}

/// Delta and Theta at 100 maturities from one day to `trunc(T · 365)` days.
pub fn sensitivity_analysis(
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
) -> Result<SensitivitySeries> {
    let market = MarketInputs::new(spot, strike, maturity, rate, volatility)?;
    sensitivity_analysis_with(&market, &PricingDefaults::default())
}
