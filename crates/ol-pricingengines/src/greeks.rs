//! Analytic Black-Scholes sensitivities.
//!
//! Only the call-side formulas are implemented: the result is the Greeks of
//! a European **call** regardless of how the caller intends to use it. Put
//! Greeks differ in Delta, Theta and Rho (by put-call parity) and are not
//! derived here.

use crate::black_scholes::D1D2;
use ol_core::{MarketInputs, PricingDefaults, Rate, Real, Result, Time, Volatility};
use ol_math::distributions::{normal_cdf, normal_pdf};

/// Vega and Rho are reported per 1 % move of volatility / rate.
const PERCENT: Real = 100.0;

/// First- and second-order sensitivities of a European call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Real,
    /// ∂V/∂σ per 1 % volatility move.
    pub vega: Real,
    /// ∂V/∂t per calendar day.
    pub theta: Real,
    /// ∂V/∂r per 1 % rate move.
    pub rho: Real,
}

/// Call-side Greeks with an explicit day-count convention for Theta.
pub fn call_greeks(market: &MarketInputs, defaults: &PricingDefaults) -> Result<Greeks> {
    defaults.validate()?;
    let D1D2 { d1, d2 } = D1D2::new(market)?;

    let MarketInputs {
        spot: s,
        strike: k,
        maturity: t,
        rate: r,
        volatility: sigma,
    } = *market;
    let sqrt_t = t.sqrt();
    let df = market.discount();
    let pdf_d1 = normal_pdf(d1);
    let cdf_d2 = normal_cdf(d2);

    let theta_per_year = -(s * pdf_d1 * sigma) / (2.0 * sqrt_t) - r * k * df * cdf_d2;

    Ok(Greeks {
        delta: normal_cdf(d1),
        gamma: pdf_d1 / (s * sigma * sqrt_t),
        vega: s * pdf_d1 * sqrt_t / PERCENT,
        theta: theta_per_year / defaults.days_per_year,
        rho: k * t * df * cdf_d2 / PERCENT,
    })
}

/// Call-side Greeks from the five market scalars (Theta per 1/365 year).
///
/// # Example
/// ```
/// use ol_pricingengines::greeks;
///
/// let g = greeks(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert!((g.delta - 0.6368).abs() < 1e-4);
/// assert!((g.theta + 0.0176).abs() < 1e-4);
/// ```
pub fn greeks(
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
) -> Result<Greeks> {
    let market = MarketInputs::new(spot, strike, maturity, rate, volatility)?;
    call_greeks(&market, &PricingDefaults::default())
}
