//! Black-Scholes closed-form pricer.
//!
//! Prices European vanilla options on a non-dividend-paying underlying:
//!
//! $$C = S N(d_1) - K e^{-rT} N(d_2)$$
//! $$P = K e^{-rT} N(-d_2) - S N(-d_1)$$
//!
//! where $d_{1,2} = \frac{\ln(S/K) + (r \pm \sigma^2/2)T}{\sigma\sqrt{T}}$.
//!
//! [`D1D2`] is the single place the `d1`/`d2` terms are computed; the Greeks,
//! the digital pricer and the analytic range-accrual reference all reuse it.

use ol_core::{MarketInputs, OptionType, Price, Rate, Real, Result, Time, Volatility};
use ol_math::distributions::normal_cdf;

/// The `d1` / `d2` terms of the Black-Scholes formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct D1D2 {
    /// `(ln(S/K) + (r + σ²/2)T) / (σ√T)`
    pub d1: Real,
    /// `d1 − σ√T`
    pub d2: Real,
}

impl D1D2 {
    /// Compute `d1` and `d2` for validated market inputs.
    pub fn new(market: &MarketInputs) -> Result<Self> {
        market.validate()?;
        let std_dev = market.std_dev();
        let sigma = market.volatility;
        let d1 = ((market.spot / market.strike).ln()
            + (market.rate + 0.5 * sigma * sigma) * market.maturity)
            / std_dev;
        Ok(Self {
            d1,
            d2: d1 - std_dev,
        })
    }
}

/// Black-Scholes price of a European option.
pub fn black_scholes(market: &MarketInputs, option_type: OptionType) -> Result<Price> {
    let D1D2 { d1, d2 } = D1D2::new(market)?;
    let df = market.discount();
    let price = match option_type {
        OptionType::Call => market.spot * normal_cdf(d1) - market.strike * df * normal_cdf(d2),
        OptionType::Put => market.strike * df * normal_cdf(-d2) - market.spot * normal_cdf(-d1),
    };
    // Cancellation in deep out-of-the-money wings can leave -1e-16 noise.
    Ok(price.max(0.0))
}

/// Black-Scholes price from the five market scalars.
///
/// # Errors
/// [`Error::InvalidInput`](ol_core::Error::InvalidInput) if `spot`,
/// `strike`, `maturity`, or `volatility` is not strictly positive, or any
/// input is not finite.
///
/// # Example
/// ```
/// use ol_core::OptionType;
/// use ol_pricingengines::black_scholes_price;
///
/// let call = black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert!((call - 10.4506).abs() < 1e-4);
/// ```
pub fn black_scholes_price(
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
    option_type: OptionType,
) -> Result<Price> {
    let market = MarketInputs::new(spot, strike, maturity, rate, volatility)?;
    black_scholes(&market, option_type)
}
