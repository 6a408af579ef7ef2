//! Cash-or-nothing digital options.
//!
//! A digital call pays one unit of cash at maturity if `S_T > K`, a digital
//! put if `S_T < K`:
//!
//! $$C = e^{-rT} N(d_2) \qquad P = e^{-rT} N(-d_2)$$

use crate::black_scholes::D1D2;
use ol_core::{MarketInputs, OptionType, Price, Rate, Real, Result, Time, Volatility};
use ol_math::distributions::normal_cdf;

/// Price of a unit cash-or-nothing digital option.
pub fn digital_price(market: &MarketInputs, option_type: OptionType) -> Result<Price> {
    let D1D2 { d2, .. } = D1D2::new(market)?;
    Ok(market.discount() * normal_cdf(option_type.sign() * d2))
}

/// Digital option price from the five market scalars.
///
/// The result always lies in `[0, e^(−rT)]`.
pub fn digital_option_price(
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
    option_type: OptionType,
) -> Result<Price> {
    let market = MarketInputs::new(spot, strike, maturity, rate, volatility)?;
    digital_price(&market, option_type)
}
