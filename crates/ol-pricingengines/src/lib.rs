//! # ol-pricingengines
//!
//! Pricers built on the core vocabulary (spot, strike, maturity, rate,
//! volatility).
//!
//! ## Pricers
//!
//! - [`black_scholes_price`]: closed-form European call/put
//! - [`greeks`]: analytic call-side Delta, Gamma, Vega, Theta, Rho
//! - [`binomial_option_price`] / [`BinomialEngine`]: Cox-Ross-Rubinstein lattice
//! - [`digital_option_price`]: cash-or-nothing digital
//! - [`barrier_option_price`]: placeholder, always [`BarrierPrice::Unimplemented`]
//! - [`range_accrual_price`] / [`RangeAccrual`]: Monte Carlo band probability
//! - [`sensitivity_analysis`]: Delta and Theta over a grid of maturities
//!
//! Every function validates its inputs first and fails with
//! [`ol_core::Error::InvalidInput`] instead of returning NaN or infinity.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod barrier;
pub mod binomial_engine;
pub mod black_scholes;
pub mod digital;
pub mod greeks;
pub mod range_accrual;
pub mod sensitivity;

pub use barrier::{barrier_option_price, BarrierPrice, BarrierType};
pub use binomial_engine::{binomial_option_price, binomial_option_price_with, BinomialEngine};
pub use black_scholes::{black_scholes, black_scholes_price, D1D2};
pub use digital::{digital_option_price, digital_price};
pub use greeks::{call_greeks, greeks, Greeks};
pub use range_accrual::{
    range_accrual_estimate, range_accrual_price, range_accrual_price_analytic, MonteCarloEstimate,
    RangeAccrual,
};
pub use sensitivity::{
    sensitivity_analysis, sensitivity_analysis_with, SensitivityPoint, SensitivitySeries,
};
