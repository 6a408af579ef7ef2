//! # optionlab
//!
//! European option prices and sensitivities under Black-Scholes, a
//! Cox-Ross-Rubinstein binomial lattice, and a handful of simplified exotic
//! payoffs.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ol-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use optionlab::prelude::*;
//!
//! let call = black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! assert!((call - 10.4506).abs() < 1e-4);
//!
//! let g = greeks(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! assert!(g.gamma > 0.0);
//! ```
//!
//! Nothing here installs a `tracing` subscriber; the engines only emit
//! `debug!`/`trace!` events for whichever subscriber the application sets up.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Scalar aliases, market inputs, defaults, and error definitions.
pub use ol_core as core;

/// Normal distribution, statistics, and Gaussian random sources.
pub use ol_math as math;

/// Binomial lattice and Monte Carlo drivers.
pub use ol_methods as methods;

/// Option pricers and the sensitivity sweep.
pub use ol_pricingengines as pricingengines;

/// The most commonly used items.
pub mod prelude {
    pub use ol_core::{Error, MarketInputs, OptionType, PricingDefaults, Result};
    pub use ol_math::{GaussianRng, InverseCumulativeNormalRng, StdNormalRng};
    pub use ol_methods::ExerciseStyle;
    pub use ol_pricingengines::{
        barrier_option_price, binomial_option_price, binomial_option_price_with, black_scholes,
        black_scholes_price, call_greeks, digital_option_price, digital_price, greeks,
        range_accrual_estimate, range_accrual_price, range_accrual_price_analytic,
        sensitivity_analysis, sensitivity_analysis_with, BarrierPrice, BarrierType,
        BinomialEngine, Greeks, MonteCarloEstimate, RangeAccrual, SensitivitySeries,
    };
}
