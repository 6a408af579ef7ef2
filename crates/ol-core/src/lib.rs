//! # ol-core
//!
//! Core types, traits, and error definitions for optionlab.
//!
//! This crate provides the vocabulary shared across all other crates in the
//! workspace – scalar type aliases, the error type, the option type, the
//! validated market inputs, and the pricing defaults.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Spot / strike / maturity / rate / volatility bundle.
pub mod market;

/// Call / put enum.
pub mod option_type;

/// Default step, trial, and grid sizes used by the engines.
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A discount factor in [0, 1].
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use market::MarketInputs;
pub use option_type::OptionType;
pub use settings::PricingDefaults;
