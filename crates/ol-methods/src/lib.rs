//! # ol-methods
//!
//! Numerical methods: the Cox-Ross-Rubinstein binomial lattice with
//! backward induction, and a terminal-value Monte Carlo driver.
//!
//! # Modules
//!
//! * [`lattice`]: binomial tree and backward-induction pricing
//! * [`monte_carlo`]: GBM terminal sampling and statistics collection

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lattice methods: binomial tree, backward induction.
pub mod lattice;

/// Monte Carlo simulation: terminal sampling, pricing, statistics.
pub mod monte_carlo;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::{price_american, price_european, roll_back, BinomialTree, ExerciseStyle};
pub use monte_carlo::{GbmTerminalSampler, MonteCarloModel, TerminalPricer};
