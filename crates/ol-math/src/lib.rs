//! # ol-math
//!
//! Mathematical utilities: the standard normal distribution (via statrs),
//! a statistics accumulator, and seedable Gaussian random sources.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Random number generators.
pub mod random_numbers;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{normal_cdf, normal_cdf_inverse, normal_pdf};
pub use random_numbers::{GaussianRng, InverseCumulativeNormalRng, StdNormalRng};
pub use statistics::Statistics;
