//! Probability distributions.
//!
//! Only the standard normal is needed by the pricers; the error function
//! itself comes from the `statrs` crate.

pub mod normal;

pub use normal::{normal_cdf, normal_cdf_inverse, normal_pdf};
