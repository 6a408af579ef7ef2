//! Market inputs shared by every pricer.
//!
//! [`MarketInputs`] bundles the five scalars of the Black-Scholes world:
//! spot, strike, time to maturity, continuously compounded risk-free rate,
//! and volatility. Construction validates the domain once so the formulas
//! downstream never divide by zero.

use crate::{ensure, DiscountFactor, Rate, Real, Result, Time, Volatility};

/// Spot, strike, maturity, rate, and volatility of a single option.
///
/// Invariants (enforced by [`MarketInputs::new`] and
/// [`MarketInputs::validate`]):
/// * `spot`, `strike`, `maturity`, `volatility` are finite and `> 0`
/// * `rate` is finite
/// * `volatility · √maturity > 0`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketInputs {
    /// Current price of the underlying.
    pub spot: Real,
    /// Strike price.
    pub strike: Real,
    /// Time to maturity in years.
    pub maturity: Time,
    /// Continuously compounded risk-free rate.
    pub rate: Rate,
    /// Annualised volatility.
    pub volatility: Volatility,
}

impl MarketInputs {
    /// Build and validate a set of market inputs.
    pub fn new(
        spot: Real,
        strike: Real,
        maturity: Time,
        rate: Rate,
        volatility: Volatility,
    ) -> Result<Self> {
        let inputs = Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Check the invariants listed on the type.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.spot.is_finite() && self.spot > 0.0,
            "spot must be positive, got {}",
            self.spot
        );
        ensure!(
            self.strike.is_finite() && self.strike > 0.0,
            "strike must be positive, got {}",
            self.strike
        );
        ensure!(
            self.maturity.is_finite() && self.maturity > 0.0,
            "maturity must be positive, got {}",
            self.maturity
        );
        ensure!(self.rate.is_finite(), "rate must be finite, got {}", self.rate);
        ensure!(
            self.volatility.is_finite() && self.volatility > 0.0,
            "volatility must be positive, got {}",
            self.volatility
        );
        let std_dev = self.std_dev();
        ensure!(
            std_dev > 0.0,
            "volatility * sqrt(maturity) must be nonzero, got {std_dev}"
        );
        Ok(())
    }

    /// Same market with a different maturity, revalidated.
    pub fn with_maturity(&self, maturity: Time) -> Result<Self> {
        Self::new(self.spot, self.strike, maturity, self.rate, self.volatility)
    }

    /// Same market with a different strike, revalidated.
    pub fn with_strike(&self, strike: Real) -> Result<Self> {
        Self::new(self.spot, strike, self.maturity, self.rate, self.volatility)
    }

    /// Total standard deviation `σ·√T`.
    #[inline]
    pub fn std_dev(&self) -> Real {
        self.volatility * self.maturity.sqrt()
    }

    /// Discount factor to maturity `e^(−rT)`.
    #[inline]
    pub fn discount(&self) -> DiscountFactor {
        (-self.rate * self.maturity).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn valid_inputs() {
        let m = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        assert_abs_diff_eq!(m.std_dev(), 0.2, epsilon = 1e-15);
        assert_abs_diff_eq!(m.discount(), (-0.05_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn negative_rate_is_allowed() {
        assert!(MarketInputs::new(100.0, 100.0, 1.0, -0.01, 0.2).is_ok());
    }

    #[test]
    fn nonpositive_scalars_rejected() {
        let cases = [
            (0.0, 100.0, 1.0, 0.05, 0.2),
            (100.0, -1.0, 1.0, 0.05, 0.2),
            (100.0, 100.0, 0.0, 0.05, 0.2),
            (100.0, 100.0, 1.0, 0.05, 0.0),
            (100.0, 100.0, 1.0, f64::NAN, 0.2),
            (f64::INFINITY, 100.0, 1.0, 0.05, 0.2),
        ];
        for (s, k, t, r, v) in cases {
            let err = MarketInputs::new(s, k, t, r, v).unwrap_err();
            assert!(err.is_invalid_input(), "({s}, {k}, {t}, {r}, {v}) -> {err}");
        }
    }

    #[test]
    fn tiny_maturity_underflow_rejected() {
        // σ·√T underflows to zero even though both factors are positive.
        let err = MarketInputs::new(100.0, 100.0, 1e-320, 0.05, 1e-170).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn with_maturity_revalidates() {
        let m = MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        assert_eq!(m.with_maturity(0.5).unwrap().maturity, 0.5);
        assert!(m.with_maturity(-0.5).is_err());
        assert!(m.with_strike(0.0).is_err());
    }

    proptest! {
        #[test]
        fn positive_inputs_accepted(
            spot in 1e-3f64..1e6,
            strike in 1e-3f64..1e6,
            maturity in 1e-4f64..50.0,
            rate in -1.0f64..1.0,
            volatility in 1e-4f64..5.0,
        ) {
            let m = MarketInputs::new(spot, strike, maturity, rate, volatility).unwrap();
            prop_assert!(m.std_dev() > 0.0);
            prop_assert!(m.discount() > 0.0);
        }

        #[test]
        fn nonpositive_spot_rejected(spot in -1e6f64..=0.0) {
            let err = MarketInputs::new(spot, 100.0, 1.0, 0.05, 0.2).unwrap_err();
            prop_assert!(err.is_invalid_input());
        }
    }
}
