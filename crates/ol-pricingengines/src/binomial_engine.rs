//! Binomial lattice pricing engine.
//!
//! Prices vanilla options on a Cox-Ross-Rubinstein tree by backward
//! induction. The price converges to Black-Scholes as the number of steps
//! grows; the cost is `O(N²)` node updates and the caller chooses `N`
//! directly (no convergence check).

use ol_core::{
    MarketInputs, OptionType, Price, PricingDefaults, Rate, Real, Result, Size, Time, Volatility,
};
use ol_methods::lattice::{roll_back, BinomialTree, ExerciseStyle};
use tracing::trace;

/// Binomial lattice pricing engine for vanilla options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialEngine {
    steps: Size,
    exercise: ExerciseStyle,
}

impl Default for BinomialEngine {
    fn default() -> Self {
        Self::from_defaults(&PricingDefaults::default())
    }
}

impl BinomialEngine {
    /// European engine with `steps` time steps.
    pub fn new(steps: Size) -> Self {
        Self {
            steps,
            exercise: ExerciseStyle::European,
        }
    }

    /// European engine using `defaults.lattice_steps`.
    pub fn from_defaults(defaults: &PricingDefaults) -> Self {
        Self::new(defaults.lattice_steps)
    }

    /// Switch the exercise style.
    pub fn with_exercise(mut self, exercise: ExerciseStyle) -> Self {
        self.exercise = exercise;
        self
    }

    /// Number of lattice steps.
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Exercise style.
    pub fn exercise(&self) -> ExerciseStyle {
        self.exercise
    }

    /// Price a vanilla option.
    ///
    /// # Errors
    /// * [`Error::InvalidInput`](ol_core::Error::InvalidInput) for invalid
    ///   market inputs or zero steps
    /// * [`Error::NumericDegenerate`](ol_core::Error::NumericDegenerate) if
    ///   the lattice up-probability leaves `[0, 1]`
    pub fn price(&self, market: &MarketInputs, option_type: OptionType) -> Result<Price> {
        let tree = BinomialTree::cox_ross_rubinstein(market, self.steps)?;
        let strike = market.strike;
        let payoff = move |s: Real| option_type.intrinsic(s, strike);
        let price = roll_back(&tree, &payoff, self.exercise);
        trace!(steps = self.steps, %option_type, price, "binomial price");
        Ok(price)
    }
}

/// Binomial (CRR) price of a European option with `steps` time steps.
///
/// # Example
/// ```
/// use ol_core::OptionType;
/// use ol_pricingengines::binomial_option_price;
///
/// let put = binomial_option_price(100.0, 100.0, 1.0, 0.05, 0.2, 100, OptionType::Put).unwrap();
/// assert!((put - 5.5735).abs() < 0.05);
/// ```
pub fn binomial_option_price(
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
    steps: Size,
    option_type: OptionType,
) -> Result<Price> {
    let market = MarketInputs::new(spot, strike, maturity, rate, volatility)?;
    BinomialEngine::new(steps).price(&market, option_type)
}

/// Binomial price with an explicit exercise style and `defaults.lattice_steps`
/// time steps.
pub fn binomial_option_price_with(
    market: &MarketInputs,
    option_type: OptionType,
    exercise: ExerciseStyle,
    defaults: &PricingDefaults,
) -> Result<Price> {
    defaults.validate()?;
    BinomialEngine::from_defaults(defaults)
        .with_exercise(exercise)
        .price(market, option_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::black_scholes::black_scholes;
    use approx::assert_abs_diff_eq;

    fn market() -> MarketInputs {
        MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.20).unwrap()
    }

    #[test]
    fn default_engine_uses_hundred_steps() {
        let engine = BinomialEngine::default();
        assert_eq!(engine.steps(), 100);
        assert_eq!(engine.exercise(), ExerciseStyle::European);
    }

    #[test]
    fn hundred_step_prices_near_black_scholes() {
        let engine = BinomialEngine::default();
        for option_type in [OptionType::Call, OptionType::Put] {
            let tree = engine.price(&market(), option_type).unwrap();
            let bs = black_scholes(&market(), option_type).unwrap();
            // CRR error at the money is O(1/N)
            assert!((tree - bs).abs() < 0.05, "{option_type}: {tree} vs {bs}");
        }
    }

    #[test]
    fn lattice_put_call_parity() {
        // Holds exactly on a risk-neutral tree
        let engine = BinomialEngine::new(57);
        let call = engine.price(&market(), OptionType::Call).unwrap();
        let put = engine.price(&market(), OptionType::Put).unwrap();
        assert_abs_diff_eq!(call - put, 100.0 - 100.0 * (-0.05_f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn american_put_has_early_exercise_premium() {
        let european = BinomialEngine::new(200).price(&market(), OptionType::Put).unwrap();
        let american = BinomialEngine::new(200)
            .with_exercise(ExerciseStyle::American)
            .price(&market(), OptionType::Put)
            .unwrap();
        assert!(american > european + 0.1, "{american} vs {european}");
    }

    #[test]
    fn explicit_defaults_drive_step_count() {
        let defaults = PricingDefaults::default().with_lattice_steps(57);
        let with = binomial_option_price_with(
            &market(),
            OptionType::Call,
            ExerciseStyle::European,
            &defaults,
        )
        .unwrap();
        let direct = BinomialEngine::new(57).price(&market(), OptionType::Call).unwrap();
        assert_eq!(with, direct);

        let american_call = binomial_option_price_with(
            &market(),
            OptionType::Call,
            ExerciseStyle::American,
            &defaults,
        )
        .unwrap();
        // No dividends: early exercise of a call is never optimal
        assert_abs_diff_eq!(american_call, direct, epsilon = 1e-12);
    }

    #[test]
    fn zero_steps_rejected() {
        let err =
            binomial_option_price(100.0, 100.0, 1.0, 0.05, 0.2, 0, OptionType::Call).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn degenerate_lattice_rejected() {
        let err =
            binomial_option_price(100.0, 100.0, 1.0, 0.5, 0.01, 10, OptionType::Call).unwrap_err();
        assert!(err.is_numeric_degenerate());
    }
}
