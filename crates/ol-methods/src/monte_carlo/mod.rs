//! Monte Carlo simulation of terminal prices.
//!
//! Payoffs that only look at the underlying at maturity do not need a path:
//! one normal deviate per trial gives the exact GBM terminal value
//!
//! ```text
//! S_T = S · exp((r − σ²/2)·T + σ·√T·Z),   Z ~ N(0, 1)
//! ```
//!
//! * [`GbmTerminalSampler`]: maps a deviate to `S_T`
//! * [`TerminalPricer`]: evaluates a payoff on `S_T`
//! * [`MonteCarloModel`]: draws trials and collects statistics
//!
//! Trials are independent and are combined only through the statistics
//! accumulator.

use ol_core::{ensure, MarketInputs, Real, Result, Size};
use ol_math::random_numbers::GaussianRng;
use ol_math::statistics::Statistics;
use tracing::debug;

// ─── GbmTerminalSampler ───────────────────────────────────────────────────────

/// Exact terminal-value sampler for risk-neutral geometric Brownian motion.
#[derive(Debug, Clone, Copy)]
pub struct GbmTerminalSampler {
    spot: Real,
    drift: Real,
    std_dev: Real,
}

impl GbmTerminalSampler {
    /// Sampler for the given market (strike unused).
    pub fn new(market: &MarketInputs) -> Result<Self> {
        market.validate()?;
        let sigma = market.volatility;
        Ok(Self {
            spot: market.spot,
            drift: (market.rate - 0.5 * sigma * sigma) * market.maturity,
            std_dev: market.std_dev(),
        })
    }

    /// Terminal price for the standard-normal deviate `z`.
    #[inline]
    pub fn terminal(&self, z: Real) -> Real {
        self.spot * (self.drift + self.std_dev * z).exp()
    }

    /// Draw one terminal price from `rng`.
    #[inline]
    pub fn sample<G: GaussianRng + ?Sized>(&self, rng: &mut G) -> Real {
        self.terminal(rng.next_gaussian())
    }
}

// ─── TerminalPricer ───────────────────────────────────────────────────────────

/// Evaluates an (undiscounted or discounted) payoff on a terminal price.
pub trait TerminalPricer {
    /// Payoff for terminal price `s_t`.
    fn value(&self, s_t: Real) -> Real;
}

impl<F: Fn(Real) -> Real> TerminalPricer for F {
    fn value(&self, s_t: Real) -> Real {
        self(s_t)
    }
}

// ─── MonteCarloModel ──────────────────────────────────────────────────────────

/// A Monte Carlo simulation orchestrator.
///
/// Combines a terminal sampler with a pricer and collects statistics across
/// many independent trials. The random source is supplied per call.
#[derive(Debug, Clone, Copy)]
pub struct MonteCarloModel {
    sampler: GbmTerminalSampler,
    trials: Size,
}

impl MonteCarloModel {
    /// Create a model drawing `trials` terminal prices per simulation.
    pub fn new(market: &MarketInputs, trials: Size) -> Result<Self> {
        ensure!(trials > 0, "Monte Carlo trials must be > 0");
        Ok(Self {
            sampler: GbmTerminalSampler::new(market)?,
            trials,
        })
    }

    /// Run the simulation and return the gathered statistics.
    pub fn simulate<P, G>(&self, pricer: &P, rng: &mut G) -> Statistics
    where
        P: TerminalPricer + ?Sized,
        G: GaussianRng + ?Sized,
    {
        let mut stats = Statistics::new();
        for _ in 0..self.trials {
            let s_t = self.sampler.sample(rng);
            stats.add(pricer.value(s_t));
        }
        debug!(
            trials = self.trials,
            mean = ?stats.mean(),
            error = ?stats.error_estimate(),
            min = ?stats.minimum(),
            max = ?stats.maximum(),
            "Monte Carlo simulation finished"
        );
        stats
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
