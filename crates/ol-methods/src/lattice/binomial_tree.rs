//! Recombining Cox-Ross-Rubinstein binomial tree.
//!
//! ```text
//! dt = T / N      u = exp(σ·√dt)      d = 1 / u
//! p  = (exp(r·dt) − d) / (u − d)
//! ```
//!
//! Node `(step, i)` is the state reached after `i` down-moves and
//! `step − i` up-moves, so its underlying value is `S·u^(step−i)·d^i`.

use ol_core::{fail, DiscountFactor, MarketInputs, Real, Result, Size};
use tracing::debug;

/// A recombining binomial tree for a log-normal underlying.
///
/// The tree has `steps + 1` time layers, with layer `step` having `step + 1`
/// nodes. Nodes carry no state; values are derived on demand.
#[derive(Debug, Clone)]
pub struct BinomialTree {
    x0: Real,
    dt: Real,
    steps: Size,
    up: Real,
    down: Real,
    pu: Real,
    discount: DiscountFactor,
}

impl BinomialTree {
    /// Cox-Ross-Rubinstein tree (equal multiplicative jumps, `d = 1/u`).
    ///
    /// `market.strike` is not used by the tree itself.
    ///
    /// # Errors
    /// * [`Error::InvalidInput`](ol_core::Error::InvalidInput) if the market
    ///   inputs are invalid or `steps == 0`
    /// * [`Error::NumericDegenerate`](ol_core::Error::NumericDegenerate) if
    ///   the risk-neutral up-probability falls outside `[0, 1]`, which
    ///   happens when `|r|·√dt` is large compared to `σ`
    pub fn cox_ross_rubinstein(market: &MarketInputs, steps: Size) -> Result<Self> {
        market.validate()?;
        ol_core::ensure!(steps > 0, "lattice steps must be > 0");

        let dt = market.maturity / steps as Real;
        let up = (market.volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let growth = (market.rate * dt).exp();
        let pu = (growth - down) / (up - down);
        if !(0.0..=1.0).contains(&pu) {
            fail!(
                "risk-neutral up-probability {pu} outside [0, 1] \
                 (r = {}, sigma = {}, dt = {dt})",
                market.rate,
                market.volatility
            );
        }
        debug!(steps, dt, up, down, pu, "built CRR binomial tree");

        Ok(Self {
            x0: market.spot,
            dt,
            steps,
            up,
            down,
            pu,
            discount: 1.0 / growth,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Number of time steps.
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Time increment per step.
    pub fn dt(&self) -> Real {
        self.dt
    }

    /// Up factor `u`.
    pub fn up(&self) -> Real {
        self.up
    }

    /// Down factor `d = 1/u`.
    pub fn down(&self) -> Real {
        self.down
    }

    /// Risk-neutral probability of an up-move.
    pub fn probability_up(&self) -> Real {
        self.pu
    }

    /// Per-step discount factor `exp(−r·dt)`.
    pub fn discount(&self) -> DiscountFactor {
        self.discount
    }

    /// Number of nodes at time step `step` (always `step + 1`).
    pub fn size(&self, step: Size) -> Size {
        step + 1
    }

    /// Underlying value at node `(step, down_moves)`.
    pub fn underlying(&self, step: Size, down_moves: Size) -> Real {
        debug_assert!(down_moves <= step);
        self.x0 * self.up.powi((step - down_moves) as i32) * self.down.powi(down_moves as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn market() -> MarketInputs {
        MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.20).unwrap()
    }

    #[test]
    fn crr_parameters() {
        let tree = BinomialTree::cox_ross_rubinstein(&market(), 100).unwrap();
        let dt: Real = 0.01;
        assert_abs_diff_eq!(tree.dt(), dt, epsilon = 1e-15);
        assert_abs_diff_eq!(tree.up(), (0.2 * dt.sqrt()).exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(tree.up() * tree.down(), 1.0, epsilon = 1e-15);
        let expected_p = ((0.05 * dt).exp() - tree.down()) / (tree.up() - tree.down());
        assert_abs_diff_eq!(tree.probability_up(), expected_p, epsilon = 1e-15);
        assert_abs_diff_eq!(tree.discount(), (-0.05 * dt).exp(), epsilon = 1e-15);
    }

    #[test]
    fn node_values_recombine() {
        let tree = BinomialTree::cox_ross_rubinstein(&market(), 10).unwrap();
        assert_eq!(tree.size(10), 11);
        assert_abs_diff_eq!(tree.underlying(0, 0), 100.0, epsilon = 1e-12);
        // one up and one down lands back on spot
        assert_abs_diff_eq!(tree.underlying(2, 1), 100.0, epsilon = 1e-10);
        // zero down-moves is the top node
        assert!(tree.underlying(10, 0) > tree.underlying(10, 1));
        assert_abs_diff_eq!(
            tree.underlying(10, 10),
            100.0 * tree.down().powi(10),
            epsilon = 1e-10
        );
    }

    #[test]
    fn probability_is_risk_neutral() {
        // E[S_{dt}] = S·exp(r·dt)
        let tree = BinomialTree::cox_ross_rubinstein(&market(), 50).unwrap();
        let p = tree.probability_up();
        let expected = p * tree.underlying(1, 0) + (1.0 - p) * tree.underlying(1, 1);
        assert_abs_diff_eq!(expected, 100.0 * (0.05 * tree.dt()).exp(), epsilon = 1e-10);
    }

    #[test]
    fn zero_steps_rejected() {
        let err = BinomialTree::cox_ross_rubinstein(&market(), 0).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn degenerate_probability_rejected() {
        // r·dt far exceeds σ·√dt: exp(r·dt) > u
        let m = MarketInputs::new(100.0, 100.0, 1.0, 0.5, 0.01).unwrap();
        let err = BinomialTree::cox_ross_rubinstein(&m, 10).unwrap_err();
        assert!(err.is_numeric_degenerate(), "{err}");
    }
}
