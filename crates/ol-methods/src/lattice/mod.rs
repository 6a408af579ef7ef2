//! Lattice methods for option pricing.
//!
//! * [`BinomialTree`]: recombining Cox-Ross-Rubinstein tree
//! * [`roll_back`] / [`price_european`] / [`price_american`]:
//!   backward-induction pricing over a single value buffer

pub mod binomial_tree;

pub use binomial_tree::BinomialTree;

use ol_core::Real;

/// When the holder may exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExerciseStyle {
    /// Exercise at maturity only.
    #[default]
    European,
    /// Exercise at any lattice node.
    American,
}

// ─── Backward-induction pricing ───────────────────────────────────────────────

/// Price an option by backward induction on a binomial tree.
///
/// One buffer of `steps + 1` values is allocated per call. At every step
/// `values[i]` holds the option value at the node with `i` down-moves; each
/// step shrinks the live range by one and overwrites it in place:
///
/// ```text
/// values[i] = disc · (p · values[i] + (1 − p) · values[i + 1])
/// ```
///
/// # Arguments
/// * `tree`: the binomial tree (already constructed)
/// * `payoff`: payoff function `S → value` (e.g. `|s| (s - K).max(0.0)`)
/// * `style`: European or American exercise
pub fn roll_back(tree: &BinomialTree, payoff: &dyn Fn(Real) -> Real, style: ExerciseStyle) -> Real {
    let n = tree.steps();
    let pu = tree.probability_up();
    let pd = 1.0 - pu;
    let discount = tree.discount();

    // Terminal values at maturity
    let mut values: Vec<Real> = (0..tree.size(n))
        .map(|i| payoff(tree.underlying(n, i)))
        .collect();

    // Roll back through the tree; steps depend on each other sequentially.
    for step in (0..n).rev() {
        for i in 0..tree.size(step) {
            let hold = discount * (pu * values[i] + pd * values[i + 1]);
            values[i] = match style {
                ExerciseStyle::European => hold,
                ExerciseStyle::American => hold.max(payoff(tree.underlying(step, i))),
            };
        }
    }

    values[0]
}

/// Price a European option by backward induction on a binomial tree.
pub fn price_european(tree: &BinomialTree, payoff: &dyn Fn(Real) -> Real) -> Real {
    roll_back(tree, payoff, ExerciseStyle::European)
}

/// Price an American option by backward induction on a binomial tree.
///
/// Same as European pricing, but allows early exercise at every node.
pub fn price_american(tree: &BinomialTree, payoff: &dyn Fn(Real) -> Real) -> Real {
    roll_back(tree, payoff, ExerciseStyle::American)
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ol_core::MarketInputs;
    use proptest::prelude::*;

    fn market() -> MarketInputs {
        MarketInputs::new(100.0, 100.0, 1.0, 0.05, 0.20).unwrap()
    }

    #[test]
    fn one_step_tree_by_hand() {
        let tree = BinomialTree::cox_ross_rubinstein(&market(), 1).unwrap();
        let (u, d, p) = (tree.up(), tree.down(), tree.probability_up());
        let expected = (-0.05_f64).exp() * (p * (100.0 * u - 100.0).max(0.0)
            + (1.0 - p) * (100.0 * d - 100.0).max(0.0));
        let price = price_european(&tree, &|s| (s - 100.0).max(0.0));
        assert_abs_diff_eq!(price, expected, epsilon = 1e-12);
    }

    #[test]
    fn constant_payoff_is_discounted() {
        let tree = BinomialTree::cox_ross_rubinstein(&market(), 200).unwrap();
        let price = price_european(&tree, &|_| 1.0);
        assert_abs_diff_eq!(price, (-0.05_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn forward_is_spot() {
        // Discounted expectation of S_T is S_0 under the risk-neutral measure
        let tree = BinomialTree::cox_ross_rubinstein(&market(), 150).unwrap();
        let price = price_european(&tree, &|s| s);
        assert_abs_diff_eq!(price, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn american_put_geq_european_put() {
        let tree = BinomialTree::cox_ross_rubinstein(&market(), 200).unwrap();
        let payoff = |s: Real| (100.0 - s).max(0.0);

        let eu = price_european(&tree, &payoff);
        let am = price_american(&tree, &payoff);

        assert!(am > eu, "American put {am:.4} <= European put {eu:.4}");
    }

    #[test]
    fn american_call_without_dividends_equals_european() {
        let tree = BinomialTree::cox_ross_rubinstein(&market(), 200).unwrap();
        let payoff = |s: Real| (s - 100.0).max(0.0);
        let eu = price_european(&tree, &payoff);
        let am = price_american(&tree, &payoff);
        assert_abs_diff_eq!(am, eu, epsilon = 1e-10);
    }

    proptest! {
        #[test]
        fn european_parity_holds_on_any_tree(
            strike in 50.0f64..150.0,
            steps in 1usize..120,
            rate in -0.02f64..0.1,
            volatility in 0.15f64..0.6,
        ) {
            let m = MarketInputs::new(100.0, strike, 1.0, rate, volatility).unwrap();
            let tree = BinomialTree::cox_ross_rubinstein(&m, steps).unwrap();
            let call = price_european(&tree, &|s| (s - strike).max(0.0));
            let put = price_european(&tree, &|s| (strike - s).max(0.0));
            prop_assert!((call - put - (100.0 - strike * m.discount())).abs() < 1e-8);
        }
    }
}
