//! Prices the reference at-the-money option every way the library knows.
//!
//! Run with `RUST_LOG=debug` to see the engines' diagnostics.

use optionlab::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const SPOT: f64 = 100.0;
const STRIKE: f64 = 100.0;
const MATURITY: f64 = 1.0;
const RATE: f64 = 0.05;
const VOLATILITY: f64 = 0.20;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(
        spot = SPOT,
        strike = STRIKE,
        maturity = MATURITY,
        rate = RATE,
        volatility = VOLATILITY,
        "pricing reference option"
    );

    println!("--- Vanilla ---");
    let call = black_scholes_price(SPOT, STRIKE, MATURITY, RATE, VOLATILITY, OptionType::Call)?;
    let put = black_scholes_price(SPOT, STRIKE, MATURITY, RATE, VOLATILITY, OptionType::Put)?;
    println!("Black-Scholes call: {call:.4}");
    println!("Black-Scholes put:  {put:.4}");

    let g = greeks(SPOT, STRIKE, MATURITY, RATE, VOLATILITY)?;
    println!(
        "Greeks: delta {:.4}, gamma {:.4}, vega {:.4}, theta {:.4}, rho {:.4}",
        g.delta, g.gamma, g.vega, g.theta, g.rho
    );

    let tree_call =
        binomial_option_price(SPOT, STRIKE, MATURITY, RATE, VOLATILITY, 100, OptionType::Call)?;
    let tree_put =
        binomial_option_price(SPOT, STRIKE, MATURITY, RATE, VOLATILITY, 100, OptionType::Put)?;
    println!("Binomial call (100 steps): {tree_call:.4}");
    println!("Binomial put (100 steps):  {tree_put:.4}");

    let market = MarketInputs::new(SPOT, STRIKE, MATURITY, RATE, VOLATILITY)?;
    let american_put = binomial_option_price_with(
        &market,
        OptionType::Put,
        ExerciseStyle::American,
        &PricingDefaults::default(),
    )?;
    println!("American put (100 steps):  {american_put:.4}");

    println!("\n--- Exotic ---");
    let digital = digital_option_price(SPOT, STRIKE, MATURITY, RATE, VOLATILITY, OptionType::Call)?;
    println!("Digital call: {digital:.4}");

    let barrier = barrier_option_price(
        SPOT,
        STRIKE,
        120.0,
        MATURITY,
        RATE,
        VOLATILITY,
        OptionType::Call,
        BarrierType::UpOut,
    );
    println!("Barrier ({}): {barrier}", BarrierType::UpOut);

    let range = range_accrual_price(SPOT, 95.0, 105.0, MATURITY, RATE, VOLATILITY)?;
    let exact = range_accrual_price_analytic(SPOT, 95.0, 105.0, MATURITY, RATE, VOLATILITY)?;
    println!("Range accrual [95, 105]: {range:.4} (analytic {exact:.4})");

    println!("\n--- Sensitivity ---");
    let series = sensitivity_analysis(SPOT, STRIKE, MATURITY, RATE, VOLATILITY)?;
    for point in series.points().iter().step_by(11) {
        println!(
            "day {:>6.1}: delta {:.4}, theta {:.4}",
            point.day, point.delta, point.theta
        );
    }

    Ok(())
}
