//! Default engine parameters.
//!
//! [`PricingDefaults`] is a plain value: there is no global instance and no
//! file or environment loading. Callers that want different step counts or
//! trial counts build their own and pass it to the `*_with` entry points.

use crate::{ensure, Real, Result, Size};

/// Step, trial, and grid sizes used when a caller does not supply them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PricingDefaults {
    /// Number of time steps in the binomial lattice.
    pub lattice_steps: Size,
    /// Number of Monte Carlo trials.
    pub mc_trials: Size,
    /// Number of maturities sampled by the sensitivity sweep.
    pub sweep_points: Size,
    /// Calendar days per year, used for theta and the sweep's day grid.
    pub days_per_year: Real,
}

impl Default for PricingDefaults {
    fn default() -> Self {
        Self {
            lattice_steps: 100,
            mc_trials: 1_000,
            sweep_points: 100,
            days_per_year: 365.0,
        }
    }
}

impl PricingDefaults {
    /// Override the lattice step count.
    pub fn with_lattice_steps(mut self, steps: Size) -> Self {
        self.lattice_steps = steps;
        self
    }

    /// Override the Monte Carlo trial count.
    pub fn with_mc_trials(mut self, trials: Size) -> Self {
        self.mc_trials = trials;
        self
    }

    /// Override the number of sweep points.
    pub fn with_sweep_points(mut self, points: Size) -> Self {
        self.sweep_points = points;
        self
    }

    /// Check that every count is positive.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.lattice_steps > 0, "lattice_steps must be > 0");
        ensure!(self.mc_trials > 0, "mc_trials must be > 0");
        ensure!(self.sweep_points > 0, "sweep_points must be > 0");
        ensure!(
            self.days_per_year.is_finite() && self.days_per_year > 0.0,
            "days_per_year must be positive, got {}",
            self.days_per_year
        );
        Ok(())
    }
}
