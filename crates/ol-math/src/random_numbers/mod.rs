//! Random number generators.
//!
//! Monte Carlo estimators draw their normal deviates through the
//! [`GaussianRng`] trait so that callers decide how the stream is seeded:
//!
//! * [`StdNormalRng`]: `rand`'s `StdRng` sampled through
//!   `rand_distr::StandardNormal`; seeded from OS entropy by default
//! * [`InverseCumulativeNormalRng`]: Mersenne Twister MT19937-64 (`rand_mt`)
//!   pushed through the inverse normal CDF; always explicitly seeded

use ol_core::Real;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_mt::Mt19937GenRand64;

/// A source of independent standard-normal deviates.
pub trait GaussianRng {
    /// Draw the next `N(0, 1)` deviate.
    fn next_gaussian(&mut self) -> Real;
}

impl<G: GaussianRng + ?Sized> GaussianRng for &mut G {
    fn next_gaussian(&mut self) -> Real {
        (**self).next_gaussian()
    }
}

// ─── StdNormalRng ─────────────────────────────────────────────────────────────

/// Standard-normal deviates from any `rand` generator.
#[derive(Debug, Clone)]
pub struct StdNormalRng<R = StdRng> {
    rng: R,
}

impl StdNormalRng<StdRng> {
    /// A generator seeded from operating-system entropy. Every instance
    /// produces a different stream.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> StdNormalRng<R> {
    /// Wrap an existing `rand` generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> GaussianRng for StdNormalRng<R> {
    fn next_gaussian(&mut self) -> Real {
        self.rng.sample(StandardNormal)
    }
}

// ─── Mersenne Twister ─────────────────────────────────────────────────────────

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }

    /// Generate the next uniform deviate in `[0, 1)`.
    pub fn next_real(&mut self) -> Real {
        // 53 high bits map exactly onto the f64 mantissa.
        (self.rng.next_u64() >> 11) as Real / (1u64 << 53) as Real
    }
}

/// An inverse-cumulative normal random number generator.
///
/// Wraps a Mersenne Twister and transforms its output through the inverse
/// CDF of the standard normal distribution.
pub struct InverseCumulativeNormalRng {
    inner: MersenneTwisterUniformRng,
}

impl InverseCumulativeNormalRng {
    /// Create a new generator backed by a Mersenne Twister with the given
    /// seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: MersenneTwisterUniformRng::new(seed),
        }
    }
}

impl GaussianRng for InverseCumulativeNormalRng {
    fn next_gaussian(&mut self) -> Real {
        // Exact 0 would map to −∞.
        let u = loop {
            let u = self.inner.next_real();
            if u > 0.0 {
                break u;
            }
        };
        crate::distributions::normal_cdf_inverse(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::Statistics;

    fn moments(rng: &mut dyn GaussianRng, n: usize) -> (Real, Real) {
        let mut stats = Statistics::new();
        for _ in 0..n {
            stats.add(rng.next_gaussian());
        }
        (stats.mean().unwrap(), stats.variance().unwrap())
    }

    #[test]
    fn mt_range() {
        let mut rng = MersenneTwisterUniformRng::new(42);
        for _ in 0..1_000 {
            let x = rng.next_real();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn icn_rng_moments() {
        let mut rng = InverseCumulativeNormalRng::new(42);
        let (mean, var) = moments(&mut rng, 10_000);
        // 4 standard errors of the sample mean / variance
        assert!(mean.abs() < 0.04, "mean {mean} out of expected range");
        assert!((var - 1.0).abs() < 0.06, "variance {var} out of expected range");
    }

    #[test]
    fn std_normal_rng_moments() {
        let mut rng = StdNormalRng::seeded(7);
        let (mean, var) = moments(&mut rng, 10_000);
        assert!(mean.abs() < 0.04, "mean {mean} out of expected range");
        assert!((var - 1.0).abs() < 0.06, "variance {var} out of expected range");
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = StdNormalRng::seeded(123);
        let mut b = StdNormalRng::seeded(123);
        let mut c = InverseCumulativeNormalRng::new(123);
        let mut d = InverseCumulativeNormalRng::new(123);
        for _ in 0..100 {
            assert_eq!(a.next_gaussian(), b.next_gaussian());
            assert_eq!(c.next_gaussian(), d.next_gaussian());
        }
    }

    #[test]
    fn mutable_reference_is_a_source() {
        fn draw<G: GaussianRng>(mut rng: G) -> Real {
            rng.next_gaussian()
        }
        let mut rng = StdNormalRng::seeded(1);
        let first = draw(&mut rng);
        let second = draw(&mut rng);
        assert!(first.is_finite() && second.is_finite());
        assert_ne!(first, second);
    }
}
