//! `rand`-backed implementation of the `RandomSource` port.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ports::{RandomSource, Sign};

/// Adapts any `rand::Rng` into a fair coin for rating perturbation.
///
/// # Example
///
/// ```ignore
/// let mut random = RngRandomSource::seeded(42);
/// let stability = StabilityAnalyzer::analyze_stability(&q, &baseline, &params, &mut random);
/// ```
#[derive(Debug, Clone)]
pub struct RngRandomSource<R: Rng = SmallRng> {
    rng: R,
}

impl<R: Rng> RngRandomSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngRandomSource<SmallRng> {
    /// Fresh generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(SmallRng::from_os_rng())
    }

    /// Deterministic generator for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngRandomSource<R> {
    fn next_sign(&mut self) -> Sign {
        if self.rng.random_bool(0.5) {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }
}
