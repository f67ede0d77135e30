//! Stability Analyzer - How much rating noise the ranking can tolerate.
//!
//! The analyzer perturbs every rating of the quandary by increasing
//! magnitudes and re-scores. At each magnitude it runs a batch of random
//! trials and counts how many reproduce the baseline ranking. The search
//! stops at the first magnitude whose share of changed rankings reaches the
//! volatility threshold; the last magnitude before it is the stability.

use serde::Serialize;
use tracing::debug;

use super::{QuandaryRandomizer, Results, Scorer};
use crate::domain::foundation::{Percentage, ValidationError};
use crate::domain::quandary::Quandary;
use crate::ports::RandomSource;

pub const DEFAULT_RANDOM_STEPS: u32 = 100;
pub const DEFAULT_RANDOM_TRIALS: u32 = 1000;
pub const DEFAULT_STABILITY_PERCENTAGE: u8 = 70;

/// Tuning of the stability search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StabilityParameters {
    random_steps: u32,
    random_trials: u32,
    stability_percentage: Percentage,
}

impl StabilityParameters {
    /// Creates parameters, rejecting zero steps or trials.
    ///
    /// Display-oriented ranges (e.g. at least 10 steps) are the caller's
    /// business; any positive count is accepted here.
    pub fn new(
        random_steps: u32,
        random_trials: u32,
        stability_percentage: Percentage,
    ) -> Result<Self, ValidationError> {
        if random_steps == 0 {
            return Err(ValidationError::out_of_range("random_steps", 1, i64::from(u32::MAX), 0));
        }
        if random_trials == 0 {
            return Err(ValidationError::out_of_range("random_trials", 1, i64::from(u32::MAX), 0));
        }
        Ok(Self {
            random_steps,
            random_trials,
            stability_percentage,
        })
    }

    /// Parameters that switch stability analysis off.
    pub fn disabled() -> Self {
        Self {
            stability_percentage: Percentage::ZERO,
            ..Self::default()
        }
    }

    pub fn random_steps(&self) -> u32 {
        self.random_steps
    }

    pub fn random_trials(&self) -> u32 {
        self.random_trials
    }

    pub fn stability_percentage(&self) -> Percentage {
        self.stability_percentage
    }

    /// A stability percentage of zero disables the analysis.
    pub fn is_disabled(&self) -> bool {
        self.stability_percentage.is_zero()
    }

    /// Share of changed rankings at which a magnitude counts as unstable.
    pub fn volatility_threshold(&self) -> f64 {
        self.stability_percentage.complement().as_fraction()
    }

    /// Perturbation magnitude tested at `step` (1-based).
    pub fn magnitude(&self, step: u32) -> f64 {
        f64::from(step) / f64::from(self.random_steps)
    }
}

impl Default for StabilityParameters {
    fn default() -> Self {
        Self {
            random_steps: DEFAULT_RANDOM_STEPS,
            random_trials: DEFAULT_RANDOM_TRIALS,
            stability_percentage: Percentage::new(DEFAULT_STABILITY_PERCENTAGE),
        }
    }
}

/// Trial statistics for one tested magnitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelOutcome {
    pub step: u32,
    pub magnitude: f64,
    pub changed_trials: u32,
    pub trials: u32,
    pub stable: bool,
}

impl LevelOutcome {
    /// Share of trials whose ranking differed from the baseline.
    pub fn volatility(&self) -> f64 {
        f64::from(self.changed_trials) / f64::from(self.trials)
    }
}

/// Full record of a stability search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StabilityOutcome {
    /// Largest magnitude confirmed stable, or 0 if the first level failed.
    pub stability: f64,
    pub volatility_threshold: f64,
    /// Every level tested, in increasing magnitude. The last one is the
    /// level that stopped the search unless all levels were stable.
    pub levels: Vec<LevelOutcome>,
}

/// Randomized ranking stability search.
pub struct StabilityAnalyzer;

impl StabilityAnalyzer {
    /// Returns the largest perturbation magnitude at which the ranking is
    /// still reproduced often enough, or `None` if analysis is disabled.
    pub fn analyze_stability(
        quandary: &Quandary,
        baseline: &Results,
        parameters: &StabilityParameters,
        random: &mut dyn RandomSource,
    ) -> Option<f64> {
        Self::trace(quandary, baseline, parameters, random).map(|outcome| outcome.stability)
    }

    /// Runs the stability search and keeps per-level statistics.
    ///
    /// Levels are tested in increasing magnitude. The first level whose
    /// volatility reaches the threshold ends the search, even if a larger
    /// magnitude might happen to reproduce the ranking again.
    pub fn trace(
        quandary: &Quandary,
        baseline: &Results,
        parameters: &StabilityParameters,
        random: &mut dyn RandomSource,
    ) -> Option<StabilityOutcome> {
        if parameters.is_disabled() {
            return None;
        }

        let baseline_labels = baseline.ranked_labels();
        let randomizer = QuandaryRandomizer::new(quandary);
        let volatility_threshold = parameters.volatility_threshold();
        let trials = parameters.random_trials();

        let mut stability = 0.0;
        let mut levels = Vec::new();

        for step in 1..=parameters.random_steps() {
            let magnitude = parameters.magnitude(step);

            let mut changed_trials = 0;
            for _ in 0..trials {
                let randomized = randomizer.randomize(magnitude, random);
                let results = Scorer::score(&randomized);
                if results.ranked_labels() != baseline_labels {
                    changed_trials += 1;
                }
            }

            let mut level = LevelOutcome {
                step,
                magnitude,
                changed_trials,
                trials,
                stable: false,
            };
            level.stable = level.volatility() < volatility_threshold;

            debug!(
                step,
                magnitude,
                changed_trials,
                volatility = level.volatility(),
                stable = level.stable,
                "Stability level evaluated"
            );

            let stable = level.stable;
            levels.push(level);
            if !stable {
                break;
            }
            stability = magnitude;
        }

        Some(StabilityOutcome {
            stability,
            volatility_threshold,
            levels,
        })
    }
}
