//! Quandary Randomizer - Builds perturbed copies of a quandary.

use crate::domain::foundation::Rating;
use crate::domain::quandary::{CriteriaMap, Criterion, PriorityRatings, Quandary};
use crate::ports::RandomSource;

/// Produces independently perturbed copies of one quandary.
///
/// Every scalar rating (each choice rating of each criterion, and each
/// priority weight) gets its own draw of `+magnitude` or `-magnitude`, then
/// is clamped back into [0, 1]. The source quandary is never modified.
pub struct QuandaryRandomizer<'a> {
    quandary: &'a Quandary,
}

impl<'a> QuandaryRandomizer<'a> {
    pub fn new(quandary: &'a Quandary) -> Self {
        Self { quandary }
    }

    /// Returns a fresh perturbed copy of the quandary.
    pub fn randomize(&self, magnitude: f64, random: &mut dyn RandomSource) -> Quandary {
        let criteria = self.randomize_criteria(magnitude, random);
        let priorities = self.randomize_priorities(magnitude, random);
        Quandary::new(
            format!("{} [randomization={:.2}]", self.quandary.description(), magnitude),
            self.quandary.choices().clone(),
            criteria,
            priorities,
        )
    }

    fn randomize_criteria(&self, magnitude: f64, random: &mut dyn RandomSource) -> CriteriaMap {
        self.quandary.criteria().map_values(|_, criterion| {
            Criterion::new(
                criterion.label.clone(),
                criterion
                    .choice_ratings
                    .map_values(|_, rating| perturb(*rating, magnitude, random)),
            )
        })
    }

    fn randomize_priorities(&self, magnitude: f64, random: &mut dyn RandomSource) -> PriorityRatings {
        self.quandary
            .priority_ratings()
            .map_values(|_, rating| perturb(*rating, magnitude, random))
    }
}

fn perturb(rating: Rating, magnitude: f64, random: &mut dyn RandomSource) -> Rating {
    rating.perturbed(random.next_sign().apply(magnitude))
}
