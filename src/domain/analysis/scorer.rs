//! Scorer - Weighted aggregate rating and ranking of choices.

use std::cmp::Ordering;

use super::diagnostics::DiagnosticCollector;
use super::{ChoiceResult, Results};
use crate::domain::quandary::Quandary;

/// Weighted-sum scoring of a quandary.
pub struct Scorer;

impl Scorer {
    /// Scores every choice and ranks them by descending aggregate rating.
    ///
    /// # Algorithm
    /// For each choice: score = Σ(rating[criterion][choice] × priority[criterion])
    ///
    /// The sort is stable, so equal scores keep the quandary's choice order.
    ///
    /// # Edge Cases
    /// - No criteria: every choice scores 0
    /// - Criterion without a priority: skipped, reported as a missing criterion
    /// - Rating for an unknown choice: ignored, reported as an unknown choice
    /// - Choice without a rating: contributes 0, reported as a missing choice
    /// - Priority for an unknown criterion: ignored, reported as an unknown criterion
    pub fn score(quandary: &Quandary) -> Results {
        let choices = quandary.choices();
        let mut totals = vec![0.0_f64; choices.len()];
        let mut collector = DiagnosticCollector::new();

        for (criterion_id, criterion) in quandary.criteria().iter() {
            for choice_id in criterion.choice_ratings.keys() {
                if !choices.contains_key(choice_id) {
                    collector.unknown_choice(choice_id);
                }
            }

            let Some(priority) = quandary.priority_of(criterion_id) else {
                collector.missing_priority(criterion_id);
                continue;
            };

            for (total, choice_id) in totals.iter_mut().zip(choices.keys()) {
                match criterion.rating_of(choice_id) {
                    Some(rating) => *total += rating.value() * priority.value(),
                    None => collector.missing_choice_rating(choice_id),
                }
            }
        }

        for criterion_id in quandary.priority_ratings().keys() {
            if !quandary.criteria().contains_key(criterion_id) {
                collector.unknown_criterion(criterion_id);
            }
        }

        let mut choice_rankings: Vec<ChoiceResult> = choices
            .iter()
            .zip(totals)
            .map(|((_, label), total)| ChoiceResult::new(label.clone(), total))
            .collect();
        choice_rankings.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));

        Results {
            choice_rankings,
            diagnostics: collector.finish(),
        }
    }
}
