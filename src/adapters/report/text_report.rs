//! Plain text report renderer.
//!
//! Produces the ranking table, an optional confidence block, and with
//! `details` enabled a breakdown of choices, criteria and priorities.

use std::fmt::Write;

use crate::domain::analysis::Evaluation;
use crate::domain::foundation::Rating;
use crate::domain::quandary::Quandary;
use crate::ports::{RenderError, ReportOptions, ReportRenderer};

/// Explanation printed under the confidence value.
pub const CONFIDENCE_EXPLANATION: &str =
    "Confidence is the highest random stress percentage with stable rankings.";

/// Renders evaluations as aligned plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReportRenderer;

impl TextReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for TextReportRenderer {
    fn render(&self, evaluation: &Evaluation, options: &ReportOptions) -> Result<String, RenderError> {
        let dp = usize::from(options.decimal_places);
        let mut out = String::new();

        writeln!(out)?;
        writeln!(out, "::: {} :::", evaluation.quandary.description())?;
        writeln!(out)?;
        writeln!(out, "RANK  RATING  CHOICE")?;
        for (idx, ranking) in evaluation.results.choice_rankings.iter().enumerate() {
            writeln!(
                out,
                "{:>4}  {:>6.dp$}  {}",
                idx + 1,
                ranking.rating,
                ranking.label,
                dp = dp
            )?;
        }

        if let Some(confidence) = evaluation.confidence() {
            writeln!(out)?;
            writeln!(out, "Confidence: {:.0}%", confidence * 100.0)?;
            writeln!(out)?;
            writeln!(out, "{}", CONFIDENCE_EXPLANATION)?;
        }

        if options.details {
            writeln!(out)?;
            write_details(&mut out, &evaluation.quandary, dp)?;
        }

        Ok(out)
    }
}

fn write_details(out: &mut String, quandary: &Quandary, dp: usize) -> std::fmt::Result {
    let width = dp + 2;

    writeln!(out, "::: Choices :::")?;
    writeln!(out)?;
    let mut choice_ids: Vec<_> = quandary.choices().keys().collect();
    choice_ids.sort();
    for id in choice_ids {
        writeln!(out, "[{}] {}", id, quandary.choice_label(id).unwrap_or_default())?;
    }

    writeln!(out)?;
    writeln!(out, "::: Criteria with choices ordered by rating (adjusted rating) :::")?;
    let mut criterion_ids: Vec<_> = quandary.criteria().keys().collect();
    criterion_ids.sort();
    for id in criterion_ids {
        let Some(criterion) = quandary.criteria().get(id) else {
            continue;
        };
        let priority = quandary.priority_of(id).unwrap_or(Rating::ZERO).value();
        writeln!(out)?;
        writeln!(out, "[{}] {}", id, criterion.label)?;
        for (choice, rating) in by_rating_descending(criterion.choice_ratings.iter()) {
            writeln!(
                out,
                "   {:>width$.dp$} ({:>width$.dp$}) [{}] {}",
                rating.value(),
                rating.value() * priority,
                choice,
                quandary.choice_label(choice).unwrap_or_default(),
                width = width,
                dp = dp
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "::: Priorities with criteria ordered by rating :::")?;
    writeln!(out)?;
    for (id, rating) in by_rating_descending(quandary.priority_ratings().iter()) {
        let label = quandary
            .criteria()
            .get(id)
            .map(|criterion| criterion.label.as_str())
            .unwrap_or_default();
        writeln!(out, "{:>width$.dp$} [{}] {}", rating.value(), id, label, width = width, dp = dp)?;
    }
    Ok(())
}

/// Highest rating first; equal ratings keep their declared order.
fn by_rating_descending<'a, K: 'a>(
    pairs: impl Iterator<Item = (&'a K, &'a Rating)>,
) -> Vec<(&'a K, &'a Rating)> {
    let mut sorted: Vec<_> = pairs.collect();
    sorted.sort_by(|a, b| b.1.value().total_cmp(&a.1.value()));
    sorted
}
