//! JSON report renderer.
//!
//! Emits raw floats without rounding; `decimal_places` only affects text.

use serde::Serialize;

use crate::domain::analysis::{Evaluation, LevelOutcome, ScoringDiagnostic};
use crate::ports::{RenderError, ReportOptions, ReportRenderer};

/// Renders evaluations as pretty-printed JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReportRenderer;

impl JsonReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    description: &'a str,
    rankings: Vec<JsonRanking<'a>>,
    stability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    levels: Option<&'a [LevelOutcome]>,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonRanking<'a> {
    rank: usize,
    label: &'a str,
    rating: f64,
}

#[derive(Debug, Serialize)]
struct JsonDiagnostic<'a> {
    message: String,
    #[serde(flatten)]
    diagnostic: &'a ScoringDiagnostic,
}

impl ReportRenderer for JsonReportRenderer {
    fn render(&self, evaluation: &Evaluation, options: &ReportOptions) -> Result<String, RenderError> {
        let report = JsonReport {
            description: evaluation.quandary.description(),
            rankings: evaluation
                .results
                .choice_rankings
                .iter()
                .enumerate()
                .map(|(idx, ranking)| JsonRanking {
                    rank: idx + 1,
                    label: &ranking.label,
                    rating: ranking.rating,
                })
                .collect(),
            stability: evaluation.confidence(),
            levels: evaluation
                .stability
                .as_ref()
                .filter(|_| options.details)
                .map(|outcome| outcome.levels.as_slice()),
            diagnostics: evaluation
                .results
                .diagnostics
                .iter()
                .map(|diagnostic| JsonDiagnostic {
                    message: diagnostic.to_string(),
                    diagnostic,
                })
                .collect(),
        };
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{Scorer, StabilityOutcome};
    use crate::domain::foundation::{ChoiceId, CriterionId, Rating};
    use crate::domain::quandary::{ChoicesMap, CriteriaMap, Criterion, PriorityRatings, Quandary};
    use serde_json::Value;

    fn fruit(with_priority: bool) -> Quandary {
        let a = ChoiceId::new("A").unwrap();
        let b = ChoiceId::new("B").unwrap();
        let x = CriterionId::new("X").unwrap();
        let choices: ChoicesMap = vec![(a.clone(), "Apple".to_string()), (b.clone(), "Banana".to_string())]
            .into_iter()
            .collect();
        let taste = Criterion::new(
            "Taste",
            vec![(a, Rating::ZERO), (b, Rating::ONE)].into_iter().collect(),
        );
        let criteria: CriteriaMap = vec![(x.clone(), taste)].into_iter().collect();
        let priorities: PriorityRatings = if with_priority {
            vec![(x, Rating::ONE)].into_iter().collect()
        } else {
            PriorityRatings::new()
        };
        Quandary::new("Which fruit?", choices, criteria, priorities)
    }

    fn render(evaluation: &Evaluation, details: bool) -> Value {
        let options = ReportOptions {
            decimal_places: 2,
            details,
        };
        let json = JsonReportRenderer::new().render(evaluation, &options).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn renders_rankings_and_stability() {
        let quandary = fruit(true);
        let results = Scorer::score(&quandary);
        let evaluation = Evaluation {
            quandary,
            results,
            stability: Some(StabilityOutcome {
                stability: 0.42,
                volatility_threshold: 0.3,
                levels: Vec::new(),
            }),
        };

        let json = render(&evaluation, false);

        assert_eq!(json["description"], "Which fruit?");
        assert_eq!(json["rankings"][0]["rank"], 1);
        assert_eq!(json["rankings"][0]["label"], "Banana");
        assert_eq!(json["rankings"][0]["rating"], 1.0);
        assert_eq!(json["rankings"][1]["label"], "Apple");
        assert_eq!(json["stability"], 0.42);
        assert!(json.get("levels").is_none());
        assert_eq!(json["diagnostics"], Value::Array(vec![]));
    }

    #[test]
    fn disabled_stability_is_null() {
        let quandary = fruit(true);
        let results = Scorer::score(&quandary);
        let evaluation = Evaluation {
            quandary,
            results,
            stability: None,
        };

        let json = render(&evaluation, true);

        assert!(json["stability"].is_null());
        assert!(json.get("levels").is_none());
    }

    #[test]
    fn details_include_stability_levels() {
        let quandary = fruit(true);
        let results = Scorer::score(&quandary);
        let evaluation = Evaluation {
            quandary,
            results,
            stability: Some(StabilityOutcome {
                stability: 0.0,
                volatility_threshold: 0.3,
                levels: vec![LevelOutcome {
                    step: 1,
                    magnitude: 0.1,
                    changed_trials: 7,
                    trials: 10,
                    stable: false,
                }],
            }),
        };

        let json = render(&evaluation, true);

        assert_eq!(json["levels"][0]["changed_trials"], 7);
        assert_eq!(json["levels"][0]["stable"], false);
    }

    #[test]
    fn diagnostics_carry_message_and_fields() {
        let quandary = fruit(false);
        let results = Scorer::score(&quandary);
        let evaluation = Evaluation {
            quandary,
            results,
            stability: None,
        };

        let json = render(&evaluation, false);

        let diagnostic = &json["diagnostics"][0];
        assert_eq!(
            diagnostic["message"],
            "Ignored missing criterion letter \"X\" in quandary \"priorities\""
        );
        assert_eq!(diagnostic["kind"], "missing");
        assert_eq!(diagnostic["class"], "criterion");
        assert_eq!(diagnostic["identifiers"][0], "X");
    }
}
