//! Scoring diagnostics - advisory reports about inconsistent models.
//!
//! A validated quandary never produces these. They exist so the scorer can
//! keep going on a model that slipped past validation: the offending
//! contribution is treated as zero and the identifiers are reported once,
//! batched and sorted.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::quandary::IdentifierClass;

/// What was wrong with the identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyKind {
    /// Referenced, but not part of the model.
    Unknown,
    /// Part of the model, but has no rating where one is expected.
    Missing,
}

impl AnomalyKind {
    pub fn label(&self) -> &'static str {
        match self {
            AnomalyKind::Unknown => "unknown",
            AnomalyKind::Missing => "missing",
        }
    }
}

/// One batched, non-fatal scoring anomaly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringDiagnostic {
    pub kind: AnomalyKind,
    pub class: IdentifierClass,
    /// Quandary section the identifiers were found in.
    pub section: &'static str,
    /// Distinct identifiers, sorted alphabetically.
    pub identifiers: Vec<String>,
}

impl fmt::Display for ScoringDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.identifiers.len() > 1 { "letters" } else { "letter" };
        write!(
            f,
            "Ignored {} {} {} \"{}\" in quandary \"{}\"",
            self.kind.label(),
            self.class,
            noun,
            self.identifiers.join(" "),
            self.section
        )
    }
}

/// Collects anomalies during a scoring pass.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    unknown_criteria: BTreeSet<String>,
    unknown_choices: BTreeSet<String>,
    missing_priorities: BTreeSet<String>,
    missing_choice_ratings: BTreeSet<String>,
}

impl DiagnosticCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn unknown_criterion(&mut self, id: &impl fmt::Display) {
        self.unknown_criteria.insert(id.to_string());
    }

    pub(crate) fn unknown_choice(&mut self, id: &impl fmt::Display) {
        self.unknown_choices.insert(id.to_string());
    }

    pub(crate) fn missing_priority(&mut self, id: &impl fmt::Display) {
        self.missing_priorities.insert(id.to_string());
    }

    pub(crate) fn missing_choice_rating(&mut self, id: &impl fmt::Display) {
        self.missing_choice_ratings.insert(id.to_string());
    }

    /// Batches collected identifiers into at most one diagnostic per kind and class.
    pub(crate) fn finish(self) -> Vec<ScoringDiagnostic> {
        let batches = [
            (AnomalyKind::Unknown, IdentifierClass::Criterion, "priorities", self.unknown_criteria),
            (AnomalyKind::Unknown, IdentifierClass::Choice, "ratings", self.unknown_choices),
            (AnomalyKind::Missing, IdentifierClass::Criterion, "priorities", self.missing_priorities),
            (AnomalyKind::Missing, IdentifierClass::Choice, "ratings", self.missing_choice_ratings),
        ];

        batches
            .into_iter()
            .filter(|(_, _, _, ids)| !ids.is_empty())
            .map(|(kind, class, section, ids)| ScoringDiagnostic {
                kind,
                class,
                section,
                identifiers: ids.into_iter().collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collector_yields_nothing() {
        assert!(DiagnosticCollector::new().finish().is_empty());
    }

    #[test]
    fn identifiers_are_deduplicated_and_sorted() {
        let mut collector = DiagnosticCollector::new();
        collector.unknown_choice(&"Z");
        collector.unknown_choice(&"Q");
        collector.unknown_choice(&"Z");

        let diagnostics = collector.finish();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].identifiers, vec!["Q", "Z"]);
        assert_eq!(diagnostics[0].kind, AnomalyKind::Unknown);
        assert_eq!(diagnostics[0].class, IdentifierClass::Choice);
    }

    #[test]
    fn classes_are_reported_separately() {
        let mut collector = DiagnosticCollector::new();
        collector.unknown_criterion(&"W");
        collector.unknown_choice(&"Z");
        collector.missing_priority(&"X");

        let classes: Vec<_> = collector
            .finish()
            .iter()
            .map(|d| (d.kind, d.class))
            .collect();
        assert_eq!(
            classes,
            vec![
                (AnomalyKind::Unknown, IdentifierClass::Criterion),
                (AnomalyKind::Unknown, IdentifierClass::Choice),
                (AnomalyKind::Missing, IdentifierClass::Criterion),
            ]
        );
    }

    #[test]
    fn display_singular() {
        let diagnostic = ScoringDiagnostic {
            kind: AnomalyKind::Unknown,
            class: IdentifierClass::Choice,
            section: "ratings",
            identifiers: vec!["Z".to_string()],
        };
        assert_eq!(
            diagnostic.to_string(),
            "Ignored unknown choice letter \"Z\" in quandary \"ratings\""
        );
    }

    #[test]
    fn display_plural() {
        let diagnostic = ScoringDiagnostic {
            kind: AnomalyKind::Missing,
            class: IdentifierClass::Criterion,
            section: "priorities",
            identifiers: vec!["X".to_string(), "Y".to_string()],
        };
        assert_eq!(
            diagnostic.to_string(),
            "Ignored missing criterion letters \"X Y\" in quandary \"priorities\""
        );
    }
}
