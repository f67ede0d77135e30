//! Scoring results - ranked choices and their aggregate ratings.

use serde::Serialize;

use super::ScoringDiagnostic;

/// A scored choice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceResult {
    /// Display label of the choice.
    pub label: String,
    /// Weighted aggregate rating (sum of rating × priority).
    pub rating: f64,
}

impl ChoiceResult {
    pub fn new(label: impl Into<String>, rating: f64) -> Self {
        Self {
            label: label.into(),
            rating,
        }
    }
}

/// Choices ranked by descending aggregate rating.
///
/// Choices with equal ratings keep the declaration order of the quandary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Results {
    pub choice_rankings: Vec<ChoiceResult>,
    /// Anomalies found while scoring. Empty for a validated quandary.
    pub diagnostics: Vec<ScoringDiagnostic>,
}

impl Results {
    /// Returns the choice labels in rank order.
    pub fn ranked_labels(&self) -> Vec<&str> {
        self.choice_rankings.iter().map(|r| r.label.as_str()).collect()
    }

    /// Returns the top-ranked choice.
    pub fn best(&self) -> Option<&ChoiceResult> {
        self.choice_rankings.first()
    }

    pub fn len(&self) -> usize {
        self.choice_rankings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choice_rankings.is_empty()
    }

    /// Returns true if scoring found no anomalies.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
