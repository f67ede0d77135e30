//! Evaluation - Everything computed for one quandary.

use super::{Results, StabilityOutcome};
use crate::domain::quandary::Quandary;

/// A quandary together with its ranking and optional stability search.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub quandary: Quandary,
    pub results: Results,
    /// `None` when stability analysis was disabled.
    pub stability: Option<StabilityOutcome>,
}

impl Evaluation {
    /// The stability value, if analysis ran.
    pub fn confidence(&self) -> Option<f64> {
        self.stability.as_ref().map(|outcome| outcome.stability)
    }
}
