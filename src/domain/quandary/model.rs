//! Quandary model - choices, criteria and priority weights.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{ChoiceId, CriterionId, OrderedMap, Rating};

/// Choice labels keyed by choice id, in declaration order.
pub type ChoicesMap = OrderedMap<ChoiceId, String>;

/// Per-choice ratings for one criterion.
pub type ChoiceRatings = OrderedMap<ChoiceId, Rating>;

/// Criteria keyed by criterion id, in declaration order.
pub type CriteriaMap = OrderedMap<CriterionId, Criterion>;

/// Priority weight of every criterion.
pub type PriorityRatings = OrderedMap<CriterionId, Rating>;

/// The two identifier namespaces of a quandary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierClass {
    Criterion,
    Choice,
}

impl IdentifierClass {
    pub fn label(&self) -> &'static str {
        match self {
            IdentifierClass::Criterion => "criterion",
            IdentifierClass::Choice => "choice",
        }
    }
}

impl fmt::Display for IdentifierClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One weighted dimension of evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    pub label: String,
    pub choice_ratings: ChoiceRatings,
}

impl Criterion {
    /// Creates a criterion with its per-choice ratings.
    pub fn new(label: impl Into<String>, choice_ratings: ChoiceRatings) -> Self {
        Self {
            label: label.into(),
            choice_ratings,
        }
    }

    /// Returns how well `choice` satisfies this criterion, if rated.
    pub fn rating_of(&self, choice: &ChoiceId) -> Option<Rating> {
        self.choice_ratings.get(choice).copied()
    }
}

/// Errors raised when a quandary breaks its completeness invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuandaryError {
    #[error("{context}: {}", letter_summary(.class, .unknown, .missing))]
    Letters {
        context: String,
        class: IdentifierClass,
        unknown: Vec<String>,
        missing: Vec<String>,
    },
}

fn letter_summary(class: &IdentifierClass, unknown: &[String], missing: &[String]) -> String {
    let mut parts = Vec::new();
    if !unknown.is_empty() {
        parts.push(format!("unknown {} letter(s): {}", class, unknown.join(", ")));
    }
    if !missing.is_empty() {
        parts.push(format!("missing {} letter(s): {}", class, missing.join(", ")));
    }
    parts.join(", ")
}

/// A decision problem: choices, weighted criteria and their ratings.
///
/// Treated as read-only once built. Stability analysis works on perturbed
/// copies and never mutates the original.
#[derive(Debug, Clone, PartialEq)]
pub struct Quandary {
    description: String,
    choices: ChoicesMap,
    criteria: CriteriaMap,
    priority_ratings: PriorityRatings,
}

impl Quandary {
    /// Creates a quandary without checking completeness.
    ///
    /// Use [`Quandary::validate`] to check that every criterion rates every
    /// choice and every criterion has a priority.
    pub fn new(
        description: impl Into<String>,
        choices: ChoicesMap,
        criteria: CriteriaMap,
        priority_ratings: PriorityRatings,
    ) -> Self {
        Self {
            description: description.into(),
            choices,
            criteria,
            priority_ratings,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn choices(&self) -> &ChoicesMap {
        &self.choices
    }

    pub fn criteria(&self) -> &CriteriaMap {
        &self.criteria
    }

    pub fn priority_ratings(&self) -> &PriorityRatings {
        &self.priority_ratings
    }

    /// Returns the display label of a choice.
    pub fn choice_label(&self, choice: &ChoiceId) -> Option<&str> {
        self.choices.get(choice).map(String::as_str)
    }

    /// Returns the priority weight of a criterion.
    pub fn priority_of(&self, criterion: &CriterionId) -> Option<Rating> {
        self.priority_ratings.get(criterion).copied()
    }

    /// Checks the completeness invariants.
    ///
    /// Every criterion must rate exactly the model's choices, and the
    /// priorities must cover exactly the model's criteria.
    ///
    /// # Errors
    ///
    /// Returns the first `QuandaryError::Letters` found, with unknown and
    /// missing identifiers sorted alphabetically.
    pub fn validate(&self) -> Result<(), QuandaryError> {
        for (criterion_id, criterion) in self.criteria.iter() {
            check_letters(
                format!("criterion.{}.ratings", criterion_id),
                IdentifierClass::Choice,
                criterion.choice_ratings.keys().map(ChoiceId::as_str),
                self.choices.keys().map(ChoiceId::as_str),
            )?;
        }
        check_letters(
            "priorities.ratings".to_string(),
            IdentifierClass::Criterion,
            self.priority_ratings.keys().map(CriterionId::as_str),
            self.criteria.keys().map(CriterionId::as_str),
        )
    }
}

fn check_letters<'a>(
    context: String,
    class: IdentifierClass,
    input: impl Iterator<Item = &'a str>,
    valid: impl Iterator<Item = &'a str>,
) -> Result<(), QuandaryError> {
    let input: BTreeSet<&str> = input.collect();
    let valid: BTreeSet<&str> = valid.collect();

    let unknown: Vec<String> = input.difference(&valid).map(|s| s.to_string()).collect();
    let missing: Vec<String> = valid.difference(&input).map(|s| s.to_string()).collect();

    if unknown.is_empty() && missing.is_empty() {
        return Ok(());
    }
    Err(QuandaryError::Letters {
        context,
        class,
        unknown,
        missing,
    })
}
