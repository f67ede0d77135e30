//! Strongly-typed identifier value objects.
//!
//! Choices and criteria are keyed by short letter codes. Codes are
//! case-insensitive on input and stored in their canonical uppercase form,
//! so `a`, ` A ` and `A` all name the same choice.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

fn canonical_code(field: &str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_uppercase())
}

/// Identifier of a choice (one alternative being decided among).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChoiceId(String);

impl ChoiceId {
    /// Creates a ChoiceId from a raw code, canonicalizing to uppercase.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        canonical_code("choice id", raw.as_ref()).map(Self)
    }

    /// Returns the canonical code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChoiceId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ChoiceId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChoiceId> for String {
    fn from(id: ChoiceId) -> Self {
        id.0
    }
}

/// Identifier of a criterion (one weighted dimension of evaluation).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CriterionId(String);

impl CriterionId {
    /// Creates a CriterionId from a raw code, canonicalizing to uppercase.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        canonical_code("criterion id", raw.as_ref()).map(Self)
    }

    /// Returns the canonical code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CriterionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CriterionId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CriterionId> for String {
    fn from(id: CriterionId) -> Self {
        id.0
    }
}
