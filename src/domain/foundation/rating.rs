//! Rating value object (0.0 to 1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// How well a choice satisfies a criterion, or how much a criterion matters.
///
/// Always lies in the closed interval [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    /// Lowest possible rating.
    pub const ZERO: Self = Self(0.0);

    /// Highest possible rating.
    pub const ONE: Self = Self(1.0);

    /// Creates a Rating, returning error if outside [0, 1] or NaN.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::rating_out_of_range("rating", value));
        }
        Ok(Self(value))
    }

    /// Creates a Rating, clamping into [0, 1]. NaN becomes zero.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns this rating shifted by `delta` and clamped back into [0, 1].
    pub fn perturbed(&self, delta: f64) -> Self {
        Self::clamped(self.0 + delta)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
