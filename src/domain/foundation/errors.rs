//! Construction errors for foundation value objects.
//!
//! Messages are written to be prefixed by a location, e.g.
//! `criterion.X.ratings: ratings bar is not at least 20 characters wide`.

use thiserror::Error;

/// A value object refused its input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: String },

    #[error("{field} must lie in {min}..={max} (got {actual})")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("{field} must lie in 0.0..=1.0 (got {actual})")]
    RatingOutOfRange { field: String, actual: f64 },

    #[error("{field} {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField { field: field.into() }
    }

    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        let field = field.into();
        Self::OutOfRange { field, min, max, actual }
    }

    pub fn rating_out_of_range(field: impl Into<String>, actual: f64) -> Self {
        Self::RatingOutOfRange { field: field.into(), actual }
    }

    /// `reason` reads as a predicate on `field`, e.g. "is too narrow".
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyField { field }
            | Self::OutOfRange { field, .. }
            | Self::RatingOutOfRange { field, .. }
            | Self::InvalidFormat { field, .. } => field,
        }
    }
}
