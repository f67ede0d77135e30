//! Whole-number percentages, used for the stability threshold.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

const FULL: u8 = 100;

/// Integer percentage in `0..=100`.
///
/// Serialized as a bare integer. Deserializing a value above 100 fails
/// rather than clamping, since a config file saying `150` is a mistake.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const HUNDRED: Self = Self(FULL);

    /// Saturates anything above 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(FULL))
    }

    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        Self::try_from(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// `value / 100`.
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / f64::from(FULL)
    }

    /// What is left of the whole: 70% gives 30%.
    pub fn complement(self) -> Self {
        Self(FULL - self.0)
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= FULL {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "percentage",
                0,
                i64::from(FULL),
                i64::from(value),
            ))
        }
    }
}

impl From<Percentage> for u8 {
    fn from(percentage: Percentage) -> Self {
        percentage.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
