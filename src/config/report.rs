//! Report configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::ports::{ReportFormat, ReportOptions, DEFAULT_DECIMAL_PLACES};

pub const MAX_DECIMAL_PLACES: u8 = 10;

/// Report configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// Decimals shown for ratings
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u8,

    /// Show the choices, criteria and priorities breakdown
    #[serde(default)]
    pub details: bool,

    /// Output format (text or json)
    #[serde(default)]
    pub format: ReportFormat,
}

impl ReportConfig {
    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_range(
            "decimal_places",
            0,
            u32::from(MAX_DECIMAL_PLACES),
            u32::from(self.decimal_places),
        )
    }

    /// Renderer options for this configuration.
    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            decimal_places: self.decimal_places,
            details: self.details,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            decimal_places: default_decimal_places(),
            details: false,
            format: ReportFormat::default(),
        }
    }
}

fn default_decimal_places() -> u8 {
    DEFAULT_DECIMAL_PLACES
}
