//! Report Renderer Port - Turning an evaluation into output text.

use serde::Deserialize;
use thiserror::Error;

use crate::domain::analysis::Evaluation;

/// Default number of decimals shown for ratings.
pub const DEFAULT_DECIMAL_PLACES: u8 = 2;

/// Display knobs shared by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Decimals shown for ratings. Display only, never affects ranking.
    pub decimal_places: u8,
    /// Include the choices, criteria and priorities breakdown.
    pub details: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            details: false,
        }
    }
}

/// Output formats with a renderer behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Port for rendering an evaluation.
///
/// # Contract
///
/// Implementations must:
/// - List choices in ranked order
/// - Omit stability output when analysis was disabled
pub trait ReportRenderer: Send + Sync {
    /// Renders a complete report for one evaluation.
    fn render(&self, evaluation: &Evaluation, options: &ReportOptions) -> Result<String, RenderError>;
}

/// Errors raised while rendering a report.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("report formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}
