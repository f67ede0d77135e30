//! Report renderers.
//!
//! - `TextReportRenderer` - Aligned plain text for terminals
//! - `JsonReportRenderer` - Machine-readable output

mod json_report;
mod text_report;

pub use json_report::JsonReportRenderer;
pub use text_report::{TextReportRenderer, CONFIDENCE_EXPLANATION};

use std::sync::Arc;

use crate::ports::{ReportFormat, ReportRenderer};

/// Returns the renderer for an output format.
pub fn renderer_for(format: ReportFormat) -> Arc<dyn ReportRenderer> {
    match format {
        ReportFormat::Text => Arc::new(TextReportRenderer::new()),
        ReportFormat::Json => Arc::new(JsonReportRenderer::new()),
    }
}
