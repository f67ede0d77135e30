//! Diagnostic sink that logs through `tracing`.

use tracing::warn;

use crate::domain::analysis::ScoringDiagnostic;
use crate::ports::DiagnosticSink;

/// Emits every diagnostic as a `warn!` event on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnosticSink;

impl TracingDiagnosticSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingDiagnosticSink {
    fn report(&self, diagnostic: &ScoringDiagnostic) {
        warn!(
            kind = diagnostic.kind.label(),
            class = diagnostic.class.label(),
            section = diagnostic.section,
            identifiers = ?diagnostic.identifiers,
            "{}",
            diagnostic
        );
    }
}
