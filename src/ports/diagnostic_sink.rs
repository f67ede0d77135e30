//! Diagnostic Sink Port - Where scoring anomalies are reported.

use crate::domain::analysis::ScoringDiagnostic;

/// Port for surfacing non-fatal scoring diagnostics.
///
/// # Contract
///
/// Implementations must:
/// - Never fail or abort the evaluation
/// - Report each diagnostic exactly once per call
pub trait DiagnosticSink: Send + Sync {
    /// Reports one batched diagnostic.
    fn report(&self, diagnostic: &ScoringDiagnostic);
}
