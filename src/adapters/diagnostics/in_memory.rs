//! In-memory diagnostic sink.
//!
//! Keeps every reported diagnostic so tests can assert on them.

use std::sync::{Mutex, MutexGuard};

use crate::domain::analysis::ScoringDiagnostic;
use crate::ports::DiagnosticSink;

/// Collects diagnostics in report order.
#[derive(Debug, Default)]
pub struct InMemoryDiagnosticSink {
    reported: Mutex<Vec<ScoringDiagnostic>>,
}

impl InMemoryDiagnosticSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything reported so far.
    pub fn reported(&self) -> Vec<ScoringDiagnostic> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ScoringDiagnostic>> {
        self.reported
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for InMemoryDiagnosticSink {
    fn report(&self, diagnostic: &ScoringDiagnostic) {
        self.lock().push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::AnomalyKind;
    use crate::domain::quandary::IdentifierClass;

    #[test]
    fn keeps_reports_in_order() {
        let sink = InMemoryDiagnosticSink::new();
        assert!(sink.is_empty());

        let first = ScoringDiagnostic {
            kind: AnomalyKind::Unknown,
            class: IdentifierClass::Choice,
            section: "ratings",
            identifiers: vec!["Z".to_string()],
        };
        let second = ScoringDiagnostic {
            kind: AnomalyKind::Missing,
            class: IdentifierClass::Criterion,
            section: "priorities",
            identifiers: vec!["Y".to_string()],
        };
        sink.report(&first);
        sink.report(&second);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.reported(), vec![first, second]);
    }
}
