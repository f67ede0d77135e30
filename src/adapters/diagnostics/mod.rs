//! Diagnostic sink adapters.
//!
//! - `TracingDiagnosticSink` - Logs each diagnostic as a warning
//! - `InMemoryDiagnosticSink` - Collects diagnostics for inspection in tests

mod in_memory;
mod tracing_sink;

pub use in_memory::InMemoryDiagnosticSink;
pub use tracing_sink::TracingDiagnosticSink;
