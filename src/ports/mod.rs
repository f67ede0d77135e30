//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Input Ports
//!
//! - `QuandaryLoader` - Reads and validates a quandary file
//!
//! ## Output Ports
//!
//! - `ReportRenderer` - Formats an evaluation for display
//! - `DiagnosticSink` - Receives non-fatal scoring anomalies
//!
//! ## Randomness
//!
//! - `RandomSource` - Perturbation directions for stability analysis

mod diagnostic_sink;
mod quandary_loader;
mod random_source;
mod report_renderer;

pub use diagnostic_sink::DiagnosticSink;
pub use quandary_loader::{LoadError, QuandaryLoader};
pub use random_source::{RandomSource, Sign};
pub use report_renderer::{
    RenderError, ReportFormat, ReportOptions, ReportRenderer, DEFAULT_DECIMAL_PLACES,
};
