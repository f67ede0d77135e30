//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `yaml` - Quandary files on disk
//! - `report` - Text and JSON report rendering
//! - `diagnostics` - Where scoring anomalies end up
//! - `random` - `rand`-backed randomness for stability analysis

pub mod diagnostics;
pub mod random;
pub mod report;
pub mod yaml;

pub use diagnostics::{InMemoryDiagnosticSink, TracingDiagnosticSink};
pub use random::RngRandomSource;
pub use report::{renderer_for, JsonReportRenderer, TextReportRenderer};
pub use yaml::YamlQuandaryLoader;
