//! Quandary - Weighted multi-criteria decision analysis.
//!
//! Choices are rated against criteria, criteria are weighted by priority, and
//! the choices are ranked by their weighted sum. A randomized stress test then
//! measures how much rating noise the ranking tolerates.
//!
//! # Architecture
//!
//! - `domain` - Quandary model, scoring and stability analysis
//! - `ports` - Interfaces to files, reports, diagnostics and randomness
//! - `adapters` - YAML loading, text/JSON rendering, `rand` and `tracing` backends
//! - `application` - The evaluate-a-quandary use case
//! - `config` - Environment configuration
//! - `cli` - Command line options

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
