//! Application handlers.
//!
//! Command handlers that orchestrate domain operations through ports.

pub mod evaluate;

pub use evaluate::{EvaluateError, EvaluateQuandaryCommand, EvaluateQuandaryHandler};
