//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `quandary` - The decision problem: choices, criteria, priorities
//! - `analysis` - Pure domain services for scoring and stability analysis

pub mod analysis;
pub mod foundation;
pub mod quandary;
