//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, containers and error types
//! that form the vocabulary of the Quandary domain.

mod errors;
mod ids;
mod ordered_map;
mod percentage;
mod rating;

pub use errors::ValidationError;
pub use ids::{ChoiceId, CriterionId};
pub use ordered_map::OrderedMap;
pub use percentage::Percentage;
pub use rating::Rating;
