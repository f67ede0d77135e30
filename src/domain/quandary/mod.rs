//! Quandary Module - The decision problem being resolved.
//!
//! # Components
//!
//! - `Quandary` - Immutable aggregate of choices, criteria and priorities
//! - `Criterion` - One weighted dimension with a rating per choice
//! - `RatingsBar` - Positional encoding that produces ratings

mod model;
mod ratings_bar;

pub use model::{
    ChoiceRatings, ChoicesMap, CriteriaMap, Criterion, IdentifierClass, PriorityRatings, Quandary,
    QuandaryError,
};
pub use ratings_bar::{RatingsBar, MINIMUM_RATINGS_BAR_WIDTH};
