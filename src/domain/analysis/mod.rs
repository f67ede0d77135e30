//! Analysis Module - Pure domain services for resolving a quandary.
//!
//! # Components
//!
//! - `Scorer` - Weighted aggregate rating and stable ranking of choices
//! - `Results` / `ChoiceResult` - Ranked output of scoring
//! - `ScoringDiagnostic` - Batched, non-fatal anomalies found while scoring
//! - `QuandaryRandomizer` - Independently perturbed copies of a quandary
//! - `StabilityAnalyzer` - Randomized search for the noise the ranking tolerates
//! - `Evaluation` - A quandary bundled with its results, handed to renderers
//!
//! # Design Philosophy
//!
//! Scoring is a pure function of the quandary. Stability analysis is pure
//! apart from the `RandomSource` it is handed, so a seeded source makes the
//! whole analysis reproducible.

mod diagnostics;
mod evaluation;
mod randomizer;
mod results;
mod scorer;
mod stability_analyzer;

pub use diagnostics::{AnomalyKind, ScoringDiagnostic};
pub use evaluation::Evaluation;
pub use randomizer::QuandaryRandomizer;
pub use results::{ChoiceResult, Results};
pub use scorer::Scorer;
pub use stability_analyzer::{
    LevelOutcome, StabilityAnalyzer, StabilityOutcome, StabilityParameters, DEFAULT_RANDOM_STEPS,
    DEFAULT_RANDOM_TRIALS, DEFAULT_STABILITY_PERCENTAGE,
};
