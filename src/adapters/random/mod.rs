//! Random source adapters.

mod rng_source;

pub use rng_source::RngRandomSource;
