//! Quandary Loader Port - Reading a quandary from storage.
//!
//! Loading is all-or-nothing per file: any structural problem or broken
//! completeness invariant is fatal for that file and nothing is scored.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::quandary::{Quandary, QuandaryError};

/// Port for loading a validated quandary.
///
/// # Contract
///
/// Implementations must:
/// - Return only quandaries that pass `Quandary::validate`
/// - Preserve the declared order of choices and criteria
/// - Canonicalise identifiers (trimmed, uppercase)
pub trait QuandaryLoader: Send + Sync {
    /// Loads the quandary stored at `path`.
    fn load(&self, path: &Path) -> Result<Quandary, LoadError>;
}

/// Errors that make a quandary file unusable.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("configuration: document is not a dictionary.")]
    NotAMapping,

    #[error("configuration.{0}: missing block.")]
    MissingBlock(String),

    #[error("configuration.{0}: block is not a dictionary.")]
    BlockNotMapping(String),

    #[error("{context} has no \"{element}\" element.")]
    MissingElement { context: String, element: String },

    #[error("{0} is not a dictionary.")]
    EntryNotMapping(String),

    #[error("{0}: key is not a usable identifier.")]
    InvalidKey(String),

    #[error("{0}: missing ratings bar.")]
    MissingRatingsBar(String),

    #[error("{0}: ratings bar is not a string.")]
    RatingsBarNotString(String),

    #[error("{context}: {source}")]
    RatingsBar {
        context: String,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Letters(#[from] QuandaryError),
}

impl LoadError {
    /// Creates an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a missing element error.
    pub fn missing_element(context: impl Into<String>, element: impl Into<String>) -> Self {
        Self::MissingElement {
            context: context.into(),
            element: element.into(),
        }
    }

    /// Creates a ratings bar error.
    pub fn ratings_bar(context: impl Into<String>, source: ValidationError) -> Self {
        Self::RatingsBar {
            context: context.into(),
            source,
        }
    }
}
