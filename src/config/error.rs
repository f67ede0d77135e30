//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        actual: u32,
    },

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),

    #[error("Invalid stability parameters: {0}")]
    InvalidParameters(#[from] crate::domain::foundation::ValidationError),
}

impl ValidationError {
    /// Checks that `actual` lies in `min..=max`.
    pub fn check_range(field: &'static str, min: u32, max: u32, actual: u32) -> Result<(), Self> {
        if (min..=max).contains(&actual) {
            Ok(())
        } else {
            Err(Self::OutOfRange {
                field,
                min,
                max,
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_range_is_inclusive() {
        assert!(ValidationError::check_range("x", 10, 20, 10).is_ok());
        assert!(ValidationError::check_range("x", 10, 20, 20).is_ok());
        assert_eq!(
            ValidationError::check_range("x", 10, 20, 21).unwrap_err().to_string(),
            "x must be between 10 and 20, got 21"
        );
    }
}
