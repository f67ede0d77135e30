//! Stability analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{
    StabilityParameters, DEFAULT_RANDOM_STEPS, DEFAULT_RANDOM_TRIALS, DEFAULT_STABILITY_PERCENTAGE,
};
use crate::domain::foundation::Percentage;

pub const MIN_RANDOM_STEPS: u32 = 10;
pub const MAX_RANDOM_STEPS: u32 = 1000;
pub const MIN_RANDOM_TRIALS: u32 = 10;
pub const MAX_RANDOM_TRIALS: u32 = 10000;
pub const MAX_STABILITY_PERCENTAGE: u8 = 100;

/// Stability analysis configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisConfig {
    /// Number of perturbation magnitudes tested between 0 and 1
    #[serde(default = "default_random_steps")]
    pub random_steps: u32,

    /// Random trials per magnitude
    #[serde(default = "default_random_trials")]
    pub random_trials: u32,

    /// Share of trials that must reproduce the ranking; 0 disables analysis
    #[serde(default = "default_stability_percentage")]
    pub stability_percentage: u8,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_range("random_steps", MIN_RANDOM_STEPS, MAX_RANDOM_STEPS, self.random_steps)?;
        ValidationError::check_range(
            "random_trials",
            MIN_RANDOM_TRIALS,
            MAX_RANDOM_TRIALS,
            self.random_trials,
        )?;
        ValidationError::check_range(
            "stability_percentage",
            0,
            u32::from(MAX_STABILITY_PERCENTAGE),
            u32::from(self.stability_percentage),
        )?;
        Ok(())
    }

    /// Converts into domain stability parameters.
    pub fn parameters(&self) -> Result<StabilityParameters, ValidationError> {
        self.validate()?;
        StabilityParameters::new(
            self.random_steps,
            self.random_trials,
            Percentage::new(self.stability_percentage),
        )
        .map_err(ValidationError::from)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            random_steps: default_random_steps(),
            random_trials: default_random_trials(),
            stability_percentage: default_stability_percentage(),
        }
    }
}

fn default_random_steps() -> u32 {
    DEFAULT_RANDOM_STEPS
}

fn default_random_trials() -> u32 {
    DEFAULT_RANDOM_TRIALS
}

fn default_stability_percentage() -> u8 {
    DEFAULT_STABILITY_PERCENTAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.random_steps, 100);
        assert_eq!(config.random_trials, 1000);
        assert_eq!(config.stability_percentage, 70);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_random_steps_range() {
        let mut config = AnalysisConfig::default();
        config.random_steps = 9;
        assert!(config.validate().is_err());
        config.random_steps = 1001;
        assert!(config.validate().is_err());
        config.random_steps = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_random_trials_range() {
        let mut config = AnalysisConfig::default();
        config.random_trials = 10001;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::OutOfRange { field: "random_trials", .. })
        ));
    }

    #[test]
    fn test_stability_percentage_range() {
        let mut config = AnalysisConfig::default();
        config.stability_percentage = 101;
        assert!(config.validate().is_err());
        config.stability_percentage = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parameters_conversion() {
        let config = AnalysisConfig {
            random_steps: 20,
            random_trials: 50,
            stability_percentage: 0,
        };
        let parameters = config.parameters().unwrap();
        assert_eq!(parameters.random_steps(), 20);
        assert_eq!(parameters.random_trials(), 50);
        assert!(parameters.is_disabled());
    }
}
