//! Runtime configuration for the `quandary` binary.
//!
//! Values come from `QUANDARY__<SECTION>__<KEY>` environment variables (a
//! `.env` file is honoured) and every key has a default, so an empty
//! environment is valid. Command line flags are applied on top afterwards.
//!
//! ```no_run
//! use quandary::config::AppConfig;
//!
//! let config = AppConfig::load().unwrap();
//! config.validate().unwrap();
//! assert!(config.analysis.random_steps >= 1);
//! ```

mod analysis;
mod error;
mod logging;
mod report;

pub use analysis::{
    AnalysisConfig, MAX_RANDOM_STEPS, MAX_RANDOM_TRIALS, MAX_STABILITY_PERCENTAGE,
    MIN_RANDOM_STEPS, MIN_RANDOM_TRIALS,
};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use report::{ReportConfig, MAX_DECIMAL_PLACES};

use serde::Deserialize;

const ENV_PREFIX: &str = "QUANDARY";

/// Everything the binary can be tuned with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads `.env` if present, then the process environment.
    ///
    /// `QUANDARY__ANALYSIS__RANDOM_STEPS=200` sets `analysis.random_steps`,
    /// `QUANDARY__REPORT__FORMAT=json` sets `report.format`.
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when a value does not parse as its field type.
    /// Ranges are not checked here; see [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Checks ranges and the log filter, section by section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.analysis.validate()?;
        self.report.validate()?;
        self.logging.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ReportFormat;
    use std::env;
    use std::sync::Mutex;

    // Environment variables are process-global.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "QUANDARY__ANALYSIS__RANDOM_STEPS",
        "QUANDARY__ANALYSIS__RANDOM_TRIALS",
        "QUANDARY__ANALYSIS__STABILITY_PERCENTAGE",
        "QUANDARY__REPORT__DECIMAL_PLACES",
        "QUANDARY__REPORT__DETAILS",
        "QUANDARY__REPORT__FORMAT",
        "QUANDARY__LOGGING__LEVEL",
        "QUANDARY__LOGGING__JSON",
    ];

    /// Loads with exactly `vars` set among the known keys.
    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        VARS.iter().for_each(|var| env::remove_var(var));
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let loaded = AppConfig::load();
        VARS.iter().for_each(|var| env::remove_var(var));
        loaded
    }

    #[test]
    fn empty_environment_gives_valid_defaults() {
        let config = load_with(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        config.validate().unwrap();
    }

    #[test]
    fn analysis_keys_override_defaults_individually() {
        let config = load_with(&[
            ("QUANDARY__ANALYSIS__RANDOM_STEPS", "200"),
            ("QUANDARY__ANALYSIS__STABILITY_PERCENTAGE", "0"),
        ])
        .unwrap();

        assert_eq!(config.analysis.random_steps, 200);
        assert_eq!(config.analysis.random_trials, 1000);
        assert_eq!(config.analysis.stability_percentage, 0);
    }

    #[test]
    fn report_keys_parse_bool_and_format() {
        let config = load_with(&[
            ("QUANDARY__REPORT__DECIMAL_PLACES", "4"),
            ("QUANDARY__REPORT__DETAILS", "true"),
            ("QUANDARY__REPORT__FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.report.decimal_places, 4);
        assert!(config.report.details);
        assert_eq!(config.report.format, ReportFormat::Json);
    }

    #[test]
    fn too_few_trials_loads_but_fails_validation() {
        let config = load_with(&[("QUANDARY__ANALYSIS__RANDOM_TRIALS", "5")]).unwrap();

        assert!(matches!(
            config.validate(),
            Err(ValidationError::OutOfRange { field: "random_trials", .. })
        ));
    }

    #[test]
    fn non_numeric_steps_fail_to_load() {
        let result = load_with(&[("QUANDARY__ANALYSIS__RANDOM_STEPS", "lots")]);
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
