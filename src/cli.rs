//! Command line interface.
//!
//! Options left unset fall back to the environment configuration, which in
//! turn falls back to built-in defaults.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::AppConfig;
use crate::ports::ReportFormat;

#[derive(Parser, Debug)]
#[command(
    name = "quandary",
    version,
    about = "Rank choices against weighted criteria and measure how stable the ranking is"
)]
pub struct Cli {
    #[arg(
        short = 'p',
        long,
        value_parser = clap::value_parser!(u8).range(0..=10),
        help = "Decimal places shown for ratings (0-10)"
    )]
    pub decimal_places: Option<u8>,

    #[arg(
        short = 'r',
        long,
        value_parser = clap::value_parser!(u32).range(10..=1000),
        help = "Perturbation magnitudes tested between 0 and 1 (10-1000)"
    )]
    pub random_steps: Option<u32>,

    #[arg(
        short = 't',
        long,
        value_parser = clap::value_parser!(u32).range(10..=10000),
        help = "Random trials per magnitude (10-10000)"
    )]
    pub random_trials: Option<u32>,

    #[arg(
        short = 's',
        long = "stability-percent",
        value_parser = clap::value_parser!(u8).range(0..=100),
        help = "Percentage of trials that must keep the ranking (0 disables analysis)"
    )]
    pub stability_percentage: Option<u8>,

    #[arg(short = 'd', long, help = "Show choices, criteria and priorities in detail")]
    pub details: bool,

    #[arg(long, value_enum, help = "Report format")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Seed the random generator for reproducible stability analysis")]
    pub seed: Option<u64>,

    #[arg(required = true, value_name = "QUANDARY_PATH", help = "Quandary YAML files to evaluate")]
    pub paths: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

impl Cli {
    /// Overlays the options given on the command line onto `config`.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(decimal_places) = self.decimal_places {
            config.report.decimal_places = decimal_places;
        }
        if let Some(random_steps) = self.random_steps {
            config.analysis.random_steps = random_steps;
        }
        if let Some(random_trials) = self.random_trials {
            config.analysis.random_trials = random_trials;
        }
        if let Some(stability_percentage) = self.stability_percentage {
            config.analysis.stability_percentage = stability_percentage;
        }
        if self.details {
            config.report.details = true;
        }
        if let Some(format) = self.format {
            config.report.format = format.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("quandary").chain(args.iter().copied()))
    }

    #[test]
    fn paths_are_required() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn parses_short_options() {
        let cli = parse(&["-p", "3", "-r", "50", "-t", "200", "-s", "80", "-d", "a.yaml", "b.yaml"]).unwrap();

        assert_eq!(cli.decimal_places, Some(3));
        assert_eq!(cli.random_steps, Some(50));
        assert_eq!(cli.random_trials, Some(200));
        assert_eq!(cli.stability_percentage, Some(80));
        assert!(cli.details);
        assert_eq!(cli.paths, vec![PathBuf::from("a.yaml"), PathBuf::from("b.yaml")]);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(parse(&["-p", "11", "a.yaml"]).is_err());
        assert!(parse(&["-r", "9", "a.yaml"]).is_err());
        assert!(parse(&["-r", "1001", "a.yaml"]).is_err());
        assert!(parse(&["-t", "10001", "a.yaml"]).is_err());
        assert!(parse(&["-s", "101", "a.yaml"]).is_err());
    }

    #[test]
    fn zero_stability_is_accepted() {
        let cli = parse(&["-s", "0", "a.yaml"]).unwrap();
        assert_eq!(cli.stability_percentage, Some(0));
    }

    #[test]
    fn unset_options_keep_config_values() {
        let cli = parse(&["a.yaml"]).unwrap();
        let mut config = AppConfig::default();
        config.analysis.random_steps = 250;

        cli.apply_to(&mut config);

        assert_eq!(config.analysis.random_steps, 250);
        assert_eq!(config.report.decimal_places, 2);
        assert!(!config.report.details);
        assert_eq!(config.report.format, ReportFormat::Text);
    }

    #[test]
    fn given_options_override_config() {
        let cli = parse(&["--format", "json", "--seed", "9", "-s", "0", "-d", "a.yaml"]).unwrap();
        let mut config = AppConfig::default();

        cli.apply_to(&mut config);

        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.analysis.stability_percentage, 0);
        assert!(config.report.details);
        assert_eq!(cli.seed, Some(9));
    }
}
