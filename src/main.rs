use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::error;

use quandary::adapters::{renderer_for, RngRandomSource, TracingDiagnosticSink, YamlQuandaryLoader};
use quandary::application::{EvaluateQuandaryCommand, EvaluateQuandaryHandler};
use quandary::cli::Cli;
use quandary::config::{AppConfig, LoggingConfig, ValidationError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("CRITICAL: {}", e);
            return ExitCode::FAILURE;
        }
    };
    cli.apply_to(&mut config);

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("CRITICAL: {}", e);
        return ExitCode::FAILURE;
    }

    let parameters = match config.analysis.parameters() {
        Ok(parameters) => parameters,
        Err(e) => {
            error!(error = %e, "Invalid analysis configuration");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.report.validate() {
        error!(error = %e, "Invalid report configuration");
        return ExitCode::FAILURE;
    }
    let options = config.report.options();

    let handler = EvaluateQuandaryHandler::new(
        Arc::new(YamlQuandaryLoader::new()),
        renderer_for(config.report.format),
        Arc::new(TracingDiagnosticSink::new()),
    );
    let mut random = match cli.seed {
        Some(seed) => RngRandomSource::seeded(seed),
        None => RngRandomSource::from_os_rng(),
    };

    for path in &cli.paths {
        let cmd = EvaluateQuandaryCommand {
            path: path.clone(),
            parameters,
        };
        let report = handler
            .handle(cmd, &mut random)
            .and_then(|evaluation| handler.render(&evaluation, &options));
        match report {
            Ok(report) => print!("{}", report),
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Installs the stderr subscriber so reports on stdout stay clean.
fn init_tracing(logging: &LoggingConfig) -> Result<(), ValidationError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter()?)
        .with_writer(std::io::stderr)
        .with_target(false);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}
