//! EvaluateQuandaryHandler - Loads, scores and stress-tests one quandary.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::analysis::{Evaluation, Scorer, StabilityAnalyzer, StabilityParameters};
use crate::ports::{
    DiagnosticSink, LoadError, QuandaryLoader, RandomSource, RenderError, ReportOptions,
    ReportRenderer,
};

/// Command to evaluate the quandary stored at `path`.
#[derive(Debug, Clone)]
pub struct EvaluateQuandaryCommand {
    pub path: PathBuf,
    pub parameters: StabilityParameters,
}

/// Errors that abort evaluation of a single quandary file.
#[derive(Debug, Error)]
pub enum EvaluateError {
    #[error("{}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Handler for evaluating quandaries.
pub struct EvaluateQuandaryHandler {
    loader: Arc<dyn QuandaryLoader>,
    renderer: Arc<dyn ReportRenderer>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl EvaluateQuandaryHandler {
    pub fn new(
        loader: Arc<dyn QuandaryLoader>,
        renderer: Arc<dyn ReportRenderer>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            loader,
            renderer,
            diagnostics,
        }
    }

    /// Loads the quandary, ranks its choices and measures ranking stability.
    ///
    /// Scoring diagnostics are forwarded to the diagnostic sink and also kept
    /// in the returned results.
    pub fn handle(
        &self,
        cmd: EvaluateQuandaryCommand,
        random: &mut dyn RandomSource,
    ) -> Result<Evaluation, EvaluateError> {
        // 1. Load and validate
        let quandary = self.loader.load(&cmd.path).map_err(|source| EvaluateError::Load {
            path: cmd.path.clone(),
            source,
        })?;

        // 2. Baseline ranking
        let results = Scorer::score(&quandary);
        for diagnostic in &results.diagnostics {
            self.diagnostics.report(diagnostic);
        }
        debug!(
            path = %cmd.path.display(),
            choices = results.len(),
            "Baseline ranking computed"
        );

        // 3. Stability search
        let stability = StabilityAnalyzer::trace(&quandary, &results, &cmd.parameters, random);

        info!(
            path = %cmd.path.display(),
            best = results.best().map(|best| best.label.as_str()).unwrap_or_default(),
            stability = stability.as_ref().map(|outcome| outcome.stability),
            "Quandary evaluated"
        );

        Ok(Evaluation {
            quandary,
            results,
            stability,
        })
    }

    /// Renders an evaluation with the configured renderer.
    pub fn render(&self, evaluation: &Evaluation, options: &ReportOptions) -> Result<String, EvaluateError> {
        Ok(self.renderer.render(evaluation, options)?)
    }
}
