use crate::builder::{BuildError, BuildSummary, GraphBuilder};
use crate::normalize::{NormalizeError, NormalizeSummary, Normalizer};
use crate::validate::{validate_file, ExitStatus, ValidateError, ValidationReport};
use crate::PipelineConfig;
use tracing::info;

/// An error stopping the pipeline before validation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PipelineError {
    #[error("Normalization failed: {0}")]
    Normalize(#[from] NormalizeError),
    #[error("Graph construction failed: {0}")]
    Build(#[from] BuildError),
}

/// What each stage of a pipeline run did.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub normalize: NormalizeSummary,
    pub build: BuildSummary,
    /// Either the report of the checks, or the reason why the graph could not be checked.
    pub validation: Result<ValidationReport, ValidateError>,
}

impl PipelineOutcome {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.validation {
            Ok(report) => report.exit_status(),
            Err(error) => error.exit_status(),
        }
    }
}

/// Normalizes the sources, builds the graph and validates it.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutcome, PipelineError> {
    let normalize = Normalizer::from_paths(&config.sources)?.run(&config.normalized)?;
    let build = GraphBuilder::new()
        .with_schema(config.declare_schema)
        .run(&config.normalized, &config.graph)?;
    let validation = validate_file(&config.graph);
    info!(
        written = normalize.written,
        triples = build.triples,
        passed = validation.as_ref().is_ok_and(ValidationReport::all_passed),
        "Pipeline finished"
    );
    Ok(PipelineOutcome {
        normalize,
        build,
        validation,
    })
}
