//! Error types for the benchmark pipeline.

use crate::harness::HarnessKind;
use crate::provision::ProvisionError;
use thiserror::Error;

/// Errors that abort a pipeline run.
///
/// One variant per fallible stage. Every failure is fatal to the run,
/// nothing is retried, and no partial report is published.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Required benchmark tooling failed its availability probe.
    #[error("tool provisioning failed: {0}")]
    Provision(#[from] ProvisionError),

    /// A harness plan carries no command.
    #[error("{kind} harness has an empty command")]
    EmptyCommand { kind: HarnessKind },

    /// A harness process could not be started or awaited.
    #[error("failed to run {kind} harness: {source}")]
    Launch {
        kind: HarnessKind,
        #[source]
        source: std::io::Error,
    },

    /// A harness ran but exited non-zero.
    #[error("{kind} harness exited with code {exit_code}")]
    HarnessFailed {
        kind: HarnessKind,
        exit_code: i32,
        /// Captured output, kept for diagnostics.
        output: String,
    },

    /// The collector finished without output for a harness.
    #[error("no captured output for {0} harness")]
    MissingOutput(HarnessKind),

    /// Creating the review comment failed.
    #[error("failed to publish report comment: {0}")]
    Publish(String),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
