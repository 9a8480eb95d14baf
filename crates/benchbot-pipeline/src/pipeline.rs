//! Pipeline orchestration: gate, tool probes, harness runs, report, publish.

use crate::collector::ResultCollector;
use crate::error::PipelineError;
use crate::event::TriggerEvent;
use crate::gate::TriggerGate;
use crate::harness::HarnessSchedule;
use crate::provision::Provisioner;
use crate::publish::{CommentPublisher, PublishRequest};
use crate::report;
use crate::runner::HarnessRunner;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

/// Outcome of a pipeline run that did not fail.
#[derive(Debug, Clone)]
pub enum PipelineOutcome {
    /// The event did not arm the pipeline; nothing ran.
    Skipped {
        /// Label the event carried.
        label: String,
    },

    /// Both harnesses ran and the report comment was created.
    Published {
        /// Run ID assigned to this pipeline run.
        run_id: String,

        /// The request the publisher delivered.
        request: PublishRequest,

        /// Total duration in milliseconds.
        duration_ms: u64,
    },
}

impl PipelineOutcome {
    /// Whether a report comment was created.
    pub fn is_published(&self) -> bool {
        matches!(self, PipelineOutcome::Published { .. })
    }
}

/// Single-shot benchmark pipeline for one trigger event.
///
/// Strictly forward-progressing: gate, tool probes, counter-based harness,
/// statistical harness, collect, compose, publish. No stage retries, no
/// stage re-enters, and any failure aborts the remainder of the run.
pub struct BenchPipeline {
    gate: TriggerGate,
    provisioner: Provisioner,
    schedule: HarnessSchedule,
    publisher: Arc<dyn CommentPublisher>,
}

impl BenchPipeline {
    /// Assemble a pipeline.
    pub fn new(
        gate: TriggerGate,
        provisioner: Provisioner,
        schedule: HarnessSchedule,
        publisher: Arc<dyn CommentPublisher>,
    ) -> Self {
        BenchPipeline {
            gate,
            provisioner,
            schedule,
            publisher,
        }
    }

    /// Run the pipeline for one event.
    ///
    /// A non-marker event short-circuits to `Skipped` before any subprocess
    /// or network activity. A harness exiting non-zero aborts before the
    /// remaining harness runs; no partial report is ever published.
    pub async fn run(&self, event: &TriggerEvent) -> Result<PipelineOutcome, PipelineError> {
        if !self.gate.evaluate(event).is_proceed() {
            info!(label = %event.label, "label does not arm the pipeline, skipping");
            return Ok(PipelineOutcome::Skipped {
                label: event.label.clone(),
            });
        }

        let run_id = Uuid::new_v4().to_string();
        let start = Instant::now();
        info!(
            run_id = %run_id,
            owner = %event.owner,
            repo = %event.repo,
            number = event.number,
            "starting benchmark pipeline"
        );

        self.provisioner.ensure_tooling().await?;

        let mut collector = ResultCollector::new();
        for plan in self.schedule.in_run_order() {
            info!(run_id = %run_id, harness = %plan.kind, "running harness");

            let invocation = HarnessRunner::invoke(plan).await?;
            if !invocation.succeeded() {
                return Err(PipelineError::HarnessFailed {
                    kind: invocation.kind,
                    exit_code: invocation.exit_code,
                    output: invocation.combined_output(),
                });
            }

            info!(
                run_id = %run_id,
                harness = %plan.kind,
                duration_ms = invocation.duration_ms,
                "harness finished"
            );
            collector.record(invocation);
        }

        let outputs = collector.finish()?;
        let message = report::compose(
            &outputs.statistical.combined_output(),
            &outputs.counter_based.combined_output(),
        );

        let request = PublishRequest {
            owner: event.owner.clone(),
            repo: event.repo.clone(),
            number: event.number,
            body: message.into_body(),
        };
        self.publisher
            .publish(&request)
            .await
            .map_err(|err| PipelineError::Publish(err.to_string()))?;

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(run_id = %run_id, duration_ms, "report comment created");

        Ok(PipelineOutcome::Published {
            run_id,
            request,
            duration_ms,
        })
    }
}
